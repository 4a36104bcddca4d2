//! Decoding of affine points from untrusted coordinates.
//!
//! arkworks only offers `Affine::new` which panics on points off the curve, so candidate points are
//! built with `new_unchecked` and checked explicitly. A point is accepted only if it lies on the
//! curve and in the prime order subgroup. The point at infinity has no affine coordinates and is
//! never produced.

use ark_ec::{
    bls12::{self, Bls12, Bls12Config},
    bn::{self, Bn, BnConfig},
    pairing::Pairing,
    short_weierstrass::{Affine, SWCurveConfig},
};
use ark_ff::fields::Fp2;

/// A pairing engine whose groups G1 and G2 are short Weierstrass curves over the base field and
/// its quadratic extension.
pub trait EpidCurve: Pairing {
    fn g1_from_coordinates(x: Self::BaseField, y: Self::BaseField) -> Option<Self::G1Affine>;

    /// Coordinates of G2 points are given as `[c0, c1]` where the extension element is `c0 + c1*u`
    fn g2_from_coordinates(
        x: [Self::BaseField; 2],
        y: [Self::BaseField; 2],
    ) -> Option<Self::G2Affine>;

    /// `None` for the point at infinity
    fn g1_coordinates(point: &Self::G1Affine) -> Option<(Self::BaseField, Self::BaseField)>;

    fn g2_coordinates(
        point: &Self::G2Affine,
    ) -> Option<([Self::BaseField; 2], [Self::BaseField; 2])>;
}

fn subgroup_point<C: SWCurveConfig>(point: Affine<C>) -> Option<Affine<C>> {
    (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()).then_some(point)
}

macro_rules! impl_epid_curve {
    ($config: ident, $engine: ident, $module: ident) => {
        impl<P: $config> EpidCurve for $engine<P> {
            fn g1_from_coordinates(
                x: Self::BaseField,
                y: Self::BaseField,
            ) -> Option<Self::G1Affine> {
                subgroup_point(<$module::G1Affine<P>>::new_unchecked(x, y))
            }

            fn g2_from_coordinates(
                x: [Self::BaseField; 2],
                y: [Self::BaseField; 2],
            ) -> Option<Self::G2Affine> {
                subgroup_point(<$module::G2Affine<P>>::new_unchecked(
                    Fp2::new(x[0], x[1]),
                    Fp2::new(y[0], y[1]),
                ))
            }

            fn g1_coordinates(
                point: &Self::G1Affine,
            ) -> Option<(Self::BaseField, Self::BaseField)> {
                (!point.infinity).then_some((point.x, point.y))
            }

            fn g2_coordinates(
                point: &Self::G2Affine,
            ) -> Option<([Self::BaseField; 2], [Self::BaseField; 2])> {
                (!point.infinity)
                    .then_some(([point.x.c0, point.x.c1], [point.y.c0, point.y.c1]))
            }
        }
    };
}

impl_epid_curve!(BnConfig, Bn, bn);
impl_epid_curve!(Bls12Config, Bls12, bls12);

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{Field, One, UniformRand, Zero};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use fp256bn::{Fp256Bn, Fq};

    fn decode_random_points<E: EpidCurve>(rng: &mut StdRng) {
        for _ in 0..10 {
            let p = E::G1::rand(rng).into_affine();
            let (x, y) = E::g1_coordinates(&p).unwrap();
            assert_eq!(E::g1_from_coordinates(x, y).unwrap(), p);

            let q = E::G2::rand(rng).into_affine();
            let (x, y) = E::g2_coordinates(&q).unwrap();
            assert_eq!(E::g2_from_coordinates(x, y).unwrap(), q);

            // Swapped coordinates are not on the twist
            assert!(E::g2_from_coordinates(y, x).is_none());
        }
        assert!(E::g1_coordinates(&E::G1Affine::zero()).is_none());
        assert!(E::g2_coordinates(&E::G2Affine::zero()).is_none());
    }

    #[test]
    fn decode_points() {
        let mut rng = StdRng::seed_from_u64(0u64);
        decode_random_points::<Fp256Bn>(&mut rng);
        decode_random_points::<Bls12_381>(&mut rng);
    }

    #[test]
    fn reject_points_off_curve() {
        // y^2 = x^3 + 3 does not hold for (1, 1) and (0, 0)
        assert!(Fp256Bn::g1_from_coordinates(Fq::one(), Fq::one()).is_none());
        assert!(Fp256Bn::g1_from_coordinates(Fq::zero(), Fq::zero()).is_none());
        let g = <Fp256Bn as Pairing>::G1Affine::generator();
        assert!(Fp256Bn::g1_from_coordinates(g.x, g.y.double()).is_none());
        assert!(Fp256Bn::g1_from_coordinates(g.x, -g.y).is_some());
    }

    #[test]
    fn reject_points_outside_subgroup() {
        // G1 of BLS12-381 has a large cofactor so points on the curve outside the subgroup are
        // easy to find
        let mut rng = StdRng::seed_from_u64(1u64);
        let mut found = 0;
        while found < 5 {
            let x = <Bls12_381 as Pairing>::BaseField::rand(&mut rng);
            let y2 = x.square() * x + ark_bls12_381::g1::Config::COEFF_B;
            let Some(y) = y2.sqrt() else {
                continue;
            };
            let point = ark_bls12_381::G1Affine::new_unchecked(x, y);
            assert!(point.is_on_curve());
            if point.is_in_correct_subgroup_assuming_on_curve() {
                continue;
            }
            assert!(Bls12_381::g1_from_coordinates(x, y).is_none());
            found += 1;
        }

        // The twist of Fp256BN has cofactor 2q - n
        let x = [Fq::one(), Fq::zero()];
        let twist_b = fp256bn::g2::Config::COEFF_B;
        let mut c0 = Fq::one();
        loop {
            let x_fq2 = fp256bn::Fq2::new(c0, x[1]);
            let y2 = x_fq2.square() * x_fq2 + twist_b;
            if let Some(y) = y2.sqrt() {
                let point = fp256bn::G2Affine::new_unchecked(x_fq2, y);
                assert!(point.is_on_curve());
                assert!(!point.is_in_correct_subgroup_assuming_on_curve());
                assert!(Fp256Bn::g2_from_coordinates([c0, x[1]], [y.c0, y.c1]).is_none());
                break;
            }
            c0 += Fq::one();
        }
    }
}
