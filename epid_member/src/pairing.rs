use ark_ec::{pairing::Pairing, AffineRepr};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// Generators of G1 and G2 together with the precomputation of `g2` for the Miller loop. Created
/// once and then shared by reference among all group checks, it is never modified by them.
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct PairingContext<E: Pairing> {
    pub g1: E::G1Affine,
    pub g2: E::G2Affine,
    pub g2_prepared: E::G2Prepared,
}

impl<E: Pairing> PairingContext<E> {
    /// Uses the curve's standard generators
    pub fn new() -> Self {
        Self::from_generators(E::G1Affine::generator(), E::G2Affine::generator())
    }

    pub fn from_generators(g1: E::G1Affine, g2: E::G2Affine) -> Self {
        Self {
            g1,
            g2,
            g2_prepared: E::G2Prepared::from(g2),
        }
    }

    pub fn is_valid(&self) -> bool {
        !(self.g1.is_zero() || self.g2.is_zero())
    }
}

impl<E: Pairing> Default for PairingContext<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_ec::CurveGroup;
    use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use fp256bn::Fp256Bn;

    fn is_send_and_sync<T: Send + Sync>() {}

    #[test]
    fn context() {
        is_send_and_sync::<PairingContext<Fp256Bn>>();
        is_send_and_sync::<PairingContext<Bls12_381>>();

        let ctx = PairingContext::<Fp256Bn>::new();
        assert!(ctx.is_valid());
        assert_eq!(ctx.g1, fp256bn::G1Affine::generator());
        assert_eq!(ctx.g2, fp256bn::G2Affine::generator());
        assert_eq!(ctx, PairingContext::default());

        let mut rng = StdRng::seed_from_u64(0u64);
        let g1 = <Bls12_381 as Pairing>::G1::rand(&mut rng).into_affine();
        let g2 = <Bls12_381 as Pairing>::G2::rand(&mut rng).into_affine();
        let ctx = PairingContext::<Bls12_381>::from_generators(g1, g2);
        assert!(ctx.is_valid());
        assert_ne!(ctx, PairingContext::new());

        let mut bytes = vec![];
        ctx.serialize_compressed(&mut bytes).unwrap();
        let deserialized = PairingContext::<Bls12_381>::deserialize_compressed(&bytes[..]).unwrap();
        assert_eq!(ctx, deserialized);

        let ctx = PairingContext::<Bls12_381>::from_generators(
            <Bls12_381 as Pairing>::G1Affine::zero(),
            g2,
        );
        assert!(!ctx.is_valid());
    }
}
