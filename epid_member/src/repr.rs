//! Raw representations of field elements and points as they arrive from an untrusted source.
//!
//! Coordinates and scalars are kept as plain integers of the field's limb size and are never
//! reduced on construction or deserialization, so an encoding of `q` stays `q` and can be rejected
//! by the range check. Decoding to arkworks types happens only through the fallible conversions
//! here.
//!
//! The integers are encoded as their limbs in little endian order, the same bytes arkworks writes
//! for a `BigInt`. Decoding is done here since arkworks panics on short input for `BigInt`.

use crate::curve::EpidCurve;
use ark_ec::pairing::Pairing;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use ark_std::vec::Vec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DeserializeAs, SerializeAs};
use zeroize::Zeroize;

/// Candidate base field element
pub type FqRepr<E> = <<E as Pairing>::BaseField as PrimeField>::BigInt;
/// Candidate scalar
pub type FrRepr<E> = <<E as Pairing>::ScalarField as PrimeField>::BigInt;

/// Returns true iff `value < q`
pub fn fq_is_in_range<E: Pairing>(value: &FqRepr<E>) -> bool {
    *value < E::BaseField::MODULUS
}

/// Returns true iff `value < n`
pub fn fr_is_in_range<E: Pairing>(value: &FrRepr<E>) -> bool {
    *value < E::ScalarField::MODULUS
}

pub fn fr_from_repr<E: Pairing>(value: &FrRepr<E>) -> Option<E::ScalarField> {
    E::ScalarField::from_bigint(*value)
}

pub fn fr_to_repr<E: Pairing>(value: &E::ScalarField) -> FrRepr<E> {
    value.into_bigint()
}

pub fn repr_size<B: BigInteger>() -> usize {
    B::NUM_LIMBS * 8
}

pub fn serialize_repr<B: BigInteger, W: Write>(
    value: &B,
    mut writer: W,
) -> Result<(), SerializationError> {
    for limb in value.as_ref() {
        writer.write_all(&limb.to_le_bytes())?;
    }
    Ok(())
}

/// Fails with `IoError` if the reader has fewer than [`repr_size`] bytes
pub fn deserialize_repr<B: BigInteger, R: Read>(mut reader: R) -> Result<B, SerializationError> {
    let mut value = B::default();
    let mut bytes = [0u8; 8];
    for limb in value.as_mut() {
        reader.read_exact(&mut bytes)?;
        *limb = u64::from_le_bytes(bytes);
    }
    Ok(value)
}

/// serde adapter for raw integers, use as `#[serde_as(as = "ReprBytes")]`. The byte string must
/// have exactly the size of the integer.
pub struct ReprBytes;

impl<B: BigInteger> SerializeAs<B> for ReprBytes {
    fn serialize_as<S: Serializer>(source: &B, serializer: S) -> Result<S::Ok, S::Error> {
        let mut bytes = Vec::with_capacity(repr_size::<B>());
        serialize_repr(source, &mut bytes).map_err(serde::ser::Error::custom)?;
        Serialize::serialize(&bytes, serializer)
    }
}

impl<'de, B: BigInteger> DeserializeAs<'de, B> for ReprBytes {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<B, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        if bytes.len() != repr_size::<B>() {
            return Err(serde::de::Error::invalid_length(
                bytes.len(),
                &"the byte size of the integer",
            ));
        }
        deserialize_repr(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

/// Affine coordinates of a point of G1
#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct G1PointRepr<E: Pairing> {
    #[serde_as(as = "ReprBytes")]
    pub x: FqRepr<E>,
    #[serde_as(as = "ReprBytes")]
    pub y: FqRepr<E>,
}

/// An element `c0 + c1*u` of the quadratic extension of the base field
#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Fq2Repr<E: Pairing> {
    #[serde_as(as = "ReprBytes")]
    pub c0: FqRepr<E>,
    #[serde_as(as = "ReprBytes")]
    pub c1: FqRepr<E>,
}

/// Canonical encoding of a pair of raw integers, used for both `G1PointRepr` and `Fq2Repr`
macro_rules! impl_canonical_for_pair {
    ($name: ident, $first: ident, $second: ident) => {
        impl<E: Pairing> CanonicalSerialize for $name<E> {
            fn serialize_with_mode<W: Write>(
                &self,
                mut writer: W,
                _compress: Compress,
            ) -> Result<(), SerializationError> {
                serialize_repr(&self.$first, &mut writer)?;
                serialize_repr(&self.$second, &mut writer)
            }

            fn serialized_size(&self, _compress: Compress) -> usize {
                2 * repr_size::<FqRepr<E>>()
            }
        }

        // Any integers are accepted, range checks are done by the validator
        impl<E: Pairing> Valid for $name<E> {
            fn check(&self) -> Result<(), SerializationError> {
                Ok(())
            }
        }

        impl<E: Pairing> CanonicalDeserialize for $name<E> {
            fn deserialize_with_mode<R: Read>(
                mut reader: R,
                _compress: Compress,
                _validate: Validate,
            ) -> Result<Self, SerializationError> {
                let $first = deserialize_repr(&mut reader)?;
                let $second = deserialize_repr(&mut reader)?;
                Ok(Self { $first, $second })
            }
        }
    };
}

impl_canonical_for_pair!(G1PointRepr, x, y);
impl_canonical_for_pair!(Fq2Repr, c0, c1);

/// Affine coordinates of a point of G2
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct G2PointRepr<E: Pairing> {
    pub x: Fq2Repr<E>,
    pub y: Fq2Repr<E>,
}

impl<E: Pairing> G1PointRepr<E> {
    pub fn new(x: FqRepr<E>, y: FqRepr<E>) -> Self {
        Self { x, y }
    }

    /// Both coordinates are less than `q`
    pub fn is_in_range(&self) -> bool {
        fq_is_in_range::<E>(&self.x) & fq_is_in_range::<E>(&self.y)
    }
}

impl<E: EpidCurve> G1PointRepr<E> {
    /// Fails unless both coordinates are reduced and the point is in the prime order subgroup
    pub fn to_affine(&self) -> Option<E::G1Affine> {
        let x = E::BaseField::from_bigint(self.x)?;
        let y = E::BaseField::from_bigint(self.y)?;
        E::g1_from_coordinates(x, y)
    }

    /// Fails only for the point at infinity
    pub fn from_affine(point: &E::G1Affine) -> Option<Self> {
        let (x, y) = E::g1_coordinates(point)?;
        Some(Self::new(x.into_bigint(), y.into_bigint()))
    }
}

impl<E: Pairing> Fq2Repr<E> {
    pub fn new(c0: FqRepr<E>, c1: FqRepr<E>) -> Self {
        Self { c0, c1 }
    }

    /// Each half is checked against `q` on its own
    pub fn is_in_range(&self) -> bool {
        fq_is_in_range::<E>(&self.c0) & fq_is_in_range::<E>(&self.c1)
    }

    fn to_coefficients(&self) -> Option<[E::BaseField; 2]> {
        Some([
            E::BaseField::from_bigint(self.c0)?,
            E::BaseField::from_bigint(self.c1)?,
        ])
    }

    fn from_coefficients(coefficients: [E::BaseField; 2]) -> Self {
        Self::new(coefficients[0].into_bigint(), coefficients[1].into_bigint())
    }
}

impl<E: Pairing> G2PointRepr<E> {
    pub fn new(x: Fq2Repr<E>, y: Fq2Repr<E>) -> Self {
        Self { x, y }
    }

    pub fn is_in_range(&self) -> bool {
        self.x.is_in_range() & self.y.is_in_range()
    }
}

impl<E: EpidCurve> G2PointRepr<E> {
    /// Fails unless all 4 coefficients are reduced and the point is in the prime order subgroup
    pub fn to_affine(&self) -> Option<E::G2Affine> {
        E::g2_from_coordinates(self.x.to_coefficients()?, self.y.to_coefficients()?)
    }

    /// Fails only for the point at infinity
    pub fn from_affine(point: &E::G2Affine) -> Option<Self> {
        let (x, y) = E::g2_coordinates(point)?;
        Some(Self::new(
            Fq2Repr::from_coefficients(x),
            Fq2Repr::from_coefficients(y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{BigInteger, One, UniformRand};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use fp256bn::{Fp256Bn, Fq, Fr};

    type Repr = FqRepr<Fp256Bn>;

    #[test]
    fn range_is_half_open() {
        let q = Fq::MODULUS;
        let n = Fr::MODULUS;
        let mut q_minus_1 = q;
        q_minus_1.sub_with_borrow(&Repr::from(1u64));
        let mut q_plus_1 = q;
        q_plus_1.add_with_carry(&Repr::from(1u64));

        assert!(fq_is_in_range::<Fp256Bn>(&Repr::from(0u64)));
        assert!(fq_is_in_range::<Fp256Bn>(&q_minus_1));
        assert!(!fq_is_in_range::<Fp256Bn>(&q));
        assert!(!fq_is_in_range::<Fp256Bn>(&q_plus_1));
        assert!(!fq_is_in_range::<Fp256Bn>(&Repr::new([u64::MAX; 4])));

        // n < q for Fp256BN so a value in [n, q) is a valid coordinate but not a valid scalar
        assert!(n < q);
        assert!(fq_is_in_range::<Fp256Bn>(&n));
        assert!(!fr_is_in_range::<Fp256Bn>(&n));
        let mut n_minus_1 = n;
        n_minus_1.sub_with_borrow(&Repr::from(1u64));
        assert!(fr_is_in_range::<Fp256Bn>(&n_minus_1));
        assert_eq!(fr_from_repr::<Fp256Bn>(&n_minus_1).unwrap(), -Fr::one());
        assert!(fr_from_repr::<Fp256Bn>(&n).is_none());
    }

    #[test]
    fn each_half_of_extension_element_is_checked() {
        let q = Fq::MODULUS;
        let one = Repr::from(1u64);
        assert!(Fq2Repr::<Fp256Bn>::new(one, one).is_in_range());
        assert!(!Fq2Repr::<Fp256Bn>::new(q, one).is_in_range());
        assert!(!Fq2Repr::<Fp256Bn>::new(one, q).is_in_range());

        let point = G2PointRepr::<Fp256Bn>::new(Fq2Repr::new(one, one), Fq2Repr::new(one, q));
        assert!(!point.is_in_range());
        assert!(point.to_affine().is_none());
    }

    fn convert_points<E: EpidCurve>(rng: &mut StdRng) {
        for _ in 0..10 {
            let p = E::G1::rand(rng).into_affine();
            let repr = G1PointRepr::<E>::from_affine(&p).unwrap();
            assert!(repr.is_in_range());
            assert_eq!(repr.to_affine().unwrap(), p);

            let q = E::G2::rand(rng).into_affine();
            let repr = G2PointRepr::<E>::from_affine(&q).unwrap();
            assert!(repr.is_in_range());
            assert_eq!(repr.to_affine().unwrap(), q);
        }
        assert!(G1PointRepr::<E>::from_affine(&E::G1Affine::zero()).is_none());
        assert!(G2PointRepr::<E>::from_affine(&E::G2Affine::zero()).is_none());

        let s = E::ScalarField::rand(rng);
        assert_eq!(fr_from_repr::<E>(&fr_to_repr::<E>(&s)).unwrap(), s);
    }

    #[test]
    fn convert_between_repr_and_affine() {
        let mut rng = StdRng::seed_from_u64(0u64);
        convert_points::<Fp256Bn>(&mut rng);
        convert_points::<Bls12_381>(&mut rng);
    }

    #[test]
    fn unreduced_coordinate_does_not_decode() {
        // x + q is congruent to x but must not decode to the same point
        let g = fp256bn::G1Affine::generator();
        let mut repr = G1PointRepr::<Fp256Bn>::from_affine(&g).unwrap();
        assert_eq!(repr.to_affine().unwrap(), g);
        assert!(!repr.x.add_with_carry(&Fq::MODULUS));
        assert!(!repr.is_in_range());
        assert!(repr.to_affine().is_none());
    }

    #[serde_as]
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Scalar(#[serde_as(as = "ReprBytes")] FrRepr<Fp256Bn>);

    #[test]
    fn raw_integer_encoding() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let value = FrRepr::<Fp256Bn>::rand(&mut rng);

        // Same bytes as arkworks writes for a BigInt
        let mut bytes = vec![];
        serialize_repr(&value, &mut bytes).unwrap();
        assert_eq!(bytes.len(), repr_size::<FrRepr<Fp256Bn>>());
        let mut ark_bytes = vec![];
        value.serialize_compressed(&mut ark_bytes).unwrap();
        assert_eq!(bytes, ark_bytes);
        assert_eq!(deserialize_repr::<FrRepr<Fp256Bn>, _>(&bytes[..]).unwrap(), value);

        for len in 0..bytes.len() {
            assert!(deserialize_repr::<FrRepr<Fp256Bn>, _>(&bytes[..len]).is_err());
        }

        let json = serde_json::to_string(&Scalar(value)).unwrap();
        assert_eq!(serde_json::from_str::<Scalar>(&json).unwrap(), Scalar(value));
        // Byte strings of the wrong size
        assert!(serde_json::from_str::<Scalar>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<Scalar>(&format!("{:?}", [0u8; 33])).is_err());
        assert!(serde_json::from_str::<Scalar>(&format!("{:?}", [0u8; 32])).is_ok());
    }
}
