//! Group public key, membership credential and member private key

use crate::{
    curve::EpidCurve,
    repr::{
        deserialize_repr, fr_to_repr, repr_size, serialize_repr, FrRepr, G1PointRepr, G2PointRepr,
        ReprBytes,
    },
};
use ark_ec::pairing::Pairing;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use dock_crypto_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const GROUP_ID_SIZE: usize = 16;

/// Opaque identifier of a group. Only ever compared for equality.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Zeroize, Serialize, Deserialize,
)]
pub struct GroupId(pub [u8; GROUP_ID_SIZE]);

impl GroupId {
    pub const fn new(bytes: [u8; GROUP_ID_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; GROUP_ID_SIZE]> for GroupId {
    fn from(bytes: [u8; GROUP_ID_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for GroupId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl CanonicalSerialize for GroupId {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        _compress: Compress,
    ) -> Result<(), SerializationError> {
        writer.write_all(&self.0)?;
        Ok(())
    }

    fn serialized_size(&self, _compress: Compress) -> usize {
        GROUP_ID_SIZE
    }
}

impl Valid for GroupId {
    fn check(&self) -> Result<(), SerializationError> {
        Ok(())
    }
}

impl CanonicalDeserialize for GroupId {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        _compress: Compress,
        _validate: Validate,
    ) -> Result<Self, SerializationError> {
        let mut bytes = [0u8; GROUP_ID_SIZE];
        reader.read_exact(&mut bytes)?;
        Ok(Self(bytes))
    }
}

/// Public parameters of a group. `w = g2 * gamma` where `gamma` is the issuer's secret.
#[serde_as]
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct GroupPubKey<E: Pairing> {
    pub gid: GroupId,
    #[serde_as(as = "ArkObjectBytes")]
    pub h1: G1PointRepr<E>,
    #[serde_as(as = "ArkObjectBytes")]
    pub h2: G1PointRepr<E>,
    #[serde_as(as = "ArkObjectBytes")]
    pub w: G2PointRepr<E>,
}

/// The non-secret part `(A, x)` of a member's key, issued such that
/// `A = (g1 + h1 * f) * 1/(x + gamma)`
#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct MembershipCredential<E: Pairing> {
    pub gid: GroupId,
    #[serde_as(as = "ArkObjectBytes")]
    pub A: G1PointRepr<E>,
    #[serde_as(as = "ReprBytes")]
    pub x: FrRepr<E>,
}

/// A member's private key, the membership credential and the member secret `f`
#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PrivKey<E: Pairing> {
    pub credential: MembershipCredential<E>,
    #[serde_as(as = "ReprBytes")]
    pub f: FrRepr<E>,
}

impl<E: Pairing> CanonicalSerialize for MembershipCredential<E> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.gid.serialize_with_mode(&mut writer, compress)?;
        self.A.serialize_with_mode(&mut writer, compress)?;
        serialize_repr(&self.x, &mut writer)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.gid.serialized_size(compress)
            + self.A.serialized_size(compress)
            + repr_size::<FrRepr<E>>()
    }
}

impl<E: Pairing> Valid for MembershipCredential<E> {
    fn check(&self) -> Result<(), SerializationError> {
        Ok(())
    }
}

impl<E: Pairing> CanonicalDeserialize for MembershipCredential<E> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let gid = GroupId::deserialize_with_mode(&mut reader, compress, validate)?;
        let A = G1PointRepr::deserialize_with_mode(&mut reader, compress, validate)?;
        let x = deserialize_repr(&mut reader)?;
        Ok(Self { gid, A, x })
    }
}

impl<E: Pairing> CanonicalSerialize for PrivKey<E> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        self.credential.serialize_with_mode(&mut writer, compress)?;
        serialize_repr(&self.f, &mut writer)
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        self.credential.serialized_size(compress) + repr_size::<FrRepr<E>>()
    }
}

impl<E: Pairing> Valid for PrivKey<E> {
    fn check(&self) -> Result<(), SerializationError> {
        Ok(())
    }
}

impl<E: Pairing> CanonicalDeserialize for PrivKey<E> {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let credential = MembershipCredential::deserialize_with_mode(&mut reader, compress, validate)?;
        let f = deserialize_repr(&mut reader)?;
        Ok(Self { credential, f })
    }
}

impl<E: Pairing> GroupPubKey<E> {
    pub fn new(gid: GroupId, h1: G1PointRepr<E>, h2: G1PointRepr<E>, w: G2PointRepr<E>) -> Self {
        Self { gid, h1, h2, w }
    }
}

impl<E: EpidCurve> GroupPubKey<E> {
    /// Fails if any of the points is the point at infinity
    pub fn from_affine(
        gid: GroupId,
        h1: &E::G1Affine,
        h2: &E::G1Affine,
        w: &E::G2Affine,
    ) -> Option<Self> {
        Some(Self::new(
            gid,
            G1PointRepr::from_affine(h1)?,
            G1PointRepr::from_affine(h2)?,
            G2PointRepr::from_affine(w)?,
        ))
    }
}

impl<E: Pairing> MembershipCredential<E> {
    pub fn new(gid: GroupId, A: G1PointRepr<E>, x: FrRepr<E>) -> Self {
        Self { gid, A, x }
    }
}

impl<E: EpidCurve> MembershipCredential<E> {
    /// Fails if `A` is the point at infinity
    pub fn from_affine(gid: GroupId, A: &E::G1Affine, x: &E::ScalarField) -> Option<Self> {
        Some(Self::new(gid, G1PointRepr::from_affine(A)?, fr_to_repr::<E>(x)))
    }
}

impl<E: Pairing> PrivKey<E> {
    pub fn new(credential: MembershipCredential<E>, f: FrRepr<E>) -> Self {
        Self { credential, f }
    }
}
