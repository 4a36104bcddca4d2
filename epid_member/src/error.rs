use ark_serialize::SerializationError;
use dock_crypto_utils::serde_utils::ArkSerializationError;
use serde::Serialize;

/// Names the structure that was rejected. The reason for the rejection is deliberately not kept.
#[derive(Debug, Serialize)]
pub enum EpidMemberError {
    InvalidGroupPubKey,
    InvalidMembershipCredential,
    InvalidPrivKey,
    #[serde(with = "ArkSerializationError")]
    Serialization(SerializationError),
}

impl From<SerializationError> for EpidMemberError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
