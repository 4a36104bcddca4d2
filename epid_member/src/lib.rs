#![cfg_attr(not(feature = "std"), no_std)]
#![allow(non_snake_case)]

//! # Validation of EPID 2.0 member key material
//!
//! Before a member's private key, membership credential or the group public key is used for
//! signing, it has to be proven well-formed. Two kinds of checks are provided in [`validate`]
//!
//! 1. Range checks. Every coordinate of a point must be strictly less than the base field modulus
//!    `q` and every scalar strictly less than the group order `n`. These are cheap and operate on
//!    the raw, possibly unreduced, integers as received.
//! 2. Group checks. A membership credential `(A, x)` together with the member secret `f` must
//!    satisfy the key generation relation of the group it claims to belong to, i.e.
//!    `e(A, g2*x + w) == e(g1 + h1*f, g2)` where `h1` and `w` come from the group public key. This
//!    costs a multi-pairing and should only be done after the range check passed.
//!
//! Every check returns a plain `bool`. A `false` never says why the input was rejected. The
//! `validate_*` functions wrap the checks in the order they should be run and return an
//! [`error::EpidMemberError`] naming only the rejected structure.
//!
//! The code is generic over the pairing engine. Any arkworks BN or BLS12 engine can be used through
//! [`curve::EpidCurve`], EPID 2.0 itself uses the Fp256BN curve.

extern crate alloc;

pub mod curve;
pub mod error;
pub mod keys;
pub mod pairing;
pub mod repr;
pub mod validate;

pub mod prelude {
    pub use crate::{
        curve::EpidCurve,
        error::EpidMemberError,
        keys::{GroupId, GroupPubKey, MembershipCredential, PrivKey, GROUP_ID_SIZE},
        pairing::PairingContext,
        repr::{Fq2Repr, FqRepr, FrRepr, G1PointRepr, G2PointRepr},
        validate::*,
    };
}
