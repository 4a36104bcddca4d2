//! Range and group checks of member key material.
//!
//! The range checks look at the raw integers only and are total over any input. The group checks
//! decode points and scalars first and reject anything that does not decode, so they are safe on
//! inputs that were not range checked, but callers should run the range check first since it is
//! much cheaper. All checks are pure and can be called concurrently with a shared
//! [`PairingContext`].

use crate::{
    curve::EpidCurve,
    error::EpidMemberError,
    keys::{GroupPubKey, MembershipCredential, PrivKey},
    pairing::PairingContext,
    repr::{fr_from_repr, fr_is_in_range, FrRepr},
};
use ark_ec::pairing::Pairing;
use ark_ff::Zero;
use ark_std::{end_timer, start_timer};

/// All coordinates of `h1`, `h2` and `w` are less than `q`. The group id is not checked.
pub fn group_pub_key_is_in_range<E: Pairing>(pubkey: &GroupPubKey<E>) -> bool {
    pubkey.h1.is_in_range() & pubkey.h2.is_in_range() & pubkey.w.is_in_range()
}

/// Both coordinates of `A` are less than `q` and `x` is less than `n`
pub fn membership_credential_is_in_range<E: Pairing>(credential: &MembershipCredential<E>) -> bool {
    credential.A.is_in_range() & fr_is_in_range::<E>(&credential.x)
}

/// The credential is in range and `f` is less than `n`
pub fn priv_key_is_in_range<E: Pairing>(privkey: &PrivKey<E>) -> bool {
    membership_credential_is_in_range(&privkey.credential) & fr_is_in_range::<E>(&privkey.f)
}

/// `h1`, `h2` and `w` are points of the prime order subgroups. Implies
/// [`group_pub_key_is_in_range`].
pub fn group_pub_key_is_on_curve<E: EpidCurve>(pubkey: &GroupPubKey<E>) -> bool {
    pubkey.h1.to_affine().is_some()
        & pubkey.h2.to_affine().is_some()
        & pubkey.w.to_affine().is_some()
}

/// Checks that the credential `(A, x)` and member secret `f` belong to the group of `pubkey`,
/// i.e. the group ids match and `e(A, g2*x + w) == e(g1 + h1*f, g2)`.
///
/// Returns false without any pairing if the group ids differ, if any point or scalar does not
/// decode, or if `g2*x + w` or `g1 + h1*f` is the identity.
pub fn membership_credential_is_in_group<E: EpidCurve>(
    credential: &MembershipCredential<E>,
    f: &FrRepr<E>,
    pubkey: &GroupPubKey<E>,
    ctx: &PairingContext<E>,
) -> bool {
    if credential.gid != pubkey.gid {
        return false;
    }
    debug_assert!(ctx.is_valid(), "Pairing context with an identity generator");
    let check_time = start_timer!(|| "Membership credential group check");
    let holds = group_relation_holds(credential, f, pubkey, ctx).unwrap_or(false);
    end_timer!(check_time);
    holds
}

/// Same as [`membership_credential_is_in_group`] with the key's credential and `f`
pub fn priv_key_is_in_group<E: EpidCurve>(
    privkey: &PrivKey<E>,
    pubkey: &GroupPubKey<E>,
    ctx: &PairingContext<E>,
) -> bool {
    membership_credential_is_in_group(&privkey.credential, &privkey.f, pubkey, ctx)
}

/// `None` when an input does not decode
fn group_relation_holds<E: EpidCurve>(
    credential: &MembershipCredential<E>,
    f: &FrRepr<E>,
    pubkey: &GroupPubKey<E>,
    ctx: &PairingContext<E>,
) -> Option<bool> {
    let A = credential.A.to_affine()?;
    let x = fr_from_repr::<E>(&credential.x)?;
    let f = fr_from_repr::<E>(f)?;
    let h1 = pubkey.h1.to_affine()?;
    let w = pubkey.w.to_affine()?;

    // t1 = g2*x + w
    let t1 = ctx.g2 * x + w;
    // t2 = g1 + h1*f
    let t2 = h1 * f + ctx.g1;
    if t1.is_zero() || t2.is_zero() {
        return Some(false);
    }

    // e(A, t1) == e(t2, g2) => e(A, t1) - e(t2, g2) == 0 => e(A, t1) + e(-t2, g2) == 0
    let pairing_time = start_timer!(|| "Multi-pairing");
    let is_identity = E::multi_pairing(
        [E::G1Prepared::from(A), E::G1Prepared::from(-t2)],
        [E::G2Prepared::from(t1), ctx.g2_prepared.clone()],
    )
    .is_zero();
    end_timer!(pairing_time);
    Some(is_identity)
}

/// Accepts the group public key if it is in range and all its points are in the right subgroups
pub fn validate_group_pub_key<E: EpidCurve>(
    pubkey: &GroupPubKey<E>,
) -> Result<(), EpidMemberError> {
    if group_pub_key_is_in_range(pubkey) && group_pub_key_is_on_curve(pubkey) {
        Ok(())
    } else {
        Err(EpidMemberError::InvalidGroupPubKey)
    }
}

/// Validates the group public key, then the range of the credential and `f` and finally the group
/// relation
pub fn validate_membership_credential<E: EpidCurve>(
    credential: &MembershipCredential<E>,
    f: &FrRepr<E>,
    pubkey: &GroupPubKey<E>,
    ctx: &PairingContext<E>,
) -> Result<(), EpidMemberError> {
    validate_group_pub_key(pubkey)?;
    if membership_credential_is_in_range(credential)
        && fr_is_in_range::<E>(f)
        && membership_credential_is_in_group(credential, f, pubkey, ctx)
    {
        Ok(())
    } else {
        Err(EpidMemberError::InvalidMembershipCredential)
    }
}

/// Validates the group public key, then the range of the private key and finally the group relation
pub fn validate_priv_key<E: EpidCurve>(
    privkey: &PrivKey<E>,
    pubkey: &GroupPubKey<E>,
    ctx: &PairingContext<E>,
) -> Result<(), EpidMemberError> {
    validate_group_pub_key(pubkey)?;
    if priv_key_is_in_range(privkey) && priv_key_is_in_group(privkey, pubkey, ctx) {
        Ok(())
    } else {
        Err(EpidMemberError::InvalidPrivKey)
    }
}
