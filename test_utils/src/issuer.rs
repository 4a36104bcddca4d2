//! An issuer for tests. Creates a group and issues private keys that satisfy the group relation
//! `A = (g1 + h1*f) * 1/(x + gamma)`, `w = g2*gamma`.

use ark_ec::{pairing::Pairing, CurveGroup};
use ark_ff::{Field, UniformRand};
use ark_std::rand::RngCore;
use epid_member::{
    curve::EpidCurve,
    keys::{GroupId, GroupPubKey, MembershipCredential, PrivKey},
    pairing::PairingContext,
    repr::fr_to_repr,
};

pub struct Issuer<E: Pairing> {
    pub gamma: E::ScalarField,
    pub h1: E::G1Affine,
    pub h2: E::G1Affine,
    pub pubkey: GroupPubKey<E>,
}

impl<E: EpidCurve> Issuer<E> {
    pub fn new<R: RngCore>(rng: &mut R, gid: GroupId, ctx: &PairingContext<E>) -> Self {
        let gamma = E::ScalarField::rand(rng);
        let h1 = E::G1::rand(rng).into_affine();
        let h2 = E::G1::rand(rng).into_affine();
        Self::with_secret(gamma, h1, h2, gid, ctx)
    }

    pub fn with_secret(
        gamma: E::ScalarField,
        h1: E::G1Affine,
        h2: E::G1Affine,
        gid: GroupId,
        ctx: &PairingContext<E>,
    ) -> Self {
        let w = (ctx.g2 * gamma).into_affine();
        let pubkey = GroupPubKey::from_affine(gid, &h1, &h2, &w).unwrap();
        Self {
            gamma,
            h1,
            h2,
            pubkey,
        }
    }

    /// Issues a key with random `f` and `x`
    pub fn issue<R: RngCore>(&self, rng: &mut R, ctx: &PairingContext<E>) -> PrivKey<E> {
        let f = E::ScalarField::rand(rng);
        let x = E::ScalarField::rand(rng);
        self.issue_with(&f, &x, ctx)
    }

    pub fn issue_with(
        &self,
        f: &E::ScalarField,
        x: &E::ScalarField,
        ctx: &PairingContext<E>,
    ) -> PrivKey<E> {
        let A = ((self.h1 * f + ctx.g1) * (*x + self.gamma).inverse().unwrap()).into_affine();
        let credential = MembershipCredential::from_affine(self.pubkey.gid, &A, x).unwrap();
        PrivKey::new(credential, fr_to_repr::<E>(f))
    }
}
