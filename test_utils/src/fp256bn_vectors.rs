//! Known answer vectors on Fp256BN, the curve of EPID 2.0.
//!
//! `h1`, `h2`, `x` and `f` as well as the group id `0x00..01` are those of the canonical EPID 2.0
//! test group. The canonical test group's `w` and `A` were generated for a different G2 generator,
//! so `w` and `A` of the known-answer key were computed for the generators of the `fp256bn` crate
//! with the issuer secret [`ISSUER_SECRET`]. The canonical `w` and `A` are kept as they are points
//! of the right subgroups, valid for the range checks.

use ark_ff::BigInt;
use epid_member::{
    keys::{GroupId, GroupPubKey, MembershipCredential, PrivKey, GROUP_ID_SIZE},
    repr::{Fq2Repr, FqRepr, FrRepr, G1PointRepr, G2PointRepr},
};
use fp256bn::Fp256Bn;

/// Modulus of the base field
pub const Q: FqRepr<Fp256Bn> = BigInt::new([
    0xd3292ddbaed33013,
    0x0cdc65fb12980a82,
    0x46e5f25eee71a49f,
    0xfffffffffffcf0cd,
]);

/// Order of G1 and G2
pub const N: FrRepr<Fp256Bn> = BigInt::new([
    0xf62d536cd10b500d,
    0x0cdc65fb1299921a,
    0x46e5f25eee71a49e,
    0xfffffffffffcf0cd,
]);

/// `gamma` such that `w = g2 * gamma` for the known-answer group key
pub const ISSUER_SECRET: &str =
    "112070578696991635574834774900600722007684176841073502365997486411903539376108";

const H1_X: FqRepr<Fp256Bn> = BigInt::new([
    0x434c62fdb580e099,
    0xd06d8f9d64cee3ce,
    0x3d753d617e27b0cb,
    0xb36fff81e21b17eb,
]);
const H1_Y: FqRepr<Fp256Bn> = BigInt::new([
    0xd8693ea174f459ee,
    0xee3d664282457e7f,
    0xfdb5b79de94dae9c,
    0x3a075680e08859a4,
]);
const H2_X: FqRepr<Fp256Bn> = BigInt::new([
    0x29666163bcdd7fe1,
    0xdc99ed42d55ba704,
    0xd5dbca1c5474107b,
    0xd2742e9f63c2518e,
]);
const H2_Y: FqRepr<Fp256Bn> = BigInt::new([
    0x93a56ecce78e1084,
    0xda3f517dde4ceacb,
    0x48120aa6e85b087b,
    0x765dc06ee314ac72,
]);

const W_X_C0: FqRepr<Fp256Bn> = BigInt::new([
    0xa7e986b7d7c834a9,
    0x40c5b03168bb7a45,
    0x04e08aa476d706d4,
    0x587f60eb229e3422,
]);
const W_X_C1: FqRepr<Fp256Bn> = BigInt::new([
    0xfb80369b9c0c32f5,
    0x956e743776000187,
    0x4f48b4f120db136f,
    0x935aac83ed4d3bf4,
]);
const W_Y_C0: FqRepr<Fp256Bn> = BigInt::new([
    0xe90421f6387761e4,
    0x9a6db17ff73c0150,
    0x8b6f75fe8250b2b9,
    0xe6c23b455430742b,
]);
const W_Y_C1: FqRepr<Fp256Bn> = BigInt::new([
    0x4ef168df37fdaa0e,
    0x2c90276107adf4a5,
    0x29b456dc39b76990,
    0x87d3ca8cd1ed0d02,
]);

const A_X: FqRepr<Fp256Bn> = BigInt::new([
    0x5b0234d6de55178d,
    0x3e77e8d352bcef55,
    0xdaf6ec78555cd5b9,
    0x16e5d399e5ef0ce0,
]);
const A_Y: FqRepr<Fp256Bn> = BigInt::new([
    0x0620df7634dcec94,
    0xcf7d0cd1deffae16,
    0xad1186c95f81c25c,
    0x556cfc3f5273fc4d,
]);

const X: FrRepr<Fp256Bn> = BigInt::new([
    0x00147c6b1372c377,
    0xd09db9e446ddb71b,
    0x105eafd85a611086,
    0x0a30ae43a1e0d7df,
]);
const F: FrRepr<Fp256Bn> = BigInt::new([
    0x362d4135636131c7,
    0xa16567fda707879b,
    0x05d64356e07cc68e,
    0x4840b56c6d47090b,
]);

const CANONICAL_W_X_C0: FqRepr<Fp256Bn> = BigInt::new([
    0x8dcd36880728e896,
    0x788753f66a95cac6,
    0x50719451401ba5b6,
    0xbd195a95e20fca1c,
]);
const CANONICAL_W_X_C1: FqRepr<Fp256Bn> = BigInt::new([
    0x22d9fde0e2f4b3a1,
    0x2414cfd10f6c56f5,
    0xa6657a6815d775f8,
    0xca78115bb86ae7e5,
]);
const CANONICAL_W_Y_C0: FqRepr<Fp256Bn> = BigInt::new([
    0x0a3b589657e4f33c,
    0x898846dd89c2399c,
    0xbc0772305deef56a,
    0x9021a7e0e8b3c725,
]);
const CANONICAL_W_Y_C1: FqRepr<Fp256Bn> = BigInt::new([
    0x837d3e31ee1140a9,
    0xba6bf0da8e25c6ad,
    0x5d0a88db1f3deaa2,
    0x795169361bb6f705,
]);

const CANONICAL_A_X: FqRepr<Fp256Bn> = BigInt::new([
    0x570890e8196254db,
    0x87683f4edaf296ec,
    0xacbfdd77eb4caf8a,
    0x46c969eef468e15f,
]);
const CANONICAL_A_Y: FqRepr<Fp256Bn> = BigInt::new([
    0x1624988082803777,
    0xae43de62ffa64ba8,
    0x9a1b8aad0acf364f,
    0x1e52231691e4a81d,
]);

/// Group id `0x00..01`
pub fn group_id() -> GroupId {
    group_id_ending_with(1)
}

/// Group id with all bytes 0 except the last
pub fn group_id_ending_with(last: u8) -> GroupId {
    let mut bytes = [0u8; GROUP_ID_SIZE];
    bytes[GROUP_ID_SIZE - 1] = last;
    GroupId::new(bytes)
}

/// The canonical test group public key
pub fn canonical_group_pub_key() -> GroupPubKey<Fp256Bn> {
    GroupPubKey::new(
        group_id(),
        G1PointRepr::new(H1_X, H1_Y),
        G1PointRepr::new(H2_X, H2_Y),
        G2PointRepr::new(
            Fq2Repr::new(CANONICAL_W_X_C0, CANONICAL_W_X_C1),
            Fq2Repr::new(CANONICAL_W_Y_C0, CANONICAL_W_Y_C1),
        ),
    )
}

/// The canonical test group public key with the first coordinate of `h1` replaced by `q`
pub fn canonical_group_pub_key_h1_x_is_q() -> GroupPubKey<Fp256Bn> {
    let mut pubkey = canonical_group_pub_key();
    pubkey.h1.x = Q;
    pubkey
}

/// The credential issued in the canonical test group
pub fn canonical_membership_credential() -> MembershipCredential<Fp256Bn> {
    MembershipCredential::new(group_id(), G1PointRepr::new(CANONICAL_A_X, CANONICAL_A_Y), X)
}

/// Group public key sharing `h1`, `h2` and the group id with the canonical one, for which
/// [`private_key`] is issued
pub fn group_pub_key() -> GroupPubKey<Fp256Bn> {
    let mut pubkey = canonical_group_pub_key();
    pubkey.w = G2PointRepr::new(
        Fq2Repr::new(W_X_C0, W_X_C1),
        Fq2Repr::new(W_Y_C0, W_Y_C1),
    );
    pubkey
}

pub fn membership_credential() -> MembershipCredential<Fp256Bn> {
    MembershipCredential::new(group_id(), G1PointRepr::new(A_X, A_Y), X)
}

/// Member secret `f` of [`private_key`]
pub fn member_secret() -> FrRepr<Fp256Bn> {
    F
}

pub fn private_key() -> PrivKey<Fp256Bn> {
    PrivKey::new(membership_credential(), member_secret())
}
