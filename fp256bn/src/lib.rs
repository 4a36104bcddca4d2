#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! The Barreto-Naehrig curve used by EPID 2.0, named Fp256BN in the EPID and TPM 2.0 documents.
//! It has embedding degree 12 and is defined over a 256-bit prime field.
//!
//! Curve information:
//! * Base field: q =
//!   115792089237314936872688561244471742058375878355761205198700409522629664518163
//! * Scalar field: n =
//!   115792089237314936872688561244471742058035595988840268584488757999429535617037
//! * BN parameter: u = -0x6882F5C030B0A801
//! * G1 curve equation: y^2 = x^3 + 3, generator (1, 2)
//! * G2 curve equation: y^2 = x^3 + B, where
//!    * B = 3/(u+2) where Fq2 is represented as Fq\[u\]/(u^2+1)
//!    * this is a D-type sextic twist of G1

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
