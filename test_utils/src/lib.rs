#![allow(non_snake_case)]

//! Fixtures shared by the tests of the workspace

pub mod fp256bn_vectors;
pub mod issuer;
#[macro_use]
pub mod serialization;
