/*
    Copyright Hyperledger Foundation. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! A dynamic cryptographic accumulator over a prime-order elliptic curve
//! group, based on Camenisch, Kohlweiss, and Soriente, "An Accumulator Based
//! on Bilinear Maps and Efficient Revocation for Anonymous Credentials".
//!
//! An [`accumulator::Accumulator`] holds a secret scalar and maintains a
//! short, constant-size commitment to a set of elements; a [`prover::Prover`]
//! observes only the public update stream the accumulator emits and, from
//! that alone, can recompute a membership witness for any element it is
//! currently tracking, without ever learning the secret.
#![deny(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_parens,
    unused_lifetimes,
    unconditional_recursion,
    unused_extern_crates,
    trivial_casts,
    trivial_numeric_casts
)]
pub mod accumulator;
mod error;
mod hash;
pub mod prover;

pub use error::AccumulatorError;
pub use hash::Digest;
