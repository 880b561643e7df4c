//! SHA-1 content identifiers for the eden content-addressed store.
//!
//! This crate provides the `ObjectId` value type, hex encoding/decoding, and
//! a streaming [`Hasher`] that can digest data spread across a chain of
//! discontiguous segments without joining them first.

mod error;
pub mod hex;
mod oid;
pub mod hasher;

pub use error::HashError;
pub use hasher::Hasher;
pub use oid::ObjectId;

/// Length of a SHA-1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Length of the canonical hex form of a digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;
