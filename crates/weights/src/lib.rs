//! Weight persistence for flat f32 parameter arrays.
//!
//! This crate implements the on-disk format used to hand trained parameters
//! to the engine-build step: a 4-byte element count followed by the raw
//! IEEE-754 values. Values round-trip bit-exactly; see [`format`] for the
//! layout and its portability caveat.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod format;

pub use error::{Result, WeightStoreError};
pub use format::{load, read, save, write};
