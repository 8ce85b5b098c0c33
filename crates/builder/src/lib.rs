//! Network definition and engine-builder boundary.
//!
//! This crate models the surface of an inference-engine builder SDK as an
//! explicit seam: callers describe a computation graph ([`NetworkDef`]),
//! pick build limits ([`BuildConfig`]), and hand both to an
//! [`EngineBuilder`] implementation, which returns an opaque
//! [`SerializedEngine`]. Optimization, kernel selection and the engine wire
//! format belong to the backend behind the trait, not to this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod network;

pub use backend::{EngineBuilder, PassthroughBuilder, SerializedEngine};
pub use config::BuildConfig;
pub use error::{BuilderError, Result};
pub use network::{Activation, Layer, NetworkDef, TensorDef};
