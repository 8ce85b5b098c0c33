//! Mlpforge: perceptron engine-build pipeline with bit-exact weight
//! persistence.
//!
//! Trained parameters move between processes through a trivial binary
//! format (element count + raw IEEE-754 singles), and a pluggable
//! [`EngineBuilder`] compiles the described network into an opaque
//! serialized engine.
//!
//! # Quick Start
//!
//! ```ignore
//! use mlpforge::{Activation, BuildConfig, EngineBuilder, NetworkDef, PassthroughBuilder, TensorDef};
//!
//! // Persist parameters, then reload them through the store.
//! mlpforge::weights::save("model/fc1.wts", &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6])?;
//! let weights = mlpforge::weights::load("model/fc1.wts")?;
//!
//! // Describe the network and build it.
//! let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
//! network
//!     .add_fully_connected(2, weights, vec![0.1, 0.5])
//!     .add_activation(Activation::Sigmoid)
//!     .mark_output("output");
//!
//! let engine = PassthroughBuilder.build(&network, &BuildConfig::default())?;
//! engine.write_to("model/mlp.engine")?;
//! ```

// Re-export the builder vocabulary at the crate root; the weight store
// keeps its own namespace since its operation names are generic.
pub use mlpforge_builder::{
    Activation, BuildConfig, BuilderError, EngineBuilder, Layer, NetworkDef, PassthroughBuilder,
    SerializedEngine, TensorDef,
};
pub use mlpforge_weights as weights;
