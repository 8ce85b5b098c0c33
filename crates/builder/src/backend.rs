//! Engine builder trait and the pass-through reference backend.

use std::path::Path;

use tracing::info;

use crate::config::BuildConfig;
use crate::error::{BuilderError, Result};
use crate::network::NetworkDef;

/// Opaque serialized engine produced by a build.
///
/// The byte layout belongs to the backend that produced it; callers only
/// move the blob around or persist it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedEngine(Vec<u8>);

impl SerializedEngine {
    /// Wrap raw engine bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        SerializedEngine(bytes)
    }

    /// The engine bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Blob length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the blob is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Persist the blob, creating or truncating the file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.0)?;
        Ok(())
    }
}

/// Compiles a network definition plus build configuration into a
/// serialized engine.
///
/// Implementations own optimization and kernel selection. The returned
/// blob is opaque; only the implementation that produced it can interpret
/// it.
pub trait EngineBuilder: Send + Sync {
    /// Build an engine from a validated network and configuration.
    fn build(&self, network: &NetworkDef, config: &BuildConfig) -> Result<SerializedEngine>;

    /// Identifier recorded by tooling to tell backends apart.
    fn backend_id(&self) -> &str;
}

/// Pass-through blob format version.
const PASSTHROUGH_VERSION: u8 = 0x01;

/// Reference backend that packages the defined graph verbatim.
///
/// No optimization or kernel selection happens here: the blob is a version
/// byte followed by the encoded definition and configuration. It stands in
/// where no vendor backend is linked; the output is not loadable by any
/// vendor runtime.
pub struct PassthroughBuilder;

impl EngineBuilder for PassthroughBuilder {
    fn build(&self, network: &NetworkDef, config: &BuildConfig) -> Result<SerializedEngine> {
        network.validate()?;

        let payload = bincode::serialize(&(network, config))
            .map_err(|e| BuilderError::Serialization(e.to_string()))?;

        let mut blob = Vec::with_capacity(1 + payload.len());
        blob.push(PASSTHROUGH_VERSION);
        blob.extend_from_slice(&payload);

        info!(
            target: "mlpforge::build",
            backend = self.backend_id(),
            layers = network.layers().len(),
            bytes = blob.len(),
            "Engine built"
        );

        Ok(SerializedEngine(blob))
    }

    fn backend_id(&self) -> &str {
        "passthrough"
    }
}
