//! Network definition vocabulary.
//!
//! The types here mirror the call surface of a builder SDK: create a
//! definition around a named input tensor, append layers, mark the output.
//! They carry data only; no graph transformation happens on this side of
//! the [`EngineBuilder`](crate::EngineBuilder) seam.

use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, Result};

/// Named tensor with explicit dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorDef {
    /// Tensor name, referenced by bindings at execution time.
    pub name: String,
    /// Dimensions, outermost first (e.g. `[1, 3, 1, 1]`).
    pub dims: Vec<usize>,
}

impl TensorDef {
    /// Create a tensor definition.
    pub fn new(name: impl Into<String>, dims: Vec<usize>) -> Self {
        TensorDef {
            name: name.into(),
            dims,
        }
    }

    /// Total element count across all dimensions.
    pub fn element_count(&self) -> usize {
        self.dims.iter().product()
    }
}

/// Activation function kinds understood by backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Logistic sigmoid.
    Sigmoid,
    /// Rectified linear unit.
    Relu,
    /// Hyperbolic tangent.
    Tanh,
}

/// A single layer, in definition order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Layer {
    /// Dense layer: `outputs` neurons, row-major weights, one bias per neuron.
    FullyConnected {
        /// Number of output neurons.
        outputs: usize,
        /// Weight values, `inputs * outputs` of them.
        weights: Vec<f32>,
        /// Bias values, one per output neuron.
        bias: Vec<f32>,
    },
    /// Element-wise activation over the previous layer's output.
    Activation(Activation),
}

/// Computation graph definition handed to an [`EngineBuilder`](crate::EngineBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDef {
    input: TensorDef,
    layers: Vec<Layer>,
    output_name: Option<String>,
}

impl NetworkDef {
    /// Start a definition from its input tensor.
    pub fn new(input: TensorDef) -> Self {
        NetworkDef {
            input,
            layers: Vec::new(),
            output_name: None,
        }
    }

    /// Append a fully-connected layer.
    pub fn add_fully_connected(
        &mut self,
        outputs: usize,
        weights: Vec<f32>,
        bias: Vec<f32>,
    ) -> &mut Self {
        self.layers.push(Layer::FullyConnected {
            outputs,
            weights,
            bias,
        });
        self
    }

    /// Append an element-wise activation layer.
    pub fn add_activation(&mut self, activation: Activation) -> &mut Self {
        self.layers.push(Layer::Activation(activation));
        self
    }

    /// Name the network output. Definitions without a marked output fail
    /// validation.
    pub fn mark_output(&mut self, name: impl Into<String>) -> &mut Self {
        self.output_name = Some(name.into());
        self
    }

    /// The input tensor.
    pub fn input(&self) -> &TensorDef {
        &self.input
    }

    /// Layers in definition order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The marked output name, if any.
    pub fn output_name(&self) -> Option<&str> {
        self.output_name.as_deref()
    }

    /// Check the definition for structural problems.
    ///
    /// Propagates the feature width from the input tensor through each
    /// layer and verifies parameter counts against it. This is the point
    /// where a weight file's self-declared element count meets the shape
    /// the caller actually expects.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(BuilderError::InvalidNetwork(
                "network has no layers".to_string(),
            ));
        }

        let mut width = self.input.element_count();
        for (index, layer) in self.layers.iter().enumerate() {
            if let Layer::FullyConnected {
                outputs,
                weights,
                bias,
            } = layer
            {
                if *outputs == 0 {
                    return Err(BuilderError::InvalidNetwork(format!(
                        "layer {} has zero outputs",
                        index
                    )));
                }
                let expected = width * outputs;
                if weights.len() != expected {
                    return Err(BuilderError::ShapeMismatch {
                        layer: index,
                        expected,
                        actual: weights.len(),
                    });
                }
                if bias.len() != *outputs {
                    return Err(BuilderError::ShapeMismatch {
                        layer: index,
                        expected: *outputs,
                        actual: bias.len(),
                    });
                }
                width = *outputs;
            }
        }

        if self.output_name.is_none() {
            return Err(BuilderError::InvalidNetwork(
                "no output marked".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perceptron() -> NetworkDef {
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network
            .add_fully_connected(2, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6], vec![0.1, 0.5])
            .add_activation(Activation::Sigmoid)
            .mark_output("output");
        network
    }

    #[test]
    fn test_valid_perceptron() {
        assert!(perceptron().validate().is_ok());
    }

    #[test]
    fn test_element_count() {
        let tensor = TensorDef::new("data", vec![1, 3, 1, 1]);
        assert_eq!(tensor.element_count(), 3);
    }

    #[test]
    fn test_weight_count_mismatch() {
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network
            .add_fully_connected(2, vec![0.1, 0.2, 0.3], vec![0.1, 0.5])
            .mark_output("output");

        assert!(matches!(
            network.validate(),
            Err(BuilderError::ShapeMismatch {
                layer: 0,
                expected: 6,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_bias_count_mismatch() {
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network
            .add_fully_connected(2, vec![0.0; 6], vec![0.1])
            .mark_output("output");

        assert!(matches!(
            network.validate(),
            Err(BuilderError::ShapeMismatch {
                layer: 0,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_stacked_layers_propagate_width() {
        // 3 -> 4 -> 2, each dense layer checked against the previous width.
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network
            .add_fully_connected(4, vec![0.0; 12], vec![0.0; 4])
            .add_activation(Activation::Relu)
            .add_fully_connected(2, vec![0.0; 8], vec![0.0; 2])
            .mark_output("output");

        assert!(network.validate().is_ok());
    }

    #[test]
    fn test_empty_network_rejected() {
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network.mark_output("output");

        assert!(matches!(
            network.validate(),
            Err(BuilderError::InvalidNetwork(_))
        ));
    }

    #[test]
    fn test_unmarked_output_rejected() {
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network.add_fully_connected(2, vec![0.0; 6], vec![0.0; 2]);

        assert!(matches!(
            network.validate(),
            Err(BuilderError::InvalidNetwork(_))
        ));
    }

    #[test]
    fn test_zero_output_layer_rejected() {
        let mut network = NetworkDef::new(TensorDef::new("data", vec![1, 3, 1, 1]));
        network
            .add_fully_connected(0, vec![], vec![])
            .mark_output("output");

        assert!(matches!(
            network.validate(),
            Err(BuilderError::InvalidNetwork(_))
        ));
    }
}
