use crate::error::{ensure_finite, NetworkError, Result};
use crate::graph::arena::Graph;
use crate::layers::layer::Layer;
use crate::loss::mse::MseLoss;
use crate::network::config::NetworkConfig;

/// A linear stack of fully connected sigmoid layers.
///
/// Every layer except the output layer carries one bias neuron. The network
/// is the single owner of its graph; all passes go through `&mut self`.
#[derive(Debug, Clone)]
pub struct Network {
    graph: Graph,
    layers: Vec<Layer>,
    config: NetworkConfig,
    error: f64,
}

impl Network {
    /// Builds a network with `NetworkConfig::default()`.
    ///
    /// `sizes` lists the regular neuron count per layer, input first,
    /// e.g. `[2, 1]` for a two-input, one-output network.
    pub fn new(sizes: &[usize]) -> Result<Network> {
        Network::with_config(sizes, NetworkConfig::default())
    }

    pub fn with_config(sizes: &[usize], config: NetworkConfig) -> Result<Network> {
        if sizes.len() < 2 {
            return Err(NetworkError::Configuration(format!(
                "a network needs at least 2 layers, got {}",
                sizes.len()
            )));
        }
        if let Some(index) = sizes.iter().position(|&s| s == 0) {
            return Err(NetworkError::Configuration(format!(
                "layer {index} has no neurons"
            )));
        }
        config.validate()?;

        let mut graph = Graph::new();
        let last = sizes.len() - 1;
        let mut layers: Vec<Layer> = sizes.iter().enumerate()
            .map(|(i, &size)| Layer::new(&mut graph, size, i < last, config.learning_rate))
            .collect();

        let mut weights = config.weight_init.sampler();
        for i in 0..last {
            let (head, tail) = layers.split_at_mut(i + 1);
            head[i].connect(&mut graph, &tail[0], &mut weights)?;
        }

        tracing::debug!(
            ?sizes,
            neurons = graph.neurons().len(),
            connections = graph.connections().len(),
            "network wired"
        );

        Ok(Network { graph, layers, config, error: 0.0 })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn input_layer(&self) -> &Layer {
        &self.layers[0]
    }

    pub fn output_layer(&self) -> &Layer {
        &self.layers[self.layers.len() - 1]
    }

    pub fn hidden_layers(&self) -> &[Layer] {
        &self.layers[1..self.layers.len() - 1]
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Loss of the most recent `train` call; 0 before the first one.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Output-layer values from the last forward pass.
    pub fn outputs(&self) -> Vec<f64> {
        self.output_layer().outputs(&self.graph)
    }

    /// Forward pass, input layer to output layer. Returns the output values.
    ///
    /// Inputs are checked before any neuron is touched.
    pub fn activate(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        let expected = self.input_layer().size();
        if inputs.len() != expected {
            return Err(NetworkError::dimension("input", expected, inputs.len()));
        }
        ensure_finite("input", inputs)?;

        self.layers[0].activate(&mut self.graph, Some(inputs));
        for layer in &self.layers[1..] {
            layer.activate(&mut self.graph, None);
        }

        let outputs = self.outputs();
        if let Some(index) = outputs.iter().position(|o| o.is_nan()) {
            tracing::warn!(index, "forward pass produced NaN output");
        }
        Ok(outputs)
    }

    /// Backward pass against `targets`, output layer first.
    ///
    /// Each layer's deltas depend on the deltas of the layer after it, so
    /// layers are trained in strict reverse order. Uses the activations left
    /// by the preceding `activate` call.
    pub fn train(&mut self, targets: &[f64]) -> Result<()> {
        let expected = self.output_layer().size();
        if targets.len() != expected {
            return Err(NetworkError::dimension("target", expected, targets.len()));
        }
        ensure_finite("target", targets)?;

        let rule = self.config.delta_rule;
        let last = self.layers.len() - 1;
        self.layers[last].train(&mut self.graph, Some(targets), rule)?;
        self.error = MseLoss::loss(&self.layers[last].outputs(&self.graph), targets);

        for layer in self.layers[..last].iter().rev() {
            layer.train(&mut self.graph, None, rule)?;
        }

        tracing::trace!(error = self.error, "backward pass done");
        Ok(())
    }

    /// Loss of the current outputs against `targets`, without training.
    pub fn calculate_error(&self, targets: &[f64]) -> Result<f64> {
        let expected = self.output_layer().size();
        if targets.len() != expected {
            return Err(NetworkError::dimension("target", expected, targets.len()));
        }
        Ok(MseLoss::loss(&self.outputs(), targets))
    }
}
