use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::graph::{arena::Graph, delta_rule::DeltaRule, neuron::NeuronId};
use crate::network::config::WeightSampler;

/// An ordered group of neurons living in a shared `Graph`.
///
/// The bias neuron, if any, is created up front and always sits last, after
/// the `size` regular neurons. A layer never grows or shrinks afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    size: usize,
    neurons: Vec<NeuronId>,
    bias: Option<NeuronId>,
    // first neuron of the layer this one feeds, once wired
    forward: Option<NeuronId>,
}

impl Layer {
    pub fn new(graph: &mut Graph, size: usize, has_bias: bool, learning_rate: f64) -> Layer {
        let mut neurons: Vec<NeuronId> = (0..size)
            .map(|_| graph.add_neuron(false, learning_rate))
            .collect();
        let bias = has_bias.then(|| graph.add_neuron(true, learning_rate));
        neurons.extend(bias);

        Layer { size, neurons, bias, forward: None }
    }

    /// Number of regular (non-bias) neurons.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn has_bias(&self) -> bool {
        self.bias.is_some()
    }

    pub fn bias(&self) -> Option<NeuronId> {
        self.bias
    }

    /// All neuron ids, bias last.
    pub fn neurons(&self) -> &[NeuronId] {
        &self.neurons
    }

    fn regular(&self) -> &[NeuronId] {
        &self.neurons[..self.size]
    }

    pub fn is_connected(&self) -> bool {
        self.forward.is_some()
    }

    /// Current outputs of the regular neurons.
    pub fn outputs(&self, graph: &Graph) -> Vec<f64> {
        self.regular().iter().map(|&id| graph.neuron(id).output).collect()
    }

    /// Fully wires this layer, bias included, to the regular neurons of `target`.
    ///
    /// Wiring the same pair twice is a no-op; a layer feeds exactly one
    /// other layer, so wiring toward a different one is an error.
    pub fn connect(&mut self, graph: &mut Graph, target: &Layer, weights: &mut WeightSampler) -> Result<()> {
        let target_key = *target.regular().first().ok_or_else(|| {
            NetworkError::Configuration("cannot wire into an empty layer".to_string())
        })?;
        match self.forward {
            Some(existing) if existing == target_key => {
                tracing::warn!(layer_head = target_key.0, "layer already wired to this target; skipping");
                return Ok(());
            }
            Some(_) => {
                return Err(NetworkError::Configuration(
                    "layer is already wired to a different layer".to_string(),
                ));
            }
            None => {}
        }

        for &source in &self.neurons {
            for &dest in target.regular() {
                graph.connect(source, dest, weights.next_weight());
            }
        }
        self.forward = Some(target_key);
        Ok(())
    }

    /// Activates every neuron in order. `values[i]` feeds neuron `i` when
    /// present; the bias neuron ignores it. Returns all outputs, bias last.
    pub fn activate(&self, graph: &mut Graph, values: Option<&[f64]>) -> Vec<f64> {
        self.neurons.iter().enumerate()
            .map(|(i, &id)| {
                let value = values.and_then(|v| v.get(i).copied());
                graph.activate_neuron(id, value)
            })
            .collect()
    }

    /// Trains every neuron in order; `targets[i]` is passed to neuron `i` when present.
    pub fn train(&self, graph: &mut Graph, targets: Option<&[f64]>, rule: DeltaRule) -> Result<()> {
        for (i, &id) in self.neurons.iter().enumerate() {
            let target = targets.and_then(|t| t.get(i).copied());
            graph.train_neuron(id, target, rule)?;
        }
        Ok(())
    }
}
