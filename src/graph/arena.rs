use serde::{Deserialize, Serialize};

use crate::activation::sigmoid::Sigmoid;
use crate::error::{NetworkError, Result};
use crate::graph::connection::{Connection, ConnectionId};
use crate::graph::delta_rule::DeltaRule;
use crate::graph::neuron::{Neuron, NeuronId};

/// Owns every neuron and connection of a network.
///
/// Neurons refer to connections and connections refer to neurons by index,
/// so the graph has a single owner and no reference cycles. Nothing is ever
/// removed: ids stay valid for the lifetime of the graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    neurons: Vec<Neuron>,
    connections: Vec<Connection>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn add_neuron(&mut self, is_bias: bool, learning_rate: f64) -> NeuronId {
        let neuron = if is_bias {
            Neuron::bias(learning_rate)
        } else {
            Neuron::new(learning_rate)
        };
        self.neurons.push(neuron);
        NeuronId(self.neurons.len() - 1)
    }

    /// Creates the edge `source → target` and registers it on both endpoints.
    pub fn connect(&mut self, source: NeuronId, target: NeuronId, weight: f64) -> ConnectionId {
        let id = ConnectionId(self.connections.len());
        self.connections.push(Connection::new(source, target, weight));
        self.neurons[source.0].outgoing.push(id);
        self.neurons[target.0].incoming.push(id);
        id
    }

    pub fn neuron(&self, id: NeuronId) -> &Neuron {
        &self.neurons[id.0]
    }

    pub fn connection(&self, id: ConnectionId) -> &Connection {
        &self.connections[id.0]
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Every connection weight, in creation order.
    pub fn weights(&self) -> Vec<f64> {
        self.connections.iter().map(|c| c.weight).collect()
    }

    /// Σ source.output · weight over the incoming connections; 0 when there are none.
    fn incoming_sum(&self, id: NeuronId) -> f64 {
        self.neurons[id.0].incoming.iter()
            .map(|cid| {
                let conn = &self.connections[cid.0];
                self.neurons[conn.source.0].output * conn.weight
            })
            .sum()
    }

    /// Forward step for one neuron; returns its new output.
    ///
    /// A bias neuron ignores `external` and always outputs 1. Otherwise the
    /// weighted input is `external` when given, else the incoming sum.
    pub fn activate_neuron(&mut self, id: NeuronId, external: Option<f64>) -> f64 {
        if self.neurons[id.0].is_bias {
            self.neurons[id.0].output = 1.0;
            return 1.0;
        }

        let weighted_input = match external {
            Some(value) => value,
            None => self.incoming_sum(id),
        };
        if weighted_input.is_nan() {
            tracing::warn!(neuron = id.0, "weighted input is NaN");
        }

        let neuron = &mut self.neurons[id.0];
        neuron.weighted_input = weighted_input;
        neuron.output = Sigmoid::function(weighted_input);
        neuron.output
    }

    /// Backward step for one neuron.
    ///
    /// Bias and input neurons keep their delta; every other neuron computes
    /// one from `target` (output neurons) or from the already-computed deltas
    /// of its downstream neurons (hidden neurons). Then each outgoing weight
    /// moves by `−learning_rate · output · target.delta`.
    pub fn train_neuron(&mut self, id: NeuronId, target: Option<f64>, rule: DeltaRule) -> Result<()> {
        let Graph { neurons, connections } = self;
        let neuron = &neurons[id.0];

        if !neuron.is_bias && !neuron.is_input_neuron() {
            let delta = if neuron.is_output_neuron() {
                let target = target.ok_or(NetworkError::MissingTarget { neuron: id.0 })?;
                rule.output_delta(neuron.weighted_input, neuron.output, target)
            } else {
                let downstream: f64 = neuron.outgoing.iter()
                    .map(|cid| {
                        let conn = &connections[cid.0];
                        conn.weight * neurons[conn.target.0].delta
                    })
                    .sum();
                rule.hidden_delta(neuron.weighted_input, downstream)
            };
            neurons[id.0].delta = delta;
        }

        let neuron = &neurons[id.0];
        let step = neuron.learning_rate * neuron.output;
        for cid in &neuron.outgoing {
            let conn = &mut connections[cid.0];
            conn.weight -= step * neurons[conn.target.0].delta;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(weight: f64) -> (Graph, NeuronId, NeuronId) {
        let mut graph = Graph::new();
        let a = graph.add_neuron(false, 0.3);
        let b = graph.add_neuron(false, 0.3);
        graph.connect(a, b, weight);
        (graph, a, b)
    }

    #[test]
    fn test_connect_registers_both_ends() {
        let (graph, a, b) = pair(0.4);
        let out = graph.neuron(a).outgoing[0];
        let inc = graph.neuron(b).incoming[0];
        assert_eq!(out, inc);
        assert_eq!(graph.connection(out).source, a);
        assert_eq!(graph.connection(out).target, b);
        assert!(graph.neuron(a).is_input_neuron());
        assert!(graph.neuron(b).is_output_neuron());
    }

    #[test]
    fn test_single_connection_forward() {
        let (mut graph, a, b) = pair(0.4);
        let o = graph.activate_neuron(a, Some(2.0));
        let out = graph.activate_neuron(b, None);
        assert_eq!(graph.neuron(b).weighted_input, o * 0.4);
        assert_eq!(out, Sigmoid::function(o * 0.4));
    }

    #[test]
    fn test_unconnected_neuron_sums_to_zero() {
        let mut graph = Graph::new();
        let n = graph.add_neuron(false, 0.3);
        assert_eq!(graph.activate_neuron(n, None), 0.5);
        assert_eq!(graph.neuron(n).weighted_input, 0.0);
    }

    #[test]
    fn test_bias_ignores_external_value() {
        let mut graph = Graph::new();
        let bias = graph.add_neuron(true, 0.3);
        assert_eq!(graph.activate_neuron(bias, Some(-7.0)), 1.0);
        assert_eq!(graph.activate_neuron(bias, None), 1.0);
        assert_eq!(graph.neuron(bias).output, 1.0);
    }

    #[test]
    fn test_output_neuron_requires_target() {
        let (mut graph, a, b) = pair(0.4);
        graph.activate_neuron(a, Some(1.0));
        graph.activate_neuron(b, None);
        let err = graph.train_neuron(b, None, DeltaRule::Standard).unwrap_err();
        assert!(matches!(err, NetworkError::MissingTarget { neuron: 1 }));
    }

    #[test]
    fn test_train_moves_weight_toward_target() {
        let (mut graph, a, b) = pair(0.4);
        graph.activate_neuron(a, Some(1.0));
        graph.activate_neuron(b, None);
        graph.train_neuron(b, Some(0.0), DeltaRule::Standard).unwrap();
        graph.train_neuron(a, None, DeltaRule::Standard).unwrap();

        let nb = graph.neuron(b);
        let expected_delta = (nb.output - 0.0) * Sigmoid::derivative(nb.weighted_input);
        assert!((nb.delta - expected_delta).abs() < 1e-15);

        let expected_weight = 0.4 - 0.3 * graph.neuron(a).output * expected_delta;
        assert!((graph.weights()[0] - expected_weight).abs() < 1e-15);
        assert!(graph.weights()[0] < 0.4);
        // input neurons carry no delta
        assert_eq!(graph.neuron(a).delta, 0.0);
    }

    #[test]
    fn test_hidden_delta_uses_downstream() {
        let mut graph = Graph::new();
        let a = graph.add_neuron(false, 0.3);
        let h = graph.add_neuron(false, 0.3);
        let o = graph.add_neuron(false, 0.3);
        graph.connect(a, h, 0.4);
        graph.connect(h, o, 0.6);
        graph.activate_neuron(a, Some(1.0));
        graph.activate_neuron(h, None);
        graph.activate_neuron(o, None);

        graph.train_neuron(o, Some(1.0), DeltaRule::Standard).unwrap();
        let downstream = 0.6 * graph.neuron(o).delta;
        graph.train_neuron(h, None, DeltaRule::Standard).unwrap();

        let expected = Sigmoid::derivative(graph.neuron(h).weighted_input) * downstream;
        assert!((graph.neuron(h).delta - expected).abs() < 1e-15);
    }
}
