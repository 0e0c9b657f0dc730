use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::graph::delta_rule::DeltaRule;

/// Starting weight used by the reference demos.
pub const DEFAULT_WEIGHT: f64 = 0.4;
pub const DEFAULT_LEARNING_RATE: f64 = 0.3;

/// How connection weights are seeded when a network is wired.
///
/// - `Constant` — every connection starts with the same value.
/// - `Uniform`  — each weight is drawn from `[low, high)`; a fixed `seed`
///                makes the draw reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WeightInit {
    Constant { value: f64 },
    Uniform { low: f64, high: f64, seed: Option<u64> },
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Constant { value: DEFAULT_WEIGHT }
    }
}

impl WeightInit {
    pub fn validate(&self) -> Result<()> {
        match *self {
            WeightInit::Constant { value } => {
                if !value.is_finite() || value == 0.0 {
                    return Err(NetworkError::Configuration(format!(
                        "constant weight must be finite and non-zero, got {value}"
                    )));
                }
            }
            WeightInit::Uniform { low, high, .. } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(NetworkError::Configuration(format!(
                        "uniform weight range must satisfy low < high, got [{low}, {high})"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn sampler(&self) -> WeightSampler {
        let rng = match self {
            WeightInit::Uniform { seed: Some(seed), .. } => StdRng::seed_from_u64(*seed),
            _ => StdRng::from_entropy(),
        };
        WeightSampler { init: self.clone(), rng }
    }
}

/// Hands out initial weights one connection at a time.
pub struct WeightSampler {
    init: WeightInit,
    rng: StdRng,
}

impl WeightSampler {
    pub fn next_weight(&mut self) -> f64 {
        match self.init {
            WeightInit::Constant { value } => value,
            WeightInit::Uniform { low, high, .. } => self.rng.gen_range(low..high),
        }
    }
}

/// Hyperparameters fixed at network construction.
///
/// Can be kept in a JSON file next to a training script:
///
/// ```json
/// { "learning_rate": 0.3, "weight_init": { "type": "constant", "value": 0.4 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default)]
    pub weight_init: WeightInit,
    #[serde(default)]
    pub delta_rule: DeltaRule,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            learning_rate: DEFAULT_LEARNING_RATE,
            weight_init: WeightInit::default(),
            delta_rule: DeltaRule::default(),
        }
    }
}

impl NetworkConfig {
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_weight_init(mut self, weight_init: WeightInit) -> Self {
        self.weight_init = weight_init;
        self
    }

    pub fn with_delta_rule(mut self, delta_rule: DeltaRule) -> Self {
        self.delta_rule = delta_rule;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetworkError::Configuration(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        self.weight_init.validate()
    }

    pub fn from_json_str(json: &str) -> Result<NetworkConfig> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NetworkConfig::default();
        assert_eq!(config.learning_rate, 0.3);
        assert_eq!(config.weight_init, WeightInit::Constant { value: 0.4 });
        assert_eq!(config.delta_rule, DeltaRule::Standard);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_learning_rate() {
        for lr in [0.0, -0.1, f64::NAN] {
            let config = NetworkConfig::default().with_learning_rate(lr);
            assert!(matches!(config.validate(), Err(NetworkError::Configuration(_))));
        }
    }

    #[test]
    fn test_rejects_zero_constant_and_empty_range() {
        assert!(WeightInit::Constant { value: 0.0 }.validate().is_err());
        let empty = WeightInit::Uniform { low: 0.5, high: 0.5, seed: None };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_seeded_uniform_is_reproducible() {
        let init = WeightInit::Uniform { low: -0.5, high: 0.5, seed: Some(7) };
        let mut a = init.sampler();
        let mut b = init.sampler();
        for _ in 0..20 {
            let w = a.next_weight();
            assert_eq!(w, b.next_weight());
            assert!((-0.5..0.5).contains(&w));
        }
    }

    #[test]
    fn test_json_with_missing_fields_uses_defaults() {
        let config = NetworkConfig::from_json_str(r#"{ "learning_rate": 0.1 }"#).unwrap();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.weight_init, WeightInit::default());
    }

    #[test]
    fn test_json_parses_uniform_and_rule() {
        let json = r#"{
            "weight_init": { "type": "uniform", "low": -1.0, "high": 1.0, "seed": 3 },
            "delta_rule": "omit_derivative"
        }"#;
        let config = NetworkConfig::from_json_str(json).unwrap();
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(config.delta_rule, DeltaRule::OmitDerivative);
        assert_eq!(
            config.weight_init,
            WeightInit::Uniform { low: -1.0, high: 1.0, seed: Some(3) }
        );
    }

    #[test]
    fn test_json_validation_runs() {
        let err = NetworkConfig::from_json_str(r#"{ "learning_rate": -1.0 }"#).unwrap_err();
        assert!(matches!(err, NetworkError::Configuration(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("neuronet-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let config = NetworkConfig::default().with_learning_rate(0.05);
        config.save_json(path).unwrap();
        let loaded = NetworkConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, config);
    }
}
