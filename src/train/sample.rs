use serde::{Serialize, Deserialize};

/// One labeled example: an input vector and the output it should produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Sample {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        Sample::new(input, target)
    }
}
