pub struct MseLoss;

impl MseLoss {
    /// Scalar loss: mean(0.5 · (target − output)²)
    pub fn loss(outputs: &[f64], targets: &[f64]) -> f64 {
        let n = outputs.len() as f64;
        outputs.iter().zip(targets.iter())
            .map(|(o, t)| 0.5 * (t - o).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient: output − target
    pub fn derivative(output: f64, target: f64) -> f64 {
        output - target
    }
}
