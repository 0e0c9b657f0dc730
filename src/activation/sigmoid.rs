use std::f64::consts::E;

/// The logistic sigmoid, the only activation the engine uses.
pub struct Sigmoid;

impl Sigmoid {
    /// `1 / (1 + e^-x)`; always in the open interval (0, 1) for finite `x`.
    pub fn function(x: f64) -> f64 {
        1.0 / (1.0 + E.powf(-x))
    }

    /// `σ(x)·(1 − σ(x))`, taken at the pre-activation input.
    pub fn derivative(x: f64) -> f64 {
        let fx = Sigmoid::function(x);
        fx * (1.0 - fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_at_zero() {
        assert_eq!(Sigmoid::function(0.0), 0.5);
        assert_eq!(Sigmoid::derivative(0.0), 0.25);
    }

    #[test]
    fn test_sigmoid_stays_in_open_unit_interval() {
        for &x in &[-30.0, -5.0, -0.1, 0.1, 5.0, 30.0] {
            let y = Sigmoid::function(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn test_sigmoid_is_symmetric() {
        for &x in &[0.3, 1.7, 4.0] {
            let sum = Sigmoid::function(x) + Sigmoid::function(-x);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        for &x in &[-2.0, -0.5, 0.0, 0.8, 3.0] {
            let numeric = (Sigmoid::function(x + h) - Sigmoid::function(x - h)) / (2.0 * h);
            assert!((numeric - Sigmoid::derivative(x)).abs() < 1e-8);
        }
    }
}
