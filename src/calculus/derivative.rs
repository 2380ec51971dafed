//! Numerical differentiation by finite differences with Richardson-style
//! step refinement.
//!
//! Sample offsets around the evaluation point feed a Vandermonde solve whose
//! first-order row yields the finite-difference weights; the step is then
//! shrunk geometrically until successive estimates agree to both tolerances
//! or the error turns back up (the step has hit rounding noise).

use super::special::inverse_vandermonde;
use crate::mathfuncs::pow;

/// Which side of the evaluation point supplies the samples.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    /// Symmetric offsets on both sides.
    #[default]
    Center,
    /// Offsets above the point only.
    Forward,
    /// Offsets below the point only.
    Backward,
}

/// A first-derivative estimator over a one-dimensional function.
///
/// ```
/// use cse_rs::calculus::FiniteDifferenceDerivative;
/// use cse_rs::mathfuncs::ln;
///
/// let df = FiniteDifferenceDerivative::new(ln);
/// assert!((df.evaluate(2.0) - 0.5).abs() < 1e-10);
/// ```
pub struct FiniteDifferenceDerivative<F> {
    function: F,
    /// Negative log10 of the absolute tolerance.
    pub abs_tolerance: f64,
    /// Negative log10 of the relative tolerance.
    pub rel_tolerance: f64,
    /// Number of finite-difference terms; must be even.
    pub fdm_order: usize,
    /// Starting step size.
    pub initial_step: f64,
    /// Factor the step shrinks by per refinement.
    pub step_factor: f64,
    /// Log10 of the refinement cap.
    pub max_iter_log: f64,
    /// Sampling side.
    pub direction: Direction,
}

impl<F: Fn(f64) -> f64> FiniteDifferenceDerivative<F> {
    /// Wraps a function with the default configuration.
    pub fn new(function: F) -> Self {
        FiniteDifferenceDerivative {
            function,
            abs_tolerance: 300.0,
            rel_tolerance: 7.5,
            fdm_order: 8,
            initial_step: 0.5,
            step_factor: 2.0,
            max_iter_log: 3.0,
            direction: Direction::Center,
        }
    }

    /// The sample offsets in units of the step.
    fn offsets(&self) -> Vec<f64> {
        let half = (self.fdm_order / 2).max(1) as i64;
        match self.direction {
            Direction::Center => (-half..=half).filter(|&k| k != 0).map(|k| k as f64).collect(),
            Direction::Forward => (1..=self.fdm_order as i64).map(|k| k as f64).collect(),
            Direction::Backward => (1..=self.fdm_order as i64).map(|k| -(k as f64)).collect(),
        }
    }

    /// Finite-difference weights: the first-order column of the inverse
    /// Vandermonde over the offsets.
    fn weights(offsets: &[f64]) -> Vec<f64> {
        let inv = inverse_vandermonde(offsets);
        (0..offsets.len()).map(|j| inv.at(1, j)).collect()
    }

    /// Estimates `f'(x)`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let offsets = self.offsets();
        let weights = Self::weights(&offsets);
        let abs_tol = pow(10.0, -self.abs_tolerance);
        let rel_tol = pow(10.0, -self.rel_tolerance);
        let max_iter = pow(10.0, self.max_iter_log) as u64;

        let mut h = self.initial_step;
        let mut previous: Option<f64> = None;
        let mut last_error = f64::INFINITY;
        for _ in 0..max_iter {
            let mut sum = 0.0;
            for (&s, &w) in offsets.iter().zip(weights.iter()) {
                sum += w * (self.function)(x + s * h);
            }
            let estimate = sum / h;
            if !estimate.is_finite() {
                // A sample fell outside the function's domain; a smaller step
                // may pull the stencil back inside.
                h /= self.step_factor;
                continue;
            }
            if let Some(p) = previous {
                let error = (estimate - p).abs();
                if error < abs_tol && error < rel_tol * estimate.abs() {
                    return estimate;
                }
                if error > last_error {
                    // Step shrank into rounding noise; the previous estimate
                    // was the better one.
                    return p;
                }
                last_error = error;
            }
            previous = Some(estimate);
            h /= self.step_factor;
        }
        previous.unwrap_or(f64::NAN)
    }
}
