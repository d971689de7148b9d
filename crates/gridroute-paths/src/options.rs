use std::f64::consts::SQRT_2;
use std::fmt;

use crate::heuristic::Heuristic;

/// Default cap on node expansions per search.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Search configuration.
///
/// The walkability predicate is not part of the options; it is passed next
/// to them so that closures over caller state need no boxing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchOptions {
    /// Allow 8-way movement. Default: `false`.
    pub allow_diagonal: bool,
    /// Remaining-cost estimate. Default: Manhattan.
    pub heuristic: Heuristic,
    /// Hard cap on node expansions. Default: 1000.
    pub max_iterations: usize,
    /// Cost of one diagonal step; cardinal steps cost 1. Default: √2.
    pub diagonal_cost: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            allow_diagonal: false,
            heuristic: Heuristic::Manhattan,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            diagonal_cost: SQRT_2,
        }
    }
}

impl SearchOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for diagonal movement.
    pub fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    /// Builder-style setter for the heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Builder-style setter for the expansion cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder-style setter for the diagonal step cost.
    pub fn with_diagonal_cost(mut self, cost: f64) -> Self {
        self.diagonal_cost = cost;
        self
    }

    /// Check values the search relies on.
    ///
    /// The search itself does not call this; a non-positive or non-finite
    /// diagonal cost makes its results meaningless.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.diagonal_cost.is_finite() || self.diagonal_cost <= 0.0 {
            return Err(OptionsError::InvalidDiagonalCost(self.diagonal_cost));
        }
        Ok(())
    }
}

/// Invalid [`SearchOptions`] value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionsError {
    /// `diagonal_cost` must be finite and strictly positive.
    InvalidDiagonalCost(f64),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDiagonalCost(c) => {
                write!(f, "diagonal cost must be finite and positive, got {c}")
            }
        }
    }
}

impl std::error::Error for OptionsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert!(!o.allow_diagonal);
        assert_eq!(o.heuristic, Heuristic::Manhattan);
        assert_eq!(o.max_iterations, 1000);
        assert_eq!(o.diagonal_cost, SQRT_2);
        assert!(o.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let o = SearchOptions::new()
            .with_diagonal(true)
            .with_heuristic(Heuristic::Octile)
            .with_max_iterations(5)
            .with_diagonal_cost(1.5);
        assert!(o.allow_diagonal);
        assert_eq!(o.heuristic, Heuristic::Octile);
        assert_eq!(o.max_iterations, 5);
        assert_eq!(o.diagonal_cost, 1.5);
    }

    #[test]
    fn validate_rejects_bad_diagonal_costs() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let o = SearchOptions::new().with_diagonal_cost(bad);
            assert!(matches!(
                o.validate(),
                Err(OptionsError::InvalidDiagonalCost(_))
            ));
        }
    }
}
