//! Application state.

use bondcalc_math::solvers::SolverConfig;
use bondcalc_math::MathResult;

use crate::config::ServerConfig;

/// Application state shared across handlers.
///
/// Holds only immutable settings; each request computes from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    /// Solver configuration used for YTM.
    pub solver: SolverConfig,
}

impl AppState {
    /// Create state with the default solver settings.
    pub fn new() -> Self {
        Self {
            solver: SolverConfig::default(),
        }
    }

    /// Create state from server configuration, rejecting bad solver settings.
    pub fn from_config(config: &ServerConfig) -> MathResult<Self> {
        let solver = SolverConfig::try_new(config.solver.tolerance, config.solver.max_iterations)?;
        Ok(Self { solver })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = ServerConfig::default();
        assert_eq!(AppState::from_config(&config).unwrap(), AppState::new());

        config.solver.max_iterations = 0;
        assert!(AppState::from_config(&config).is_err());
    }
}
