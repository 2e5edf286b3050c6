//! Error types for interface wave derivation and sampling.
//!
//! Construction of a [`WaveSolver`](crate::WaveSolver) is the only fallible
//! step of the core; evaluation never fails. The remaining variants cover
//! the animation configuration and JSON export layers.

use thiserror::Error;

/// Errors that can occur while deriving or sampling an interface wave.
#[derive(Debug, Error)]
pub enum InterfaceWaveError {
    /// The continuity conditions at the interface have no unique solution.
    #[error("unsolvable boundary conditions: {reason}")]
    UnsolvableBoundaryConditions {
        /// Why the boundary system could not be solved
        reason: String,
    },

    /// Position grid is degenerate.
    #[error("invalid position grid: {reason}")]
    InvalidGrid {
        /// Why the grid was rejected
        reason: String,
    },

    /// Animation configuration is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Why the configuration was rejected
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for interface wave operations.
pub type Result<T> = std::result::Result<T, InterfaceWaveError>;

impl InterfaceWaveError {
    pub(crate) fn unsolvable(reason: impl Into<String>) -> Self {
        InterfaceWaveError::UnsolvableBoundaryConditions {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        InterfaceWaveError::InvalidGrid {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        InterfaceWaveError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the boundary system could not be solved.
    pub fn is_derivation_error(&self) -> bool {
        matches!(self, InterfaceWaveError::UnsolvableBoundaryConditions { .. })
    }

    /// Returns `true` if this is a configuration or grid error.
    ///
    /// This includes `InvalidGrid` and `InvalidConfig` variants.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            InterfaceWaveError::InvalidGrid { .. } | InterfaceWaveError::InvalidConfig { .. }
        )
    }

    /// Returns `true` if this is a file or serialization error.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            InterfaceWaveError::Io(_) | InterfaceWaveError::Json(_)
        )
    }
}
