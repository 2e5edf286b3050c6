//! Closed-form wave field at a material interface
//!
//! This crate derives and evaluates the steady-state displacement of a 1D
//! wave incident on a boundary between two media at `x = 0`:
//!
//! ```text
//! y(x, t) = cos(k1 x - ω t) + C cos(k1 x + ω t)    x < 0   (incident + reflected)
//! y(x, t) = B cos(k2 x - ω t)                       x >= 0  (transmitted)
//! ```
//!
//! The amplitudes `B` and `C` follow from continuity of displacement and
//! slope at the interface and are solved once, when the solver is built.
//!
//! # Features
//!
//! - **Derivation**: boundary system assembly and Cramer solve over
//!   polynomials in `(k1, k2)`
//! - **Evaluation**: scalar, slice, array and `ndarray` inputs; parallel
//!   evaluation for large grids
//! - **Animation**: headless frame sampling with JSON configuration and
//!   export
//!
//! # Example
//!
//! ```rust
//! use math_audio_interface_wave::{WaveParams, WaveSolver};
//! use ndarray::Array1;
//!
//! let solver = WaveSolver::new().unwrap();
//! let params = WaveParams::default();
//!
//! let x = Array1::linspace(-5.0, 5.0, 301);
//! let y = solver.evaluate_params(&x, 0.0, &params);
//! assert_eq!(y.len(), 301);
//!
//! // Equal wavenumbers: no reflection, unit transmission
//! let c = solver.coefficients(1.5, 1.5);
//! assert_eq!(c.transmission, 1.0);
//! assert_eq!(c.reflection, 0.0);
//! ```

pub mod animation;
pub mod ansatz;
pub mod derivation;
pub mod error;
pub mod output;
pub mod parallel;
pub mod solver;

// Re-export main types at crate root
pub use animation::{AnimationConfig, Frame, FrameSampler, GridConfig, PositionGrid};
pub use derivation::InterfaceCoefficients;
pub use error::{InterfaceWaveError, Result};
pub use output::{FrameSet, create_output_json, save_frames_json};
pub use solver::{FieldInput, WaveParams, WaveSolver};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
