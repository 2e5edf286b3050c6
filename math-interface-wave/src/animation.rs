//! Headless frame sampling for animating the interface wave
//!
//! A renderer typically keeps a fixed position grid and asks for the
//! displacement at `t = n dt` for successive frames `n`. This module
//! provides that sequence as data; it owns no clock and never sleeps.
//!
//! Configuration is read from JSON:
//!
//! ```json
//! {
//!   "params": { "k1": 1.0, "k2": 2.1, "omega": 4.0 },
//!   "grid": { "x_min": -5.0, "x_max": 5.0, "num_points": 301 },
//!   "dt": 0.01,
//!   "num_frames": 100,
//!   "y_limits": [-4.0, 4.0]
//! }
//! ```
//!
//! Every field is optional.

use crate::error::{InterfaceWaveError, Result};
use crate::parallel::parallel_map_indexed;
use crate::solver::{WaveParams, WaveSolver};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Position grid configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Left end of the grid (inclusive)
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    /// Right end of the grid (inclusive)
    #[serde(default = "default_x_max")]
    pub x_max: f64,
    /// Number of samples
    #[serde(default = "default_num_points")]
    pub num_points: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_min: default_x_min(),
            x_max: default_x_max(),
            num_points: default_num_points(),
        }
    }
}

fn default_x_min() -> f64 {
    -5.0
}

fn default_x_max() -> f64 {
    5.0
}

fn default_num_points() -> usize {
    301
}

/// Complete animation configuration loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Physical parameters
    #[serde(default)]
    pub params: WaveParams,
    /// Position grid
    #[serde(default)]
    pub grid: GridConfig,
    /// Time step between frames (s)
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Number of frames to sample
    #[serde(default = "default_num_frames")]
    pub num_frames: usize,
    /// Display range of the displacement axis
    #[serde(default = "default_y_limits")]
    pub y_limits: [f64; 2],
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            params: WaveParams::default(),
            grid: GridConfig::default(),
            dt: default_dt(),
            num_frames: default_num_frames(),
            y_limits: default_y_limits(),
        }
    }
}

fn default_dt() -> f64 {
    0.010
}

fn default_num_frames() -> usize {
    100
}

fn default_y_limits() -> [f64; 2] {
    [-4.0, 4.0]
}

impl AnimationConfig {
    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AnimationConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check parameters, time step and grid, returning the checked grid
    pub fn validate(&self) -> Result<PositionGrid> {
        let WaveParams { k1, k2, omega } = self.params;
        if !(k1.is_finite() && k2.is_finite() && omega.is_finite()) {
            return Err(InterfaceWaveError::invalid_config(format!(
                "wave parameters must be finite (k1={}, k2={}, omega={})",
                k1, k2, omega
            )));
        }
        if omega == 0.0 {
            return Err(InterfaceWaveError::invalid_config(
                "omega must be non-zero for a travelling wave",
            ));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(InterfaceWaveError::invalid_config(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        let [y_lo, y_hi] = self.y_limits;
        if !(y_lo.is_finite() && y_hi.is_finite()) || y_lo >= y_hi {
            return Err(InterfaceWaveError::invalid_config(format!(
                "y_limits must be increasing, got [{}, {}]",
                y_lo, y_hi
            )));
        }
        self.to_grid()
    }

    /// Build the position grid
    pub fn to_grid(&self) -> Result<PositionGrid> {
        PositionGrid::linspace(self.grid.x_min, self.grid.x_max, self.grid.num_points)
    }

    /// Animation time of a frame
    #[inline]
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }
}

/// Evenly spaced sample positions, end points included
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGrid {
    positions: Array1<f64>,
}

impl PositionGrid {
    /// `num_points` samples from `x_min` to `x_max` inclusive
    pub fn linspace(x_min: f64, x_max: f64, num_points: usize) -> Result<Self> {
        if num_points < 2 {
            return Err(InterfaceWaveError::invalid_grid(format!(
                "need at least 2 points, got {}",
                num_points
            )));
        }
        if !(x_min.is_finite() && x_max.is_finite()) {
            return Err(InterfaceWaveError::invalid_grid(format!(
                "bounds must be finite, got [{}, {}]",
                x_min, x_max
            )));
        }
        if x_min >= x_max {
            return Err(InterfaceWaveError::invalid_grid(format!(
                "x_min ({}) must be < x_max ({})",
                x_min, x_max
            )));
        }

        Ok(Self {
            positions: Array1::linspace(x_min, x_max, num_points),
        })
    }

    /// Sample positions
    pub fn positions(&self) -> &Array1<f64> {
        &self.positions
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false` for a validated grid
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Grid spacing
    pub fn spacing(&self) -> f64 {
        self.positions[1] - self.positions[0]
    }

    /// Index of the first sample on the transmitted side (`x >= 0`)
    pub fn interface_index(&self) -> Option<usize> {
        self.positions.iter().position(|&x| x >= 0.0)
    }
}

/// Displacement snapshot at one animation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame counter
    pub index: usize,
    /// Animation time `index * dt`
    pub time: f64,
    /// Displacement at every grid position
    pub displacement: Array1<f64>,
}

/// Produces successive frames of the interface wave
///
/// Borrows the solver; any number of samplers can share one solver.
#[derive(Debug, Clone)]
pub struct FrameSampler<'a> {
    solver: &'a WaveSolver,
    config: AnimationConfig,
    grid: PositionGrid,
    next: usize,
}

impl<'a> FrameSampler<'a> {
    /// Validate the configuration and prepare the grid
    pub fn new(solver: &'a WaveSolver, config: AnimationConfig) -> Result<Self> {
        let grid = config.validate()?;
        Ok(Self {
            solver,
            config,
            grid,
            next: 0,
        })
    }

    /// Sampling configuration
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Sample positions
    pub fn grid(&self) -> &PositionGrid {
        &self.grid
    }

    /// Frame at an arbitrary index
    pub fn frame(&self, index: usize) -> Frame {
        let time = self.config.time_at(index);
        Frame {
            index,
            time,
            displacement: self
                .solver
                .evaluate_params(self.grid.positions(), time, &self.config.params),
        }
    }

    /// All configured frames, computed in parallel
    pub fn sample_all(&self) -> Vec<Frame> {
        parallel_map_indexed(self.config.num_frames, |index| self.frame(index))
    }
}

impl Iterator for FrameSampler<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next >= self.config.num_frames {
            return None;
        }
        let frame = self.frame(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.num_frames.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSampler<'_> {}
