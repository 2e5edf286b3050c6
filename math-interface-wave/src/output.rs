//! JSON export of sampled frames

use crate::animation::{AnimationConfig, Frame, FrameSampler};
use crate::derivation::InterfaceCoefficients;
use crate::error::Result;
use crate::solver::WaveParams;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Frames together with everything needed to plot them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSet {
    /// Physical parameters
    pub params: WaveParams,
    /// `B` and `C` for `params`
    pub coefficients: InterfaceCoefficients,
    /// Time step between frames
    pub dt: f64,
    /// Sample positions
    pub x: Vec<f64>,
    /// First sample with `x >= 0`, where the interface marker belongs
    pub interface_index: Option<usize>,
    /// Display range of the displacement axis
    pub y_limits: [f64; 2],
    /// Sampled frames
    pub frames: Vec<Frame>,
}

impl FrameSet {
    /// Bundle frames produced by a sampler
    pub fn new(
        sampler: &FrameSampler<'_>,
        coefficients: InterfaceCoefficients,
        frames: Vec<Frame>,
    ) -> Self {
        let config: &AnimationConfig = sampler.config();
        Self {
            params: config.params,
            coefficients,
            dt: config.dt,
            x: sampler.grid().positions().to_vec(),
            interface_index: sampler.grid().interface_index(),
            y_limits: config.y_limits,
            frames,
        }
    }

    /// Largest absolute displacement over all frames
    pub fn peak_displacement(&self) -> f64 {
        self.frames
            .iter()
            .flat_map(|frame| frame.displacement.iter())
            .fold(0.0, |acc: f64, y| acc.max(y.abs()))
    }

    /// Load a frame set from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Summary JSON without the per-frame data
pub fn create_output_json(frame_set: &FrameSet) -> serde_json::Value {
    serde_json::json!({
        "params": {
            "k1": frame_set.params.k1,
            "k2": frame_set.params.k2,
            "omega": frame_set.params.omega,
        },
        "coefficients": {
            "transmission": frame_set.coefficients.transmission,
            "reflection": frame_set.coefficients.reflection,
        },
        "grid": {
            "x_min": frame_set.x.first(),
            "x_max": frame_set.x.last(),
            "num_points": frame_set.x.len(),
            "interface_index": frame_set.interface_index,
        },
        "dt": frame_set.dt,
        "num_frames": frame_set.frames.len(),
        "peak_displacement": frame_set.peak_displacement(),
    })
}

/// Write the full frame set as pretty-printed JSON
pub fn save_frames_json<P: AsRef<Path>>(path: P, frame_set: &FrameSet) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(frame_set)?;
    fs::write(path, json)?;

    log::info!(
        "Wrote {} frames x {} positions to {}",
        frame_set.frames.len(),
        frame_set.x.len(),
        path.display()
    );

    Ok(())
}
