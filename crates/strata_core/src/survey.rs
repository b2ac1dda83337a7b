//! Survey descriptions: everything one tracing run needs.
//!
//! A survey bundles the layer stack, ray origins, a launch-angle sweep in
//! degrees and plot settings. Surveys are read from JSON; every field except
//! the stack has a default.
//!
//! ```json
//! {
//!   "thicknesses": [-500, -300],
//!   "velocities": [200, 400],
//!   "angles": { "start": -5, "step": -5, "count": 3 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_math::{degrees_to_radians, Point};
use thiserror::Error;

use crate::error::TraceError;
use crate::layer::LayerStack;

/// Errors that can occur while loading a survey.
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse survey: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid survey: {0}")]
    Invalid(#[from] TraceError),
}

pub type SurveyResult<T> = Result<T, SurveyError>;

/// Launch angles in degrees, either listed or generated as a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleSweep {
    /// Explicit list of launch angles
    List { list: Vec<f64> },

    /// `count` angles starting at `start`, `step` apart
    Sweep { start: f64, step: f64, count: usize },
}

impl Default for AngleSweep {
    fn default() -> Self {
        AngleSweep::Sweep {
            start: -5.0,
            step: -5.0,
            count: 5,
        }
    }
}

impl AngleSweep {
    /// Launch angles in degrees, in sweep order.
    pub fn degrees(&self) -> Vec<f64> {
        match self {
            AngleSweep::List { list } => list.clone(),
            AngleSweep::Sweep { start, step, count } => {
                (0..*count).map(|i| start + step * i as f64).collect()
            }
        }
    }

    /// Launch angles converted to radians.
    pub fn radians(&self) -> Vec<f64> {
        self.degrees().into_iter().map(degrees_to_radians).collect()
    }
}

/// Output image settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// PNG output path
    pub output: String,

    /// Seed for the boundary colour generator
    pub seed: u64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            output: "refraction.png".to_string(),
            seed: 1,
        }
    }
}

/// A complete tracing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Signed layer thicknesses, top to bottom
    pub thicknesses: Vec<f64>,

    /// Layer velocities, top to bottom
    pub velocities: Vec<f64>,

    /// Ray origins as `[x, y]` pairs
    #[serde(default = "default_origins")]
    pub origins: Vec<[f64; 2]>,

    /// Launch angles in degrees
    #[serde(default)]
    pub angles: AngleSweep,

    #[serde(default)]
    pub plot: PlotSettings,
}

fn default_origins() -> Vec<[f64; 2]> {
    vec![[0.0, 0.0]]
}

impl Default for Survey {
    /// The seven-layer demonstration survey.
    fn default() -> Self {
        Self {
            thicknesses: vec![-500.0, -300.0, -500.0, -200.0, -500.0, -1000.0, -500.0],
            velocities: vec![200.0, 400.0, 500.0, 550.0, 300.0, 350.0, 100.0],
            origins: default_origins(),
            angles: AngleSweep::default(),
            plot: PlotSettings::default(),
        }
    }
}

impl Survey {
    /// Build the validated layer stack.
    pub fn layer_stack(&self) -> SurveyResult<LayerStack> {
        Ok(LayerStack::new(&self.thicknesses, &self.velocities)?)
    }

    /// Ray origins as points.
    pub fn origin_points(&self) -> Vec<Point> {
        self.origins.iter().map(|&[x, y]| Point::new(x, y)).collect()
    }

    /// Launch angles in radians.
    pub fn launch_angles(&self) -> Vec<f64> {
        self.angles.radians()
    }
}

/// Load a survey from a JSON file.
pub fn load_survey<P: AsRef<Path>>(path: P) -> SurveyResult<Survey> {
    let path = path.as_ref();
    log::info!("Loading survey: {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_survey_from_str(&contents)
}

/// Parse a survey from a JSON string and validate its layer stack.
pub fn load_survey_from_str(json: &str) -> SurveyResult<Survey> {
    let survey: Survey = serde_json::from_str(json)?;
    let stack = survey.layer_stack()?;
    log::debug!(
        "Survey has {} layers, {} origins, {} launch angles",
        stack.len(),
        survey.origins.len(),
        survey.angles.degrees().len()
    );
    Ok(survey)
}
