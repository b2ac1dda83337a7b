//! Strata Core - layered-medium model and survey loading.
//!
//! This crate provides:
//!
//! - **Model types**: `Layer`, `LayerStack`
//! - **Surveys**: JSON descriptions of a tracing run (`Survey`, `load_survey`)
//! - **Errors**: `TraceError::InvalidInput`, raised before any tracing work
//!
//! # Example
//!
//! ```ignore
//! use strata_core::load_survey;
//!
//! let survey = load_survey("survey.json")?;
//! let stack = survey.layer_stack()?;
//! println!("{} layers, {} launch angles", stack.len(), survey.launch_angles().len());
//! ```

pub mod error;
pub mod layer;
pub mod survey;

// Re-export commonly used types
pub use error::{TraceError, TraceResult};
pub use layer::{Layer, LayerStack};
pub use survey::{
    load_survey, load_survey_from_str, AngleSweep, PlotSettings, Survey, SurveyError, SurveyResult,
};
