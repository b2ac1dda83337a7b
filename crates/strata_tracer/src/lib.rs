//! Strata Tracer - Snell's law rays through horizontal layers
//!
//! Traces rays layer by layer through a [`LayerStack`], bending them at
//! every interface and stopping them on total internal reflection.
//! Batches can run sequentially or on rayon with identical output, and
//! the traced paths can be plotted to a PNG section.

mod ray;
mod snell;
mod tracer;
mod flat;
mod plot;

pub use ray::{RayStatus, RayTrace};
pub use snell::{critical_angle, refract, Refraction};
pub use tracer::{trace, trace_parallel, trace_ray};
pub use flat::{flatten, trace_flat, FlatTrace};
pub use plot::{render_plot, save_plot, PlotConfig, PlotError, PlotResult};

/// Re-export the model and math types the tracer API is written in
pub use strata_core::{LayerStack, TraceError, TraceResult};
pub use strata_math::Point;
