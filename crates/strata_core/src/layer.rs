//! Horizontal layered-medium description.
//!
//! A [`LayerStack`] is an ordered list of flat slabs, each with a signed
//! thickness and a constant propagation velocity. Layer 0 holds the ray
//! origin; rays travel toward increasing layer indices.

use crate::error::{TraceError, TraceResult};

/// A single horizontal slab of constant velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Signed vertical extent. Negative values denote depth below the origin.
    pub thickness: f64,

    /// Propagation speed inside the layer (always > 0)
    pub velocity: f64,
}

impl Layer {
    /// Create a validated layer.
    pub fn new(thickness: f64, velocity: f64) -> TraceResult<Self> {
        if !thickness.is_finite() {
            return Err(TraceError::invalid(format!(
                "layer thickness must be finite, got {}",
                thickness
            )));
        }
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(TraceError::invalid(format!(
                "layer velocity must be finite and strictly positive, got {}",
                velocity
            )));
        }
        Ok(Self { thickness, velocity })
    }
}

/// An ordered, non-empty stack of layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Build a stack from parallel thickness and velocity slices.
    ///
    /// Fails with `InvalidInput` if the slices differ in length, are empty,
    /// or describe a non-finite thickness or non-positive velocity.
    pub fn new(thicknesses: &[f64], velocities: &[f64]) -> TraceResult<Self> {
        if thicknesses.len() != velocities.len() {
            return Err(TraceError::invalid(format!(
                "layer stack has {} thicknesses but {} velocities",
                thicknesses.len(),
                velocities.len()
            )));
        }

        let layers = thicknesses
            .iter()
            .zip(velocities)
            .enumerate()
            .map(|(i, (&thickness, &velocity))| {
                Layer::new(thickness, velocity).map_err(|TraceError::InvalidInput(msg)| {
                    TraceError::invalid(format!("layer {}: {}", i, msg))
                })
            })
            .collect::<TraceResult<Vec<_>>>()?;

        Self::from_layers(layers)
    }

    /// Build a stack from already-constructed layers.
    pub fn from_layers(layers: Vec<Layer>) -> TraceResult<Self> {
        if layers.is_empty() {
            return Err(TraceError::invalid("layer stack must contain at least one layer"));
        }
        Ok(Self { layers })
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// All layers, top to bottom.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The layer at `index`, if any.
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Number of interior interfaces a ray can cross.
    pub fn boundary_count(&self) -> usize {
        self.layers.len() - 1
    }

    /// Vertical positions of the top plane and the base of every layer.
    ///
    /// Starts at `top` and accumulates the signed thicknesses, so the result
    /// has `len() + 1` entries.
    pub fn boundary_depths(&self, top: f64) -> Vec<f64> {
        let mut depths = Vec::with_capacity(self.layers.len() + 1);
        depths.push(top);
        let mut depth = top;
        for layer in &self.layers {
            depth += layer.thickness;
            depths.push(depth);
        }
        depths
    }
}
