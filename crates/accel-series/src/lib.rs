//! Accelerometer Time Series
//!
//! Provides the core data model shared by every pipeline stage: one sample
//! per sampling instant across the X/Y/Z axes, stored column-major.

mod series;

pub use series::Series;

use serde::{Deserialize, Serialize};

/// One sampling instant across all three axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Sample {
    /// Create a sample from per-axis values
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether all three axes read exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Accelerometer axis selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    X,
    Y,
    Z,
}

impl Channel {
    /// All channels in column order
    pub const ALL: [Channel; 3] = [Channel::X, Channel::Y, Channel::Z];

    /// Column label as it appears in recording headers
    pub fn label(&self) -> &'static str {
        match self {
            Channel::X => "X",
            Channel::Y => "Y",
            Channel::Z => "Z",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
