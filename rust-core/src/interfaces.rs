// Definitions that are used throughout all modules

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Orientation of the hexagons on the canvas.
///
/// `PointyTop` hexagons have two vertical faces, so their face-to-face width
/// (and the primary lattice pitch) runs along the canvas x axis. `FlatTop`
/// hexagons are the same lattice turned a quarter turn: width runs along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    PointyTop,
    FlatTop,
}

// Enumeration to track the lattice axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Face-to-face direction, center spacing `2·apothem`.
    Primary,
    /// Row direction, center spacing `apothem·√3`.
    Secondary,
}

impl Orientation {
    /// Map a (primary, secondary) pair from the lattice frame to canvas (x, y).
    pub fn to_canvas(self, primary: f64, secondary: f64) -> Vector2<f64> {
        match self {
            Orientation::PointyTop => Vector2::new(primary, secondary),
            Orientation::FlatTop => Vector2::new(secondary, primary),
        }
    }

    /// Map a canvas (x, y) pair back to the lattice frame (primary, secondary).
    pub fn to_lattice<T: Copy>(self, x: T, y: T) -> (T, T) {
        match self {
            Orientation::PointyTop => (x, y),
            Orientation::FlatTop => (y, x),
        }
    }

    /// Canvas axis carrying the hexagon width, as a label.
    pub fn width_axis_name(self) -> &'static str {
        match self {
            Orientation::PointyTop => "x",
            Orientation::FlatTop => "y",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::PointyTop => write!(f, "pointy-top"),
            Orientation::FlatTop => write!(f, "flat-top"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pointy-top" | "pointy" | "horizontal" => Ok(Orientation::PointyTop),
            "flat-top" | "flat" | "vertical" => Ok(Orientation::FlatTop),
            other => Err(format!(
                "unknown orientation '{}', expected pointy-top or flat-top",
                other
            )),
        }
    }
}
