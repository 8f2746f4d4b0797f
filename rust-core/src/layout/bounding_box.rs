// 2D bounding box module: Axis-aligned pixel rectangles for sheet cells and canvas regions

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the pixel canvas
///
/// Represents a rectangular region of the canvas defined by minimum and maximum corners.
/// Canvas coordinates grow right (x) and down (y), so `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// Minimum corner (top-left on the canvas)
    pub min: Vector2<f64>,
    /// Maximum corner (bottom-right on the canvas)
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// This function will panic in debug mode if min coordinates are greater than max coordinates
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y,
                     "Minimum coordinates must be less than or equal to maximum coordinates");
        Self { min, max }
    }

    /// Create a bounding box from its top-left corner and a pixel size
    pub fn from_origin_size(origin: Vector2<f64>, width: f64, height: f64) -> Self {
        Self::new(origin, origin + Vector2::new(width, height))
    }

    /// Point inside the box, edges included (a center on a cell edge is visible)
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// `other` lies entirely within this box
    pub fn contains_box(&self, other: &BoundingBox2D) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x &&
        self.min.y <= other.min.y && self.max.y >= other.max.y
    }

    /// Check if the interiors of two boxes overlap
    ///
    /// Boxes that only share an edge do not overlap, which is how adjacent
    /// sheet cells sit next to each other.
    pub fn overlaps(&self, other: &BoundingBox2D) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y
    }

    /// Clip this box to another one
    ///
    /// # Returns
    /// * `Some(BoundingBox2D)` for the shared region
    /// * `None` if the interiors do not overlap
    pub fn clip_to(&self, other: &BoundingBox2D) -> Option<BoundingBox2D> {
        if !self.overlaps(other) {
            return None;
        }
        let min = Vector2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Vector2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        Some(BoundingBox2D { min, max })
    }

    /// Move the box by an offset
    pub fn translate(&self, offset: Vector2<f64>) -> BoundingBox2D {
        BoundingBox2D {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}
