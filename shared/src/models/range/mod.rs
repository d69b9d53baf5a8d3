use super::point::Point;

use serde::{Deserialize, Serialize};

/// Rectangular region of the complex plane, `min` is the bottom-left
/// corner and `max` the top-right one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }
}
