use crate::errors::{ConfigError, RenderResult};

/// Ordered lookup table of evenly spaced sample coordinates along one
/// image axis, both endpoints included. Built once per run and indexed
/// by pixel row or column during scanning, never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAxis {
    values: Vec<f64>,
}

impl CoordinateAxis {
    pub fn new(min: f64, max: f64, count: usize) -> RenderResult<Self> {
        if count < 2 {
            return Err(ConfigError::InvalidResolution.into());
        }
        if min >= max {
            return Err(ConfigError::InvalidBounds.into());
        }

        let delta = (max - min) / (count - 1) as f64;
        let mut values: Vec<f64> = (0..count).map(|i| min + i as f64 * delta).collect();
        // Pin the far endpoint, accumulated rounding must not leak into
        // the last tile's bounds.
        values[count - 1] = max;

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::ops::Index<usize> for CoordinateAxis {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}
