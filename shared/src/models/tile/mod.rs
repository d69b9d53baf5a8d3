use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{RenderError, RenderResult};

use super::{range::Range, resolution::Resolution};

/// One tile's worth of work, bound to the server that will evaluate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRequest {
    pub server: String,
    pub range: Range,
    pub resolution: Resolution,
    pub max_iterations: u32,
}

impl TileRequest {
    pub fn new(server: String, range: Range, resolution: Resolution, max_iterations: u32) -> Self {
        Self {
            server,
            range,
            resolution,
            max_iterations,
        }
    }

    pub fn url(&self) -> String {
        format!(
            "http://{}/mandelbrot/{}/{}/{}/{}/{}/{}/{}",
            self.server,
            self.range.min.x,
            self.range.min.y,
            self.range.max.x,
            self.range.max.y,
            self.resolution.nx,
            self.resolution.ny,
            self.max_iterations
        )
    }
}

/// Decoded per-tile intensities in row-major local order, exactly
/// `dim * dim` of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileResult {
    pub values: Vec<u8>,
}

impl TileResult {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values }
    }

    /// Decodes the server's JSON object whose keys are decimal-string
    /// tile-local indices and whose values are intensities in [0, 255].
    /// Anything else is a protocol violation that aborts the run.
    pub fn decode(body: &str, dim: usize, url: &str) -> RenderResult<Self> {
        let map: HashMap<String, serde_json::Value> =
            serde_json::from_str(body).map_err(|e| RenderError::Protocol {
                url: url.to_string(),
                reason: format!("body is not a JSON object: {}", e),
            })?;

        let expected = dim * dim;
        if map.len() != expected {
            return Err(RenderError::Protocol {
                url: url.to_string(),
                reason: format!("expected {} entries, got {}", expected, map.len()),
            });
        }

        let mut values = Vec::with_capacity(expected);
        for index in 0..expected {
            let value = map.get(&index.to_string()).ok_or_else(|| RenderError::Protocol {
                url: url.to_string(),
                reason: format!("missing tile index {}", index),
            })?;
            let intensity =
                value
                    .as_u64()
                    .filter(|v| *v <= 255)
                    .ok_or_else(|| RenderError::Protocol {
                        url: url.to_string(),
                        reason: format!("index {} is not an intensity in [0, 255]: {}", index, value),
                    })?;
            values.push(intensity as u8);
        }

        Ok(Self { values })
    }
}
