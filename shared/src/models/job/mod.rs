use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, RenderResult};

use super::{range::Range, resolution::Resolution};

/// Immutable run configuration: domain, resolution, tiling, iteration
/// cap, server pool and output directory. Validated once before any
/// dispatch happens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderJob {
    pub range: Range,
    pub resolution: Resolution,
    pub tile_dim: usize,
    pub max_iterations: u32,
    pub servers: Vec<String>,
    pub output_dir: PathBuf,
}

impl RenderJob {
    pub fn new(
        range: Range,
        resolution: Resolution,
        tile_dim: usize,
        max_iterations: u32,
        servers: Vec<String>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            range,
            resolution,
            tile_dim,
            max_iterations,
            servers,
            output_dir,
        }
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.range.min.x >= self.range.max.x || self.range.min.y >= self.range.max.y {
            return Err(ConfigError::InvalidBounds.into());
        }
        if self.resolution.nx < 2 || self.resolution.ny < 2 {
            return Err(ConfigError::InvalidResolution.into());
        }
        if self.tile_dim < 2 {
            return Err(ConfigError::InvalidTileDim.into());
        }
        if self.resolution.nx % self.tile_dim != 0 || self.resolution.ny % self.tile_dim != 0 {
            return Err(ConfigError::UnevenTiling {
                dim: self.tile_dim,
                nx: self.resolution.nx,
                ny: self.resolution.ny,
            }
            .into());
        }
        if self.servers.is_empty() {
            return Err(ConfigError::NoServers.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RenderError;
    use crate::models::point::Point;

    fn job() -> RenderJob {
        RenderJob::new(
            Range::new(Point::new(-1.5, -1.0), Point::new(0.5, 1.0)),
            Resolution::new(600, 600),
            4,
            1024,
            vec!["localhost:3000".to_string()],
            PathBuf::from("images"),
        )
    }

    fn config_error(job: &RenderJob) -> ConfigError {
        match job.validate() {
            Err(RenderError::Config(e)) => e,
            other => panic!("expected a configuration error, got {:?}", other),
        }
    }

    #[test]
    fn default_shape_is_valid() {
        assert!(job().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let mut job = job();
        job.range.max.x = -2.0;
        assert_eq!(config_error(&job), ConfigError::InvalidBounds);
    }

    #[test]
    fn rejects_tiny_resolution() {
        let mut job = job();
        job.resolution.ny = 1;
        assert_eq!(config_error(&job), ConfigError::InvalidResolution);
    }

    #[test]
    fn rejects_tile_dim_not_dividing_resolution() {
        let mut job = job();
        job.tile_dim = 7;
        assert_eq!(
            config_error(&job),
            ConfigError::UnevenTiling {
                dim: 7,
                nx: 600,
                ny: 600
            }
        );
    }

    #[test]
    fn rejects_single_pixel_tiles() {
        let mut job = job();
        job.tile_dim = 1;
        assert_eq!(config_error(&job), ConfigError::InvalidTileDim);
    }

    #[test]
    fn rejects_empty_server_list() {
        let mut job = job();
        job.servers.clear();
        assert_eq!(config_error(&job), ConfigError::NoServers);
    }
}
