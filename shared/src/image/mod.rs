use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;

use crate::errors::RenderResult;
use crate::models::tile::TileResult;

pub const MAX_PIXEL_VALUE: u8 = 255;

/// Flat row-major accumulator for the whole image, owned by the render
/// driver. Zero-initialized, every pixel is written exactly once over a
/// full scan, then the buffer is serialized and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.data[x + y * self.width]
    }

    /// Writes one tile's values at its global position. Local index
    /// `i + j*dim` lands at `(col + i) + (row + j) * width`; callers
    /// pass `col` already offset by the server's slot in the cycle.
    pub fn merge_tile(&mut self, row: usize, col: usize, dim: usize, tile: &TileResult) {
        for j in 0..dim {
            for i in 0..dim {
                self.data[(col + i) + (row + j) * self.width] = tile.values[i + j * dim];
            }
        }
    }

    /// Renders the buffer as a plain-text PGM raster: `P2`, the
    /// dimensions, the maximum intensity, then one line per pixel row.
    pub fn to_pgm(&self) -> String {
        let mut out = String::new();
        out.push_str("P2\n");
        out.push_str(&format!("{} {}\n", self.width, self.height));
        out.push_str(&format!("{}\n", MAX_PIXEL_VALUE));
        for row in 0..self.height {
            let line = self.data[row * self.width..(row + 1) * self.width]
                .iter()
                .map(|pixel| pixel.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Writes the PGM under `dir` with a timestamped name so repeated
    /// runs never clobber each other. Returns the path written.
    pub fn write_pgm(&self, dir: &Path) -> RenderResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%d-%m-%y_%H%M");
        let path = dir.join(format!("mandelbrot_{}x{}_{}.pgm", self.width, self.height, stamp));
        fs::write(&path, self.to_pgm())?;
        info!("Image written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_places_values_at_row_major_offsets() {
        let mut buffer = PixelBuffer::new(4, 4);
        let tile = TileResult::new(vec![1, 2, 3, 4]);

        buffer.merge_tile(0, 2, 2, &tile);

        assert_eq!(buffer.pixel(2, 0), 1);
        assert_eq!(buffer.pixel(3, 0), 2);
        assert_eq!(buffer.pixel(2, 1), 3);
        assert_eq!(buffer.pixel(3, 1), 4);

        let touched = [(2, 0), (3, 0), (2, 1), (3, 1)];
        for y in 0..4 {
            for x in 0..4 {
                if !touched.contains(&(x, y)) {
                    assert_eq!(buffer.pixel(x, y), 0, "pixel ({}, {}) was clobbered", x, y);
                }
            }
        }
    }

    #[test]
    fn adjacent_merges_tile_a_full_band() {
        let mut buffer = PixelBuffer::new(4, 2);
        buffer.merge_tile(0, 0, 2, &TileResult::new(vec![1, 1, 1, 1]));
        buffer.merge_tile(0, 2, 2, &TileResult::new(vec![2, 2, 2, 2]));

        for y in 0..2 {
            assert_eq!(buffer.pixel(0, y), 1);
            assert_eq!(buffer.pixel(1, y), 1);
            assert_eq!(buffer.pixel(2, y), 2);
            assert_eq!(buffer.pixel(3, y), 2);
        }
    }

    #[test]
    fn zero_buffer_serializes_to_pgm() {
        let buffer = PixelBuffer::new(4, 4);
        assert_eq!(
            buffer.to_pgm(),
            "P2\n4 4\n255\n0 0 0 0\n0 0 0 0\n0 0 0 0\n0 0 0 0\n"
        );
    }

    #[test]
    fn pgm_rows_follow_buffer_rows() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.merge_tile(0, 0, 2, &TileResult::new(vec![10, 20, 30, 40]));
        assert_eq!(buffer.to_pgm(), "P2\n2 2\n255\n10 20\n30 40\n");
    }
}
