use complex_rs::complex::Complex;

use shared::errors::RenderResult;
use shared::models::{axis::CoordinateAxis, range::Range};

/// Iterates z <- z^2 + c from z = 0 until |z| > 2 or the cap is hit.
/// Returns the iteration count in [1, max_iterations]; points inside
/// the set exhaust the cap.
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::zero();
    let mut n = 0;
    loop {
        n += 1;
        z = z * z + c;
        if z.arg_sq() > 4.0 || n >= max_iterations {
            return n;
        }
    }
}

/// Buckets an iteration count into a grayscale intensity. With the cap
/// a multiple of 256 the buckets are exact; otherwise the result is
/// clamped to 255.
pub fn iterations_to_pixel(iterations: u32, max_iterations: u32) -> u8 {
    let bucket_size = (max_iterations / 256).max(1);
    ((iterations - 1) / bucket_size).min(255) as u8
}

/// Evaluates one tile: row-major intensities for an `nx` x `ny` grid of
/// samples spanning `range`, both endpoints included on each axis.
pub fn render_tile(range: &Range, nx: usize, ny: usize, max_iterations: u32) -> RenderResult<Vec<u8>> {
    let x_axis = CoordinateAxis::new(range.min.x, range.max.x, nx)?;
    let y_axis = CoordinateAxis::new(range.min.y, range.max.y, ny)?;

    let mut values = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let c = Complex::new(x_axis[i], y_axis[j]);
            values.push(iterations_to_pixel(escape_time(c, max_iterations), max_iterations));
        }
    }
    Ok(values)
}
