use std::path::PathBuf;

use clap::Parser;

/// 🎨 Render Command
///
/// Configure the domain, resolution, tiling and server pool for one
/// render run.
#[derive(Parser, Debug)]
#[command(name = "render", about = "🎨 Render the Mandelbrot set to a PGM image.", long_about = None)]
pub struct RenderCommand {
    /// ⬅️ Left edge of the sampled domain
    #[arg(long, default_value_t = -1.5, allow_negative_numbers = true)]
    pub x_min: f64,

    /// ⬇️ Bottom edge of the sampled domain
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub y_min: f64,

    /// ➡️ Right edge of the sampled domain
    #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub x_max: f64,

    /// ⬆️ Top edge of the sampled domain
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub y_max: f64,

    /// 🔁 Iteration cap forwarded to the servers
    #[arg(long, default_value_t = 1024)]
    pub max_n: u32,

    /// 📏 Image width in pixels
    #[arg(long, default_value_t = 600)]
    pub num_x: usize,

    /// 📐 Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub num_y: usize,

    /// 🧩 Tile dimension in pixels
    ///
    /// Must evenly divide both the width and the height.
    #[arg(long, default_value_t = 4)]
    pub dim: usize,

    /// 🌐 Compute server endpoint, repeatable
    ///
    /// Tiles in a cycle are assigned to servers in the order given.
    /// Defaults to localhost:3000 when omitted.
    #[arg(long = "server", value_name = "HOST:PORT")]
    pub servers: Vec<String>,

    /// 🗂️ Directory the image is written to
    #[arg(long, value_name = "DIR", default_value = "images")]
    pub output_dir: PathBuf,
}
