use clap::Subcommand;

use self::{render::RenderCommand, serve::ServeCommand};

pub mod render;
pub mod serve;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🎨 Render an image
    ///
    /// Partition the image into tiles, farm them out to the configured
    /// servers and assemble the replies into a PGM file.
    Render(RenderCommand),

    /// 🚀 Serve tiles
    ///
    /// Run a compute server that evaluates Mandelbrot tiles over HTTP.
    Serve(ServeCommand),
}
