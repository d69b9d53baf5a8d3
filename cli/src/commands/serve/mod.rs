use clap::Parser;

/// 🚀 Serve Command
///
/// Start a tile compute server.
#[derive(Parser, Debug)]
#[command(name = "serve", about = "🚀 Serve Mandelbrot tiles over HTTP.", long_about = None)]
pub struct ServeCommand {
    /// 📌 Address to listen on
    #[arg(short, long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// 🚪 Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
}
