pub mod commands;

use clap::Parser;
use commands::Commands;
use log::error;
use shared::models::{job::RenderJob, point::Point, range::Range, resolution::Resolution};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    shared::env::init();
    shared::logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => {
            let servers = if args.servers.is_empty() {
                vec!["localhost:3000".to_string()]
            } else {
                args.servers
            };

            let job = RenderJob::new(
                Range::new(Point::new(args.x_min, args.y_min), Point::new(args.x_max, args.y_max)),
                Resolution::new(args.num_x, args.num_y),
                args.dim,
                args.max_n,
                servers,
                args.output_dir,
            );

            if renderer::run_renderer(job).await.is_err() {
                std::process::exit(1);
            }
        }
        Commands::Serve(args) => {
            let address = match args.address {
                Some(address) => address,
                None => "127.0.0.1".to_string(),
            };
            let port = match args.port {
                Some(port) => port,
                None => 3000,
            };

            if let Err(e) = server::run_server(&address, port).await {
                error!("Server error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
