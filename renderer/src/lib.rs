pub mod dispatch;
pub mod fetcher;

use std::path::PathBuf;

use log::{error, info};

use shared::errors::RenderResult;
use shared::image::PixelBuffer;
use shared::models::{axis::CoordinateAxis, job::RenderJob, plan::CyclePlan};
use shared::{env, logger};

use crate::dispatch::dispatch_cycle;
use crate::fetcher::{HttpFetcher, TileFetcher};

/// Entry point used by the CLI: renders over HTTP and logs the outcome.
pub async fn run_renderer(job: RenderJob) -> RenderResult<PathBuf> {
    env::init();
    logger::init();

    match render(&job, &HttpFetcher::new()).await {
        Ok(path) => {
            info!("Render finished: {}", path.display());
            Ok(path)
        }
        Err(e) => {
            error!("Render failed: {}", e);
            Err(e)
        }
    }
}

/// Drives the full scan: row-bands of height `dim`, and within each one
/// dispatch cycle per column-band of width `dim * servers_used`. Each
/// cycle is a fan-out/fan-in barrier; its merges run before the next
/// cycle starts, so the buffer never sees concurrent writes. The image
/// is written once, only after every pixel has been merged.
pub async fn render<F: TileFetcher>(job: &RenderJob, fetcher: &F) -> RenderResult<PathBuf> {
    job.validate()?;

    let x_axis = CoordinateAxis::new(job.range.min.x, job.range.max.x, job.resolution.nx)?;
    let y_axis = CoordinateAxis::new(job.range.min.y, job.range.max.y, job.resolution.ny)?;

    let dim = job.tile_dim;
    let mut buffer = PixelBuffer::new(job.resolution.nx, job.resolution.ny);

    let mut row = 0;
    while row < job.resolution.ny {
        info!("Starting row band {}", row);
        let mut col = 0;
        while col < job.resolution.nx {
            let plan = CyclePlan::build(
                &x_axis,
                &y_axis,
                row,
                col,
                dim,
                &job.servers,
                job.max_iterations,
            );
            let next_col = plan.next_col();

            let results = dispatch_cycle(fetcher, plan.requests).await?;
            for (s, tile) in results.iter().enumerate() {
                buffer.merge_tile(row, col + s * dim, dim, tile);
            }

            col = next_col;
        }
        row += dim;
    }

    buffer.write_pgm(&job.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::BoxFuture;
    use shared::errors::RenderError;
    use shared::models::point::Point;
    use shared::models::range::Range;
    use shared::models::resolution::Resolution;
    use shared::models::tile::{TileRequest, TileResult};
    use std::fs;

    /// Answers each tile with its pixels' global row-major indices.
    /// Works because the tests pick a domain whose axis values equal
    /// the pixel coordinates, so a request's min corner identifies its
    /// global position.
    struct GradientFetcher {
        width: usize,
    }

    impl TileFetcher for GradientFetcher {
        fn fetch(&self, request: TileRequest) -> BoxFuture<'static, RenderResult<TileResult>> {
            let width = self.width;
            Box::pin(async move {
                let dim = request.resolution.nx;
                let col = request.range.min.x as usize;
                let row = request.range.min.y as usize;
                let mut values = Vec::with_capacity(dim * dim);
                for j in 0..dim {
                    for i in 0..dim {
                        values.push((((col + i) + (row + j) * width) % 256) as u8);
                    }
                }
                Ok(TileResult::new(values))
            })
        }
    }

    struct RefusingFetcher;

    impl TileFetcher for RefusingFetcher {
        fn fetch(&self, request: TileRequest) -> BoxFuture<'static, RenderResult<TileResult>> {
            Box::pin(async move {
                Err(RenderError::Transport {
                    url: request.url(),
                    reason: "connection refused".to_string(),
                })
            })
        }
    }

    fn job(output_dir: std::path::PathBuf) -> RenderJob {
        // Axis values coincide with pixel indices: 10x4 pixels over
        // [0, 9] x [0, 3]. dim 2 with 3 servers exercises the reduced
        // final cycle in every row-band.
        RenderJob::new(
            Range::new(Point::new(0.0, 0.0), Point::new(9.0, 3.0)),
            Resolution::new(10, 4),
            2,
            64,
            vec![
                "host0:3000".to_string(),
                "host1:3000".to_string(),
                "host2:3000".to_string(),
            ],
            output_dir,
        )
    }

    #[tokio::test]
    async fn full_scan_reassembles_every_pixel_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path().to_path_buf());

        let path = render(&job, &GradientFetcher { width: 10 }).await.unwrap();
        let written = fs::read_to_string(path).unwrap();

        let mut expected = String::from("P2\n10 4\n255\n");
        for y in 0..4 {
            let row: Vec<String> = (0..10).map(|x| (x + y * 10).to_string()).collect();
            expected.push_str(&row.join(" "));
            expected.push('\n');
        }
        assert_eq!(written, expected);
    }

    #[tokio::test]
    async fn failed_request_leaves_no_image_behind() {
        let dir = tempfile::tempdir().unwrap();
        let job = job(dir.path().to_path_buf());

        let result = render(&job, &RefusingFetcher).await;
        assert!(matches!(result, Err(RenderError::Transport { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn invalid_configuration_fails_before_any_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let mut job = job(dir.path().to_path_buf());
        job.servers.clear();

        // RefusingFetcher would fail the run anyway; reaching Config
        // proves validation ran first.
        let result = render(&job, &RefusingFetcher).await;
        assert!(matches!(result, Err(RenderError::Config(_))));
    }
}
