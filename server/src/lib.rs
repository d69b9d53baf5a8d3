pub mod escape;

use std::collections::HashMap;

use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Responder};
use log::info;

use shared::models::{point::Point, range::Range};

use crate::escape::render_tile;

/// Evaluates one tile of the Mandelbrot set. The response is a JSON
/// object mapping decimal-string tile-local indices (row-major,
/// `i + j*x_num`) to grayscale intensities in [0, 255], the shape the
/// renderer's decoder expects.
#[get("/mandelbrot/{x_min}/{y_min}/{x_max}/{y_max}/{x_num}/{y_num}/{n_lim}")]
async fn mandelbrot_tile(path: web::Path<(f64, f64, f64, f64, usize, usize, u32)>) -> impl Responder {
    let (x_min, y_min, x_max, y_max, x_num, y_num, n_lim) = path.into_inner();
    let range = Range::new(Point::new(x_min, y_min), Point::new(x_max, y_max));

    match render_tile(&range, x_num, y_num, n_lim) {
        Ok(values) => {
            let map: HashMap<String, u8> = values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect();
            HttpResponse::Ok().json(map)
        }
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

pub async fn run_server(address: &str, port: u16) -> std::io::Result<()> {
    info!("Server listening on {}:{}", address, port);

    HttpServer::new(|| App::new().wrap(Logger::default()).service(mandelbrot_tile))
        .bind((address, port))?
        .run()
        .await
}
