use futures::future::BoxFuture;
use log::debug;
use shared::errors::{RenderError, RenderResult};
use shared::models::tile::{TileRequest, TileResult};

/// Seam between the dispatch engine and the wire. Production uses
/// reqwest; tests substitute canned or failing fetchers.
pub trait TileFetcher: Send + Sync + 'static {
    fn fetch(&self, request: TileRequest) -> BoxFuture<'static, RenderResult<TileResult>>;
}

/// HTTP GET fetcher. A non-success status is a transport failure, a
/// body that does not decode as a complete tile map is a protocol
/// violation; either aborts the run.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TileFetcher for HttpFetcher {
    fn fetch(&self, request: TileRequest) -> BoxFuture<'static, RenderResult<TileResult>> {
        let client = self.client.clone();
        let url = request.url();
        let dim = request.resolution.nx;

        Box::pin(async move {
            debug!("GET {}", url);
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| RenderError::Transport {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(RenderError::Transport {
                    url,
                    reason: format!("HTTP status {}", status),
                });
            }

            let body = response.text().await.map_err(|e| RenderError::Transport {
                url: url.clone(),
                reason: format!("failed to read body: {}", e),
            })?;

            TileResult::decode(&body, dim, &url)
        })
    }
}
