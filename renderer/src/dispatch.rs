use log::debug;
use tokio::task::JoinHandle;

use shared::errors::{RenderError, RenderResult};
use shared::models::tile::{TileRequest, TileResult};

use crate::fetcher::TileFetcher;

/// Fans one cycle's requests out concurrently and joins them all before
/// returning. Results come back in request order, not arrival order;
/// the merge step relies on that to recover each server's column
/// offset. The first failure aborts the still-pending tasks and
/// propagates, so a cycle either completes whole or not at all.
pub async fn dispatch_cycle<F: TileFetcher>(
    fetcher: &F,
    requests: Vec<TileRequest>,
) -> RenderResult<Vec<TileResult>> {
    let mut handles: Vec<JoinHandle<RenderResult<TileResult>>> = Vec::with_capacity(requests.len());
    for request in requests {
        debug!("Dispatching {}", request.url());
        handles.push(tokio::spawn(fetcher.fetch(request)));
    }

    let mut results = Vec::with_capacity(handles.len());
    for index in 0..handles.len() {
        let outcome = match (&mut handles[index]).await {
            Ok(decoded) => decoded,
            Err(e) => Err(RenderError::Dispatch(e.to_string())),
        };
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                for pending in &handles[index + 1..] {
                    pending.abort();
                }
                return Err(e);
            }
        }
    }
    Ok(results)
}
