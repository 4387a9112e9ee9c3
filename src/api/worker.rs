//! Search worker thread
//!
//! Runs character API fetches in a background thread so the UI never blocks
//! on the network. Receives requests via channel, makes HTTP calls to the
//! character endpoint, and sends results back to the main thread.
//!
//! Uses a tokio runtime for async HTTP with cancellation support. Each
//! request carries a monotonically increasing id; the main thread uses it to
//! discard responses from superseded requests.

use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::client::{ApiClient, ApiError};
use super::types::Character;

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub struct SearchRequest {
    /// Name filter, exactly as typed
    pub name: String,
    /// Unique id for this request, used to filter stale responses
    pub request_id: u64,
    /// Token the main thread cancels when a newer query supersedes this one
    pub cancel_token: CancellationToken,
}

/// Response messages received from the search worker thread
#[derive(Debug)]
pub enum SearchResponse {
    /// The fetch resolved with a result list
    Results {
        request_id: u64,
        characters: Vec<Character>,
    },
    /// The fetch failed
    Error { request_id: u64, message: String },
    /// The request was cancelled before resolving
    Cancelled { request_id: u64 },
}

/// Spawn the search worker thread
///
/// Creates a background thread with a current-thread tokio runtime that
/// listens for requests on the request channel, fetches from the character
/// API, and sends responses back via the response channel. The thread exits
/// when the request channel closes.
pub fn spawn_worker(
    base_url: String,
    timeout: Duration,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                let _ = response_tx.send(SearchResponse::Error {
                    request_id: 0,
                    message: format!("Failed to start search runtime: {}", e),
                });
                return;
            }
        };

        rt.block_on(worker_loop(base_url, timeout, request_rx, response_tx));
    });
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Uses blocking `recv()` on the request channel (fine in a dedicated
/// thread). Requests queue behind each other, but a superseded request's
/// token is already cancelled by the time it runs, so it returns immediately.
async fn worker_loop(
    base_url: String,
    timeout: Duration,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    let client = match ApiClient::new(base_url, timeout) {
        Ok(client) => client,
        Err(e) => {
            let _ = response_tx.send(SearchResponse::Error {
                request_id: 0,
                message: e.to_string(),
            });
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = match client
            .fetch_characters(&request.name, &request.cancel_token)
            .await
        {
            Ok(characters) => SearchResponse::Results {
                request_id: request.request_id,
                characters,
            },
            Err(ApiError::Cancelled) => SearchResponse::Cancelled {
                request_id: request.request_id,
            },
            Err(e) => SearchResponse::Error {
                request_id: request.request_id,
                message: e.to_string(),
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            return;
        }
    }
}
