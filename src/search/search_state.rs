//! Search state management
//!
//! Tracks the status of the live query: the result list, loading flag, error
//! message, and the request id bookkeeping used to discard responses from
//! superseded fetches. Channel handles connect to the API worker thread.

use std::sync::mpsc::{Receiver, Sender};

use tokio_util::sync::CancellationToken;

use crate::api::{Character, SearchRequest, SearchResponse};

/// Search state: result list plus fetch status
pub struct SearchState {
    /// Most recently applied result list, replaced wholesale per response
    pub results: Vec<Character>,
    /// Whether a fetch for the latest issued request is outstanding
    pub loading: bool,
    /// Error from the last resolved fetch; cleared on the next success
    pub error: Option<String>,
    /// Latest issued request id; only a response carrying this id is applied
    request_id: u64,
    /// Token for the in-flight request, cancelled when a newer one is issued
    cancel_token: Option<CancellationToken>,
    /// Channel to send requests to the worker thread
    request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive responses from the worker thread
    response_rx: Option<Receiver<SearchResponse>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            loading: false,
            error: None,
            request_id: 0,
            cancel_token: None,
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Issue a fetch for `name`
    ///
    /// Cancels any in-flight request first, then increments the request id so
    /// responses to older requests are discarded on arrival. Returns false if
    /// no worker channel is connected.
    pub fn send_request(&mut self, name: &str) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        // A superseded request must not burn the network or the id filter
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        self.request_id = self.request_id.wrapping_add(1);
        let cancel_token = CancellationToken::new();
        self.cancel_token = Some(cancel_token.clone());

        let request = SearchRequest {
            name: name.to_string(),
            request_id: self.request_id,
            cancel_token,
        };

        if tx.send(request).is_err() {
            self.cancel_token = None;
            return false;
        }

        self.loading = true;
        true
    }

    /// Drain all pending worker responses, applying the current one
    ///
    /// Returns true if any response changed state (a render is due).
    pub fn drain_responses(&mut self) -> bool {
        let mut applied = false;
        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(_) => break,
                },
                None => break,
            };
            applied |= self.apply_response(response);
        }
        applied
    }

    /// Apply a single worker response
    ///
    /// Only the response whose id equals the latest issued id is applied; a
    /// slower response from an older request is discarded so it can never
    /// overwrite newer results. On success the result list is replaced
    /// wholesale and the error cleared; on failure the error is recorded and
    /// the stale result list kept.
    pub fn apply_response(&mut self, response: SearchResponse) -> bool {
        match response {
            SearchResponse::Results {
                request_id,
                characters,
            } => {
                if request_id != self.request_id {
                    log::debug!(
                        "Discarding stale results for request {} (current {})",
                        request_id,
                        self.request_id
                    );
                    return false;
                }
                self.results = characters;
                self.error = None;
                self.loading = false;
                self.cancel_token = None;
                true
            }
            SearchResponse::Error {
                request_id,
                message,
            } => {
                if request_id != self.request_id {
                    log::debug!(
                        "Discarding stale error for request {} (current {})",
                        request_id,
                        self.request_id
                    );
                    return false;
                }
                self.error = Some(message);
                self.loading = false;
                self.cancel_token = None;
                true
            }
            // Cancelled responses only ever belong to superseded requests
            SearchResponse::Cancelled { request_id } => {
                log::debug!("Request {} cancelled", request_id);
                false
            }
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
