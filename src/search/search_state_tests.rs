//! Tests for search state

use std::sync::mpsc;

use super::*;

fn character(id: u64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        image: String::new(),
        episode: Vec::new(),
    }
}

/// State wired to in-memory channels; returns the worker-side handles
fn connected_state() -> (
    SearchState,
    mpsc::Receiver<SearchRequest>,
    mpsc::Sender<SearchResponse>,
) {
    let mut state = SearchState::new();
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    state.set_channels(request_tx, response_rx);
    (state, request_rx, response_tx)
}

#[test]
fn test_new_state_is_idle() {
    let state = SearchState::new();
    assert!(state.results.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.current_request_id(), 0);
}

#[test]
fn test_send_request_without_channel_fails() {
    let mut state = SearchState::new();
    assert!(!state.send_request("rick"));
    assert!(!state.loading);
}

#[test]
fn test_send_request_increments_id_and_sets_loading() {
    let (mut state, request_rx, _response_tx) = connected_state();

    assert!(state.send_request("rick"));
    assert!(state.loading);
    assert_eq!(state.current_request_id(), 1);

    let request = request_rx.try_recv().unwrap();
    assert_eq!(request.name, "rick");
    assert_eq!(request.request_id, 1);

    assert!(state.send_request("rick s"));
    assert_eq!(state.current_request_id(), 2);
    let request = request_rx.try_recv().unwrap();
    assert_eq!(request.name, "rick s");
    assert_eq!(request.request_id, 2);
}

#[test]
fn test_request_name_is_exact_query_text() {
    let (mut state, request_rx, _response_tx) = connected_state();

    state.send_request("Rick & Morty ");
    let request = request_rx.try_recv().unwrap();
    // Sent exactly as typed; URL-encoding happens in the HTTP client
    assert_eq!(request.name, "Rick & Morty ");
}

#[test]
fn test_new_request_cancels_previous_token() {
    let (mut state, request_rx, _response_tx) = connected_state();

    state.send_request("r");
    let first = request_rx.try_recv().unwrap();
    assert!(!first.cancel_token.is_cancelled());

    state.send_request("ri");
    assert!(first.cancel_token.is_cancelled());

    let second = request_rx.try_recv().unwrap();
    assert!(!second.cancel_token.is_cancelled());
}

#[test]
fn test_current_results_applied() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.send_request("smith");

    let applied = state.apply_response(SearchResponse::Results {
        request_id: 1,
        characters: vec![character(2, "Morty Smith"), character(3, "Summer Smith")],
    });

    assert!(applied);
    assert_eq!(state.results.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn test_stale_results_discarded() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.send_request("r");
    state.send_request("ri");

    // The slower response to request 1 arrives after request 2 was issued
    let applied = state.apply_response(SearchResponse::Results {
        request_id: 1,
        characters: vec![character(1, "Rick Sanchez")],
    });

    assert!(!applied);
    assert!(state.results.is_empty());
    assert!(state.loading, "still waiting on the latest request");

    // The current response lands normally afterwards
    let applied = state.apply_response(SearchResponse::Results {
        request_id: 2,
        characters: vec![character(1, "Rick Sanchez"), character(8, "Rick Prime")],
    });
    assert!(applied);
    assert_eq!(state.results.len(), 2);
    assert!(!state.loading);
}

#[test]
fn test_error_keeps_stale_results() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.send_request("rick");
    state.apply_response(SearchResponse::Results {
        request_id: 1,
        characters: vec![character(1, "Rick Sanchez")],
    });

    state.send_request("rickk");
    let applied = state.apply_response(SearchResponse::Error {
        request_id: 2,
        message: "API error (404): There is nothing here".to_string(),
    });

    assert!(applied);
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("API error (404): There is nothing here")
    );
    // The previous result list stays on screen
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].name, "Rick Sanchez");
}

#[test]
fn test_stale_error_discarded() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.send_request("r");
    state.send_request("ri");

    let applied = state.apply_response(SearchResponse::Error {
        request_id: 1,
        message: "Network error: timeout".to_string(),
    });

    assert!(!applied);
    assert!(state.error.is_none());
    assert!(state.loading);
}

#[test]
fn test_success_clears_previous_error() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.send_request("zzz");
    state.apply_response(SearchResponse::Error {
        request_id: 1,
        message: "API error (404): There is nothing here".to_string(),
    });
    assert!(state.error.is_some());

    state.send_request("rick");
    state.apply_response(SearchResponse::Results {
        request_id: 2,
        characters: vec![character(1, "Rick Sanchez")],
    });

    assert!(state.error.is_none());
    assert_eq!(state.results.len(), 1);
}

#[test]
fn test_cancelled_response_is_ignored() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    state.send_request("rick");

    let applied = state.apply_response(SearchResponse::Cancelled { request_id: 1 });
    assert!(!applied);
    // Cancelled responses belong to superseded requests; the latest one is
    // still considered outstanding
    assert!(state.loading);
}

#[test]
fn test_drain_responses_applies_only_current() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("r");
    state.send_request("ri");
    state.send_request("ric");

    // Responses arrive out of order: newest first, then two stale ones
    response_tx
        .send(SearchResponse::Results {
            request_id: 3,
            characters: vec![character(1, "Rick Sanchez")],
        })
        .unwrap();
    response_tx
        .send(SearchResponse::Results {
            request_id: 1,
            characters: vec![character(99, "Wrong Guy")],
        })
        .unwrap();
    response_tx
        .send(SearchResponse::Error {
            request_id: 2,
            message: "late failure".to_string(),
        })
        .unwrap();

    let applied = state.drain_responses();
    assert!(applied);
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].name, "Rick Sanchez");
    assert!(state.error.is_none());
    assert!(!state.loading);
}
