//! Tests for completion controller state

use super::*;
use crate::editor::offset_at;
use crate::test_utils::test_helpers::FakeHost;
use proptest::prelude::*;
use std::sync::mpsc;

fn connected_state(
    config: &CompletionConfig,
) -> (CompletionState, mpsc::Receiver<CompletionRequest>) {
    let mut state = CompletionState::new(config);
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    state.set_channels(request_tx, response_rx);
    (state, request_rx)
}

fn generated(text: &str, line: usize, column: usize, request_id: u64) -> CompletionResponse {
    CompletionResponse::Generated {
        text: text.to_string(),
        anchor: Position::new(line, column),
        request_id,
    }
}

#[test]
fn test_new_state_from_default_config() {
    let state = CompletionState::new(&CompletionConfig::default());
    assert!(state.enabled);
    assert!(!state.suppressed);
    assert!(state.cache.is_empty());
    assert_eq!(state.cache.capacity(), 10);
    assert_eq!(state.debouncer.delay_ms(), 2000);
    assert!(!state.is_connected());
    assert!(!state.is_fetching());
    assert_eq!(state.request_id, 0);
}

#[test]
fn test_new_state_honors_config() {
    let config = CompletionConfig {
        enabled: false,
        debounce_ms: 250,
        cache_size: 3,
        ..CompletionConfig::default()
    };
    let state = CompletionState::new(&config);
    assert!(!state.enabled);
    assert_eq!(state.cache.capacity(), 3);
    assert_eq!(state.debouncer.delay_ms(), 250);
}

#[test]
fn test_request_sends_text_before_cursor() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    let host = FakeHost::new("module top;\n  wire a;\nendmodule", Position::new(2, 5));

    let outcome = state.request_suggestion(&host);

    assert_eq!(outcome, FetchOutcome::Sent { request_id: 1 });
    assert_eq!(
        request_rx.try_recv().unwrap(),
        CompletionRequest::Generate {
            prompt: "module top;\n  wi".to_string(),
            anchor: Position::new(2, 5),
            request_id: 1,
        }
    );
    assert!(state.is_fetching());
}

#[test]
fn test_request_at_end_of_buffer_sends_everything() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    let host = FakeHost::new("assign y = ", Position::new(1, 12));

    state.request_suggestion(&host);

    match request_rx.try_recv().unwrap() {
        CompletionRequest::Generate { prompt, .. } => assert_eq!(prompt, "assign y = "),
    }
}

#[test]
fn test_request_ids_increase() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    let host = FakeHost::new("wire", Position::new(1, 5));

    assert_eq!(state.request_suggestion(&host), FetchOutcome::Sent { request_id: 1 });
    assert_eq!(state.request_suggestion(&host), FetchOutcome::Sent { request_id: 2 });
    assert_eq!(state.in_flight, 2);
    assert_eq!(request_rx.try_iter().count(), 2);
}

#[test]
fn test_request_while_suppressed_sends_nothing() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    state.apply_response(generated("wire b;", 1, 1, 1));
    state.suppressed = true;
    let host = FakeHost::new("wire", Position::new(1, 5));

    assert_eq!(state.request_suggestion(&host), FetchOutcome::Suppressed);
    assert!(request_rx.try_recv().is_err());
    // Suppression alone does not touch the cache
    assert_eq!(state.cache.len(), 1);
}

#[test]
fn test_empty_buffer_clears_cache() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    state.apply_response(generated("wire b;", 1, 1, 1));
    let host = FakeHost::new("", Position::new(1, 1));

    assert_eq!(state.request_suggestion(&host), FetchOutcome::EmptyPrompt);
    assert!(state.cache.is_empty());
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_cursor_at_start_clears_cache() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    state.apply_response(generated("wire b;", 1, 1, 1));
    let host = FakeHost::new("endmodule", Position::new(1, 1));

    assert_eq!(state.request_suggestion(&host), FetchOutcome::EmptyPrompt);
    assert!(state.cache.is_empty());
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_request_without_worker_is_unavailable() {
    let mut state = CompletionState::new(&CompletionConfig::default());
    let host = FakeHost::new("wire", Position::new(1, 5));

    assert_eq!(state.request_suggestion(&host), FetchOutcome::Unavailable);
    assert_eq!(state.request_id, 0);
    assert!(!state.is_fetching());
}

#[test]
fn test_request_to_dead_worker_disconnects() {
    let (mut state, request_rx) = connected_state(&CompletionConfig::default());
    drop(request_rx);
    let host = FakeHost::new("wire", Position::new(1, 5));

    assert_eq!(state.request_suggestion(&host), FetchOutcome::Unavailable);
    assert!(!state.is_connected());
    assert!(!state.is_fetching());
}

#[test]
fn test_generated_response_is_cached() {
    let mut state = CompletionState::new(&CompletionConfig::default());
    state.in_flight = 1;

    assert!(state.apply_response(generated("assign y = a;", 3, 3, 1)));

    assert!(!state.is_fetching());
    let latest = state.cache.latest().unwrap();
    assert_eq!(latest.insert_text(), "assign y = a;");
    assert_eq!(latest.range().start(), Position::new(3, 3));
    assert!(latest.range().is_empty());
}

#[test]
fn test_empty_generated_text_is_ignored() {
    let mut state = CompletionState::new(&CompletionConfig::default());
    assert!(!state.apply_response(generated("", 1, 1, 1)));
    assert!(state.cache.is_empty());
}

#[test]
fn test_discarded_and_failed_leave_cache_alone() {
    let mut state = CompletionState::new(&CompletionConfig::default());
    state.apply_response(generated("wire a;", 1, 1, 1));
    state.in_flight = 2;

    assert!(!state.apply_response(CompletionResponse::Discarded { request_id: 2 }));
    assert!(!state.apply_response(CompletionResponse::Failed {
        message: "Network error: connection refused".to_string(),
        request_id: 3,
    }));

    assert_eq!(state.cache.len(), 1);
    assert_eq!(state.in_flight, 0);
}

#[test]
fn test_in_flight_never_underflows() {
    let mut state = CompletionState::new(&CompletionConfig::default());
    state.apply_response(CompletionResponse::Discarded { request_id: 7 });
    assert_eq!(state.in_flight, 0);
}

#[test]
fn test_cache_keeps_most_recent() {
    let config = CompletionConfig {
        cache_size: 2,
        ..CompletionConfig::default()
    };
    let mut state = CompletionState::new(&config);

    state.apply_response(generated("A", 1, 1, 1));
    state.apply_response(generated("B", 1, 1, 2));
    state.apply_response(generated("C", 1, 1, 3));

    let texts: Vec<&str> = state.cache.iter().map(|s| s.insert_text()).collect();
    assert_eq!(texts, vec!["B", "C"]);
}

#[test]
fn test_suppress_clears_cache_and_keeps_timer() {
    let mut state = CompletionState::new(&CompletionConfig::default());
    state.apply_response(generated("wire a;", 1, 1, 1));
    state.debouncer.schedule();

    state.suppress();

    assert!(state.suppressed);
    assert!(state.cache.is_empty());
    assert!(state.debouncer.has_pending());
}

#[test]
fn test_late_response_after_suppress_is_cached() {
    let (mut state, _request_rx) = connected_state(&CompletionConfig::default());
    let host = FakeHost::new("wire", Position::new(1, 5));
    state.request_suggestion(&host);

    state.suppress();
    assert!(state.apply_response(generated(" a;", 1, 5, 1)));

    assert_eq!(state.cache.len(), 1);
}

#[test]
fn test_response_request_id() {
    assert_eq!(generated("x", 1, 1, 4).request_id(), 4);
    assert_eq!(CompletionResponse::Discarded { request_id: 5 }.request_id(), 5);
    assert_eq!(
        CompletionResponse::Failed {
            message: String::new(),
            request_id: 6
        }
        .request_id(),
        6
    );
}

#[test]
fn test_shutdown_cancels_token_and_disconnects() {
    let (mut state, _request_rx) = connected_state(&CompletionConfig::default());
    let token = state.shutdown_token();
    state.debouncer.schedule();

    state.shutdown();

    assert!(token.is_cancelled());
    assert!(!state.is_connected());
    assert!(state.response_rx.is_none());
    assert!(!state.debouncer.has_pending());
}

#[test]
fn test_drop_cancels_token() {
    let state = CompletionState::new(&CompletionConfig::default());
    let token = state.shutdown_token();
    drop(state);
    assert!(token.is_cancelled());
}

proptest! {
    /// The prompt is always the character prefix of the buffer up to the cursor.
    #[test]
    fn prop_prompt_is_prefix_of_buffer(
        text in "[a-z;() \n]{1,60}",
        line in 1usize..6,
        column in 1usize..20,
    ) {
        let (mut state, request_rx) = connected_state(&CompletionConfig::default());
        let host = FakeHost::new(&text, Position::new(line, column));
        let offset = offset_at(&host.lines(), Position::new(line, column));

        match state.request_suggestion(&host) {
            FetchOutcome::Sent { .. } => {
                let CompletionRequest::Generate { prompt, .. } = request_rx.try_recv().unwrap();
                prop_assert!(text.starts_with(&prompt));
                prop_assert_eq!(prompt.chars().count(), offset);
                prop_assert!(!prompt.is_empty());
            }
            FetchOutcome::EmptyPrompt => prop_assert_eq!(offset, 0),
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    /// Applying any sequence of responses never grows the cache past capacity.
    #[test]
    fn prop_cache_bounded_by_config(
        cache_size in 1usize..8,
        texts in prop::collection::vec("[a-z]{0,5}", 0..30),
    ) {
        let config = CompletionConfig { cache_size, ..CompletionConfig::default() };
        let mut state = CompletionState::new(&config);
        for (i, text) in texts.iter().enumerate() {
            state.apply_response(generated(text, 1, 1, i as u64));
            prop_assert!(state.cache.len() <= cache_size);
        }
    }
}
