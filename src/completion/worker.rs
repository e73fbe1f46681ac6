//! Completion worker thread
//!
//! Handles completion requests in a background thread so the editor never
//! blocks on the network. Receives requests via channel, POSTs them to the
//! generate endpoint, and sends one response back per request.
//!
//! Uses a single-threaded tokio runtime; requests are served in arrival
//! order. Includes panic handling so a crash in the worker cannot corrupt
//! the terminal.

use std::io;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tokio_util::sync::CancellationToken;

use super::client::{CompletionError, GenerateClient};
use super::completion_state::{CompletionRequest, CompletionResponse};
use crate::config::CompletionConfig;
use crate::editor::Position;

const WORKER_THREAD_NAME: &str = "completion-worker";

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

/// Spawn the completion worker thread
///
/// # Arguments
/// * `config` - Completion configuration (for creating the client)
/// * `request_rx` - Channel to receive requests from the UI thread
/// * `response_tx` - Channel to send responses to the UI thread
/// * `shutdown` - Cancelled when the editor exits; aborts the in-flight request
pub fn spawn_worker(
    config: &CompletionConfig,
    request_rx: Receiver<CompletionRequest>,
    response_tx: Sender<CompletionResponse>,
    shutdown: CancellationToken,
) -> io::Result<JoinHandle<()>> {
    let client_result = GenerateClient::from_config(config);
    if let Err(e) = &client_result {
        log::error!("Completion client unavailable: {}", e);
    }

    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            // The default panic hook prints to stderr which corrupts the TUI.
            // Panics on other threads still go to the previous hook.
            let prev_hook: Arc<PanicHook> = Arc::from(panic::take_hook());
            let fallback = Arc::clone(&prev_hook);
            panic::set_hook(Box::new(move |panic_info| {
                if thread::current().name() == Some(WORKER_THREAD_NAME) {
                    log::error!(
                        "Completion worker panic: {} at {:?}",
                        panic_message(panic_info.payload()),
                        panic_info.location()
                    );
                } else {
                    fallback(panic_info);
                }
            }));

            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime: {}", e);
                        return;
                    }
                };

                rt.block_on(worker_loop(client_result, request_rx, response_tx, shutdown));
            }));

            panic::set_hook(Box::new(move |panic_info| prev_hook(panic_info)));

            if let Err(e) = result {
                log::error!(
                    "Completion worker thread panicked: {}",
                    panic_message(e.as_ref())
                );
            }
        })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Main async worker loop - processes requests until the channel is closed
///
/// Blocking `recv()` is fine here since the worker owns its thread.
async fn worker_loop(
    client_result: Result<GenerateClient, CompletionError>,
    request_rx: Receiver<CompletionRequest>,
    response_tx: Sender<CompletionResponse>,
    shutdown: CancellationToken,
) {
    while let Ok(request) = request_rx.recv() {
        if shutdown.is_cancelled() {
            break;
        }

        match request {
            CompletionRequest::Generate {
                prompt,
                anchor,
                request_id,
            } => {
                let response =
                    handle_generate(&client_result, &prompt, anchor, request_id, &shutdown).await;
                match response {
                    Some(response) => {
                        if response_tx.send(response).is_err() {
                            // Editor is gone
                            break;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    log::debug!("Completion worker stopped");
}

/// Run one generate request
///
/// Returns `None` when the request was aborted by shutdown.
async fn handle_generate(
    client_result: &Result<GenerateClient, CompletionError>,
    prompt: &str,
    anchor: Position,
    request_id: u64,
    shutdown: &CancellationToken,
) -> Option<CompletionResponse> {
    let client = match client_result {
        Ok(client) => client,
        Err(e) => {
            return Some(CompletionResponse::Failed {
                message: e.to_string(),
                request_id,
            });
        }
    };

    let result = tokio::select! {
        biased;

        _ = shutdown.cancelled() => Err(CompletionError::Cancelled),
        result = client.generate(prompt) => result,
    };

    match result {
        Ok(Some(text)) => {
            log::debug!("Request {} returned {} chars", request_id, text.len());
            Some(CompletionResponse::Generated {
                text,
                anchor,
                request_id,
            })
        }
        Ok(None) => Some(CompletionResponse::Discarded { request_id }),
        Err(CompletionError::Cancelled) => {
            log::debug!("Request {} cancelled by shutdown", request_id);
            None
        }
        Err(e) => Some(CompletionResponse::Failed {
            message: e.to_string(),
            request_id,
        }),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
