use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use dlany_core::{Effect, RequestId, SubmissionRequest};
use dlany_logging::{dlany_debug, dlany_info, dlany_warn};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{AnalyticsSink, EngineEvent, ProcessError, Processor};

type ResetTimers = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Executes core effects on a tokio runtime and reports results as events.
pub struct EngineHandle {
    runtime: Handle,
    processor: Arc<dyn Processor>,
    sink: Arc<dyn AnalyticsSink>,
    resets: ResetTimers,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(
        runtime: Handle,
        processor: Arc<dyn Processor>,
        sink: Arc<dyn AnalyticsSink>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            processor,
            sink,
            resets: Arc::new(Mutex::new(HashMap::new())),
            event_tx,
            event_rx,
        }
    }

    pub fn execute_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.execute(effect);
        }
    }

    pub fn execute(&self, effect: Effect) {
        match effect {
            Effect::Capture(event) => {
                dlany_debug!("Capture {} {:?}", event.name, event.properties);
                self.sink.capture(event);
            }
            Effect::Process {
                request_id,
                request,
            } => self.spawn_process(request_id, request),
            Effect::ScheduleReset { request_id, delay } => {
                self.spawn_reset(request_id, delay);
            }
            Effect::CancelReset { request_id } => {
                if let Some(token) = self.lock_resets().remove(&request_id) {
                    dlany_debug!("Cancelled reset for request {}", request_id);
                    token.cancel();
                }
            }
        }
    }

    /// Number of armed reset timers that have neither fired nor been cancelled.
    pub fn pending_resets(&self) -> usize {
        self.lock_resets().len()
    }

    pub fn try_recv(&mut self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits until the next event arrives. The handle keeps its own sender
    /// alive, so with nothing outstanding this never resolves.
    pub async fn recv(&mut self) -> EngineEvent {
        match self.event_rx.recv().await {
            Some(event) => event,
            None => std::future::pending().await,
        }
    }

    fn spawn_process(&self, request_id: RequestId, request: SubmissionRequest) {
        dlany_info!(
            "Process request_id={} format={} url_len={} url={}",
            request_id,
            request.format,
            request.url.len(),
            request.url
        );
        let processor = self.processor.clone();
        let event_tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            // A panicking processor must still resolve the request.
            let call = tokio::spawn(async move { processor.process(&request).await });
            let result = match call.await {
                Ok(result) => result,
                Err(err) if err.is_panic() => {
                    Err(ProcessError::Failed("processing call panicked".to_string()))
                }
                Err(_) => Err(ProcessError::Failed(
                    "processing call was cancelled".to_string(),
                )),
            };
            match &result {
                Ok(outcome) => dlany_info!(
                    "Request {} succeeded download_url={:?}",
                    request_id,
                    outcome.download_url
                ),
                Err(err) => dlany_warn!("Request {} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::ProcessingFinished { request_id, result });
        });
    }

    fn spawn_reset(&self, request_id: RequestId, delay: Duration) {
        let token = CancellationToken::new();
        if let Some(previous) = self.lock_resets().insert(request_id, token.clone()) {
            previous.cancel();
        }

        let resets = self.resets.clone();
        let event_tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Queue the event before disarming, so `pending_resets() == 0`
                    // implies the event is already receivable.
                    let _ = event_tx.send(EngineEvent::ResetElapsed { request_id });
                    resets
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .remove(&request_id);
                }
            }
        });
    }

    fn lock_resets(&self) -> std::sync::MutexGuard<'_, HashMap<RequestId, CancellationToken>> {
        self.resets.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
