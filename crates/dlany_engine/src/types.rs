use dlany_core::{Msg, ProcessOutcome, RequestId};
use thiserror::Error;

/// Why a processing call failed. The controller collapses every variant into a
/// single error state and keeps only the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("network error: {0}")]
    Network(String),
    #[error("processing call timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("{0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ProcessingFinished {
        request_id: RequestId,
        result: Result<ProcessOutcome, ProcessError>,
    },
    ResetElapsed {
        request_id: RequestId,
    },
}

impl EngineEvent {
    pub fn into_msg(self) -> Msg {
        match self {
            EngineEvent::ProcessingFinished { request_id, result } => Msg::ProcessingFinished {
                request_id,
                result: result.map_err(|err| err.to_string()),
            },
            EngineEvent::ResetElapsed { request_id } => Msg::ResetElapsed { request_id },
        }
    }
}
