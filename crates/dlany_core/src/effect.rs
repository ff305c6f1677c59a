use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a lifecycle event to the analytics sink.
    Capture(crate::AnalyticsEvent),
    /// Run the processing call for a submission.
    Process {
        request_id: crate::RequestId,
        request: crate::SubmissionRequest,
    },
    /// Arm the single-shot reset timer owned by `request_id`.
    ScheduleReset {
        request_id: crate::RequestId,
        delay: Duration,
    },
    /// Disarm a reset timer that a newer submission superseded.
    CancelReset { request_id: crate::RequestId },
}
