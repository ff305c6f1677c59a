#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the url input box.
    UrlChanged(String),
    /// User picked one of the two format controls.
    FormatSelected(crate::Format),
    /// User pressed the submit control.
    SubmitClicked,
    /// The processing call for a submission resolved.
    ProcessingFinished {
        request_id: crate::RequestId,
        result: Result<crate::ProcessOutcome, String>,
    },
    /// The delayed reset armed by a successful submission fired.
    ResetElapsed { request_id: crate::RequestId },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
