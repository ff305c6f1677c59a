//! dlany core: pure submission state machine and view-model helpers.
mod analytics;
mod effect;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use analytics::{
    AnalyticsEvent, EVENT_DOWNLOAD_ERROR, EVENT_DOWNLOAD_START, EVENT_DOWNLOAD_SUCCESS,
};
pub use effect::Effect;
pub use msg::Msg;
pub use request::{Format, ProcessOutcome, RequestId, SubmissionRequest};
pub use state::{AppState, SubmissionState, RESET_DELAY};
pub use update::update;
pub use view_model::{AppViewModel, Banner, PROCESSING_LABEL, SUBMIT_LABEL};
