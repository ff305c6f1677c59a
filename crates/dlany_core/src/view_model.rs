use crate::{Format, SubmissionState};

pub const SUBMIT_LABEL: &str = "Download Now";
pub const PROCESSING_LABEL: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

impl Banner {
    pub fn message(self) -> &'static str {
        match self {
            Banner::Success => "Success! Download starting...",
            Banner::Error => "Error processing link. Try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub url: String,
    pub format: Format,
    pub status: SubmissionState,
    pub trigger_enabled: bool,
    pub trigger_label: &'static str,
    pub banner: Option<Banner>,
    pub dirty: bool,
}

impl AppViewModel {
    pub(crate) fn trigger_label_for(in_flight: bool) -> &'static str {
        if in_flight {
            PROCESSING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
