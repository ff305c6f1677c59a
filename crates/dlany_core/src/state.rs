use std::time::Duration;

use crate::view_model::{AppViewModel, Banner};
use crate::{Format, RequestId, SubmissionRequest};

/// How long the success banner stays up before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Processing,
    Complete,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InFlight {
    request_id: RequestId,
    request: SubmissionRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    url: String,
    format: Format,
    status: SubmissionState,
    // Tracked apart from `status` so the trigger re-enables as soon as the
    // call resolves, while the banner is still showing.
    in_flight: Option<InFlight>,
    last_request_id: RequestId,
    pending_reset: Option<RequestId>,
    reset_delay: Duration,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url: String::new(),
            format: Format::default(),
            status: SubmissionState::default(),
            in_flight: None,
            last_request_id: 0,
            pending_reset: None,
            reset_delay: RESET_DELAY,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            reset_delay,
            ..Self::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.status
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight_request(&self) -> Option<(RequestId, &SubmissionRequest)> {
        self.in_flight
            .as_ref()
            .map(|flight| (flight.request_id, &flight.request))
    }

    pub fn last_request_id(&self) -> RequestId {
        self.last_request_id
    }

    pub fn pending_reset(&self) -> Option<RequestId> {
        self.pending_reset
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// The trigger control is live only with a url and nothing in flight.
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none() && !self.url.is_empty()
    }

    pub fn view(&self) -> AppViewModel {
        let banner = match self.status {
            SubmissionState::Complete => Some(Banner::Success),
            SubmissionState::Error => Some(Banner::Error),
            SubmissionState::Idle | SubmissionState::Processing => None,
        };
        AppViewModel {
            url: self.url.clone(),
            format: self.format,
            status: self.status,
            trigger_enabled: self.can_submit(),
            trigger_label: AppViewModel::trigger_label_for(self.in_flight()),
            banner,
            dirty: self.dirty,
        }
    }

    /// Returns whether a visible change happened since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn set_format(&mut self, format: Format) {
        if self.format != format {
            self.format = format;
            self.dirty = true;
        }
    }

    /// Snapshots the form into a new in-flight request.
    pub(crate) fn begin_submission(&mut self) -> (RequestId, SubmissionRequest) {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        let request = SubmissionRequest::new(self.url.clone(), self.format);
        self.in_flight = Some(InFlight {
            request_id,
            request: request.clone(),
        });
        self.status = SubmissionState::Processing;
        self.dirty = true;
        (request_id, request)
    }

    /// Releases the in-flight slot if `request_id` owns it.
    pub(crate) fn finish_in_flight(&mut self, request_id: RequestId) -> Option<SubmissionRequest> {
        match &self.in_flight {
            Some(flight) if flight.request_id == request_id => {
                self.dirty = true;
                self.in_flight.take().map(|flight| flight.request)
            }
            _ => None,
        }
    }

    pub(crate) fn set_status(&mut self, status: SubmissionState) {
        if self.status != status {
            self.status = status;
            self.dirty = true;
        }
    }

    pub(crate) fn arm_reset(&mut self, request_id: RequestId) {
        self.pending_reset = Some(request_id);
    }

    pub(crate) fn take_pending_reset(&mut self) -> Option<RequestId> {
        self.pending_reset.take()
    }

    /// Applies the reset only for the request that armed it.
    pub(crate) fn apply_reset(&mut self, request_id: RequestId) -> bool {
        if self.pending_reset != Some(request_id) || self.status != SubmissionState::Complete {
            return false;
        }
        self.pending_reset = None;
        self.status = SubmissionState::Idle;
        self.url.clear();
        self.dirty = true;
        true
    }
}
