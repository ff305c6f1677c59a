use serde::Serialize;
use serde_json::{Map, Value};

use crate::SubmissionRequest;

pub const EVENT_DOWNLOAD_START: &str = "download_start";
pub const EVENT_DOWNLOAD_SUCCESS: &str = "download_success";
pub const EVENT_DOWNLOAD_ERROR: &str = "download_error";

/// A named lifecycle milestone with a free-form property bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn download_start(request: &SubmissionRequest) -> Self {
        Self::with_request(EVENT_DOWNLOAD_START, request)
    }

    pub fn download_success(request: &SubmissionRequest) -> Self {
        Self::with_request(EVENT_DOWNLOAD_SUCCESS, request)
    }

    pub fn download_error(message: &str) -> Self {
        Self::new(EVENT_DOWNLOAD_ERROR).with_property("error", message)
    }

    fn with_request(name: &str, request: &SubmissionRequest) -> Self {
        Self::new(name)
            .with_property("url", request.url.as_str())
            .with_property("format", request.format.as_str())
    }
}
