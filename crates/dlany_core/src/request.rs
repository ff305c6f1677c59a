use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequence number identifying one submission. The first submission is 1.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Video,
    Audio,
}

impl Format {
    /// Wire name, also used in analytics properties.
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Video => "video",
            Format::Audio => "audio",
        }
    }

    /// Label shown on the format control.
    pub fn label(self) -> &'static str {
        match self {
            Format::Video => "Video MP4",
            Format::Audio => "Audio MP3",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-initiated download job. Serializes as the processing call body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub url: String,
    pub format: Format,
}

impl SubmissionRequest {
    pub fn new(url: impl Into<String>, format: Format) -> Self {
        Self {
            url: url.into(),
            format,
        }
    }
}

/// Success payload of the processing call. The controller only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProcessOutcome {
    #[serde(default)]
    pub download_url: Option<String>,
}
