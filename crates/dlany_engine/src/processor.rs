use std::time::Duration;

use dlany_core::{ProcessOutcome, SubmissionRequest};
use dlany_logging::{dlany_debug, dlany_info};

use crate::ProcessError;

/// The external call that retrieves and converts media for one submission.
#[async_trait::async_trait]
pub trait Processor: Send + Sync {
    async fn process(&self, request: &SubmissionRequest) -> Result<ProcessOutcome, ProcessError>;
}

/// Stand-in for the backend: waits a fixed delay, then resolves.
#[derive(Debug, Clone)]
pub struct SimulatedProcessor {
    delay: Duration,
    failure: Option<String>,
}

impl SimulatedProcessor {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2500);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    /// Resolves with `message` as the failure after `delay`.
    pub fn failing(delay: Duration, message: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(message.into()),
        }
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait::async_trait]
impl Processor for SimulatedProcessor {
    async fn process(&self, request: &SubmissionRequest) -> Result<ProcessOutcome, ProcessError> {
        dlany_debug!(
            "Simulating processing of {} ({}) for {:?}",
            request.url,
            request.format,
            self.delay
        );
        tokio::time::sleep(self.delay).await;
        match &self.failure {
            Some(message) => Err(ProcessError::Failed(message.clone())),
            None => Ok(ProcessOutcome::default()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessorSettings {
    /// Base url of the processing backend; `/process` is appended.
    pub api_url: String,
    /// `None` leaves connecting unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ProcessorSettings {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:7860".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// Talks to the processing backend over HTTP.
///
/// `POST {api_url}/process` with `{"url": ..., "format": "video"|"audio"}`.
/// Any 2xx is success; the body may carry `{"download_url": ...}` or be empty.
#[derive(Debug, Clone)]
pub struct HttpProcessor {
    settings: ProcessorSettings,
    client: reqwest::Client,
}

impl HttpProcessor {
    pub fn new(settings: ProcessorSettings) -> Result<Self, ProcessError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ProcessError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/process", self.settings.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl Processor for HttpProcessor {
    async fn process(&self, request: &SubmissionRequest) -> Result<ProcessOutcome, ProcessError> {
        let endpoint = self.endpoint();
        dlany_info!("POST {} format={}", endpoint, request.format);

        let response = self
            .client
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProcessError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(ProcessOutcome::default());
        }
        serde_json::from_slice(&body).map_err(|err| ProcessError::InvalidResponse(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProcessError {
    if err.is_timeout() {
        return ProcessError::Timeout;
    }
    ProcessError::Network(err.to_string())
}
