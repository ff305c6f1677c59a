use std::sync::Arc;

use dlany_core::AnalyticsEvent;
use dlany_logging::{dlany_debug, dlany_warn};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const DEFAULT_ANALYTICS_HOST: &str = "https://app.posthog.com";

/// Receives lifecycle events. Delivery is fire-and-forget.
pub trait AnalyticsSink: Send + Sync {
    fn capture(&self, event: AnalyticsEvent);
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("analytics capture is disabled")]
    Disabled,
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
}

#[derive(Clone)]
pub struct AnalyticsSettings {
    pub api_key: Option<String>,
    pub host: String,
    /// Cleared in development so local runs are never tracked.
    pub enabled: bool,
    /// Anonymous id attached to every event of this process.
    pub distinct_id: String,
    pub now_utc: Arc<dyn Fn() -> String + Send + Sync>,
}

impl AnalyticsSettings {
    pub fn new(api_key: Option<String>, host: impl Into<String>) -> Self {
        Self {
            api_key,
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    fn capture_endpoint(&self) -> String {
        format!("{}/capture/", self.host.trim_end_matches('/'))
    }
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_ANALYTICS_HOST.to_string(),
            enabled: true,
            distinct_id: uuid::Uuid::new_v4().to_string(),
            now_utc: Arc::new(|| chrono::Utc::now().to_rfc3339()),
        }
    }
}

impl std::fmt::Debug for AnalyticsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("enabled", &self.enabled)
            .field("distinct_id", &self.distinct_id)
            .finish()
    }
}

#[derive(Serialize)]
struct CaptureBody<'a> {
    api_key: &'a str,
    event: &'a str,
    distinct_id: &'a str,
    properties: &'a Map<String, Value>,
    timestamp: String,
}

/// Sends events to a PostHog-compatible `/capture/` endpoint.
#[derive(Clone)]
pub struct PostHogSink {
    settings: Arc<AnalyticsSettings>,
    client: reqwest::Client,
    runtime: tokio::runtime::Handle,
}

impl PostHogSink {
    pub fn new(
        settings: AnalyticsSettings,
        runtime: tokio::runtime::Handle,
    ) -> Result<Self, AnalyticsError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| AnalyticsError::Network(err.to_string()))?;
        Ok(Self {
            settings: Arc::new(settings),
            client,
            runtime,
        })
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }

    /// Delivers one event and waits for the response.
    pub async fn send(&self, event: &AnalyticsEvent) -> Result<(), AnalyticsError> {
        let api_key = match self.settings.api_key.as_deref() {
            Some(key) if self.settings.is_capturing() => key,
            _ => return Err(AnalyticsError::Disabled),
        };
        let body = CaptureBody {
            api_key,
            event: &event.name,
            distinct_id: &self.settings.distinct_id,
            properties: &event.properties,
            timestamp: (self.settings.now_utc)(),
        };

        let response = self
            .client
            .post(self.settings.capture_endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|err| AnalyticsError::Network(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::HttpStatus(status.as_u16()));
        }
        Ok(())
    }
}

impl AnalyticsSink for PostHogSink {
    fn capture(&self, event: AnalyticsEvent) {
        if !self.settings.is_capturing() {
            dlany_debug!("Analytics disabled; dropping {}", event.name);
            return;
        }
        let sink = self.clone();
        self.runtime.spawn(async move {
            if let Err(err) = sink.send(&event).await {
                dlany_warn!("Failed to deliver analytics event {}: {}", event.name, err);
            }
        });
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn capture(&self, event: AnalyticsEvent) {
        dlany_debug!("Discarding analytics event {}", event.name);
    }
}
