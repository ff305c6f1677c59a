use std::sync::Arc;

use anyhow::Context;
use dlany_engine::{
    AnalyticsSettings, AnalyticsSink, EngineHandle, HttpProcessor, NullSink, PostHogSink,
    Processor, ProcessorSettings, SimulatedProcessor,
};
use dlany_logging::dlany_info;
use tokio::runtime::Handle;

use super::config::AppConfig;

/// Wires the processing port and the analytics sink chosen by `config`.
pub fn build_engine(config: &AppConfig, runtime: Handle) -> anyhow::Result<EngineHandle> {
    let processor = build_processor(config)?;
    let sink = build_sink(config, runtime.clone())?;
    Ok(EngineHandle::new(runtime, processor, sink))
}

fn build_processor(config: &AppConfig) -> anyhow::Result<Arc<dyn Processor>> {
    match config.api_url() {
        Some(api_url) => {
            dlany_info!("Processing backend at {}", api_url);
            let settings = ProcessorSettings {
                api_url: api_url.to_string(),
                ..ProcessorSettings::default()
            };
            let processor =
                HttpProcessor::new(settings).context("failed to build processing client")?;
            Ok(Arc::new(processor))
        }
        None => {
            dlany_info!(
                "No backend configured; simulating processing ({:?})",
                config.simulated_delay()
            );
            Ok(Arc::new(SimulatedProcessor::new(config.simulated_delay())))
        }
    }
}

fn build_sink(config: &AppConfig, runtime: Handle) -> anyhow::Result<Arc<dyn AnalyticsSink>> {
    let settings = AnalyticsSettings {
        enabled: config.analytics_enabled(),
        ..AnalyticsSettings::new(config.posthog_key.clone(), config.posthog_host.clone())
    };
    if !settings.is_capturing() {
        dlany_info!("Analytics capture disabled");
        return Ok(Arc::new(NullSink));
    }

    dlany_info!("Analytics capture to {}", settings.host);
    let sink = PostHogSink::new(settings, runtime).context("failed to build analytics client")?;
    Ok(Arc::new(sink))
}
