//! dlany engine: processing port, analytics sink and effect execution.
mod analytics;
mod controller;
mod engine;
mod processor;
mod types;

pub use analytics::{
    AnalyticsError, AnalyticsSettings, AnalyticsSink, NullSink, PostHogSink,
    DEFAULT_ANALYTICS_HOST,
};
pub use controller::SubmissionController;
pub use engine::EngineHandle;
pub use processor::{HttpProcessor, Processor, ProcessorSettings, SimulatedProcessor};
pub use types::{EngineEvent, ProcessError};
