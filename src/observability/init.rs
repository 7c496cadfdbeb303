//! Tracing initialization and subscriber setup.
//!
//! Wires the `tracing` macros through an OpenTelemetry layer into the
//! file-based OTLP exporter.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans based on configured trace level
/// 2. Exports spans to OpenTelemetry
/// 3. Serializes spans to OTLP JSON format
/// 4. Writes to rotating file with backups
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// Traces are written to `~/.local/share/zellij/zontacts/zontacts-otlp.json`,
/// reached through the `/host` mount of Zellij's sandbox filesystem.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently fails if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        // Observability is optional; run untraced if the directory is unusable
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        "Zontacts",
    )]);

    let trace_file = data_dir.join("zontacts-otlp.json");
    let provider = tracer::create_tracer_provider(trace_file, resource);

    let tracer = provider.tracer("Zontacts");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
