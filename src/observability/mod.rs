//! OpenTelemetry-based observability with file-based trace export.
//!
//! Zellij plugins run inside a WASM sandbox with no network access of their
//! own, so traces cannot be shipped to a collector directly. Instead this
//! module writes OTLP JSON batches to a rotating file under the plugin's data
//! directory, where they can be picked up for offline analysis.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/zontacts/zontacts-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **OTLP Format**: Standard OpenTelemetry Protocol JSON format
//! - **Resource Metadata**: Includes service name and environment info
//!
//! # Configuration
//!
//! Trace level comes from the `trace_level` plugin configuration option and
//! defaults to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod span_formatter;
mod tracer;
mod init;

pub use init::init_tracing;
