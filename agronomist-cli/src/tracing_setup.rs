//! Tracing and OpenTelemetry setup for the agronomist CLI
//!
//! Usage:
//!   agronomist --debug ...                 # Debug logging to console
//!   agronomist --otel serve                # Export traces to OTLP endpoint
//!   RUST_LOG=agronomist_server=debug ...   # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                          # Log filter (overrides config and --debug)
//!   OTEL_EXPORTER_OTLP_ENDPOINT       # OTLP endpoint (default: http://localhost:4317)
//!   OTEL_SERVICE_NAME                 # Service name (default: agronomist)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (used when RUST_LOG is not set)
    pub debug: bool,
    /// Enable OpenTelemetry OTLP export
    pub otel: bool,
    /// Level from the config file, used when neither RUST_LOG nor --debug is set
    pub default_level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            otel: false,
            default_level: "info".to_string(),
        }
    }
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            if self.debug {
                EnvFilter::new("debug")
            } else {
                EnvFilter::try_new(&self.default_level).unwrap_or_else(|_| EnvFilter::new("info"))
            }
        })
    }
}

/// Initialize tracing with console output only (no OTEL)
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

/// Initialize tracing with OpenTelemetry OTLP export
#[cfg(feature = "telemetry")]
pub fn init_tracing_with_otel(config: &TracingConfig) -> Result<()> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::TracerProvider;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .unwrap_or_else(|_| "http://localhost:4317".to_string());

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "agronomist".to_string());

    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint)
        .build()
        .map_err(|e| anyhow!("Failed to create OTLP exporter: {}", e))?;

    let resource = opentelemetry_sdk::Resource::new(vec![KeyValue::new(
        "service.name",
        service_name.clone(),
    )]);

    let provider = TracerProvider::builder()
        .with_batch_exporter(otlp_exporter, opentelemetry_sdk::runtime::Tokio)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer("agronomist");
    let telemetry_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    // Dropping the provider stops export
    let _ = opentelemetry::global::set_tracer_provider(provider);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt_layer)
        .with(telemetry_layer)
        .try_init()
        .map_err(|err| anyhow!(err))?;

    tracing::info!(
        endpoint = %endpoint,
        service = %service_name,
        "OpenTelemetry tracing initialized"
    );

    Ok(())
}

/// Shutdown OpenTelemetry (flush pending spans)
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

/// No-op shutdown when telemetry is disabled
#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

/// Stand-in when the telemetry feature is not compiled in
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing_with_otel(_config: &TracingConfig) -> Result<()> {
    Err(anyhow!("the telemetry feature is not compiled in"))
}

/// Initialize tracing based on configuration
///
/// Chooses between console-only and OTEL based on config.otel flag.
/// A failed OTEL setup falls back to console output.
pub fn init(config: &TracingConfig) -> Result<()> {
    if config.otel {
        return init_or_fallback(config, init_tracing_with_otel);
    }

    init_tracing(config)
}

fn init_or_fallback<F>(config: &TracingConfig, primary: F) -> Result<()>
where
    F: FnOnce(&TracingConfig) -> Result<()>,
{
    match primary(config) {
        Ok(()) => Ok(()),
        Err(err) => {
            // No subscriber yet, so this goes straight to stderr
            eprintln!("warning: OpenTelemetry setup failed ({err:#}); logging to console only");
            init_tracing(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_otel_setup_still_installs_console_subscriber() {
        let config = TracingConfig {
            otel: true,
            ..TracingConfig::default()
        };

        init_or_fallback(&config, |_| Err(anyhow!("exporter unavailable"))).unwrap();
        assert!(tracing::dispatcher::has_been_set());
    }
}
