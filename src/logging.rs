// src/logging.rs

use crate::config::Config;
use crate::errors::FolioResult;
use chrono::{DateTime, Utc};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use log::{info, warn};

/// Details of one completion call, recorded after the response (or failure)
/// comes back.
#[derive(Debug, Clone)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub response_status: Option<u16>,
    pub response_time_ms: u128,
}

/// Starts file logging. The terminal belongs to the UI, so nothing is written
/// to stderr. `RUST_LOG` wins over the configured level. Keep the returned
/// handle alive for the lifetime of the program.
pub fn init_logging(config: &Config) -> FolioResult<LoggerHandle> {
    let dir = config.log_dir();
    let handle = Logger::try_with_env_or_str(&config.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&dir)
                .basename("folio")
                .suppress_timestamp(),
        )
        .append()
        .format(flexi_logger::detailed_format)
        .start()?;

    info!("Logging to {}", dir.display());
    Ok(handle)
}

pub fn log_api_call(log: &ApiCallLog) {
    let status = log
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "no response".to_string());

    let entry = format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        status,
        log.response_time_ms
    );

    match log.response_status {
        Some(code) if (200..300).contains(&code) => info!("{}", entry),
        _ => warn!("{}", entry),
    }
}
