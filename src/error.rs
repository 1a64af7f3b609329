use thiserror::Error;

/// Errors that abort an export run.
///
/// Per-collection failures (a non-200 on the collection metadata fetch) are
/// not errors at this level: the collection is skipped and the run continues.
/// Everything here is fatal.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write schema file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Appwrite health check failed (status {status}): {body}")]
    HealthCheck { status: u16, body: String },
}
