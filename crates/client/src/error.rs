/// Errors from fetching the character list.
///
/// Each variant's `Display` text is what ends up on screen, so the
/// messages carry no extra decoration.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed (DNS, connection, TLS, ...).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The body was not valid JSON or did not have the expected shape.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Short machine-friendly kind, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::Status { .. } => "status",
            Self::Parse(_) => "parse",
        }
    }
}
