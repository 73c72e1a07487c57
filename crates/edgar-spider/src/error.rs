use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpiderError>;

/// Failures of the resolution pipeline. None are recovered locally; each one aborts the run.
#[derive(Debug, Error)]
pub enum SpiderError {
    /// The request never produced a usable body: connection failure, timeout, non-2xx status.
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// Malformed input: selectors, URLs, hrefs or identifiers that cannot be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    /// The page parsed, but an element it should contain is absent.
    #[error("not found: {0}")]
    NotFound(String),
}

impl SpiderError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SpiderError::Transport { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SpiderError::NotFound(_))
    }

    pub(crate) fn transport(url: &str, err: reqwest::Error) -> Self {
        SpiderError::Transport {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
