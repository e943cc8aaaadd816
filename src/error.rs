use super::*;

#[derive(Debug, Error)]
pub(crate) enum GatewayError {
  #[error("item {id} is malformed: {reason}")]
  MalformedItem { id: u64, reason: String },
  #[error("item {id} not found")]
  NotFound { id: u64 },
  #[error("request to {url} failed: {message}")]
  Transport { message: String, url: String },
}

impl GatewayError {
  pub(crate) fn malformed(id: u64, reason: impl Into<String>) -> Self {
    Self::MalformedItem {
      id,
      reason: reason.into(),
    }
  }

  pub(crate) fn transport(url: &str, error: reqwest::Error) -> Self {
    let message = match error.status() {
      Some(status) => format!("HTTP status {status}"),
      None if error.is_timeout() => "timed out".to_string(),
      None => error.to_string(),
    };

    Self::Transport {
      message,
      url: url.to_string(),
    }
  }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
  #[error("{name} must be {expected}, got `{value}`")]
  Invalid {
    expected: &'static str,
    name: &'static str,
    value: String,
  },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ReplyError {
  #[error("Reply cannot be empty!")]
  Empty,
  #[error("comment {id} is not in an open comment section")]
  UnknownComment { id: u64 },
}
