use super::*;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("{message} (HTTP {status})")]
  Api { message: String, status: u16 },
  #[error("{}", Self::describe(.0))]
  Http(#[source] reqwest::Error),
  #[error("request failed with HTTP {status}")]
  Status { status: u16 },
}

impl FetchError {
  /// The request error followed by each of its causes, joined with `: `.
  fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();

    let mut source = error.source();

    while let Some(cause) = source {
      message.push_str(": ");
      message.push_str(&cause.to_string());
      source = cause.source();
    }

    message
  }

  pub(crate) fn from_response_body(status: u16, body: &str) -> Self {
    match serde_json::from_str::<ApiErrorResponse>(body) {
      Ok(response) if !response.error.message.is_empty() => Self::Api {
        message: response.error.message,
        status,
      },
      _ => Self::Status { status },
    }
  }
}

impl From<reqwest::Error> for FetchError {
  fn from(error: reqwest::Error) -> Self {
    Self::Http(error.without_url())
  }
}
