use super::*;

#[derive(Debug, Error)]
pub(crate) enum Error {
  #[error(
    "not enough participants: {required} required but only {available} available"
  )]
  InsufficientParticipants { available: usize, required: usize },
  #[error("no video id found in `{url}`")]
  InvalidUrl { url: String },
  #[error("at least one winner must be drawn")]
  NoWinnersRequested,
  #[error("could not retrieve comments: {source}")]
  Retrieval {
    #[source]
    source: FetchError,
  },
}

impl From<FetchError> for Error {
  fn from(source: FetchError) -> Self {
    Self::Retrieval { source }
  }
}
