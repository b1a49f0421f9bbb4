use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
  pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
  #[serde(default)]
  pub(crate) message: String,
}
