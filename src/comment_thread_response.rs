use super::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentThreadResponse {
  #[serde(default)]
  pub(crate) items: Vec<CommentThread>,
  pub(crate) next_page_token: Option<String>,
}
