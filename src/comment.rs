#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Comment {
  pub(crate) author: String,
  pub(crate) id: String,
  pub(crate) permalink: Option<String>,
  pub(crate) text: String,
}

impl Comment {
  pub(crate) fn matches_keyword(&self, keyword: &str) -> bool {
    keyword.is_empty()
      || self.text.to_lowercase().contains(&keyword.to_lowercase())
  }
}
