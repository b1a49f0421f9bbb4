use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
  pub(crate) id: String,
  pub(crate) snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThreadSnippet {
  pub(crate) top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopLevelComment {
  pub(crate) id: Option<String>,
  pub(crate) snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
  #[serde(default)]
  pub(crate) author_display_name: String,
  #[serde(default)]
  pub(crate) text_display: String,
}

impl CommentThread {
  pub(crate) fn into_comment(self, video_id: &VideoId) -> Comment {
    let TopLevelComment { id, snippet } = self.snippet.top_level_comment;

    let id = id.unwrap_or(self.id);

    Comment {
      author: snippet.author_display_name,
      permalink: Some(video_id.permalink(&id)),
      id,
      text: snippet.text_display,
    }
  }
}
