use super::*;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid video id regex")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VideoId(String);

impl VideoId {
  pub(crate) fn as_str(&self) -> &str {
    &self.0
  }

  /// Returns the first 11-character identifier following `v=` or `/`.
  ///
  /// The match is deliberately loose: no scheme or host checks are made, so
  /// `youtu.be/<id>`, `/shorts/<id>` and `watch?v=<id>` all resolve.
  pub(crate) fn extract(url: &str) -> Option<Self> {
    VIDEO_ID_RE
      .captures(url)
      .and_then(|captures| captures.get(1))
      .map(|id| Self(id.as_str().to_owned()))
  }

  pub(crate) fn permalink(&self, comment_id: &str) -> String {
    format!("{}&lc={comment_id}", self.watch_url())
  }

  pub(crate) fn watch_url(&self) -> String {
    format!("https://www.youtube.com/watch?v={}", self.0)
  }
}

impl Display for VideoId {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.0)
  }
}
