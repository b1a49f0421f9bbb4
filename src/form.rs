use super::*;

pub(crate) struct Form {
  alternates: String,
  api_key: String,
  keyword: String,
  video_url: String,
  winners: String,
}

impl Form {
  pub(crate) fn alternates(&self) -> Result<usize, String> {
    Self::parse_count(Focus::Alternates, &self.alternates)
  }

  pub(crate) fn api_key(&self) -> &str {
    self.api_key.trim()
  }

  fn buffer(&self, focus: Focus) -> Option<&String> {
    match focus {
      Focus::Alternates => Some(&self.alternates),
      Focus::ApiKey => Some(&self.api_key),
      Focus::Keyword => Some(&self.keyword),
      Focus::Participants => None,
      Focus::VideoUrl => Some(&self.video_url),
      Focus::Winners => Some(&self.winners),
    }
  }

  fn buffer_mut(&mut self, focus: Focus) -> Option<&mut String> {
    match focus {
      Focus::Alternates => Some(&mut self.alternates),
      Focus::ApiKey => Some(&mut self.api_key),
      Focus::Keyword => Some(&mut self.keyword),
      Focus::Participants => None,
      Focus::VideoUrl => Some(&mut self.video_url),
      Focus::Winners => Some(&mut self.winners),
    }
  }

  pub(crate) fn delete_char(&mut self, focus: Focus) {
    if let Some(buffer) = self.buffer_mut(focus) {
      buffer.pop();
    }
  }

  /// The value shown on screen; the API key is masked.
  pub(crate) fn display_value(&self, focus: Focus) -> String {
    let Some(buffer) = self.buffer(focus) else {
      return String::new();
    };

    if focus == Focus::ApiKey {
      "•".repeat(buffer.chars().count())
    } else {
      buffer.clone()
    }
  }

  pub(crate) fn insert(&mut self, focus: Focus, ch: char) {
    if focus.is_count() && !ch.is_ascii_digit() {
      return;
    }

    if let Some(buffer) = self.buffer_mut(focus) {
      buffer.push(ch);
    }
  }

  /// Surrounding whitespace is not part of the keyword, so `" participo"`
  /// filters the same as `"participo"`, and a blank keyword disables the
  /// filter.
  pub(crate) fn keyword(&self) -> Option<&str> {
    Some(self.keyword.trim()).filter(|keyword| !keyword.is_empty())
  }

  pub(crate) fn new(api_key: Option<String>) -> Self {
    Self {
      alternates: "0".to_string(),
      api_key: api_key.unwrap_or_default(),
      keyword: String::new(),
      video_url: String::new(),
      winners: "1".to_string(),
    }
  }

  fn parse_count(focus: Focus, value: &str) -> Result<usize, String> {
    value.trim().parse::<usize>().map_err(|error| match error.kind() {
      IntErrorKind::PosOverflow => format!("{} is too large", focus.label()),
      _ => format!("{} must be a whole number", focus.label()),
    })
  }

  pub(crate) fn video_url(&self) -> &str {
    self.video_url.trim()
  }

  pub(crate) fn winners(&self) -> Result<usize, String> {
    Self::parse_count(Focus::Winners, &self.winners)
  }
}
