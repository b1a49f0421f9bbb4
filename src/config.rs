use super::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) api_base_url: String,
  pub(crate) api_key: Option<String>,
  pub(crate) log_file: Option<PathBuf>,
}

impl Config {
  const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

  pub(crate) fn from_env() -> Self {
    Self::from_lookup(|name| env::var(name).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let non_empty =
      |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    Self {
      api_base_url: non_empty("YOUTUBE_API_BASE_URL")
        .unwrap_or_else(|| Self::DEFAULT_API_BASE_URL.to_string()),
      api_key: non_empty("YOUTUBE_API_KEY"),
      log_file: non_empty("GIVEAWAY_LOG_FILE").map(PathBuf::from),
    }
  }
}
