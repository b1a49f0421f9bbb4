use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  FetchComments {
    api_key: String,
    keyword: Option<String>,
    request_id: u64,
    video_id: VideoId,
  },
  OpenUrl {
    url: String,
  },
}
