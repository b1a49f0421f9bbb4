use super::*;

pub(crate) struct PendingFetch {
  pub(crate) keyword: Option<String>,
  pub(crate) request_id: u64,
  pub(crate) video_id: VideoId,
}
