use super::*;

/// A paginated listing of top-level comment threads for a video.
pub(crate) trait CommentSource {
  fn fetch_page(
    &self,
    video_id: &VideoId,
    page_token: Option<&str>,
  ) -> impl Future<Output = Result<CommentThreadResponse, FetchError>> + Send;
}
