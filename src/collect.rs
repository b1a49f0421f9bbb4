use super::*;

/// Walks every page of comment threads for `video_id`, keeping the comments
/// whose text contains `keyword` (case-insensitively) in arrival order.
///
/// A failure on any page aborts the walk; comments gathered from earlier pages
/// are dropped along with it.
pub(crate) async fn collect_comments<S: CommentSource>(
  source: &S,
  video_id: &VideoId,
  keyword: Option<&str>,
) -> Result<Vec<Comment>, Error> {
  let keyword = keyword.unwrap_or_default();

  let mut comments = Vec::new();
  let mut page_token: Option<String> = None;
  let mut pages = 0usize;

  loop {
    let page = source
      .fetch_page(video_id, page_token.as_deref())
      .await
      .inspect_err(|error| {
        tracing::warn!(%video_id, pages, %error, "comment retrieval failed");
      })?;

    pages += 1;

    let fetched = page.items.len();

    comments.extend(
      page
        .items
        .into_iter()
        .map(|thread| thread.into_comment(video_id))
        .filter(|comment| comment.matches_keyword(keyword)),
    );

    tracing::debug!(
      %video_id,
      page = pages,
      fetched,
      kept = comments.len(),
      "fetched comment page"
    );

    match page.next_page_token {
      Some(token) => page_token = Some(token),
      None => break,
    }
  }

  tracing::info!(
    %video_id,
    pages,
    participants = comments.len(),
    "collected comments"
  );

  Ok(comments)
}
