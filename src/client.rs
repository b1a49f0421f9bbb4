use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  api_key: String,
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  const API_KEY_HEADER: &str = "X-Goog-Api-Key";
  const MAX_RESULTS: &str = "100";

  pub(crate) fn new(api_key: String, base_url: String) -> Self {
    Self {
      api_key,
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  /// Query parameters for one `commentThreads` page. The API key travels in
  /// a header and never appears in the URL.
  fn query<'a>(
    video_id: &'a VideoId,
    page_token: Option<&'a str>,
  ) -> Vec<(&'static str, &'a str)> {
    let mut query = vec![
      ("part", "snippet"),
      ("videoId", video_id.as_str()),
      ("maxResults", Self::MAX_RESULTS),
      ("textFormat", "plainText"),
    ];

    if let Some(token) = page_token {
      query.push(("pageToken", token));
    }

    query
  }
}

impl CommentSource for Client {
  async fn fetch_page(
    &self,
    video_id: &VideoId,
    page_token: Option<&str>,
  ) -> Result<CommentThreadResponse, FetchError> {
    let response = self
      .client
      .get(format!("{}/commentThreads", self.base_url))
      .header(Self::API_KEY_HEADER, self.api_key.as_str())
      .query(&Self::query(video_id, page_token))
      .send()
      .await?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(FetchError::from_response_body(status.as_u16(), &body));
    }

    Ok(response.json::<CommentThreadResponse>().await?)
  }
}
