use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  endpoint: Url,
}

impl Client {
  async fn fetch_page(&self, url: Url) -> Result<Page, BoxError> {
    debug!(%url, "requesting page");

    Ok(
      self
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Page>()
        .await?,
    )
  }

  pub(crate) fn new(endpoint: Url) -> Self {
    Self {
      client: reqwest::Client::new(),
      endpoint,
    }
  }

  async fn next_page(
    &self,
    cursor: Option<Url>,
  ) -> Result<Option<(Vec<Post>, Option<Url>)>, BoxError> {
    let Some(url) = cursor else {
      return Ok(None);
    };

    let page = self.fetch_page(url).await?;

    if page.posts.is_empty() {
      warn!("page contained no posts");
    }

    let next = page.next.as_deref().map(Url::parse).transpose()?;

    Ok(Some((page.posts, next)))
  }

  fn post_url(&self, post_id: &PostId, max_comments: MaxComments) -> Url {
    let mut url = self.endpoint.clone();

    url
      .query_pairs_mut()
      .append_pair("post", post_id.as_str())
      .append_pair("comments", &max_comments.to_string());

    url
  }
}

impl Fetch for Client {
  fn posts<'a>(
    &'a self,
    post_id: &'a PostId,
    max_comments: MaxComments,
  ) -> BoxStream<'a, Result<Post, BoxError>> {
    stream::try_unfold(
      Some(self.post_url(post_id, max_comments)),
      move |cursor| self.next_page(cursor),
    )
    .map_ok(|posts| stream::iter(posts.into_iter().map(Ok::<Post, BoxError>)))
    .try_flatten()
    .boxed()
  }
}
