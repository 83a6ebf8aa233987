use super::*;

pub(crate) async fn run<F: Fetch>(
  fetcher: &F,
  post_id: &str,
  max_comments: &str,
  output: &str,
) -> Result<Export, Error> {
  let request = Request::new(post_id, max_comments, output)?;

  info!(
    post_id = %request.post_id,
    max_comments = %request.max_comments,
    output = %request.output.display(),
    "validated request"
  );

  export(fetcher, &request).await
}

pub(crate) async fn export<F: Fetch>(
  fetcher: &F,
  request: &Request,
) -> Result<Export, Error> {
  info!("fetching post");

  let post = fetcher
    .posts(&request.post_id, request.max_comments)
    .next()
    .await
    .ok_or_else(|| Error::Fetch {
      source: "no post returned".into(),
    })?
    .map_err(|source| Error::Fetch { source })?;

  info!(
    post_id = post.post_id.as_deref().unwrap_or("unknown"),
    "received post"
  );

  let rows = flatten(post.into_comments()?);

  info!(rows = rows.len(), "flattened comment thread");

  write_csv(&request.output, &rows)?;

  info!(path = %request.output.display(), "wrote csv");

  Ok(Export {
    path: request.output.clone(),
    rows: rows.len(),
  })
}
