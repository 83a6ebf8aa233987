use super::*;

#[derive(Deserialize)]
#[serde(untagged)]
enum Dump {
  Many(Vec<Post>),
  One(Post),
}

pub(crate) struct Archive {
  path: PathBuf,
}

impl Archive {
  fn load(&self) -> Result<Vec<Post>, BoxError> {
    info!(path = %self.path.display(), "reading archive");

    let data = fs::read(&self.path).with_context(|| {
      format!("could not read archive `{}`", self.path.display())
    })?;

    let dump = serde_json::from_slice::<Dump>(&data).with_context(|| {
      format!("could not parse archive `{}`", self.path.display())
    })?;

    Ok(match dump {
      Dump::Many(posts) => posts,
      Dump::One(post) => vec![post],
    })
  }

  pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl Fetch for Archive {
  fn posts<'a>(
    &'a self,
    _post_id: &'a PostId,
    max_comments: MaxComments,
  ) -> BoxStream<'a, Result<Post, BoxError>> {
    stream::once(async move { self.load() })
      .map_ok(move |posts| {
        stream::iter(posts.into_iter().map(move |post| {
          Ok::<Post, BoxError>(post.truncate_comments(max_comments))
        }))
      })
      .try_flatten()
      .boxed()
  }
}
