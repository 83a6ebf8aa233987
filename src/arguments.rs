use super::*;

/// Export the comment thread of a post to a CSV file.
#[derive(Debug, Parser)]
#[command(name = "fbcomments", version, about, long_about = None)]
#[command(group(
  ArgGroup::new("source").required(true).args(["archive", "endpoint"])
))]
pub(crate) struct Arguments {
  /// Read posts from a JSON dump instead of the network
  #[arg(long, env = "FBCOMMENTS_ARCHIVE", value_name = "FILE")]
  pub(crate) archive: Option<PathBuf>,

  /// URL of the endpoint that serves post records
  #[arg(long, env = "FBCOMMENTS_ENDPOINT", value_name = "URL")]
  pub(crate) endpoint: Option<Url>,

  /// Maximum number of comments to request
  #[arg(long, short = 'n', value_name = "N")]
  pub(crate) max_comments: String,

  /// Output file name; `.csv` is appended when missing
  #[arg(long, short, value_name = "NAME")]
  pub(crate) output: String,

  /// Post id from the post URL, e.g. `%2FgroupName%2Fposts%2Fpfbid...&`
  pub(crate) post_id: String,

  /// Increase log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(long, short, action = ArgAction::Count)]
  pub(crate) verbose: u8,
}

impl Arguments {
  pub(crate) fn log_filter(&self) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      EnvFilter::new(match self.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
      })
    })
  }

  pub(crate) fn source(&self) -> Result<Source> {
    match (&self.archive, &self.endpoint) {
      (Some(path), None) => Ok(Source::Archive(Archive::new(path.clone()))),
      (None, Some(endpoint)) => {
        Ok(Source::Client(Client::new(endpoint.clone())))
      }
      _ => bail!("exactly one of --archive or --endpoint is required"),
    }
  }
}
