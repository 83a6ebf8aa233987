use {
  anyhow::{Context, bail},
  archive::Archive,
  arguments::Arguments,
  clap::{ArgAction, ArgGroup, Parser},
  client::Client,
  comment::Comment,
  crossterm::style::Stylize,
  csv_writer::{csv_path, write_csv},
  error::Error,
  export::Export,
  fetch::{BoxError, Fetch},
  flat_row::FlatRow,
  flatten::flatten,
  futures::stream::{self, BoxStream, StreamExt, TryStreamExt},
  max_comments::MaxComments,
  page::Page,
  post::Post,
  post_id::PostId,
  regex::Regex,
  reply::Reply,
  reqwest::Url,
  request::Request,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  source::Source,
  std::{
    backtrace::BacktraceStatus,
    borrow::Cow,
    fmt::{self, Display, Formatter},
    fs::{self, File},
    io::{self, BufWriter, IsTerminal, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    process,
    sync::LazyLock,
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{deserialize_list, deserialize_optional_string, deserialize_text},
};

mod archive;
mod arguments;
mod client;
mod comment;
mod csv_writer;
mod error;
mod export;
mod fetch;
mod flat_row;
mod flatten;
mod max_comments;
mod page;
mod pipeline;
mod post;
mod post_id;
mod reply;
mod request;
mod source;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn error_label(error: &anyhow::Error) -> String {
  match error.downcast_ref::<Error>() {
    Some(error) => format!("{} error:", error.category()),
    None => "error:".to_string(),
  }
}

fn initialize_logging(filter: EnvFilter) {
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(io::stderr)
    .init();
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  initialize_logging(arguments.log_filter());

  let source = arguments.source()?;

  let export = pipeline::run(
    &source,
    &arguments.post_id,
    &arguments.max_comments,
    &arguments.output,
  )
  .await?;

  println!(
    "Comments scraped successfully and saved to '{}' ({} rows).",
    export.path.display(),
    export.rows
  );

  Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    let label = error_label(&error);

    if use_color {
      eprintln!("{} {error}", label.bold().red());
    } else {
      eprintln!("{label} {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
