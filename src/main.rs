use {
  anyhow::Context,
  arguments::Arguments,
  clap::{ArgAction, Parser, ValueEnum, builder::FalseyValueParser},
  client::Client,
  crossterm::style::Stylize,
  entry::Entry,
  env_logger::Target,
  listing::Listing,
  log::LevelFilter,
  pipeline::{Outcome, Pipeline},
  ranking::rank,
  report::Report,
  serde::Serialize,
  serde_json::{Map, Value},
  source::Source,
  std::{
    cmp::Reverse,
    fmt::{self, Display},
    io::{self, IsTerminal, Write},
    time::Duration,
  },
  utils::{coerce_count, coerce_text, permalink},
};

mod arguments;
mod client;
mod entry;
mod listing;
mod logger;
mod pipeline;
mod ranking;
mod report;
mod source;
mod utils;

const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

const INITIAL_BATCH_SIZE: usize = 30;

const PERMALINK_BASE_URL: &str = "https://news.ycombinator.com/item?id=";

type RawItem = Map<String, Value>;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn render_error(error: &anyhow::Error, use_color: bool) -> String {
  let style = |text: &str| {
    if use_color {
      text.bold().red().to_string()
    } else {
      text.to_string()
    }
  };

  let mut rendered = format!("{} {error}\n", style("error:"));

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    rendered.push_str(&format!("\n{}\n", style("because:")));

    for cause in causes {
      rendered.push_str(&format!("{} {cause}\n", style("-")));
    }
  }

  rendered
}

async fn run(arguments: Arguments) -> Result<Outcome> {
  let client = Client::new(&arguments.base_url, arguments.timeout())?;

  let color =
    !arguments.no_color && !arguments.json && io::stdout().is_terminal();

  let pipeline = Pipeline {
    color,
    delay: arguments.delay(),
    json: arguments.json,
    limit: arguments.limit,
    listing: arguments.listing,
    source: client,
  };

  let mut out = io::stdout();

  let outcome = if arguments.json {
    pipeline.run(&mut out, &mut io::stderr()).await
  } else {
    pipeline.run(&mut out, &mut io::stdout()).await
  };

  let outcome = outcome.context("failed to write ranking")?;

  out.flush()?;

  Ok(outcome)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  let arguments = Arguments::parse();

  logger::init(
    arguments.log_level(),
    if arguments.json {
      Target::Stderr
    } else {
      Target::Stdout
    },
  );

  match run(arguments).await {
    Ok(Outcome::Ranked(entries)) => {
      log::debug!("printed {} ranked stories", entries.len());
    }
    Ok(outcome) => log::debug!("finished without a ranking: {outcome:?}"),
    Err(error) => {
      eprint!("{}", render_error(&error, io::stderr().is_terminal()));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_error_lists_causes_in_order() {
    let error = anyhow::anyhow!("connection reset")
      .context("failed to write ranking");

    assert_eq!(
      render_error(&error, false),
      "error: failed to write ranking\n\nbecause:\n- connection reset\n"
    );
  }

  #[test]
  fn render_error_without_causes_is_one_line() {
    assert_eq!(
      render_error(&anyhow::anyhow!("boom"), false),
      "error: boom\n"
    );
  }
}
