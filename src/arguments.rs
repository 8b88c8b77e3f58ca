use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-top",
  version,
  about = "Rank trending Hacker News stories by discussion size"
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "HN_API_BASE_URL",
    default_value = DEFAULT_BASE_URL,
    help = "Hacker News API base URL"
  )]
  pub(crate) base_url: String,
  #[arg(
    long,
    default_value_t = 100,
    help = "Pause between item requests, in milliseconds"
  )]
  pub(crate) delay: u64,
  #[arg(long, help = "Print the ranking as JSON instead of text")]
  pub(crate) json: bool,
  #[arg(
    long,
    default_value_t = INITIAL_BATCH_SIZE,
    help = "Maximum number of stories to fetch"
  )]
  pub(crate) limit: usize,
  #[arg(long, value_enum, default_value_t = Listing::Top)]
  pub(crate) listing: Listing,
  #[arg(
    long,
    env = "NO_COLOR",
    value_parser = FalseyValueParser::new(),
    help = "Disable styled output"
  )]
  pub(crate) no_color: bool,
  #[arg(
    long,
    default_value_t = 10,
    help = "Per-request timeout, in seconds"
  )]
  pub(crate) timeout: u64,
  #[arg(short, long, action = ArgAction::Count, help = "Raise log verbosity")]
  pub(crate) verbose: u8,
}

impl Arguments {
  pub(crate) fn delay(&self) -> Duration {
    Duration::from_millis(self.delay)
  }

  pub(crate) fn log_level(&self) -> LevelFilter {
    match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  }

  pub(crate) fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout)
  }
}
