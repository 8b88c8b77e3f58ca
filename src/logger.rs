use super::*;

/// Diagnostics from this crate follow `level`; dependencies such as hyper and
/// reqwest stay at warn.
fn builder(level: LevelFilter, target: Target) -> env_logger::Builder {
  let mut builder = env_logger::Builder::new();

  builder
    .filter_level(LevelFilter::Warn)
    .filter_module(env!("CARGO_CRATE_NAME"), level)
    .target(target)
    .format(|buf, record| {
      writeln!(
        buf,
        "[{}] {}",
        record.level().as_str().to_lowercase(),
        record.args()
      )
    });

  builder
}

/// Installs the diagnostic logger. Lines look like `[warn] message`, so they
/// read naturally when interleaved with progress output. `RUST_LOG`
/// overrides the level chosen on the command line.
pub(crate) fn init(level: LevelFilter, target: Target) {
  if let Err(error) = builder(level, target).parse_default_env().try_init() {
    eprintln!("failed to install logger: {error}");
  }
}
