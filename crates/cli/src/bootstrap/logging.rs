use fertibase_domain::Config;
use tracing_subscriber::EnvFilter;

/// Where log lines go. Catalog commands keep stdout for their output.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

/// `RUST_LOG` wins over `logging.level` when set.
pub fn init_logging(config: &Config, target: LogTarget) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = match (config.logging.json, target) {
        (true, LogTarget::Stdout) => builder.json().try_init(),
        (true, LogTarget::Stderr) => builder.json().with_writer(std::io::stderr).try_init(),
        (false, LogTarget::Stdout) => builder.try_init(),
        (false, LogTarget::Stderr) => builder.with_writer(std::io::stderr).try_init(),
    };
}
