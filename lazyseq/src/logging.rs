use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, logging to stderr.
///
/// `RUST_LOG` wins unless a verbosity flag was passed explicitly.
pub(crate) fn init(level: LevelFilter, explicit: bool) -> anyhow::Result<()> {
    let filter = if explicit {
        build_filter(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| build_filter(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn build_filter(level: LevelFilter) -> EnvFilter {
    let level = level.to_string().to_lowercase();
    EnvFilter::new(format!("warn,lazyseq={level},lazyseq_core={level}"))
}
