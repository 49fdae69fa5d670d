use gloss_config::log::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr, stdout is reserved for JSON.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("failed to install logger: {e}");
    }
}
