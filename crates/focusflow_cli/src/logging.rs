use crate::cli::LogLevel;
use tracing::level_filters::LevelFilter;

/// Installs the stderr subscriber. Stdout belongs to the checklist screen.
pub fn init(level: LogLevel) {
    let filter = level.filter();
    if filter == LevelFilter::OFF {
        return;
    }

    // A second install (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
