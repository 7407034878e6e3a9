use std::path::Path;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

/// Parse a level name such as `info` or `trace` (`off` disables logging)
pub fn parse_level(level: &str) -> miette::Result<LevelFilter> {
    LevelFilter::from_str(level).map_err(|e| {
        miette::miette!(
            help = "Use one of: off, error, warn, info, debug, trace",
            "Invalid log level '{}': {}",
            level,
            e
        )
    })
}

/// Install a global subscriber that appends to `path`
///
/// The terminal belongs to the editor while it runs, so events are never
/// written to stdout or stderr.
pub fn init_file_logging(path: impl AsRef<Path>, level: LevelFilter) -> miette::Result<()> {
    let path = path.as_ref();

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't use log file {}: it has no file name", path.display())
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let appender = tracing_appender::rolling::never(parent, file_name);

    tracing_subscriber::fmt()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_max_level(level)
        .try_init()
        .map_err(|e| miette::miette!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), %level, "logging initialized");
    Ok(())
}
