use flexi_logger::{Logger, LoggerHandle};

/// Starts logging to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `warn`, or `debug` when verbose.
/// The returned handle must be kept alive for the duration of the process.
pub fn init_logging(verbose: bool) -> anyhow::Result<LoggerHandle> {
    let default_level = if verbose { "debug" } else { "warn" };
    let handle = Logger::try_with_env_or_str(default_level)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
