use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use std::sync::OnceLock;

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// Starts file logging under `logs/`, mirrored to stdout, warnings and errors to stderr.
///
/// Calling it again after a successful start is a no-op.
pub fn try_setup_logging(base_level: &str) -> anyhow::Result<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let handle = Logger::try_with_str(base_level)?
        .log_to_file(
            FileSpec::default()
                .directory("logs")
                .basename("pixel_morph"),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            Criterion::Size(1024 * 1024), //1MB
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    // A concurrent caller may have won the race; its handle stays in charge.
    let _ = LOGGER.set(handle);
    Ok(())
}

