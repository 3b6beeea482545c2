use chrono::Local;
use eyre::Result;
use fern::Dispatch;
use log::LevelFilter;

/// Sets up the application logger on stderr, leaving stdout for command output.
///
/// # Arguments
/// * `level` - Explicit level; when `None`, read from `RUST_LOG` or default to Info
///
/// # Errors
/// * If a logger has already been installed
pub fn setup_logger(level: Option<LevelFilter>) -> Result<()> {
    let level = level.unwrap_or_else(|| {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info)
    });

    Dispatch::new()
        .level(level)
        .chain(std::io::stderr())
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ));
        })
        .apply()?;
    Ok(())
}
