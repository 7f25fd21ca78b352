use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Installs the global subscriber once.
///
/// `RUST_LOG` picks the level. Without it logging is off, unless a log file is
/// given, in which case `info` is used. Records go to the file when there is one,
/// otherwise to stderr; the TUI never logs to the terminal it draws on.
pub fn setup_logger(log_file: Option<&Path>, terminal_ui: bool) -> io::Result<()> {
    let file = match log_file {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };
    if file.is_none() && terminal_ui {
        return Ok(());
    }

    INIT.call_once(|| {
        let default = if file.is_some() { "info" } else { "off" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        let builder = tracing_subscriber::fmt::Subscriber::builder()
            .compact()
            .with_file(false)
            .with_target(false)
            .with_thread_names(false)
            .with_env_filter(env_filter);

        match file {
            Some(f) => builder.with_ansi(false).with_writer(Mutex::new(f)).finish().init(),
            None => builder.with_writer(io::stderr).finish().init(),
        }
    });
    Ok(())
}
