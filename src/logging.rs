//! Logger initialisation.
//!
//! The library logs through the [`log`] facade. The binary installs [`env_logger`] here, but only
//! when the [`LOG_ENV`] variable is set, so a plain run prints nothing besides the maze.

use std::{env, fs::File, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target, WriteStyle};

/// Environment variable holding the log filter, e.g. `MAZETRACE_LOG=mazetrace=trace`.
pub const LOG_ENV: &str = "MAZETRACE_LOG";

/// Environment variable controlling colored log output.
pub const LOG_STYLE_ENV: &str = "MAZETRACE_LOG_STYLE";

/// Installs the global logger if [`LOG_ENV`] is set.
///
/// Log lines go to standard error unless `log_file` is given, in which case the file is created
/// (or truncated) and receives them instead. The interactive view owns the terminal, so logging
/// to a file is the only way to watch it.
///
/// # Errors
///
/// This function may return errors if the log file cannot be created or a logger is already
/// installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    if env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }

    builder(Env::new().filter(LOG_ENV).write_style(LOG_STYLE_ENV), log_file)?.try_init()?;

    log::debug!("logging initialised");

    Ok(())
}

/// Configures a logger from `env`, writing to `log_file` when one is given.
///
/// File output is never colored.
fn builder(env: Env<'_>, log_file: Option<&Path>) -> Result<Builder> {
    let mut builder = Builder::from_env(env);
    if let Some(path) = log_file {
        let _ = builder
            .target(Target::Pipe(Box::new(File::create(path)?)))
            .write_style(WriteStyle::Never);
    }

    Ok(builder)
}
