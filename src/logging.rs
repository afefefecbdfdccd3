//! Logger initialisation.

use std::{fs::File, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Env, Target};

/// Installs the global logger, writing to `log_file`.
///
/// The interface owns the terminal, so log records are only ever written to a file. Without a file
/// no logger is installed and every log macro is a no-op. The level filter is read from `RUST_LOG`
/// and defaults to `info`.
///
/// # Errors
///
/// This function may return errors if the log file cannot be created or a logger is already set.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_file_is_noop() {
        assert!(init(None).is_ok(), "no log file should not fail");
    }

    #[test]
    fn test_init_with_unwritable_path() {
        let result = init(Some(Path::new("/nonexistent-directory/maze.log")));
        assert!(result.is_err(), "missing parent directory should fail");
    }
}
