use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("cannot open log file {path}: {source}")]
pub struct LogError {
    path: PathBuf,
    source: std::io::Error,
}

/// `<cache dir>/huedots/huedots.log`
pub fn default_log_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("huedots").join("huedots.log")
}

/// Route `log` output to a file. The terminal belongs to the UI, so nothing
/// goes to stderr. Level comes from `RUST_LOG`, default `info`.
pub fn init(path: &Path) -> Result<(), LogError> {
    let open = || -> std::io::Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        File::create(path)
    };
    let file = open().map_err(|source| LogError {
        path: path.to_path_buf(),
        source,
    })?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
