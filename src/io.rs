use crate::polymer::Polymer;
use std::path::{Path, PathBuf};

/// The named input could not be read; there is nothing to fall back to.
#[derive(Debug, thiserror::Error)]
#[error("input {} is unavailable", .name.display())]
pub struct InputUnavailable {
    pub name: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Reads a whole puzzle input as a single polymer, dropping the trailing line terminators.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<Polymer, InputUnavailable> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| InputUnavailable {
        name: path.to_path_buf(),
        source,
    })?;

    let line = contents.trim_end_matches(|ch| ch == '\n' || ch == '\r');

    log::debug!("read {} units from {}", line.len(), path.display());

    Ok(Polymer::from(line))
}
