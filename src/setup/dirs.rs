use std::path::{Path, PathBuf};

/// The processed-data directory could not be created.
#[derive(Debug, thiserror::Error)]
#[error("Unable to create processed data directory {}: {source}", path.display())]
pub struct DirectoryError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The processed-data directory of a project root.
pub fn processed_dir(root: &Path) -> PathBuf {
    root.join("data").join("processed")
}

/// Ensure `<root>/data/processed` exists, creating missing ancestors.
///
/// A pre-existing directory is not an error.
pub fn ensure_processed_dir(root: &Path) -> Result<PathBuf, DirectoryError> {
    let path = processed_dir(root);
    std::fs::create_dir_all(&path).map_err(|source| DirectoryError {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
