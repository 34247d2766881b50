use std::{fs, path::Path};

use serde::Serialize;
use tracing::info;

use crate::error::CatalogError;

/// Writes `value` as pretty-printed JSON (two-space indentation), replacing any existing file.
pub fn write_json<T>(path: &Path, value: &T) -> Result<(), CatalogError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value).map_err(|source| CatalogError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| CatalogError::OutputWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| CatalogError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "wrote");
    Ok(())
}
