//! Mod-owned data folder: the hidden-stats save file and the locale dump.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::localization::StringTable;

#[derive(Debug)]
pub enum DataFolderError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for DataFolderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFolderError::Io(e) => write!(f, "I/O error: {e}"),
            DataFolderError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for DataFolderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataFolderError::Io(e) => Some(e),
            DataFolderError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for DataFolderError {
    fn from(e: std::io::Error) -> Self {
        DataFolderError::Io(e)
    }
}

impl From<serde_json::Error> for DataFolderError {
    fn from(e: serde_json::Error) -> Self {
        DataFolderError::Json(e)
    }
}

/// File name of the dump for `locale`.
pub fn locale_dump_name(locale: &str) -> String {
    format!("locale-{locale}.json")
}

/// Write `bytes` to `<data_dir>/<name>`, creating the folder first.
pub fn write_data_file(
    data_dir: &Path,
    name: &str,
    bytes: &[u8],
) -> Result<PathBuf, DataFolderError> {
    fs::create_dir_all(data_dir)?;
    let path = data_dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Contents of `<data_dir>/<name>`, or `None` if it was never written.
pub fn read_data_file(
    data_dir: &Path,
    name: &str,
) -> Result<Option<Vec<u8>>, DataFolderError> {
    match fs::read(data_dir.join(name)) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `table` as pretty JSON (keys sorted) to `<data_dir>/locale-<locale>.json`.
pub fn dump_string_table(
    data_dir: &Path,
    locale: &str,
    table: &StringTable,
) -> Result<PathBuf, DataFolderError> {
    let json = serde_json::to_string_pretty(table)?;
    write_data_file(data_dir, &locale_dump_name(locale), json.as_bytes())
}
