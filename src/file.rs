//! File and directory utilities.

use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::DataError;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, DataError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(file)?)
}

/// Recursively collects all files under `path` whose file name satisfies `name_filter`. If `path`
/// is itself a matching file, it is the only one collected. Entries are visited in sorted order.
pub fn recurse_dir(
    path: PathBuf,
    files: &mut Vec<PathBuf>,
    name_filter: &mut impl FnMut(&OsStr) -> bool,
) -> Result<(), io::Error> {
    let md = fs::metadata(&path)?;
    if md.is_dir() {
        let mut entries = fs::read_dir(path)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();
        for entry in entries {
            recurse_dir(entry, files, name_filter)?;
        }
    } else if name_filter(path.file_name().unwrap_or_default()) {
        files.push(path);
    }
    Ok(())
}
