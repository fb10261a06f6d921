//! JSON file helpers for snapshot and settings files
//!
//! Snapshot files are exports dropped in by hand or by a sync job, so reads
//! tolerate a missing or blank file where a default makes sense. Writes go
//! through a sibling temp file and a rename.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

fn read_contents(path: &Path) -> Result<Vec<u8>, ExpenseError> {
    fs::read(path).map_err(|e| storage_error("read", path, e))
}

fn parse_contents<T: DeserializeOwned>(path: &Path, contents: &[u8]) -> Result<T, ExpenseError> {
    serde_json::from_slice(contents).map_err(|e| storage_error("parse", path, e))
}

/// Read a JSON file, using `T::default()` when the file is missing or blank
pub fn read_json<T, P>(path: P) -> Result<T, ExpenseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        log::debug!("{} does not exist, using defaults", path.display());
        return Ok(T::default());
    }

    let contents = read_contents(path)?;
    if contents.iter().all(u8::is_ascii_whitespace) {
        log::warn!("{} is empty, using defaults", path.display());
        return Ok(T::default());
    }

    parse_contents(path, &contents)
}

/// Read a JSON file the user named explicitly; it must exist and parse
pub fn read_json_required<T, P>(path: P) -> Result<T, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExpenseError::snapshot_not_found(path.display().to_string()));
    }

    parse_contents(path, &read_contents(path)?)
}

/// `expenses.json` -> `expenses.json.tmp`, in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write pretty-printed JSON, replacing the target only once the data is on disk
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(|e| storage_error("create", &temp_path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", path, e))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| storage_error("write", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })?;

    log::debug!("Wrote {}", path.display());
    Ok(())
}
