//! Checkpoint files: newline-delimited dashboard UID lists.
//!
//! Responsibilities:
//! - Write an identifier list to disk, one per line, truncating prior content.
//! - Read a list back in order.
//! - Derive the failure file name from the checkpoint file name.
//!
//! Invariants:
//! - Only identifiers that read back unchanged are written: non-empty, no
//!   line terminators, no leading or trailing whitespace. Anything else is
//!   rejected before the file is touched.
//! - Reading trims each line and skips blank ones, so hand-edited files load.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use grafana_config::constants::FAILED_TRANSACTIONS_SUFFIX;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("Failed to create checkpoint file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write checkpoint file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open checkpoint file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read checkpoint file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Identifier {0:?} cannot be stored as a checkpoint line")]
    InvalidIdentifier(String),
}

/// Whether `id` survives a write/read cycle unchanged.
pub fn is_storable_identifier(id: &str) -> bool {
    !id.is_empty() && id.trim() == id && !id.contains(['\n', '\r'])
}

/// Write `lines` to `path`, one per line, and flush.
pub fn write_lines(path: impl AsRef<Path>, lines: &[String]) -> Result<(), CheckpointError> {
    let path = path.as_ref();

    if let Some(bad) = lines.iter().find(|l| !is_storable_identifier(l)) {
        return Err(CheckpointError::InvalidIdentifier(bad.clone()));
    }

    let file = File::create(path).map_err(|source| CheckpointError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| CheckpointError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

/// Read the identifier list stored at `path`.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, CheckpointError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| CheckpointError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| CheckpointError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Name of the file holding failed remediation UIDs for `checkpoint`:
/// the checkpoint path with `-failed-transactions` appended.
pub fn failed_transactions_path(checkpoint: impl AsRef<Path>) -> PathBuf {
    let mut name = OsString::from(checkpoint.as_ref().as_os_str());
    name.push(FAILED_TRANSACTIONS_SUFFIX);
    PathBuf::from(name)
}
