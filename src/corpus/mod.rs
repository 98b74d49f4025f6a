// compromised-password corpus loading

use std::path::Path;

use bstr::ByteSlice;
use thiserror::Error;

/// errors raised while loading the corpus. all of these are fatal at
/// startup; request handling never sees them.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("corpus {path} contains no usable entries")]
    Empty { path: String },
}

/// load a newline-delimited corpus file into memory.
///
/// password dumps (rockyou and friends) are typically latin1 and not valid
/// UTF-8, so the file is read as raw bytes and each line is decoded lossily.
/// trailing `\r` is stripped, empty lines are skipped, and duplicates are
/// dropped keeping the first occurrence. an unreadable or effectively empty
/// file is an error: a missing corpus must stop startup, not degrade into
/// an index that accepts everything.
pub fn load(path: &Path) -> Result<Vec<String>, CorpusError> {
    let raw = std::fs::read(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut seen = std::collections::HashSet::new();
    let mut entries = Vec::new();

    for line in raw.lines() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let entry = line.to_str_lossy().into_owned();
        if seen.insert(entry.clone()) {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(CorpusError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(entries)
}
