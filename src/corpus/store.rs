//! Local reference corpus storage.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::constants::ARCHIVE_TIMESTAMP_FORMAT;

use super::error::{StoreError, StoreResult};
use super::types::{IngestOutcome, StoredText};

/// Named text entries used as comparison targets.
pub trait CorpusStore: Send + Sync {
    /// Reads every eligible entry, ordered by name.
    fn read_all(&self) -> StoreResult<Vec<StoredText>>;

    /// Lists eligible entry names, ordered.
    fn names(&self) -> StoreResult<Vec<String>>;

    /// Appends `content` to an existing entry, or creates it.
    fn ingest(&self, name: &str, content: &str) -> StoreResult<IngestOutcome>;

    /// Saves `content` as a new entry without overwriting. On a name collision
    /// the entry is saved as `<stem>_<timestamp><ext>`. Returns the saved name.
    fn archive(&self, name: &str, content: &str, timestamp: NaiveDateTime) -> StoreResult<String>;

    /// Returns `true` if the store can currently be read.
    fn is_available(&self) -> bool;

    /// Number of eligible entries.
    fn len(&self) -> StoreResult<usize> {
        Ok(self.names()?.len())
    }
}

/// Rejects names that are not a single plain path component.
pub fn validate_entry_name(name: &str) -> StoreResult<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(StoreError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Splits `name` into stem and extension; leading dots never start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(idx) => name.split_at(leading_dots + idx),
        None => (name, ""),
    }
}

/// `x.py` + `2024-05-01 13:45:09` → `x_20240501_134509.py`.
pub fn timestamped_name(name: &str, timestamp: NaiveDateTime) -> String {
    let (stem, ext) = split_extension(name);
    format!(
        "{}_{}{}",
        stem,
        timestamp.format(ARCHIVE_TIMESTAMP_FORMAT),
        ext
    )
}

#[derive(Debug, Clone)]
/// Stores entries as files in one directory.
///
/// Only regular files whose extension is in the configured set take part in
/// comparisons. Every write lands via a temp file renamed into place, and
/// read-modify-write appends are serialized within the process.
pub struct FsCorpusStore {
    root: PathBuf,
    extensions: Vec<String>,
    write_lock: Arc<Mutex<()>>,
}

impl FsCorpusStore {
    /// Creates a store rooted at `root` accepting the given extensions (no dot).
    pub fn new(root: PathBuf, extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect();
        Self {
            root,
            extensions,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensures the root directory exists.
    pub fn ensure_root(&self) -> StoreResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|_| StoreError::Unavailable {
                path: self.root.clone(),
            })?;
        }
        Ok(())
    }

    fn is_eligible(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    fn eligible_paths(&self) -> StoreResult<Vec<(String, PathBuf)>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file()
                && self.is_eligible(&path)
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                paths.push((name.to_string(), path));
            }
        }

        paths.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(paths)
    }

    fn write_atomic(&self, bytes: &[u8], target: &Path, clobber: bool) -> StoreResult<()> {
        let mut temp = NamedTempFile::new_in(&self.root)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;

        let persisted = if clobber {
            temp.persist(target).map(|_| ())
        } else {
            temp.persist_noclobber(target).map(|_| ())
        };

        persisted.map_err(|e| {
            if e.error.kind() == std::io::ErrorKind::AlreadyExists {
                StoreError::AlreadyExists {
                    name: target
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                }
            } else {
                StoreError::Io(e.error)
            }
        })
    }
}

impl CorpusStore for FsCorpusStore {
    fn read_all(&self) -> StoreResult<Vec<StoredText>> {
        let mut entries = Vec::new();

        for (name, path) in self.eligible_paths()? {
            match fs::read(&path) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => entries.push(StoredText { name, text }),
                    Err(_) => warn!(entry = %name, "Skipping non-UTF-8 corpus entry"),
                },
                Err(e) => warn!(entry = %name, error = %e, "Skipping unreadable corpus entry"),
            }
        }

        debug!(root = %self.root.display(), entries = entries.len(), "Read local corpus");
        Ok(entries)
    }

    fn names(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .eligible_paths()?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    fn ingest(&self, name: &str, content: &str) -> StoreResult<IngestOutcome> {
        validate_entry_name(name)?;
        self.ensure_root()?;

        let _guard = self.write_lock.lock();
        let path = self.root.join(name);

        if path.exists() {
            if !path.is_file() {
                return Err(StoreError::NotAFile { path });
            }
            let mut bytes = fs::read(&path)?;
            bytes.extend_from_slice(content.as_bytes());
            self.write_atomic(&bytes, &path, true)?;
            Ok(IngestOutcome::Appended)
        } else {
            self.write_atomic(content.as_bytes(), &path, false)?;
            Ok(IngestOutcome::Created)
        }
    }

    fn archive(&self, name: &str, content: &str, timestamp: NaiveDateTime) -> StoreResult<String> {
        validate_entry_name(name)?;
        self.ensure_root()?;

        let _guard = self.write_lock.lock();
        let saved_name = if self.root.join(name).exists() {
            timestamped_name(name, timestamp)
        } else {
            name.to_string()
        };

        self.write_atomic(content.as_bytes(), &self.root.join(&saved_name), false)?;
        Ok(saved_name)
    }

    fn is_available(&self) -> bool {
        self.root.is_dir()
    }
}
