//! Single-slot persisted record of the last valid raw input.
//!
//! Pure convenience: the cached mapping only pre-populates a future
//! request form and never feeds prediction correctness. That asymmetry
//! drives the error posture — an unreadable or corrupt slot reads as
//! "never stored", and a failed write is the caller's to skip, not a
//! request failure.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use log::warn;

/// Raw name-to-text input mapping, pre-validation form.
pub type RawInput = BTreeMap<String, String>;

/// Durable single-slot store for the most recent raw input.
///
/// The slot is one JSON file. Writes go through a temp file followed by
/// an atomic rename, so a reader racing a writer observes either the
/// old record or the new one, never an interleaved partial write.
/// Concurrent writers are serialized with a mutex; last writer wins.
///
/// # Examples
///
/// ```
/// use predecir::cache::LastInputCache;
/// use std::collections::BTreeMap;
///
/// let dir = tempfile::tempdir().unwrap();
/// let cache = LastInputCache::new(dir.path().join("last_inputs.json"));
///
/// assert!(cache.load().is_empty()); // nothing stored yet
///
/// let mut raw = BTreeMap::new();
/// raw.insert("Temperature".to_string(), "23.5".to_string());
/// cache.store(&raw).unwrap();
/// assert_eq!(cache.load(), raw);
/// ```
#[derive(Debug)]
pub struct LastInputCache {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LastInputCache {
    /// Creates a cache backed by the given file path.
    ///
    /// The file need not exist; an absent file is the valid "no prior
    /// input" state.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the storage path of the slot.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Reads the previously stored raw input.
    ///
    /// Returns an empty mapping when nothing was ever stored or the
    /// backing record is unreadable or corrupt. Corruption is treated
    /// as absence: the slot is a convenience, never a correctness
    /// dependency, so no error crosses this boundary.
    #[must_use]
    pub fn load(&self) -> RawInput {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return RawInput::new(),
        };

        match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "last-input cache at {} is corrupt, treating as empty: {e}",
                    self.path.display()
                );
                RawInput::new()
            }
        }
    }

    /// Durably overwrites the slot with the given raw input.
    ///
    /// Last-writer-wins; no versioning, no merge. The write lands via
    /// rename so concurrent readers never see a torn record.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error. Callers on the request path
    /// are expected to log and skip the write rather than fail the
    /// request.
    pub fn store(&self, raw: &RawInput) -> io::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let json = serde_json::to_vec_pretty(raw)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)
    }
}
