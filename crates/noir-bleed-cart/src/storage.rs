//! # Key-Value Storage
//!
//! The persistence seam the CartStore writes through, plus the two shipped
//! backends.
//!
//! ## Storage Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Storage Backends                                │
//! │                                                                     │
//! │  CartStore ──► KeyValueStore (trait)                                │
//! │                   │                                                 │
//! │         ┌─────────┴──────────┐                                      │
//! │         ▼                    ▼                                      │
//! │  ┌─────────────┐      ┌─────────────┐                               │
//! │  │ MemoryStore │      │  FileStore  │                               │
//! │  │  HashMap    │      │  JSON map   │                               │
//! │  │  (tests,    │      │  in a      │                                │
//! │  │  ephemeral) │      │  single    │                                │
//! │  └─────────────┘      │  file      │                                │
//! │                       └─────────────┘                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Gap: Concurrent Writers
//! Two processes (or browser tabs, in the original storefront) mutating the
//! same key race each other with last-write-wins. The contract does not
//! cover this; a session owns its storage key exclusively.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

// =============================================================================
// Trait
// =============================================================================

/// A synchronous string key-value store.
///
/// The shape mirrors what the storefront had available (localStorage):
/// `get` returns the stored string or nothing, `set` overwrites. Backends
/// report failures as [`StorageError`]; how those are handled (propagated on
/// mutation, recovered on load) is the CartStore's policy, not the backend's.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a value directly, bypassing the trait.
    ///
    /// Test helper: lets a test stage pre-existing (possibly corrupt)
    /// persisted state before the CartStore initializes.
    pub fn seed(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// File-backed backend: all keys live in one JSON object on disk.
///
/// ## On-Disk Shape
/// ```json
/// { "noirBleedCart": "[{\"id\":\"noir-tee-999\", ...}]" }
/// ```
/// Values are stored as opaque strings, exactly as handed to `set`; the
/// backend never looks inside them.
///
/// ## Behavior
/// - A missing file reads as an empty map (first run)
/// - `set` is read-modify-write of the whole map
/// - A file that is not a JSON string map is a [`StorageError::Malformed`]
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a file store at `path`. The file is created lazily on the
    /// first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
