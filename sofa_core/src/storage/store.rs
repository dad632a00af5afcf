use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use log::{debug, warn};
use serde::Deserialize;

use crate::core::errors::RegistryError;

use super::cushion::Cushion;

/// File name of the default store, a dotfile in the user's home directory.
const DEFAULT_STORE_FILE: &str = ".sofa-auth";

/// One store line: the cushion fields plus the `name` key that becomes the
/// registry key. Flattening splits the two apart during parsing.
#[derive(Debug, Deserialize)]
struct StoredCushion {
    name: String,
    #[serde(flatten)]
    cushion: Cushion,
}

/// The persisted cushion store: a plain-text file holding one JSON cushion
/// record per line.
///
/// The file is re-read on every [`load`](CushionStore::load) call so edits
/// made between calls are always visible. Reads take no file lock, so a
/// concurrent external writer during a load is a known race.
#[derive(Debug, Clone)]
pub struct CushionStore {
    path: PathBuf,
}

impl CushionStore {
    /// Store at the default location, `~/.sofa-auth`.
    pub fn new() -> Result<Self, RegistryError> {
        let base = BaseDirs::new().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Unable to locate home directory")
        })?;
        Ok(Self {
            path: base.home_dir().join(DEFAULT_STORE_FILE),
        })
    }

    /// Store at an explicit path (tests, `--file` overrides).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every cushion record from the store file.
    ///
    /// A missing file is created empty and yields an empty map. Any line
    /// that is not a valid record fails the whole load; a malformed store
    /// is a configuration error, never a partial success. If the same name
    /// appears on several lines the last one wins and a warning is logged.
    pub fn load(&self) -> Result<BTreeMap<String, Cushion>, RegistryError> {
        if !self.path.exists() {
            debug!("Store file {:?} absent, creating it empty", self.path);
            File::create(&self.path)?;
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut cushions = BTreeMap::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: StoredCushion = serde_json::from_str(line).map_err(|e| {
                RegistryError::MalformedLine {
                    line: idx + 1,
                    reason: e.to_string(),
                }
            })?;
            if cushions
                .insert(record.name.clone(), record.cushion)
                .is_some()
            {
                warn!(
                    "Cushion \"{}\" appears more than once in {:?}; keeping the last occurrence",
                    record.name, self.path
                );
            }
        }
        debug!("Loaded {} cushion(s) from {:?}", cushions.len(), self.path);
        Ok(cushions)
    }
}
