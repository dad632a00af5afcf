use std::collections::BTreeMap;

use log::{debug, info};

use crate::core::errors::RegistryError;
use crate::storage::cushion::Cushion;
use crate::storage::store::CushionStore;

/// Name of the cushion every registry starts out with.
const SEED_CUSHION: &str = "localhost";

/// Merges the session cache with the persisted store into one authoritative
/// name-to-cushion view.
///
/// The registry is an explicit object with a controlled lifetime: construct
/// it once at session start and pass it by reference. Registrations are
/// session-scoped and die with the registry; persisted cushions live in the
/// store file and are re-read on every resolution, so on-disk edits are
/// always reflected. A name present in both sources is a fatal collision,
/// never a silent override.
///
/// Single-threaded by design: registration takes `&mut self`, resolution
/// `&self`. Callers that share a registry across threads must wrap it in a
/// `Mutex` themselves.
pub struct CushionRegistry {
    session: BTreeMap<String, Cushion>,
    store: CushionStore,
}

impl CushionRegistry {
    /// Create a registry seeded with the built-in `"localhost"` cushion
    /// (type `localhost`, port 5984), so at least one cushion resolves with
    /// no user setup.
    pub fn new(store: CushionStore) -> Self {
        let mut registry = Self::unseeded(store);
        registry.register(
            SEED_CUSHION,
            Cushion {
                kind: Some(SEED_CUSHION.to_string()),
                ..Cushion::default()
            },
        );
        registry
    }

    /// Create a registry without the built-in seed. With an empty store
    /// file this resolves to nothing, so `resolve_all` will fail with
    /// [`RegistryError::NoCushions`].
    pub fn unseeded(store: CushionStore) -> Self {
        Self {
            session: BTreeMap::new(),
            store,
        }
    }

    /// Register a cushion for the lifetime of this registry.
    ///
    /// Overwrites any prior in-session registration under the same name and
    /// never touches the store file. No field validation happens here; the
    /// request-building collaborator checks the `kind`/`base` contract.
    pub fn register(&mut self, name: impl Into<String>, cushion: Cushion) {
        let name = name.into();
        debug!("Registering session cushion \"{}\"", name);
        self.session.insert(name, cushion);
    }

    /// Snapshot of the session cache, as used by the merge step.
    pub fn session(&self) -> &BTreeMap<String, Cushion> {
        &self.session
    }

    /// The authoritative current view: store (read fresh from disk) merged
    /// with the session cache.
    ///
    /// Fails with [`RegistryError::Collision`] naming every cushion present
    /// in both sources; there is no precedence rule, the caller must rename
    /// one side. Fails with [`RegistryError::NoCushions`] if the merged
    /// view is empty.
    pub fn resolve_all(&self) -> Result<BTreeMap<String, Cushion>, RegistryError> {
        let mut merged = self.store.load()?;

        let duplicates: Vec<String> = merged
            .keys()
            .filter(|name| self.session.contains_key(*name))
            .cloned()
            .collect();
        if !duplicates.is_empty() {
            return Err(RegistryError::Collision(duplicates));
        }

        merged.extend(
            self.session
                .iter()
                .map(|(name, cushion)| (name.clone(), cushion.clone())),
        );
        if merged.is_empty() {
            return Err(RegistryError::NoCushions);
        }
        info!("Resolved {} cushion(s)", merged.len());
        Ok(merged)
    }

    /// Resolve one cushion by name.
    ///
    /// This is the lookup the database-client collaborator calls. Fails
    /// with [`RegistryError::NotFound`] naming the missing cushion.
    pub fn resolve(&self, name: &str) -> Result<Cushion, RegistryError> {
        self.resolve_all()?
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }
}
