//! Profile repositories.
//!
//! The chart engine never touches these; an application layer owns one and
//! passes it around explicitly.

use super::record::ProfileRecord;
use crate::ephemeris::default_natal_input;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Profile store I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Profile store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown profile id: {id}")]
    UnknownProfile { id: String },
}

/// Saved profiles plus the current selection
pub trait ProfileRepository {
    fn list(&self) -> &[ProfileRecord];

    /// Replace the record with the same id, or append it
    fn upsert(&mut self, profile: ProfileRecord) -> Result<(), StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    fn current(&self) -> Option<&ProfileRecord>;

    fn set_current(&mut self, id: &str) -> Result<(), StoreError>;

    fn get(&self, id: &str) -> Option<&ProfileRecord> {
        self.list().iter().find(|p| p.id == id)
    }
}

/// Serialized form of a profile list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    pub profiles: Vec<ProfileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_profile_id: Option<String>,
}

impl ProfileState {
    /// One sample profile, selected
    pub fn seeded() -> Self {
        let profile = ProfileRecord::from_input(default_natal_input());
        Self {
            current_profile_id: Some(profile.id.clone()),
            profiles: vec![profile],
        }
    }

    fn upsert(&mut self, profile: ProfileRecord) {
        if self.current_profile_id.is_none() {
            self.current_profile_id = Some(profile.id.clone());
        }
        match self.profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    fn delete(&mut self, id: &str) {
        self.profiles.retain(|p| p.id != id);
        if self.current_profile_id.as_deref() == Some(id) {
            self.current_profile_id = self.profiles.first().map(|p| p.id.clone());
        }
    }

    fn current(&self) -> Option<&ProfileRecord> {
        let id = self.current_profile_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    fn set_current(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.profiles.iter().any(|p| p.id == id) {
            return Err(StoreError::UnknownProfile { id: id.to_string() });
        }
        self.current_profile_id = Some(id.to_string());
        Ok(())
    }
}

/// In-memory repository
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    state: ProfileState,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ProfileState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }
}

impl ProfileRepository for MemoryProfileStore {
    fn list(&self) -> &[ProfileRecord] {
        &self.state.profiles
    }

    fn upsert(&mut self, profile: ProfileRecord) -> Result<(), StoreError> {
        self.state.upsert(profile);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.state.delete(id);
        Ok(())
    }

    fn current(&self) -> Option<&ProfileRecord> {
        self.state.current()
    }

    fn set_current(&mut self, id: &str) -> Result<(), StoreError> {
        self.state.set_current(id)
    }
}

/// Repository persisted as a JSON file, rewritten after every change
#[derive(Debug)]
pub struct JsonFileProfileStore {
    path: PathBuf,
    inner: MemoryProfileStore,
}

impl JsonFileProfileStore {
    /// Open the store at `path`.
    ///
    /// A missing, unreadable-as-JSON or empty file is replaced on disk by a
    /// single sample profile, so its id is stable across reopens. Other I/O
    /// errors are returned.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let loaded = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<ProfileState>(&text) {
                Ok(state) if !state.profiles.is_empty() => Some(state),
                Ok(_) => {
                    log::info!("Profile store {} is empty; seeding sample profile", path.display());
                    None
                }
                Err(e) => {
                    log::warn!("Could not read profile store {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No profile store at {}; seeding sample profile", path.display());
                None
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let seeded = loaded.is_none();
        let mut state = loaded.unwrap_or_else(ProfileState::seeded);
        if state.current_profile_id.is_none() {
            state.current_profile_id = state.profiles.first().map(|p| p.id.clone());
        }

        let store = Self {
            path,
            inner: MemoryProfileStore::from_state(state),
        };
        if seeded {
            store.persist()?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &ProfileState {
        self.inner.state()
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self.inner.state())?;
        fs::write(&self.path, json).map_err(io_err)?;
        log::debug!(
            "Saved {} profiles to {}",
            self.inner.list().len(),
            self.path.display()
        );
        Ok(())
    }
}

impl ProfileRepository for JsonFileProfileStore {
    fn list(&self) -> &[ProfileRecord] {
        self.inner.list()
    }

    fn upsert(&mut self, profile: ProfileRecord) -> Result<(), StoreError> {
        self.inner.upsert(profile)?;
        self.persist()
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.delete(id)?;
        self.persist()
    }

    fn current(&self) -> Option<&ProfileRecord> {
        self.inner.current()
    }

    fn set_current(&mut self, id: &str) -> Result<(), StoreError> {
        self.inner.set_current(id)?;
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ProfileRecord {
        let mut input = default_natal_input();
        input.name = name.to_string();
        ProfileRecord::from_input(input)
    }

    #[test]
    fn test_first_upsert_becomes_current() {
        let mut store = MemoryProfileStore::new();
        assert!(store.current().is_none());
        let a = record("A");
        store.upsert(a.clone()).unwrap();
        store.upsert(record("B")).unwrap();
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.current().unwrap().id, a.id);
    }

    #[test]
    fn test_upsert_replaces_by_id() {
        let mut store = MemoryProfileStore::new();
        let mut a = record("A");
        store.upsert(a.clone()).unwrap();
        a.label = "Renamed".to_string();
        store.upsert(a.clone()).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.get(&a.id).unwrap().label, "Renamed");
    }

    #[test]
    fn test_delete_current_selects_first_remaining() {
        let mut store = MemoryProfileStore::new();
        let (a, b, c) = (record("A"), record("B"), record("C"));
        for p in [&a, &b, &c] {
            store.upsert(p.clone()).unwrap();
        }
        store.set_current(&c.id).unwrap();
        store.delete(&c.id).unwrap();
        assert_eq!(store.current().unwrap().id, a.id);

        store.delete(&b.id).unwrap();
        assert_eq!(store.current().unwrap().id, a.id);

        store.delete(&a.id).unwrap();
        assert!(store.current().is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_set_current_rejects_unknown_id() {
        let mut store = MemoryProfileStore::new();
        let err = store.set_current("missing").unwrap_err();
        assert!(matches!(err, StoreError::UnknownProfile { .. }));
    }
}
