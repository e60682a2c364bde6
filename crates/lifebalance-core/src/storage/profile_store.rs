//! Reference implementations of the caller-supplied profile store.
//!
//! `TomlProfileStore` persists the profile as TOML under the app data
//! directory; `MemoryProfileStore` records writes in memory for tests and
//! embedding shells.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::ProfileError;
use crate::profile::{ProfileStore, UserProfile};

/// TOML-file-backed profile store at `data_dir()/profile.toml`.
pub struct TomlProfileStore {
    path: PathBuf,
}

impl TomlProfileStore {
    /// Open the store at the default location.
    pub fn open() -> Result<Self, ProfileError> {
        let dir = super::data_dir().map_err(|e| ProfileError::LoadFailed {
            path: PathBuf::from("~/.config/lifebalance"),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: dir.join("profile.toml"),
        })
    }

    /// Open the store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored profile; a missing file is a default profile,
    /// not an error.
    pub fn load(&self) -> Result<UserProfile, ProfileError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ProfileError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(UserProfile::default()),
            Err(e) => Err(ProfileError::LoadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }
}

impl ProfileStore for TomlProfileStore {
    fn update_user(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        let content = toml::to_string_pretty(profile).map_err(|e| ProfileError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, content).map_err(|e| ProfileError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// In-memory store recording every forwarded profile value.
#[derive(Default)]
pub struct MemoryProfileStore {
    writes: Mutex<Vec<UserProfile>>,
    fail_next: Mutex<bool>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently forwarded profile, if any.
    pub fn latest(&self) -> Option<UserProfile> {
        self.writes.lock().unwrap().last().cloned()
    }

    /// Number of forward calls received.
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    /// Make the next `update_user` call fail.
    pub fn fail_next(&self) {
        *self.fail_next.lock().unwrap() = true;
    }
}

impl ProfileStore for MemoryProfileStore {
    fn update_user(&self, profile: &UserProfile) -> Result<(), ProfileError> {
        if std::mem::take(&mut *self.fail_next.lock().unwrap()) {
            return Err(ProfileError::Rejected("simulated failure".to_string()));
        }
        self.writes.lock().unwrap().push(profile.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::HydrationRecord;
    use crate::task::{TaskCategory, TaskItem};

    fn sample_profile() -> UserProfile {
        UserProfile {
            tasks: vec![TaskItem {
                id: "task-0-abc".to_string(),
                text: "Water the plants".to_string(),
                category: TaskCategory::Home,
                completed: true,
            }],
            hydration: Some(HydrationRecord::fresh(4, 8)),
        }
    }

    #[test]
    fn toml_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlProfileStore::at(dir.path().join("profile.toml"));

        store.update_user(&sample_profile()).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.tasks.len(), 1);
        assert_eq!(loaded.tasks[0].text, "Water the plants");
        assert!(loaded.tasks[0].completed);
        assert_eq!(loaded.hydration.unwrap().count, 4);
    }

    #[test]
    fn toml_store_missing_file_is_default_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlProfileStore::at(dir.path().join("absent.toml"));

        let loaded = store.load().unwrap();
        assert!(loaded.tasks.is_empty());
        assert!(loaded.hydration.is_none());
    }

    #[test]
    fn memory_store_records_writes_in_order() {
        let store = MemoryProfileStore::new();
        store.update_user(&UserProfile::default()).unwrap();
        store.update_user(&sample_profile()).unwrap();

        assert_eq!(store.write_count(), 2);
        assert_eq!(store.latest().unwrap().tasks.len(), 1);
    }

    #[test]
    fn memory_store_fail_next_rejects_once() {
        let store = MemoryProfileStore::new();
        store.fail_next();
        assert!(store.update_user(&UserProfile::default()).is_err());
        assert!(store.update_user(&UserProfile::default()).is_ok());
        assert_eq!(store.write_count(), 1);
    }
}
