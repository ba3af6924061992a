use crate::{DataLocations, Settings, SettingsError, SettingsRepository};
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;

/// Application-wide settings: the storage-mode flag and the data directory it selects.
///
/// Construct one at startup and hand it (or an `Arc` of it) to consumers.
/// A store without a repository is "unavailable": reads fall back to the
/// defaults and writes are rejected.
pub struct SettingsStore {
    locations: DataLocations,
    repo: Option<Arc<dyn SettingsRepository>>,
    state: RwLock<Settings>,
}

impl SettingsStore {
    pub fn open(
        locations: DataLocations,
        repo: Arc<dyn SettingsRepository>,
    ) -> Result<Self, SettingsError> {
        let settings = repo.load()?;
        tracing::debug!(?settings, "settings loaded");
        Ok(Self {
            locations,
            repo: Some(repo),
            state: RwLock::new(settings),
        })
    }

    pub fn unavailable(locations: DataLocations) -> Self {
        Self {
            locations,
            repo: None,
            state: RwLock::new(Settings::default()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.repo.is_some()
    }

    pub fn locations(&self) -> &DataLocations {
        &self.locations
    }

    pub fn settings(&self) -> Settings {
        self.state.read().clone()
    }

    pub fn is_store_data_in_application_directory(&self) -> bool {
        self.state.read().store_data_in_application_directory
    }

    /// Changes the storage mode and persists it. Setting the current value is a no-op.
    pub fn set_store_data_in_application_directory(&self, value: bool) -> Result<(), SettingsError> {
        let mut state = self.state.write();
        if state.store_data_in_application_directory == value {
            return Ok(());
        }
        let Some(repo) = &self.repo else {
            return Err(SettingsError::Unavailable);
        };

        let mut next = state.clone();
        next.store_data_in_application_directory = value;
        repo.save(&next)?;
        *state = next;
        tracing::info!(store_data_in_application_directory = value, "storage mode changed");
        Ok(())
    }

    /// The data directory selected by the current storage mode.
    pub fn application_data_directory(&self) -> &Path {
        if self.is_store_data_in_application_directory() {
            &self.locations.application_relative_dir
        } else {
            &self.locations.default_dir
        }
    }
}
