use protrack_core::{DataLocations, Settings, SettingsStore};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsReport<'a> {
    pub available: bool,
    pub settings: Settings,
    pub locations: &'a DataLocations,
    pub application_data_directory: &'a Path,
}

impl<'a> From<&'a SettingsStore> for SettingsReport<'a> {
    fn from(store: &'a SettingsStore) -> Self {
        Self {
            available: store.is_available(),
            settings: store.settings(),
            locations: store.locations(),
            application_data_directory: store.application_data_directory(),
        }
    }
}
