use serde::{Deserialize, Serialize};

/// Properties key holding the storage mode.
pub const STORE_DATA_IN_APPLICATION_DIRECTORY: &str = "storeDataInApplicationDirectory";

/// Name of the settings file inside the application-relative data directory.
pub const APPLICATION_PROPERTIES_FILENAME: &str = "application.properties";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// `true` stores data next to the installation, `false` in the user profile.
    pub store_data_in_application_directory: bool,
}

/// Parses a boolean the lenient way hand-edited properties files expect.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
