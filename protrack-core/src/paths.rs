use crate::SettingsError;
use directories::BaseDirs;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory under the user's home used when data is not kept with the install.
pub const DEFAULT_DIR_NAME: &str = ".ProTrack";

/// Subdirectory of the install root holding application-relative data.
pub const DATA_DIR_NAME: &str = "data";

/// The two candidate data directories.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataLocations {
    pub application_relative_dir: PathBuf,
    pub default_dir: PathBuf,
}

impl DataLocations {
    pub fn new(install_root: impl AsRef<Path>, home: impl AsRef<Path>) -> Self {
        Self {
            application_relative_dir: install_root.as_ref().join(DATA_DIR_NAME),
            default_dir: home.as_ref().join(DEFAULT_DIR_NAME),
        }
    }

    /// Locations for `install_root` paired with the current user's home.
    pub fn for_install_root(install_root: impl AsRef<Path>) -> Self {
        Self::new(install_root, home_dir())
    }

    /// Locations using the explicit root if given, else the executable's directory.
    pub fn resolve(install_root: Option<PathBuf>) -> Result<Self, SettingsError> {
        let root = match install_root {
            Some(root) => root,
            None => install_root_from_exe()?,
        };
        Ok(Self::for_install_root(root))
    }
}

pub fn home_dir() -> PathBuf {
    if let Some(base) = BaseDirs::new() {
        base.home_dir().to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Directory holding the running executable.
pub fn install_root_from_exe() -> Result<PathBuf, SettingsError> {
    let exe = std::env::current_exe()
        .map_err(|e| SettingsError::InstallRoot(format!("current executable: {e}")))?;
    install_root_for(&exe)
}

/// Install root for an executable path. Test harness binaries live in
/// `target/<profile>/deps`, so that component is stripped.
pub fn install_root_for(exe: &Path) -> Result<PathBuf, SettingsError> {
    let Some(dir) = exe.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Err(SettingsError::InstallRoot(format!(
            "{} has no parent directory",
            exe.display()
        )));
    };
    if dir.file_name().is_some_and(|name| name == "deps") {
        if let Some(profile) = dir.parent() {
            return Ok(profile.to_path_buf());
        }
    }
    Ok(dir.to_path_buf())
}
