use parking_lot::Mutex;
use protrack_core::{
    parse_flag, DataLocations, Settings, SettingsError, SettingsRepository, SettingsStore,
    APPLICATION_PROPERTIES_FILENAME, STORE_DATA_IN_APPLICATION_DIRECTORY,
};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;

pub mod format;

use format::Properties;

/// Settings persisted in a `.properties` file.
///
/// The parsed document is kept between calls so keys this crate does not
/// know about, and any comments, are written back unchanged.
pub struct PropertiesFile {
    path: PathBuf,
    doc: Mutex<Properties>,
}

impl PropertiesFile {
    /// Opens `application.properties` inside `data_dir`, creating the
    /// directory (not its parents) and the file when missing.
    pub fn open_in(data_dir: &Path) -> Result<Self, SettingsError> {
        ensure_dir(data_dir)?;
        Self::open(data_dir.join(APPLICATION_PROPERTIES_FILENAME))
    }

    pub fn open(path: PathBuf) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "creating empty properties file");
            fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&path)
                .map_err(|e| SettingsError::io(&path, e))?;
        }
        let doc = read_document(&path)?;
        Ok(Self {
            path,
            doc: Mutex::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the document as last read or successfully written.
    pub fn document(&self) -> Properties {
        self.doc.lock().clone()
    }
}

impl SettingsRepository for PropertiesFile {
    fn load(&self) -> Result<Settings, SettingsError> {
        let doc = read_document(&self.path)?;
        let settings = settings_from(&doc, &self.path);
        *self.doc.lock() = doc;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let mut doc = self.doc.lock();
        let mut next = doc.clone();
        next.set(
            STORE_DATA_IN_APPLICATION_DIRECTORY,
            settings.store_data_in_application_directory.to_string(),
        );
        write_atomic(&self.path, &next.to_bytes()).map_err(|e| SettingsError::io(&self.path, e))?;
        *doc = next;
        tracing::debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// Opens the settings store under `locations`, degrading to an unavailable
/// store (defaults, read-only) if the data directory or file cannot be used.
pub fn open_store(locations: DataLocations) -> SettingsStore {
    match try_open_store(&locations) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "settings unavailable, using defaults");
            SettingsStore::unavailable(locations)
        }
    }
}

pub fn try_open_store(locations: &DataLocations) -> Result<SettingsStore, SettingsError> {
    let file = PropertiesFile::open_in(&locations.application_relative_dir)?;
    SettingsStore::open(locations.clone(), Arc::new(file))
}

/// Startup entry point: resolves the install root (explicit, else the
/// executable's directory) and opens the store, never failing.
pub fn bootstrap(install_root: Option<PathBuf>) -> SettingsStore {
    match DataLocations::resolve(install_root) {
        Ok(locations) => open_store(locations),
        Err(err) => {
            tracing::error!(error = %err, "settings unavailable, using defaults");
            SettingsStore::unavailable(fallback_locations())
        }
    }
}

/// Locations reported when no install root can be resolved: the working
/// directory stands in for it.
pub fn fallback_locations() -> DataLocations {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    DataLocations::for_install_root(cwd)
}

fn ensure_dir(path: &Path) -> Result<(), SettingsError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(SettingsError::io(path, e)),
    }
}

fn read_document(path: &Path) -> Result<Properties, SettingsError> {
    let bytes = fs::read(path).map_err(|e| SettingsError::io(path, e))?;
    Properties::from_bytes(&bytes).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        line: e.line,
        message: e.message,
    })
}

fn settings_from(doc: &Properties, path: &Path) -> Settings {
    let store_data_in_application_directory = match doc.get(STORE_DATA_IN_APPLICATION_DIRECTORY) {
        None => false,
        Some(raw) => parse_flag(raw).unwrap_or_else(|| {
            tracing::warn!(
                path = %path.display(),
                key = STORE_DATA_IN_APPLICATION_DIRECTORY,
                value = raw,
                "not a boolean, treating as false"
            );
            false
        }),
    };
    Settings {
        store_data_in_application_directory,
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
