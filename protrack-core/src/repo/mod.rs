use crate::{Settings, SettingsError};

pub mod memory;

pub use memory::MemoryRepo;

/// Persistence for [`Settings`]. Every `save` must be durable when it returns.
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> Result<Settings, SettingsError>;
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}
