//! Configuration management.

use crate::adapters::sysfs::userspace::DEFAULT_USERSPACE_DRIVERS;
use crate::error::{PciBindError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sysfs roots and driver classification used by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SysfsConfig {
    /// Directory with one `<address>/driver` symlink per device
    pub pci_devices_path: PathBuf,
    /// Directory with one `<driver>/{bind,unbind}` pair per driver
    pub pci_drivers_path: PathBuf,
    /// Drivers that hand the device to userspace
    pub userspace_drivers: Vec<String>,
}

impl Default for SysfsConfig {
    fn default() -> Self {
        Self {
            pci_devices_path: PathBuf::from(paths::PCI_DEVICES_PATH),
            pci_drivers_path: PathBuf::from(paths::PCI_DRIVERS_PATH),
            userspace_drivers: DEFAULT_USERSPACE_DRIVERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl SysfsConfig {
    /// Defaults with the `PCIBIND_PCI_*_DIR` overrides applied.
    pub fn from_env() -> Self {
        Self {
            pci_devices_path: paths::pci_devices_dir(),
            pci_drivers_path: paths::pci_drivers_dir(),
            ..Self::default()
        }
    }

    /// Config for a fake sysfs tree rooted at the given directories.
    pub fn with_roots(devices: impl Into<PathBuf>, drivers: impl Into<PathBuf>) -> Self {
        Self {
            pci_devices_path: devices.into(),
            pci_drivers_path: drivers.into(),
            ..Self::default()
        }
    }

    /// Load from `PCIBIND_CONFIG` if set, otherwise from the environment.
    pub fn discover() -> Result<Self> {
        match paths::config_file() {
            Some(path) => Self::load(&path),
            None => Ok(Self::from_env()),
        }
    }

    /// Load configuration from disk.
    ///
    /// A missing file yields the environment defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::from_env());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| PciBindError::IoError { path: path.to_path_buf(), source: e })?;
        serde_json::from_str(&content).map_err(|e| PciBindError::InvalidConfig {
            reason: format!("Failed to parse {}: {}", path.display(), e),
        })
    }

    /// Save configuration to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PciBindError::IoError { path: parent.to_path_buf(), source: e })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            PciBindError::InvalidConfig { reason: format!("Failed to serialize config: {}", e) }
        })?;
        std::fs::write(path, content)
            .map_err(|e| PciBindError::IoError { path: path.to_path_buf(), source: e })
    }
}
