//! Centralized sysfs path configuration.
//!
//! Both roots can be redirected through the environment so tests and
//! containerised callers can point the adapter at a fake tree.

use std::path::PathBuf;

/// Default sysfs directory holding one entry per PCI device.
pub const PCI_DEVICES_PATH: &str = "/sys/bus/pci/devices";

/// Default sysfs directory holding one entry per registered PCI driver.
pub const PCI_DRIVERS_PATH: &str = "/sys/bus/pci/drivers";

/// Overrides [`PCI_DEVICES_PATH`].
pub const PCI_DEVICES_ENV: &str = "PCIBIND_PCI_DEVICES_DIR";

/// Overrides [`PCI_DRIVERS_PATH`].
pub const PCI_DRIVERS_ENV: &str = "PCIBIND_PCI_DRIVERS_DIR";

/// Optional JSON config file read by `SysfsConfig::discover`.
pub const CONFIG_ENV: &str = "PCIBIND_CONFIG";

/// Get the PCI devices root.
///
/// Resolution order:
/// 1. `PCIBIND_PCI_DEVICES_DIR` environment variable
/// 2. `/sys/bus/pci/devices`
pub fn pci_devices_dir() -> PathBuf {
    env_or(PCI_DEVICES_ENV, PCI_DEVICES_PATH)
}

/// Get the PCI drivers root.
///
/// Resolution order:
/// 1. `PCIBIND_PCI_DRIVERS_DIR` environment variable
/// 2. `/sys/bus/pci/drivers`
pub fn pci_drivers_dir() -> PathBuf {
    env_or(PCI_DRIVERS_ENV, PCI_DRIVERS_PATH)
}

/// Get the config file path, if one was named.
pub fn config_file() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn env_or(var: &str, default: &str) -> PathBuf {
    match std::env::var_os(var) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_and_fallback() {
        std::env::set_var("PCIBIND_TEST_ROOT", "/tmp/pcibind-test");
        assert_eq!(
            env_or("PCIBIND_TEST_ROOT", PCI_DEVICES_PATH),
            PathBuf::from("/tmp/pcibind-test")
        );

        std::env::set_var("PCIBIND_TEST_ROOT", "");
        assert_eq!(
            env_or("PCIBIND_TEST_ROOT", PCI_DEVICES_PATH),
            PathBuf::from(PCI_DEVICES_PATH)
        );

        std::env::remove_var("PCIBIND_TEST_ROOT");
        assert_eq!(
            env_or("PCIBIND_TEST_ROOT", PCI_DRIVERS_PATH),
            PathBuf::from(PCI_DRIVERS_PATH)
        );
    }
}
