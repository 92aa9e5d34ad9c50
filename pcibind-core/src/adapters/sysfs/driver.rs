//! Sysfs-backed PCI driver adapter.
//!
//! Reads `<devices>/<address>/driver` to find the bound driver and writes the
//! address into `<drivers>/<driver>/{bind,unbind}` to change it.

use crate::adapters::sysfs::address::is_valid_pci_address;
use crate::adapters::sysfs::userspace::UserspaceDrivers;
use crate::adapters::DriverAdapter;
use crate::config::SysfsConfig;
use crate::error::{BindOp, PciBindError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Name of the per-device symlink pointing at the bound driver.
const DRIVER_LINK: &str = "driver";

/// Driver adapter operating on a (possibly fake) sysfs tree.
#[derive(Debug, Clone)]
pub struct SysfsDriverAdapter {
    devices_root: PathBuf,
    drivers_root: PathBuf,
    userspace_drivers: UserspaceDrivers,
}

impl SysfsDriverAdapter {
    /// Create an adapter over the real sysfs, honouring the env overrides.
    pub fn new() -> Self {
        Self::with_config(SysfsConfig::from_env())
    }

    /// Create an adapter from an injected configuration.
    pub fn with_config(config: SysfsConfig) -> Self {
        Self {
            devices_root: config.pci_devices_path,
            drivers_root: config.pci_drivers_path,
            userspace_drivers: UserspaceDrivers::new(config.userspace_drivers),
        }
    }

    /// Create an adapter over the given roots with the default userspace set.
    pub fn with_roots(devices: impl Into<PathBuf>, drivers: impl Into<PathBuf>) -> Self {
        Self::with_config(SysfsConfig::with_roots(devices, drivers))
    }

    pub fn devices_root(&self) -> &Path {
        &self.devices_root
    }

    pub fn drivers_root(&self) -> &Path {
        &self.drivers_root
    }

    /// Drivers this adapter classifies as userspace drivers.
    pub fn userspace_drivers(&self) -> &UserspaceDrivers {
        &self.userspace_drivers
    }

    /// Resolve the driver currently bound to `pci_address`.
    ///
    /// The `driver` link points at the driver's registration directory, whose
    /// final path component is the driver name.
    pub fn driver_name(&self, pci_address: &str) -> Result<String> {
        check_address(pci_address);

        let link = confined(&self.devices_root, pci_address)
            .map_err(|e| resolution_error(pci_address, &self.devices_root, e))?
            .join(DRIVER_LINK);
        let target =
            fs::canonicalize(&link).map_err(|e| resolution_error(pci_address, &link, e))?;
        fs::metadata(&target).map_err(|e| resolution_error(pci_address, &target, e))?;

        let name = match target.file_name().map(|n| n.to_str()) {
            Some(Some(name)) => name.to_string(),
            Some(None) => {
                return Err(resolution_error(
                    pci_address,
                    &target,
                    io::Error::new(io::ErrorKind::InvalidData, "driver name is not valid UTF-8"),
                ))
            }
            None => {
                return Err(resolution_error(
                    pci_address,
                    &target,
                    io::Error::new(io::ErrorKind::InvalidData, "driver link has no final component"),
                ))
            }
        };

        debug!(address = %pci_address, driver = %name, "Resolved PCI driver");
        Ok(name)
    }

    /// Check whether the device is bound to a userspace driver.
    pub fn is_userspace_driver(&self, pci_address: &str) -> Result<bool> {
        let driver = self.driver_name(pci_address)?;
        Ok(self.userspace_drivers.contains(&driver))
    }

    /// Detach the device from `driver`.
    ///
    /// Does not check that `driver` is the device's current driver; the kernel
    /// rejects the write if it is not.
    pub fn unbind(&self, pci_address: &str, driver: &str) -> Result<()> {
        self.write_control(pci_address, driver, BindOp::Unbind)
    }

    /// Attach the device to `driver`.
    pub fn bind(&self, pci_address: &str, driver: &str) -> Result<()> {
        self.write_control(pci_address, driver, BindOp::Bind)
    }

    /// Write the address as the whole contents of a driver control file.
    ///
    /// The file is opened without create so a missing driver fails the same
    /// way on a fake tree as on sysfs. One attempt, no retry.
    fn write_control(&self, pci_address: &str, driver: &str, op: BindOp) -> Result<()> {
        check_address(pci_address);

        let mut path = self.drivers_root.clone();
        let result = confined(&self.drivers_root, driver).and_then(|dir| {
            path = dir.join(op.control_file());

            debug!(address = %pci_address, driver = %driver, op = %op, "Writing driver control file");

            OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(&path)
                .and_then(|mut file| file.write_all(pci_address.as_bytes()))
        });

        result.map_err(|e| {
            warn!(
                address = %pci_address,
                driver = %driver,
                op = %op,
                error = %e,
                "Driver control write failed"
            );
            PciBindError::DriverBind {
                pci_address: pci_address.to_string(),
                driver: driver.to_string(),
                op,
                path,
                source: e,
            }
        })
    }
}

impl Default for SysfsDriverAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverAdapter for SysfsDriverAdapter {
    fn driver_name(&self, pci_address: &str) -> Result<String> {
        SysfsDriverAdapter::driver_name(self, pci_address)
    }

    fn is_userspace_driver(&self, pci_address: &str) -> Result<bool> {
        SysfsDriverAdapter::is_userspace_driver(self, pci_address)
    }

    fn unbind(&self, pci_address: &str, driver: &str) -> Result<()> {
        SysfsDriverAdapter::unbind(self, pci_address, driver)
    }

    fn bind(&self, pci_address: &str, driver: &str) -> Result<()> {
        SysfsDriverAdapter::bind(self, pci_address, driver)
    }
}

fn check_address(pci_address: &str) {
    if !is_valid_pci_address(pci_address) {
        warn!(address = %pci_address, "Non-canonical PCI address (expected: 0000:01:00.0)");
    }
}

/// Join a single name under `root`, refusing anything that would leave it.
///
/// Absolute paths and `..` components are rejected rather than letting
/// `Path::join` replace or climb out of the root.
fn confined(root: &Path, name: &str) -> io::Result<PathBuf> {
    let relative = Path::new(name);
    let escapes = relative
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_) | Component::ParentDir));
    if name.is_empty() || escapes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{:?} is not a name under {}", name, root.display()),
        ));
    }
    Ok(root.join(relative))
}

fn resolution_error(pci_address: &str, path: &Path, source: io::Error) -> PciBindError {
    debug!(address = %pci_address, path = %path.display(), error = %source, "Driver resolution failed");
    PciBindError::DriverResolution {
        pci_address: pci_address.to_string(),
        path: path.to_path_buf(),
        source,
    }
}
