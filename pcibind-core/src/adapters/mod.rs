//! Driver adapter abstraction.
//!
//! The `DriverAdapter` trait is the seam between an orchestrator (e.g. a
//! device-plugin manager) and the kernel's driver binding state.

pub mod sysfs;

use crate::error::Result;

pub use sysfs::SysfsDriverAdapter;

/// Inspect and change the kernel driver bound to a PCI device.
///
/// Operations are synchronous and independent. Implementations impose no
/// locking between concurrent calls on the same address.
pub trait DriverAdapter: Send + Sync {
    /// Name of the driver currently bound to the device.
    fn driver_name(&self, pci_address: &str) -> Result<String>;

    /// Whether the bound driver hands the device to userspace.
    fn is_userspace_driver(&self, pci_address: &str) -> Result<bool>;

    /// Detach the device from `driver`.
    fn unbind(&self, pci_address: &str, driver: &str) -> Result<()>;

    /// Attach the device to `driver`.
    fn bind(&self, pci_address: &str, driver: &str) -> Result<()>;
}
