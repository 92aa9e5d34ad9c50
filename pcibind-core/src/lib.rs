//! pcibind core library
//!
//! Inspects and changes the kernel driver binding of PCI devices through
//! sysfs: which driver owns a device, whether that driver is a userspace
//! (kernel-bypass) driver, and bind/unbind to a named driver.
//!
//! ```rust,ignore
//! use pcibind_core::{DriverAdapter, SysfsDriverAdapter};
//!
//! let adapter = SysfsDriverAdapter::new();
//! if !adapter.is_userspace_driver("0000:03:00.0")? {
//!     let current = adapter.driver_name("0000:03:00.0")?;
//!     adapter.unbind("0000:03:00.0", &current)?;
//!     adapter.bind("0000:03:00.0", "vfio-pci")?;
//! }
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod observability;
pub mod paths;

// Re-export commonly used items
pub use adapters::sysfs::{is_valid_pci_address, UserspaceDrivers, DEFAULT_USERSPACE_DRIVERS};
pub use adapters::{DriverAdapter, SysfsDriverAdapter};
pub use config::SysfsConfig;
pub use error::{BindOp, PciBindError, Result};
pub use observability::init as init_observability;
