//! PCI driver binding through the Linux sysfs tree.
//!
//! ```text
//! <devices>/<address>/driver  -> ../../../bus/pci/drivers/<driver>   (read)
//! <drivers>/<driver>/unbind   <- "<address>"                          (write)
//! <drivers>/<driver>/bind     <- "<address>"                          (write)
//! ```
//!
//! Each operation is one filesystem call. Rebinding a device is an unbind
//! followed by a bind; if the second step fails the device is left without a
//! driver and recovery is up to the caller.

pub mod address;
mod driver;
pub mod userspace;

pub use address::is_valid_pci_address;
pub use driver::SysfsDriverAdapter;
pub use userspace::{UserspaceDrivers, DEFAULT_USERSPACE_DRIVERS};
