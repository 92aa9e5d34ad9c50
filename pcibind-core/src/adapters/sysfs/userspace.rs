//! Classification of userspace (kernel-bypass) drivers.

use std::collections::HashSet;

/// Drivers that hand raw device access to a userspace process.
pub const DEFAULT_USERSPACE_DRIVERS: &[&str] = &["vfio-pci", "uio_pci_generic", "igb_uio"];

/// Immutable set of driver names treated as userspace drivers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserspaceDrivers {
    names: HashSet<String>,
}

impl UserspaceDrivers {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, driver: &str) -> bool {
        self.names.contains(driver)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for UserspaceDrivers {
    fn default() -> Self {
        Self::new(DEFAULT_USERSPACE_DRIVERS.iter().copied())
    }
}
