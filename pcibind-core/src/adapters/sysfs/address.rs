//! PCI address format checks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regular expression for the canonical sysfs address form: 0000:01:00.0
static PCI_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{4}:[0-9a-fA-F]{2}:[0-9a-fA-F]{2}\.[0-7]$")
        .expect("Invalid PCI address regex")
});

/// Validate PCI address format.
///
/// Advisory only: the driver operations pass any address through to sysfs
/// and let the kernel reject it.
pub fn is_valid_pci_address(address: &str) -> bool {
    PCI_ADDRESS_REGEX.is_match(address)
}
