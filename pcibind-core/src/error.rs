//! Error types for pcibind.
//!
//! All errors use `thiserror` so the underlying I/O cause stays on the error chain.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pcibind operations.
pub type Result<T> = std::result::Result<T, PciBindError>;

/// Direction of a driver control-file write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOp {
    Bind,
    Unbind,
}

impl BindOp {
    /// Name of the sysfs control file for this operation.
    pub fn control_file(&self) -> &'static str {
        match self {
            BindOp::Bind => "bind",
            BindOp::Unbind => "unbind",
        }
    }
}

impl fmt::Display for BindOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_file())
    }
}

/// Main error type for pcibind.
#[derive(Error, Debug)]
pub enum PciBindError {
    // Driver errors
    #[error("Failed to resolve driver for device {pci_address} at {path:?}: {source}")]
    DriverResolution {
        pci_address: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {op} driver {driver} for device {pci_address} via {path:?}: {source}")]
    DriverBind {
        pci_address: String,
        driver: String,
        op: BindOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error at {path:?}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PciBindError {
    /// The PCI address the failed operation targeted, if any.
    pub fn pci_address(&self) -> Option<&str> {
        match self {
            Self::DriverResolution { pci_address, .. } | Self::DriverBind { pci_address, .. } => {
                Some(pci_address)
            }
            _ => None,
        }
    }

    /// Whether the underlying filesystem error was `NotFound`.
    ///
    /// For resolution this usually means the device is absent or has no driver
    /// bound; for bind/unbind that the driver is not registered.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::DriverResolution { source, .. }
            | Self::DriverBind { source, .. }
            | Self::IoError { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_bind_op_display() {
        assert_eq!(BindOp::Bind.to_string(), "bind");
        assert_eq!(BindOp::Unbind.to_string(), "unbind");
    }

    #[test]
    fn test_bind_error_message_names_context() {
        let err = PciBindError::DriverBind {
            pci_address: "0000:03:00.0".to_string(),
            driver: "i40e".to_string(),
            op: BindOp::Unbind,
            path: PathBuf::from("/sys/bus/pci/drivers/i40e/unbind"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("unbind"));
        assert!(msg.contains("i40e"));
        assert!(msg.contains("0000:03:00.0"));
        assert_eq!(err.pci_address(), Some("0000:03:00.0"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_resolution_error_not_found() {
        let err = PciBindError::DriverResolution {
            pci_address: "0000:03:00.0".to_string(),
            path: PathBuf::from("/sys/bus/pci/devices/0000:03:00.0/driver"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };

        assert!(err.is_not_found());
        assert!(std::error::Error::source(&err).is_some());
    }
}
