use crate::config::{NetworkDescriptor, NetworksFile};
use crate::error::InvalidReason;
use std::fmt;

/// Length of a `0x`-prefixed 20-byte account address
pub const ADDRESS_LEN: usize = 42;

/// A problem found while checking a whole declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyName,
    Invalid {
        network: String,
        reason: InvalidReason,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyName => write!(f, "network name cannot be empty"),
            ValidationIssue::Invalid { network, reason } => write!(f, "{}: {}", network, reason),
        }
    }
}

/// Configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Check host, port and sender address, in that order
    pub fn validate_descriptor(descriptor: &NetworkDescriptor) -> Result<(), InvalidReason> {
        if descriptor.host.is_empty() {
            return Err(InvalidReason::EmptyHost);
        }

        if descriptor.port == 0 || descriptor.port > u16::MAX as u32 {
            return Err(InvalidReason::PortOutOfRange(descriptor.port));
        }

        if let Some(address) = &descriptor.from_address {
            Self::validate_address(address)?;
        }

        Ok(())
    }

    /// Decode a `0x` + 40 hex digit account address
    pub fn validate_address(address: &str) -> Result<[u8; 20], InvalidReason> {
        let malformed = || InvalidReason::MalformedAddress(address.to_string());

        if address.len() != ADDRESS_LEN {
            return Err(malformed());
        }
        let digits = address.strip_prefix("0x").ok_or_else(malformed)?;

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| malformed())?;
        Ok(bytes)
    }

    /// Collect every problem in a declaration rather than stopping at the first
    pub fn validate_file(file: &NetworksFile) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (name, descriptor) in &file.networks {
            if name.is_empty() {
                issues.push(ValidationIssue::EmptyName);
            }
            if let Err(reason) = Self::validate_descriptor(descriptor) {
                issues.push(ValidationIssue::Invalid {
                    network: name.clone(),
                    reason,
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shapes() {
        assert!(ConfigValidator::validate_address("0x6323c62552e10C8e1406feAF03c79913c6e2c0E9").is_ok());
        assert!(ConfigValidator::validate_address("0x0000000000000000000000000000000000000000").is_ok());
        assert!(ConfigValidator::validate_address("0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD").is_ok());

        let bad = [
            "",
            "0x",
            "6323c62552e10C8e1406feAF03c79913c6e2c0E9",
            "0x6323c62552e10C8e1406feAF03c79913c6e2c0E",
            "0x6323c62552e10C8e1406feAF03c79913c6e2c0E9a",
            "0x6323c62552e10C8e1406feAF03c79913c6e2c0Eg",
            "1x6323c62552e10C8e1406feAF03c79913c6e2c0E9",
            "0x6323c62552e10C8e1406feAF03c79913c6e2c0\u{e9}",
        ];
        for address in bad {
            assert!(
                matches!(
                    ConfigValidator::validate_address(address),
                    Err(InvalidReason::MalformedAddress(_))
                ),
                "address '{}' should be rejected",
                address
            );
        }
    }

    #[test]
    fn test_port_bounds() {
        for port in [1u32, 7545, 65535] {
            let d = NetworkDescriptor::new("localhost", port, "*");
            assert!(ConfigValidator::validate_descriptor(&d).is_ok());
        }
        for port in [0u32, 65536, 70000, u32::MAX] {
            let d = NetworkDescriptor::new("localhost", port, "*");
            assert_eq!(
                ConfigValidator::validate_descriptor(&d),
                Err(InvalidReason::PortOutOfRange(port))
            );
        }
    }

    #[test]
    fn test_host_checked_first() {
        let d = NetworkDescriptor::new("", 0, "*").with_from("nope");
        assert_eq!(
            ConfigValidator::validate_descriptor(&d),
            Err(InvalidReason::EmptyHost)
        );
    }
}
