use crate::error::InvalidReason;
use crate::loader::ConfigValidator;
use serde::{Deserialize, Serialize};

/// Network id value that matches whatever id the live network reports
pub const ANY_NETWORK_ID: &str = "*";

/// Connection parameters for one target network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkDescriptor {
    /// Hostname or IP literal of the node endpoint
    pub host: String,

    /// Endpoint port, valid range 1-65535
    pub port: u32,

    /// Id the live network must report, or `*`
    pub network_id: String,

    /// Default sender account, `0x` followed by 40 hex digits
    #[serde(default, rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
}

impl NetworkDescriptor {
    pub fn new(host: impl Into<String>, port: u32, network_id: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            network_id: network_id.into(),
            from_address: None,
        }
    }

    /// Set the default sender account
    pub fn with_from(mut self, address: impl Into<String>) -> Self {
        self.from_address = Some(address.into());
        self
    }

    /// Check the descriptor invariants, reporting the first violation
    pub fn validate(&self) -> Result<(), InvalidReason> {
        ConfigValidator::validate_descriptor(self)
    }

    /// `host:port`, with IPv6 literals bracketed
    pub fn endpoint(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// HTTP JSON-RPC URL of the endpoint
    pub fn rpc_url(&self) -> String {
        format!("http://{}", self.endpoint())
    }

    /// Whether a network reporting `reported` is the one this descriptor targets
    pub fn matches_network_id(&self, reported: &str) -> bool {
        self.network_id == ANY_NETWORK_ID || self.network_id == reported
    }

    /// Decoded sender address, if one is configured and well-formed
    pub fn from_bytes(&self) -> Option<[u8; 20]> {
        self.from_address
            .as_deref()
            .and_then(|addr| ConfigValidator::validate_address(addr).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_formatting() {
        let d = NetworkDescriptor::new("127.0.0.1", 7545, "5777");
        assert_eq!(d.endpoint(), "127.0.0.1:7545");
        assert_eq!(d.rpc_url(), "http://127.0.0.1:7545");

        let v6 = NetworkDescriptor::new("::1", 8545, "*");
        assert_eq!(v6.endpoint(), "[::1]:8545");
    }

    #[test]
    fn test_network_id_matching() {
        let exact = NetworkDescriptor::new("localhost", 7545, "5777");
        assert!(exact.matches_network_id("5777"));
        assert!(!exact.matches_network_id("1"));

        let any = NetworkDescriptor::new("localhost", 8545, ANY_NETWORK_ID);
        assert!(any.matches_network_id("1"));
        assert!(any.matches_network_id("5777"));

        // Only the bare sentinel is a wildcard
        let prefixed = NetworkDescriptor::new("localhost", 8545, "57*");
        assert!(!prefixed.matches_network_id("5777"));
    }

    #[test]
    fn test_from_bytes() {
        let d = NetworkDescriptor::new("localhost", 7545, "5777")
            .with_from("0x6323c62552e10C8e1406feAF03c79913c6e2c0E9");
        let bytes = d.from_bytes().unwrap();
        assert_eq!(bytes[0], 0x63);
        assert_eq!(bytes[19], 0xe9);

        assert!(NetworkDescriptor::new("localhost", 7545, "5777")
            .from_bytes()
            .is_none());
    }

    #[test]
    fn test_from_field_serde_name() {
        let d = NetworkDescriptor::new("127.0.0.1", 7545, "5777")
            .with_from("0x6323c62552e10C8e1406feAF03c79913c6e2c0E9");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["from"], "0x6323c62552e10C8e1406feAF03c79913c6e2c0E9");
        assert_eq!(json["network_id"], "5777");

        let bare = serde_json::to_value(NetworkDescriptor::new("h", 1, "*")).unwrap();
        assert!(bare.get("from").is_none());
    }
}
