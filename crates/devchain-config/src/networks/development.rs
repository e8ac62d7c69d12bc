use crate::config::{NetworkDescriptor, ANY_NETWORK_ID};

/// Local node on the conventional JSON-RPC port, any network id
pub fn development_descriptor() -> NetworkDescriptor {
    NetworkDescriptor::new("127.0.0.1", 8545, ANY_NETWORK_ID)
}
