use crate::config::NetworkDescriptor;

/// Ganache desktop workspace defaults
pub fn ganache_descriptor() -> NetworkDescriptor {
    NetworkDescriptor::new("127.0.0.1", 7545, "5777")
        .with_from("0x6323c62552e10C8e1406feAF03c79913c6e2c0E9")
}
