//! Configuration structures and types
pub mod descriptor;
pub mod networks_file;

pub use descriptor::{NetworkDescriptor, ANY_NETWORK_ID};
pub use networks_file::NetworksFile;
