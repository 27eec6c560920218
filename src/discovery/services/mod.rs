//! Application services for discovery and invocation.

mod surface;

pub use surface::{DiscoveryError, DiscoveryResult, DiscoveryService};
