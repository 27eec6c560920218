//! In-memory agent directory.

mod registry;

pub use registry::AgentRegistry;
