//! Domain model for registered agents.
//!
//! An [`Agent`] pairs a stable identity and declared skills with the
//! correlation handle used to advance its owning process. Infrastructure
//! concerns stay outside this boundary.

mod agent;
mod error;
mod ids;
mod skills;

pub use agent::Agent;
pub use error::AgentDomainError;
pub use ids::AgentId;
pub use skills::parse_skill_list;
