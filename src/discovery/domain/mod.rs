//! Wire-facing projections of registered agents.

mod card;
mod invoke;
mod manifest;

pub use card::{AgentCard, AgentSummary, CardAction};
pub use invoke::{
    DEFAULT_SKILL, INVOKE_TRACE, InvokeRequest, InvokeResponse, InvokeStatus, select_skill,
};
pub use manifest::{ManifestEndpoints, ServiceManifest};
