//! Port contracts between the connector and the orchestration engine.

mod context;

pub use context::ActivationContext;
