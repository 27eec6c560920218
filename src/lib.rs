//! A2A bridge: agent registry and correlation bridge for a process
//! orchestration engine.
//!
//! Processes declare reusable agents by activating an inbound connector,
//! which registers the agent in a shared in-memory registry. External
//! clients discover and invoke those agents over HTTP, and every invocation
//! is delivered back to the owning process as a correlation event. A
//! separate outbound path lets processes call externally hosted agents over
//! REST or raw agent-to-agent JSON.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Trait interfaces for the engine and the network
//! - **Adapters**: Concrete implementations (in-memory registry, axum, reqwest)
//!
//! # Modules
//!
//! - [`agent_registry`]: Registered agents and the shared registry
//! - [`inbound`]: Lifecycle connector that registers and removes agents
//! - [`discovery`]: Discovery and invocation surface
//! - [`outbound`]: Dispatch to externally hosted agents
//! - [`config`]: Environment configuration
//! - [`telemetry`]: Tracing setup

pub mod agent_registry;
pub mod config;
pub mod discovery;
pub mod inbound;
pub mod outbound;
pub mod telemetry;
