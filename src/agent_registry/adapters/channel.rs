//! Channel-backed correlation handle.
//!
//! Events are pushed onto an unbounded `tokio` channel whose receiving end
//! belongs to the orchestration engine. Sending never blocks and carries no
//! reply channel.

use crate::agent_registry::ports::{
    CorrelationError, CorrelationHandle, CorrelationResult, Variables,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// One event delivered to the orchestration engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationEvent {
    /// Unique identifier assigned when the event was sent.
    pub event_id: Uuid,
    /// Label of the activation that produced the event.
    pub source: String,
    /// Variables for the owning process.
    pub variables: Variables,
}

/// Correlation handle that forwards events over an mpsc channel.
#[derive(Debug, Clone)]
pub struct ChannelCorrelationHandle {
    source: String,
    sender: UnboundedSender<CorrelationEvent>,
}

impl ChannelCorrelationHandle {
    /// Creates a handle that labels its events with `source`.
    #[must_use]
    pub fn new(source: impl Into<String>, sender: UnboundedSender<CorrelationEvent>) -> Self {
        Self {
            source: source.into(),
            sender,
        }
    }

    /// Creates a handle together with the receiving end of its channel.
    #[must_use]
    pub fn channel(source: impl Into<String>) -> (Self, UnboundedReceiver<CorrelationEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(source, sender), receiver)
    }
}

impl CorrelationHandle for ChannelCorrelationHandle {
    fn notify(&self, variables: Variables) -> CorrelationResult<()> {
        let event = CorrelationEvent {
            event_id: Uuid::new_v4(),
            source: self.source.clone(),
            variables,
        };
        self.sender.send(event).map_err(|_| {
            tracing::error!(source = %self.source, "correlation receiver dropped");
            CorrelationError::Closed
        })
    }
}
