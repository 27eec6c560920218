//! Port contracts for outbound dispatch.

mod transport;

#[cfg(test)]
pub use transport::MockOutboundTransport;
pub use transport::{OutboundTransport, TransportError, TransportResponse, TransportResult};
