//! Application services for the inbound connector.

mod lifecycle;

pub use lifecycle::{InboundConnector, InboundConnectorError, InboundConnectorResult};
