//! Domain model for connector activation.

mod error;
mod properties;
mod state;

pub use error::ConnectorConfigError;
pub use properties::{ConnectorProperties, ValidatedProperties};
pub use state::ConnectorState;
