//! Adapter implementations for the activation context port.

mod properties_context;

pub use properties_context::PropertiesActivationContext;
