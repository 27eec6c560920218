//! Adapter implementations for the outbound transport port.

pub mod http;
mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
