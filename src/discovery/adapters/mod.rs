//! Adapter implementations for the discovery surface.

pub mod http;
