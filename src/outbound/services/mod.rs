//! Application services for outbound dispatch.

mod dispatch;

pub use dispatch::{DispatchError, DispatchResult, OutboundDispatcher};
