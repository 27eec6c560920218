//! Domain model for outbound agent calls.

mod call;
mod error;
mod mode;
mod request;
mod result;

pub use call::OutboundCall;
pub use error::OutboundDomainError;
pub use mode::DispatchMode;
pub use request::{A2A_FALLBACK_TEXT, ChatTurn, OutboundRequest, REST_HANDLE_PATH};
pub use result::{OutboundResult, ResponseBody};
