//! Unit tests for the inbound connector bounded context.
