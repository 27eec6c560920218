//! Unit tests for the outbound dispatch bounded context.
