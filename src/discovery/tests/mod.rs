//! Unit tests for the discovery bounded context.
