//! Unit tests for the agent registry bounded context.
