//! Unit tests for the support module.
//!
//! Tests are organised by layer: domain validation, reply generation,
//! the in-memory store, Postgres row conversion, and service orchestration.
