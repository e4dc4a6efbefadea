//! Unit tests for the list query engine.
