//! Support-message intake, storage, and retrieval for Helpdesk.
//!
//! This module implements the support-ticket workflow: validating submitted
//! messages, generating an automated acknowledgement, persisting the result,
//! and fetching newest-first pages for the dashboard. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
