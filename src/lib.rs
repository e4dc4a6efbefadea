//! Helpdesk: support-ticket intake and dashboard core.
//!
//! This crate provides the core functionality behind a small support-ticket
//! application: accepting submitted messages, generating automated
//! acknowledgements, and serving paginated, searchable message listings to
//! an administrative dashboard.
//!
//! # Architecture
//!
//! Helpdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, templates, etc.)
//!
//! # Modules
//!
//! - [`support`]: Support-message domain, storage, and submission workflow
//! - [`listing`]: Pure pagination and search-filtering transforms

pub mod listing;
pub mod support;
