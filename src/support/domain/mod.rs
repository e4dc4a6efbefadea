//! Domain model for support messages.
//!
//! The support domain models the submitted ticket itself: validated
//! submitter fields, the immutable [`SupportMessage`] aggregate, and the
//! errors raised while constructing them. All infrastructure concerns are
//! kept outside the domain boundary.

mod error;
mod fields;
mod ids;
mod message;

pub use error::SupportDomainError;
pub use fields::{EmailAddress, MessageBody, SubmitterName};
pub use ids::MessageId;
pub use message::{PersistedMessageData, SupportMessage};
