//! Reply-generation port.
//!
//! Automated acknowledgements are produced behind this strategy boundary so
//! the canned generator shipped here can be swapped for a real
//! classification or response service without touching the submission
//! workflow.

use crate::support::domain::MessageBody;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for reply generation.
pub type ReplyResult = Result<Option<String>, ReplyError>;

/// Automated-reply strategy contract.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Produces an automated reply to the given message body.
    ///
    /// Returns `Ok(None)` when the strategy declines to reply; that is a
    /// legitimate outcome, not a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError`] when the strategy itself fails (template
    /// rendering, remote service, and so on).
    async fn reply_to(&self, body: &MessageBody) -> ReplyResult;
}

/// Errors returned by reply generator implementations.
#[derive(Debug, Clone, Error)]
pub enum ReplyError {
    /// A reply template failed to render.
    #[error("reply template '{template}' failed to render: {reason}")]
    TemplateRender {
        /// Name of the failing template.
        template: String,
        /// Renderer-reported failure reason.
        reason: String,
    },

    /// The underlying reply service failed.
    #[error("reply service error: {0}")]
    Service(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReplyError {
    /// Wraps a reply-service failure.
    pub fn service(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Service(Arc::new(err))
    }
}
