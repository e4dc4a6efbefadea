//! Canned acknowledgement reply generator.
//!
//! A stand-in for a real classification/response service: each submission
//! receives one of a fixed set of acknowledgement templates, selected
//! uniformly at random. One template quotes an excerpt of the submission
//! back to the submitter.

use async_trait::async_trait;
use minijinja::Environment;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::{Map, Value};
use std::sync::Mutex;

use crate::support::domain::MessageBody;
use crate::support::ports::{ReplyError, ReplyGenerator, ReplyResult};

/// Number of body characters quoted back by the excerpt template.
const EXCERPT_CHARS: usize = 50;

/// Named acknowledgement templates, rendered with an `excerpt` variable.
static TEMPLATES: [(&str, &str); 4] = [
    (
        "ack_excerpt",
        "Thank you for reaching out! I understand your concern about \
         \"{{ excerpt }}...\". Our team will review this and get back to you \
         within 24 hours. In the meantime, you might find our FAQ section \
         helpful.",
    ),
    (
        "ack_docs",
        "I appreciate you contacting us. Based on your message, I recommend \
         checking our documentation for detailed guidance. If the issue \
         persists, our support team will investigate further and provide a \
         personalized solution.",
    ),
    (
        "ack_steps",
        "Thanks for your message! I've analyzed your request and it seems \
         related to a common issue. Here are some immediate steps you can \
         try: 1) Clear your cache, 2) Restart the application, 3) Check your \
         internet connection. If these don't help, we'll escalate this to \
         our technical team.",
    ),
    (
        "ack_priority",
        "Hello! I've received your inquiry. This appears to be a priority \
         issue that requires immediate attention. I've flagged this for our \
         senior support team, and you should expect a detailed response \
         within the next few hours.",
    ),
];

/// Reply generator that selects one of a fixed set of acknowledgement
/// templates per submission.
#[derive(Debug)]
pub struct CannedReplyGenerator {
    rng: Mutex<StdRng>,
}

impl CannedReplyGenerator {
    /// Creates a generator seeded from operating-system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a generator with a fixed seed for deterministic selection.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick_template(&self) -> Result<(&'static str, &'static str), ReplyError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|err| ReplyError::service(std::io::Error::other(err.to_string())))?;
        TEMPLATES
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| {
                ReplyError::service(std::io::Error::other("no reply templates configured"))
            })
    }
}

impl Default for CannedReplyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReplyGenerator for CannedReplyGenerator {
    async fn reply_to(&self, body: &MessageBody) -> ReplyResult {
        let (template_name, template_source) = self.pick_template()?;
        let rendered = render_template(template_name, template_source, body)?;
        Ok(Some(rendered))
    }
}

fn render_template(
    template_name: &str,
    template_source: &str,
    body: &MessageBody,
) -> Result<String, ReplyError> {
    let environment = Environment::new();
    let context = build_template_context(body);
    environment
        .render_str(template_source, context)
        .map_err(|error| ReplyError::TemplateRender {
            template: template_name.to_owned(),
            reason: error.to_string(),
        })
}

fn build_template_context(body: &MessageBody) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert(
        "excerpt".to_owned(),
        Value::String(body.excerpt(EXCERPT_CHARS)),
    );
    context
}
