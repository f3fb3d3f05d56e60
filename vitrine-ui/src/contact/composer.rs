//! Message composer collaborator behind the form's "ask AI to write"
//! control.
//!
//! The shipped implementation is a fixed-delay canned draft, not an
//! inference call. It lives behind the same trait a real text-generation
//! backend would implement so one can be swapped in without touching the
//! form.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("composer backend unavailable: {0}")]
    Unavailable(String),
}

/// Drafts a contact message on request.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageComposer: Send + Sync {
    async fn compose(&self) -> Result<String, ComposeError>;
}

/// The draft the canned composer always produces.
pub const CANNED_DRAFT: &str = "Hi, I came across your portfolio and was \
impressed by your work. I'm looking for a skilled developer to collaborate \
on a project. I'd love to discuss how your expertise aligns with our goals. \
Looking forward to connecting with you!";

const CANNED_DELAY: Duration = Duration::from_secs(2);

/// Fixed-delay stand-in for a text-generation backend.
#[derive(Debug, Clone)]
pub struct CannedComposer {
    delay: Duration,
}

impl CannedComposer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CannedComposer {
    fn default() -> Self {
        Self::new(CANNED_DELAY)
    }
}

#[async_trait]
impl MessageComposer for CannedComposer {
    async fn compose(&self) -> Result<String, ComposeError> {
        tokio::time::sleep(self.delay).await;
        Ok(CANNED_DRAFT.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn canned_composer_yields_the_draft_after_its_delay() {
        let composer = CannedComposer::default();
        let started = tokio::time::Instant::now();
        let draft = composer.compose().await.unwrap();
        assert_eq!(draft, CANNED_DRAFT);
        assert_eq!(started.elapsed(), CANNED_DELAY);
    }
}
