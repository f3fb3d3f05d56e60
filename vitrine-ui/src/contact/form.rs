//! Contact form state machine.
//!
//! One submission may be in flight at a time: while `Loading`, the host
//! disables the submit control and further `submit` calls are ignored,
//! so a double click never issues a second relay request from the same
//! form instance.

use std::time::Duration;

use vitrine_model::ContactSubmission;

use super::client::RelayClient;
use super::composer::MessageComposer;

/// How long the host should display the Success state before scheduling
/// [`ContactForm::reset`].
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

const VALIDATION_MESSAGE: &str = "All fields are required";
const CONNECTION_FAILURE_MESSAGE: &str =
    "Failed to connect to server. Please try again later.";
const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: FormStatus,
    error_message: Option<String>,
    ai_writing: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True while the composer stub is writing into the message field;
    /// the host swaps the textarea for a skeleton in the meantime.
    pub fn ai_writing(&self) -> bool {
        self.ai_writing
    }

    /// Whether the submit control should accept input.
    pub fn submit_enabled(&self) -> bool {
        !matches!(self.status, FormStatus::Loading | FormStatus::Success)
    }

    /// Submit the current fields through `relay`.
    ///
    /// Ignored while a submission is in flight. Empty fields fail locally
    /// with an inline message and no network call is made.
    pub async fn submit<C: RelayClient + ?Sized>(&mut self, relay: &C) {
        if matches!(self.status, FormStatus::Loading) {
            return;
        }

        let submission = ContactSubmission::new(
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
        );
        if let Err(err) = submission.validate() {
            tracing::debug!(%err, "submission rejected locally");
            self.status = FormStatus::Error;
            self.error_message = Some(VALIDATION_MESSAGE.to_owned());
            return;
        }

        self.status = FormStatus::Loading;
        self.error_message = None;

        match relay.submit(submission).await {
            Ok(reply) if reply.success => {
                self.status = FormStatus::Success;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            Ok(reply) => {
                self.status = FormStatus::Error;
                self.error_message = Some(if reply.message.is_empty() {
                    GENERIC_FAILURE_MESSAGE.to_owned()
                } else {
                    reply.message
                });
            }
            Err(err) => {
                tracing::error!(%err, "relay unreachable");
                self.status = FormStatus::Error;
                self.error_message =
                    Some(CONNECTION_FAILURE_MESSAGE.to_owned());
            }
        }
    }

    /// Draft a message with the composer collaborator.
    ///
    /// Refused while already writing or while a submission is in flight
    /// (the control is disabled then). A composer failure leaves the
    /// message field untouched.
    pub async fn autofill<M: MessageComposer + ?Sized>(
        &mut self,
        composer: &M,
    ) {
        if self.ai_writing || matches!(self.status, FormStatus::Loading) {
            return;
        }
        self.ai_writing = true;
        match composer.compose().await {
            Ok(draft) => self.message = draft,
            Err(err) => tracing::warn!(%err, "composer failed"),
        }
        self.ai_writing = false;
    }

    /// Return to Idle; the host schedules this [`SUCCESS_RESET_DELAY`]
    /// after a success, or immediately to dismiss an error.
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
        self.error_message = None;
    }

    #[cfg(test)]
    pub(crate) fn force_status(&mut self, status: FormStatus) {
        self.status = status;
    }
}
