//! The contact relay endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use vitrine_model::{ContactSubmission, RelayResponse};

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;
use crate::mailer::template;

/// Incoming body with every field optional, so an absent key surfaces as
/// the validation failure rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactBody {
    fn into_submission(self) -> Option<ContactSubmission> {
        let submission = ContactSubmission::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.message.unwrap_or_default(),
        );
        submission.is_complete().then_some(submission)
    }
}

/// POST `/api/contact`: validate, preflight the transport, send.
///
/// No retries and no queueing — a resubmission sends a second email.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<ContactBody>,
) -> AppResult<Json<RelayResponse>> {
    let Some(submission) = body.into_submission() else {
        return Err(AppError::bad_request("All fields are required"));
    };

    let mail = template::render(&submission);

    state.mailer().verify().await.map_err(|err| {
        tracing::error!(error = %err, "transport verification failed");
        AppError::internal("Failed to send email")
    })?;

    state.mailer().send(mail).await.map_err(|err| {
        tracing::error!(error = %err, "email send failed");
        AppError::internal("Failed to send email")
    })?;

    tracing::info!(reply_to = %submission.email, "contact submission relayed");
    Ok(Json(RelayResponse::ok("Email sent successfully")))
}

/// OPTIONS `/api/contact`: a bare 200 for preflights that reach the
/// handler instead of being answered by the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Every verb other than POST/OPTIONS.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed("Method Not Allowed")
}
