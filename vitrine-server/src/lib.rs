//! # Vitrine Server
//!
//! Contact relay for the Vitrine portfolio site.
//!
//! ## Overview
//!
//! A stateless single-endpoint service: it validates a three-field
//! contact submission, preflights the mail transport, and forwards the
//! submission as an email to a fixed destination. There is no
//! persistence, no queueing, and no retry — a resubmission sends a
//! second email.
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - `tower-http` for permissive CORS and request tracing
//! - `lettre` for the SMTP transport (preflight-verified per request)
//! - `vitrine-config` for env-driven configuration injected at startup

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod mailer;
pub mod routes;
