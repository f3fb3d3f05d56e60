//! Contact form engine: status state machine, relay HTTP client, and the
//! canned message composer stub.

pub mod client;
pub mod composer;
pub mod form;

pub use client::{HttpRelayClient, RelayClient, RelayClientError};
pub use composer::{CannedComposer, ComposeError, MessageComposer};
pub use form::{ContactForm, FormStatus, SUCCESS_RESET_DELAY};
