//! # Vitrine UI engine
//!
//! Headless client-side engine for the Vitrine portfolio application.
//!
//! ## Overview
//!
//! Two independent pieces live here:
//!
//! - **Focus rail** ([`rail`]): a circular carousel controller holding a
//!   single unbounded active index over a fixed item list. Navigation
//!   (next/previous/jump/drag/keyboard/autoplay) reduces to mutating that
//!   index; registered observers are notified with a projected frame so a
//!   renderer can redraw. There is no implicit reactivity.
//! - **Contact form** ([`contact`]): the form state machine, the HTTP
//!   client for the relay endpoint, and the canned message composer stub.
//!
//! The static project catalog the rail is mounted with lives in
//! [`portfolio`].
#![allow(missing_docs)]

pub mod contact;
pub mod portfolio;
pub mod rail;

pub use contact::{
    CannedComposer, ContactForm, FormStatus, HttpRelayClient,
    MessageComposer, RelayClient,
};
pub use rail::{
    Autoplay, CardTransform, FocusRail, FocusRailState, RailConfig,
    RailFrame, RailMessage, RailObserver, SharedRail, WrapMode,
};
