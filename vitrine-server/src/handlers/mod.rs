//! Request handlers.

pub mod contact;
