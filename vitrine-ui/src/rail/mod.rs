//! Focus rail carousel: index state, message-driven controller, visible
//! window projection, gesture classification, and the autoplay driver.

pub mod animator;
pub mod autoplay;
pub mod controller;
pub mod gesture;
pub mod messages;
pub mod projection;
pub mod state;
pub mod types;

pub use animator::SpringAnimator;
pub use autoplay::Autoplay;
pub use controller::{
    FocusRail, RailCard, RailFrame, RailObserver, SharedRail,
};
pub use gesture::{SwipeIntent, swipe_power};
pub use messages::{ArrowKey, RailMessage};
pub use projection::{CardTransform, VISIBLE_OFFSETS};
pub use state::{FocusRailState, RailError, RailSlot, wrap};
pub use types::{BASE_SPRING, RailConfig, SpringParams, TAP_SPRING, WrapMode};
