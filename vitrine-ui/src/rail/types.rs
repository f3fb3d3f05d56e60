//! Shared types for the focus rail module.

use std::time::Duration;

/// Boundary behavior when navigating past either end of the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Clamped rail: stepping past an end is a no-op.
    Finite,
    /// Wrap-around rail: indexing wraps with modulo arithmetic.
    Infinite,
}

/// Static configuration for a rail instance.
#[derive(Debug, Clone, Copy)]
pub struct RailConfig {
    pub initial_index: i64,
    pub wrap_mode: WrapMode,
    /// Whether the unattended timer advances the rail.
    pub autoplay: bool,
    /// Interval between autoplay ticks; every resume after a hover waits
    /// the full interval again.
    pub autoplay_interval: Duration,
    /// Swipe power magnitude a drag release must strictly exceed to
    /// navigate.
    pub swipe_threshold: f32,
    /// Horizontal distance between neighboring cards, in pixels.
    pub spacing: f32,
}

impl RailConfig {
    /// Defaults for wide viewports (500px cards + 50px gap).
    pub const fn desktop_defaults() -> Self {
        Self {
            initial_index: 0,
            wrap_mode: WrapMode::Infinite,
            autoplay: false,
            autoplay_interval: Duration::from_millis(4000),
            swipe_threshold: 10_000.0,
            spacing: 550.0,
        }
    }

    /// Defaults for narrow viewports (300px cards + 20px gap).
    pub const fn mobile_defaults() -> Self {
        let mut config = Self::desktop_defaults();
        config.spacing = 320.0;
        config
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self::desktop_defaults()
    }
}

/// Spring coefficients for the rail's visual motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

/// Base spring for spatial movement (x/z).
pub const BASE_SPRING: SpringParams = SpringParams {
    stiffness: 300.0,
    damping: 30.0,
    mass: 1.0,
};

/// Bouncier spring for the center card's tap feedback; the lower damping
/// gives a subtle overshoot.
pub const TAP_SPRING: SpringParams = SpringParams {
    stiffness: 450.0,
    damping: 18.0,
    mass: 1.0,
};
