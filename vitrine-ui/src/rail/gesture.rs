//! Swipe classification for drag releases.

/// Navigation direction implied by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    /// Dragged toward the next item.
    Advance,
    /// Dragged toward the previous item.
    Retreat,
}

/// Swipe power: displacement magnitude weighted by signed velocity.
pub fn swipe_power(offset: f32, velocity: f32) -> f32 {
    offset.abs() * velocity
}

/// Classify a drag release. Both comparisons are strict: a release with
/// power exactly at the threshold is a cancelled gesture and the rail
/// snaps back.
pub fn classify(
    offset: f32,
    velocity: f32,
    threshold: f32,
) -> Option<SwipeIntent> {
    let power = swipe_power(offset, velocity);
    if power < -threshold {
        Some(SwipeIntent::Advance)
    } else if power > threshold {
        Some(SwipeIntent::Retreat)
    } else {
        None
    }
}
