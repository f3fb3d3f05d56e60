//! Message types for focus rail interactions.

/// The two keys the rail binds; everything else is ignored by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// One discrete interaction applied through [`FocusRail::update`].
///
/// [`FocusRail::update`]: super::controller::FocusRail::update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RailMessage {
    Next,
    Previous,
    /// A non-center visible card at this relative offset was selected.
    /// Offset 0 is equivalent to [`RailMessage::Activate`].
    JumpToOffset(i64),
    /// The centered card was selected; signals the surrounding context
    /// without moving the rail.
    Activate,
    KeyPressed(ArrowKey),
    /// A drag gesture ended with the given horizontal offset and
    /// velocity.
    DragReleased { offset: f32, velocity: f32 },
    HoverEntered,
    HoverExited,
    /// Delivered by the autoplay timer.
    AutoplayTick,
}
