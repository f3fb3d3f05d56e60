//! Visible window projection: per-slot visual parameters as pure
//! functions of the slot's relative offset.

/// Relative offsets rendered around the active card.
pub const VISIBLE_OFFSETS: [i64; 5] = [-2, -1, 0, 1, 2];

/// Visual parameters for one card slot. All values are pure functions of
/// the offset and the configured spacing; a renderer tweens toward them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal displacement from center, in pixels.
    pub x: f32,
    /// Depth displacement; negative values recede.
    pub z: f32,
    pub scale: f32,
    /// Y-axis rotation in degrees.
    pub rotate_y: f32,
    pub opacity: f32,
    /// Blur radius in pixels.
    pub blur: f32,
    pub brightness: f32,
    /// The center card stacks above its neighbors.
    pub elevated: bool,
}

pub fn card_transform(offset: i64, spacing: f32) -> CardTransform {
    let center = offset == 0;
    let dist = offset.unsigned_abs() as f32;
    CardTransform {
        x: offset as f32 * spacing,
        z: -dist * 180.0,
        scale: if center { 1.0 } else { 0.85 },
        rotate_y: offset as f32 * -20.0,
        opacity: if center { 1.0 } else { (1.0 - dist * 0.5).max(0.1) },
        blur: if center { 0.0 } else { dist * 6.0 },
        brightness: if center { 1.0 } else { 0.5 },
        elevated: center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_card_is_identity() {
        let transform = card_transform(0, 550.0);
        assert_eq!(transform.x, 0.0);
        assert_eq!(transform.z, 0.0);
        assert_eq!(transform.scale, 1.0);
        assert_eq!(transform.rotate_y, 0.0);
        assert_eq!(transform.opacity, 1.0);
        assert_eq!(transform.blur, 0.0);
        assert_eq!(transform.brightness, 1.0);
        assert!(transform.elevated);
    }

    #[test]
    fn neighbors_recede_and_dim_symmetrically() {
        let left = card_transform(-1, 550.0);
        let right = card_transform(1, 550.0);
        assert_eq!(left.x, -550.0);
        assert_eq!(right.x, 550.0);
        assert_eq!(left.z, right.z);
        assert_eq!(left.z, -180.0);
        assert_eq!(left.scale, 0.85);
        assert_eq!(left.opacity, 0.5);
        assert_eq!(left.blur, 6.0);
        assert_eq!(left.brightness, 0.5);
        assert_eq!(left.rotate_y, 20.0);
        assert_eq!(right.rotate_y, -20.0);
        assert!(!left.elevated);
    }

    #[test]
    fn outer_cards_hit_the_opacity_floor_before_vanishing() {
        let outer = card_transform(2, 320.0);
        assert_eq!(outer.x, 640.0);
        assert_eq!(outer.z, -360.0);
        assert_eq!(outer.opacity, 0.1);
        assert_eq!(outer.blur, 12.0);
    }
}
