//! Index state for the focus rail.
//!
//! The stored index is logically unbounded: repeated `next()` calls
//! accumulate monotonically and the wrapped value is derived on read, so
//! a renderer animating between raw positions never sees a reset.

use thiserror::Error;
use vitrine_model::RailItem;

use super::projection::VISIBLE_OFFSETS;
use super::types::{RailConfig, WrapMode};

/// Map `value` into `[min, max)` with a true modulo.
///
/// `rem_euclid` keeps the result non-negative for negative inputs, which
/// the native `%` operator does not.
pub fn wrap(min: i64, max: i64, value: i64) -> i64 {
    let range = max - min;
    debug_assert!(range > 0);
    (value - min).rem_euclid(range) + min
}

/// One projected slot of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailSlot {
    /// Relative offset from the active card, in `[-2, 2]`.
    pub offset: i64,
    /// Wrapped absolute index into the item list.
    pub index: usize,
}

#[derive(Debug, Error)]
pub enum RailError {
    #[error("focus rail requires at least one item")]
    Empty,
}

/// Carousel state: the immutable item list, the unbounded active index,
/// and the hover flag that gates autoplay.
#[derive(Debug, Clone)]
pub struct FocusRailState {
    items: Vec<RailItem>,
    config: RailConfig,
    active: i64,
    hovering: bool,
}

impl FocusRailState {
    pub fn new(
        items: Vec<RailItem>,
        config: RailConfig,
    ) -> Result<Self, RailError> {
        if items.is_empty() {
            return Err(RailError::Empty);
        }
        let last = items.len() as i64 - 1;
        let active = match config.wrap_mode {
            // A finite rail keeps its raw index inside the list bounds.
            WrapMode::Finite => config.initial_index.clamp(0, last),
            WrapMode::Infinite => config.initial_index,
        };
        Ok(Self {
            items,
            config,
            active,
            hovering: false,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[RailItem] {
        &self.items
    }

    pub fn config(&self) -> &RailConfig {
        &self.config
    }

    /// The raw, unbounded index.
    pub fn raw_index(&self) -> i64 {
        self.active
    }

    /// The wrapped index of the centered item.
    pub fn active_index(&self) -> usize {
        wrap(0, self.len() as i64, self.active) as usize
    }

    pub fn active_item(&self) -> &RailItem {
        &self.items[self.active_index()]
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// 1-based "current / total" label for the rail's position readout.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.active_index() + 1, self.len())
    }

    /// Returns true when the flag actually changed.
    pub(crate) fn set_hovering(&mut self, hovering: bool) -> bool {
        if self.hovering == hovering {
            return false;
        }
        self.hovering = hovering;
        true
    }

    pub(crate) fn next(&mut self) -> bool {
        if matches!(self.config.wrap_mode, WrapMode::Finite)
            && self.active == self.len() as i64 - 1
        {
            return false;
        }
        self.active += 1;
        true
    }

    pub(crate) fn previous(&mut self) -> bool {
        if matches!(self.config.wrap_mode, WrapMode::Finite)
            && self.active == 0
        {
            return false;
        }
        self.active -= 1;
        true
    }

    /// Apply a relative jump, equivalent to `offset` consecutive single
    /// steps collapsed into one transition.
    pub(crate) fn jump_by(&mut self, offset: i64) -> bool {
        if offset == 0 {
            return false;
        }
        let target = match self.config.wrap_mode {
            WrapMode::Finite => {
                (self.active + offset).clamp(0, self.len() as i64 - 1)
            }
            WrapMode::Infinite => self.active + offset,
        };
        if target == self.active {
            return false;
        }
        self.active = target;
        true
    }

    /// An autoplay tick advances only while enabled and not hovered.
    pub(crate) fn autoplay_tick(&mut self) -> bool {
        if !self.config.autoplay || self.hovering {
            return false;
        }
        self.next()
    }

    /// Project the visible window: the five slots around the active card.
    ///
    /// With wrap-around disabled, offsets whose unwrapped absolute index
    /// falls outside the list are dropped rather than wrapped.
    pub fn visible_window(&self) -> Vec<RailSlot> {
        let len = self.len() as i64;
        VISIBLE_OFFSETS
            .iter()
            .filter_map(|&offset| {
                let absolute = self.active + offset;
                if matches!(self.config.wrap_mode, WrapMode::Finite)
                    && !(0..len).contains(&absolute)
                {
                    return None;
                }
                Some(RailSlot {
                    offset,
                    index: wrap(0, len, absolute) as usize,
                })
            })
            .collect()
    }
}
