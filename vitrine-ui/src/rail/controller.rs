//! Message-driven rail controller with explicit render notification.
//!
//! The controller owns the state and a set of observers. Each
//! [`RailMessage`] is applied synchronously; when the projected frame
//! changed, every observer receives the new [`RailFrame`]. Selection of
//! the centered card is delivered as a distinct activation event. There
//! is no implicit reactivity anywhere in this crate.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use vitrine_model::RailItem;

use super::gesture::{self, SwipeIntent};
use super::messages::{ArrowKey, RailMessage};
use super::projection::{CardTransform, card_transform};
use super::state::{FocusRailState, RailError};
use super::types::RailConfig;

/// Observer receiving explicit update notifications from the controller.
pub trait RailObserver: Send {
    /// Called after any transition that changed the projected frame.
    fn rail_updated(&mut self, frame: &RailFrame);

    /// Called when the centered card is selected (e.g. to open a detail
    /// view). The rail itself does not move.
    fn item_activated(&mut self, item: &RailItem) {
        let _ = item;
    }
}

/// One card of the projected frame.
#[derive(Debug, Clone)]
pub struct RailCard {
    pub offset: i64,
    pub index: usize,
    pub item: RailItem,
    pub transform: CardTransform,
}

/// Snapshot handed to observers after a transition.
#[derive(Debug, Clone)]
pub struct RailFrame {
    pub active_index: usize,
    pub total: usize,
    /// 1-based "current / total" readout.
    pub position_label: String,
    pub active_item: RailItem,
    pub cards: Vec<RailCard>,
}

/// A rail controller shared with the autoplay task.
pub type SharedRail = Arc<Mutex<FocusRail>>;

/// The focus rail controller.
pub struct FocusRail {
    state: FocusRailState,
    observers: Vec<Box<dyn RailObserver>>,
    hover_tx: watch::Sender<bool>,
}

impl FocusRail {
    pub fn new(
        items: Vec<RailItem>,
        config: RailConfig,
    ) -> Result<Self, RailError> {
        let state = FocusRailState::new(items, config)?;
        let (hover_tx, _) = watch::channel(false);
        Ok(Self {
            state,
            observers: Vec::new(),
            hover_tx,
        })
    }

    pub fn into_shared(self) -> SharedRail {
        Arc::new(Mutex::new(self))
    }

    pub fn state(&self) -> &FocusRailState {
        &self.state
    }

    pub fn config(&self) -> &RailConfig {
        self.state.config()
    }

    /// Register a render callback. Observers are notified in
    /// registration order.
    pub fn observe(&mut self, observer: Box<dyn RailObserver>) {
        self.observers.push(observer);
    }

    /// Suspend-flag receiver for the autoplay task.
    pub(crate) fn hover_signal(&self) -> watch::Receiver<bool> {
        self.hover_tx.subscribe()
    }

    /// Apply one interaction and notify observers of the outcome.
    pub fn update(&mut self, message: RailMessage) {
        let changed = match message {
            RailMessage::Next => self.state.next(),
            RailMessage::Previous => self.state.previous(),
            RailMessage::Activate | RailMessage::JumpToOffset(0) => {
                self.notify_activated();
                false
            }
            RailMessage::JumpToOffset(offset) => self.state.jump_by(offset),
            RailMessage::KeyPressed(ArrowKey::Left) => self.state.previous(),
            RailMessage::KeyPressed(ArrowKey::Right) => self.state.next(),
            RailMessage::DragReleased { offset, velocity } => {
                let threshold = self.state.config().swipe_threshold;
                match gesture::classify(offset, velocity, threshold) {
                    Some(SwipeIntent::Advance) => self.state.next(),
                    Some(SwipeIntent::Retreat) => self.state.previous(),
                    None => false,
                }
            }
            RailMessage::HoverEntered => {
                self.set_hovering(true);
                false
            }
            RailMessage::HoverExited => {
                self.set_hovering(false);
                false
            }
            RailMessage::AutoplayTick => self.state.autoplay_tick(),
        };

        if changed {
            tracing::debug!(
                active = self.state.active_index(),
                raw = self.state.raw_index(),
                "rail moved"
            );
            let frame = self.frame();
            for observer in &mut self.observers {
                observer.rail_updated(&frame);
            }
        }
    }

    /// Project the current frame for rendering.
    pub fn frame(&self) -> RailFrame {
        let spacing = self.state.config().spacing;
        let cards = self
            .state
            .visible_window()
            .into_iter()
            .map(|slot| RailCard {
                offset: slot.offset,
                index: slot.index,
                item: self.state.items()[slot.index].clone(),
                transform: card_transform(slot.offset, spacing),
            })
            .collect();
        RailFrame {
            active_index: self.state.active_index(),
            total: self.state.len(),
            position_label: self.state.position_label(),
            active_item: self.state.active_item().clone(),
            cards,
        }
    }

    fn set_hovering(&mut self, hovering: bool) {
        if self.state.set_hovering(hovering) {
            self.hover_tx.send_replace(hovering);
        }
    }

    fn notify_activated(&mut self) {
        let item = self.state.active_item().clone();
        tracing::debug!(id = %item.id, "item activated");
        for observer in &mut self.observers {
            observer.item_activated(&item);
        }
    }
}

impl fmt::Debug for FocusRail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusRail")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rail::types::WrapMode;
    use vitrine_model::ItemId;

    fn items(count: usize) -> Vec<RailItem> {
        (0..count)
            .map(|i| {
                RailItem::new(format!("item-{i}"), format!("Item {i}"), "x.png")
            })
            .collect()
    }

    #[derive(Default)]
    struct Recorder {
        frames: Arc<Mutex<Vec<usize>>>,
        activations: Arc<Mutex<Vec<ItemId>>>,
    }

    impl RailObserver for Recorder {
        fn rail_updated(&mut self, frame: &RailFrame) {
            self.frames.lock().push(frame.active_index);
        }

        fn item_activated(&mut self, item: &RailItem) {
            self.activations.lock().push(item.id.clone());
        }
    }

    fn rail_with_recorder(
        config: RailConfig,
    ) -> (FocusRail, Arc<Mutex<Vec<usize>>>, Arc<Mutex<Vec<ItemId>>>) {
        let recorder = Recorder::default();
        let frames = recorder.frames.clone();
        let activations = recorder.activations.clone();
        let mut rail = FocusRail::new(items(4), config).unwrap();
        rail.observe(Box::new(recorder));
        (rail, frames, activations)
    }

    #[test]
    fn navigation_notifies_observers_with_the_new_frame() {
        let (mut rail, frames, _) =
            rail_with_recorder(RailConfig::desktop_defaults());
        rail.update(RailMessage::Next);
        rail.update(RailMessage::KeyPressed(ArrowKey::Right));
        rail.update(RailMessage::KeyPressed(ArrowKey::Left));
        assert_eq!(*frames.lock(), vec![1, 2, 1]);
    }

    #[test]
    fn activation_fires_without_moving_the_rail() {
        let (mut rail, frames, activations) =
            rail_with_recorder(RailConfig::desktop_defaults());
        rail.update(RailMessage::Activate);
        rail.update(RailMessage::JumpToOffset(0));
        assert!(frames.lock().is_empty());
        assert_eq!(activations.lock().len(), 2);
        assert_eq!(activations.lock()[0], ItemId::from("item-0"));
        assert_eq!(rail.state().active_index(), 0);
    }

    #[test]
    fn boundary_noop_does_not_notify() {
        let config = RailConfig {
            wrap_mode: WrapMode::Finite,
            ..RailConfig::desktop_defaults()
        };
        let (mut rail, frames, _) = rail_with_recorder(config);
        rail.update(RailMessage::Previous);
        assert!(frames.lock().is_empty());
    }

    #[test]
    fn drag_release_navigates_only_past_the_threshold() {
        let (mut rail, frames, _) =
            rail_with_recorder(RailConfig::desktop_defaults());
        // Cancelled gesture: power exactly at the threshold.
        rail.update(RailMessage::DragReleased {
            offset: 100.0,
            velocity: 100.0,
        });
        assert!(frames.lock().is_empty());

        rail.update(RailMessage::DragReleased {
            offset: -150.0,
            velocity: -100.0,
        });
        rail.update(RailMessage::DragReleased {
            offset: 150.0,
            velocity: 100.0,
        });
        assert_eq!(*frames.lock(), vec![1, 0]);
    }

    #[test]
    fn jump_to_visible_offset_collapses_steps() {
        let (mut rail, frames, _) =
            rail_with_recorder(RailConfig::desktop_defaults());
        rail.update(RailMessage::JumpToOffset(2));
        rail.update(RailMessage::JumpToOffset(-1));
        assert_eq!(*frames.lock(), vec![2, 1]);
    }

    #[test]
    fn frame_projects_five_cards_with_center_elevated() {
        let rail =
            FocusRail::new(items(4), RailConfig::desktop_defaults()).unwrap();
        let frame = rail.frame();
        assert_eq!(frame.cards.len(), 5);
        assert_eq!(frame.position_label, "1 / 4");
        let center = frame.cards.iter().find(|c| c.offset == 0).unwrap();
        assert!(center.transform.elevated);
        assert_eq!(center.item.id, frame.active_item.id);
    }

    #[test]
    fn hover_messages_gate_autoplay_ticks() {
        let config = RailConfig {
            autoplay: true,
            ..RailConfig::desktop_defaults()
        };
        let (mut rail, frames, _) = rail_with_recorder(config);
        rail.update(RailMessage::HoverEntered);
        rail.update(RailMessage::AutoplayTick);
        assert!(frames.lock().is_empty());
        rail.update(RailMessage::HoverExited);
        rail.update(RailMessage::AutoplayTick);
        assert_eq!(*frames.lock(), vec![1]);
    }
}
