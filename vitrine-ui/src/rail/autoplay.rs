//! Unattended autoplay timer for a shared rail.

use tokio::task::JoinHandle;

use super::controller::SharedRail;
use super::messages::RailMessage;

/// Handle owning the autoplay task.
///
/// While the rail is not hovered, the task delivers an
/// [`RailMessage::AutoplayTick`] every configured interval. Hover-enter
/// parks the timer; hover-exit restarts it from a fresh full interval —
/// partial elapsed time is never carried over. The task is aborted when
/// the handle drops, so it cannot outlive the widget it drives.
#[derive(Debug)]
pub struct Autoplay {
    handle: JoinHandle<()>,
}

impl Autoplay {
    /// Spawn the timer task for `rail` on the current tokio runtime.
    pub fn spawn(rail: SharedRail) -> Self {
        let (interval, mut suspended) = {
            let rail = rail.lock();
            (rail.config().autoplay_interval, rail.hover_signal())
        };
        let handle = tokio::spawn(async move {
            loop {
                let parked = *suspended.borrow_and_update();
                if parked {
                    // Parked until hover ends.
                    if suspended.changed().await.is_err() {
                        break;
                    }
                    continue;
                }
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        rail.lock().update(RailMessage::AutoplayTick);
                    }
                    changed = suspended.changed() => {
                        // The in-flight interval is discarded; the next
                        // idle period starts over from zero.
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        });
        tracing::debug!("autoplay timer started");
        Self { handle }
    }

    /// Stop the timer without waiting for the task to wind down.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
