//! Time-stepped spring integrator for tweening toward projected targets.
//!
//! The projection module yields target positions as pure functions of the
//! slot offset; a renderer drives one animator per animated property and
//! steps it with its frame delta.

use std::time::Duration;

use super::types::SpringParams;

/// Integration substep ceiling; coarse frame deltas are subdivided so the
/// integration stays stable.
const MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;

/// Position/velocity tolerance below which the spring is considered at
/// rest.
const SETTLE_EPS: f32 = 0.05;

/// A damped spring tracking a retargetable scalar.
#[derive(Debug, Clone)]
pub struct SpringAnimator {
    params: SpringParams,
    position: f32,
    velocity: f32,
    target: f32,
}

impl SpringAnimator {
    /// Create an animator at rest at `position`.
    pub fn new(params: SpringParams, position: f32) -> Self {
        Self {
            params,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget mid-flight; current position and velocity carry over so
    /// motion stays continuous.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to the target immediately, discarding any residual motion.
    pub fn snap_to_target(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() < SETTLE_EPS
            && self.velocity.abs() < SETTLE_EPS
    }

    /// Advance the spring by `dt` and return the new position.
    ///
    /// Semi-implicit Euler with bounded substeps.
    pub fn step(&mut self, dt: Duration) -> f32 {
        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let displacement = self.position - self.target;
            let accel = (-self.params.stiffness * displacement
                - self.params.damping * self.velocity)
                / self.params.mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.snap_to_target();
        }
        self.position
    }
}
