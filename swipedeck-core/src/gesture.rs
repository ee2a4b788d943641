//! # Drag Tracking
//!
//! Turns raw pointer coordinates into a displacement and, on release, a
//! swipe decision.
//!
//! ```text
//! Idle ──start──▶ Dragging ──end, |dx| > threshold──▶ Committing(dir)
//!   ▲                │
//!   └──end / cancel──┘
//! ```
//!
//! The tracker knows nothing about cards. Deciding which card may be
//! dragged is the stack controller's job.

use serde::{Deserialize, Serialize};

use crate::event::SwipeDirection;

/// Horizontal distance a drag must exceed to commit a swipe.
pub const SWIPE_THRESHOLD: f32 = 75.0;
/// Degrees of tilt per unit of horizontal drag.
pub const ROTATION_FACTOR: f32 = 0.15;
/// Maximum tilt in degrees either way.
pub const MAX_ROTATION_DEG: f32 = 20.0;

/// Tuning for drag decisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Distance `|delta_x|` must strictly exceed to commit.
    pub swipe_threshold: f32,
    /// Degrees of tilt per unit of horizontal drag.
    pub rotation_factor: f32,
    /// Tilt clamp in degrees.
    pub max_rotation_deg: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            rotation_factor: ROTATION_FACTOR,
            max_rotation_deg: MAX_ROTATION_DEG,
        }
    }
}

/// Snapshot of the gesture in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    /// Whether a drag is in progress.
    pub active: bool,
    /// X where the drag started.
    pub origin_x: f32,
    /// Y where the drag started.
    pub origin_y: f32,
    /// Current horizontal displacement.
    pub delta_x: f32,
    /// Current vertical displacement.
    pub delta_y: f32,
}

/// Tracker phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// No gesture.
    Idle,
    /// Pointer is down and moving.
    Dragging,
    /// Released past the threshold; waiting for the owner to settle.
    Committing(SwipeDirection),
}

/// What happened when a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Threshold exceeded: swipe in this direction.
    Commit(SwipeDirection),
    /// Released short of the threshold; the card springs back.
    SnapBack,
    /// There was no drag to end.
    Ignored,
}

/// Drag state machine for a single gesture at a time.
#[derive(Debug, Clone)]
pub struct DragTracker {
    phase: DragPhase,
    state: DragState,
    config: DragConfig,
}

impl DragTracker {
    /// Create a tracker with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    /// Create with custom tuning.
    #[must_use]
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            phase: DragPhase::Idle,
            state: DragState::default(),
            config,
        }
    }

    /// Get the current configuration.
    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current drag snapshot.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Check if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Begin a drag at `(x, y)`.
    ///
    /// Returns `false` (and changes nothing) unless the tracker is idle.
    pub fn start(&mut self, x: f32, y: f32) -> bool {
        if self.phase != DragPhase::Idle {
            tracing::trace!(phase = ?self.phase, "drag start ignored");
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.state = DragState {
            active: true,
            origin_x: x,
            origin_y: y,
            delta_x: 0.0,
            delta_y: 0.0,
        };
        true
    }

    /// Update the displacement. No-op unless dragging.
    pub fn move_to(&mut self, x: f32, y: f32) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.state.delta_x = x - self.state.origin_x;
        self.state.delta_y = y - self.state.origin_y;
    }

    /// Release the pointer and decide.
    pub fn end(&mut self) -> DragOutcome {
        if self.phase != DragPhase::Dragging {
            tracing::trace!(phase = ?self.phase, "drag end ignored");
            return DragOutcome::Ignored;
        }

        let delta_x = self.state.delta_x;
        if delta_x.abs() > self.config.swipe_threshold {
            let direction = SwipeDirection::from_delta(delta_x);
            self.phase = DragPhase::Committing(direction);
            self.state.active = false;
            DragOutcome::Commit(direction)
        } else {
            self.clear();
            DragOutcome::SnapBack
        }
    }

    /// Abandon a drag in progress. Commits are left alone.
    pub fn cancel(&mut self) {
        if self.phase == DragPhase::Dragging {
            self.clear();
        }
    }

    /// Enter `Committing` without a drag (button or keyboard swipes).
    pub fn force_commit(&mut self, direction: SwipeDirection) {
        self.phase = DragPhase::Committing(direction);
        self.state.active = false;
    }

    /// Return to idle, dropping any drag or commit.
    pub fn clear(&mut self) {
        self.phase = DragPhase::Idle;
        self.state = DragState::default();
    }

    /// Tilt in degrees for the current displacement.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        rotation_for(self.state.delta_x, &self.config)
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Tilt in degrees for a horizontal displacement.
#[must_use]
pub fn rotation_for(delta_x: f32, config: &DragConfig) -> f32 {
    (delta_x * config.rotation_factor).clamp(-config.max_rotation_deg, config.max_rotation_deg)
}
