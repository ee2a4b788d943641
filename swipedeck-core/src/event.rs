//! Input events fed into the stack and the events it emits back.

use serde::{Deserialize, Serialize};

use crate::{Card, CardId};

/// Phase of a pointer or touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Pointer pressed / finger down.
    Start,
    /// Pointer dragged.
    Move,
    /// Pointer released.
    End,
    /// Gesture interrupted (e.g. the browser took over scrolling).
    Cancel,
}

impl PointerPhase {
    /// Parse the phase names browsers and touch shims use.
    ///
    /// Unknown names map to `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" | "down" | "began" => Some(Self::Start),
            "move" | "moved" => Some(Self::Move),
            "end" | "ended" | "up" => Some(Self::End),
            "cancel" | "cancelled" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// A single pointer sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this sample.
    pub phase: PointerPhase,
    /// X position in viewport coordinates.
    pub x: f32,
    /// Y position in viewport coordinates.
    pub y: f32,
    /// Timestamp in milliseconds on the host's monotonic clock.
    pub timestamp_ms: u64,
    /// Card under the pointer at `Start`, if the host hit-tested it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<CardId>,
}

impl PointerEvent {
    /// Create a new pointer event without a hit-test target.
    #[must_use]
    pub fn new(phase: PointerPhase, x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase,
            x,
            y,
            timestamp_ms,
            target: None,
        }
    }

    /// Attach the card the pointer landed on.
    #[must_use]
    pub fn on_card(mut self, id: impl Into<CardId>) -> Self {
        self.target = Some(id.into());
        self
    }
}

/// Which way a card left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Dismiss.
    Left,
    /// Like.
    Right,
}

impl SwipeDirection {
    /// Direction implied by a horizontal displacement.
    #[must_use]
    pub fn from_delta(delta_x: f32) -> Self {
        if delta_x > 0.0 {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// `1.0` for right, `-1.0` for left.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Whether this direction means the card was liked.
    #[must_use]
    pub const fn is_like(self) -> bool {
        matches!(self, Self::Right)
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl std::str::FromStr for SwipeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | "dismiss" => Ok(Self::Left),
            "right" | "r" | "like" => Ok(Self::Right),
            other => Err(format!("unknown swipe direction: {other}")),
        }
    }
}

/// Events the stack reports to its owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StackEvent {
    /// A card was committed in a direction. Emitted before the settle delay.
    Swiped {
        /// The card that left the stack.
        card: Card,
        /// Direction it left in.
        direction: SwipeDirection,
    },
    /// The stack just ran out of cards.
    StackEmpty,
}

/// Callback set for hosts that prefer dispatch over matching on
/// [`StackEvent`]s.
pub trait StackListener {
    /// A card was swiped.
    fn on_swiped(&mut self, card: &Card, direction: SwipeDirection);

    /// The stack became empty.
    fn on_stack_empty(&mut self) {}
}

impl StackEvent {
    /// Deliver this event to a listener.
    pub fn dispatch<L: StackListener + ?Sized>(&self, listener: &mut L) {
        match self {
            Self::Swiped { card, direction } => listener.on_swiped(card, *direction),
            Self::StackEmpty => listener.on_stack_empty(),
        }
    }
}
