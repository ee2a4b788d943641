//! # SwipeDeck Core
//!
//! Card-stack interaction engine for swipe-to-browse interfaces.
//! Compiles to WASM so the same logic drives browser and native hosts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             swipedeck-core.wasm             │
//! ├─────────────────────────────────────────────┤
//! │  Deck            │  Drag Tracker            │
//! │  - FILO order    │  - Pointer deltas        │
//! │  - Exclusions    │  - Swipe threshold       │
//! ├─────────────────────────────────────────────┤
//! │  Stack Controller│  Layout Selector         │
//! │  - Settle delay  │  - Orientation choice    │
//! │  - Empty events  │  - Scale + hysteresis    │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod event;
pub mod gesture;
pub mod layout;
pub mod ledger;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use card::{cards_from_json, Card, CardId};
pub use config::SwipeDeckConfig;
pub use controller::{ExclusionMode, StackConfig, StackController, StackState};
pub use deck::{Deck, DeckStats};
pub use error::{DeckError, DeckResult};
pub use event::{PointerEvent, PointerPhase, StackEvent, StackListener, SwipeDirection};
pub use gesture::{DragConfig, DragOutcome, DragPhase, DragState, DragTracker};
pub use layout::{
    select_layout, LayoutConfig, LayoutDecision, LayoutSelector, LayoutState, Orientation, Size,
};
pub use ledger::{DeckView, SwipeLedger, ViewSlice};
pub use render::{CardTransform, RenderModel, RenderedCard, StackStyle};

/// SwipeDeck core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
