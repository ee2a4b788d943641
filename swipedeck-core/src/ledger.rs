//! Host-side record of swipe decisions and the deck views built from it.
//!
//! The controller only ever sees a card collection and an exclusion set.
//! Switching between "all", "liked" and "dismissed" is done here by handing
//! it a different collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::{StackListener, SwipeDirection};
use crate::{Card, CardId};

/// Which cards the stack is browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckView {
    /// Every card not yet decided.
    #[default]
    All,
    /// Cards swiped right.
    Liked,
    /// Cards swiped left, for a second look.
    Dismissed,
}

impl std::str::FromStr for DeckView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "liked" => Ok(Self::Liked),
            "dismissed" => Ok(Self::Dismissed),
            other => Err(format!("unknown deck view: {other}")),
        }
    }
}

/// Collection and exclusions to feed the controller for a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSlice {
    /// Cards in insertion order.
    pub cards: Vec<Card>,
    /// Ids to exclude.
    pub excluded: Vec<CardId>,
}

/// Liked and dismissed cards, each in the order they were decided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwipeLedger {
    liked: Vec<CardId>,
    dismissed: Vec<CardId>,
    #[serde(skip)]
    view: DeckView,
    /// Cards decided since the current view was opened.
    #[serde(skip)]
    seen_in_view: HashSet<CardId>,
}

impl SwipeLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision, replacing any earlier one for the same card.
    pub fn record(&mut self, card_id: &CardId, direction: SwipeDirection) {
        self.forget(card_id);
        match direction {
            SwipeDirection::Right => self.liked.push(card_id.clone()),
            SwipeDirection::Left => self.dismissed.push(card_id.clone()),
        }
        self.seen_in_view.insert(card_id.clone());
    }

    /// Remove a decision. Returns the direction that was recorded.
    pub fn undo(&mut self, card_id: &CardId) -> Option<SwipeDirection> {
        let previous = self.direction_of(card_id);
        self.forget(card_id);
        self.seen_in_view.remove(card_id);
        previous
    }

    fn forget(&mut self, card_id: &CardId) {
        self.liked.retain(|id| id != card_id);
        self.dismissed.retain(|id| id != card_id);
    }

    /// The recorded decision for a card.
    #[must_use]
    pub fn direction_of(&self, card_id: &CardId) -> Option<SwipeDirection> {
        if self.liked.contains(card_id) {
            Some(SwipeDirection::Right)
        } else if self.dismissed.contains(card_id) {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// Liked ids, oldest first.
    #[must_use]
    pub fn liked(&self) -> &[CardId] {
        &self.liked
    }

    /// Dismissed ids, oldest first.
    #[must_use]
    pub fn dismissed(&self) -> &[CardId] {
        &self.dismissed
    }

    /// The view currently open.
    #[must_use]
    pub const fn view(&self) -> DeckView {
        self.view
    }

    /// Open a view. Decisions made in the previous view stop hiding cards.
    pub fn switch_view(&mut self, view: DeckView) {
        if view != self.view {
            tracing::debug!(from = ?self.view, to = ?view, "deck view switched");
        }
        self.view = view;
        self.seen_in_view.clear();
    }

    /// Cards and exclusions for the open view.
    ///
    /// Liked and dismissed views list cards in decision order, so the most
    /// recent decision surfaces first.
    #[must_use]
    pub fn slice(&self, all_cards: &[Card]) -> ViewSlice {
        match self.view {
            DeckView::All => ViewSlice {
                cards: all_cards.to_vec(),
                excluded: self.liked.iter().chain(&self.dismissed).cloned().collect(),
            },
            DeckView::Liked => self.decided_slice(&self.liked, all_cards),
            DeckView::Dismissed => self.decided_slice(&self.dismissed, all_cards),
        }
    }

    fn decided_slice(&self, ids: &[CardId], all_cards: &[Card]) -> ViewSlice {
        let cards = ids
            .iter()
            .filter_map(|id| all_cards.iter().find(|c| &c.id == id))
            .cloned()
            .collect::<Vec<_>>();
        let excluded = cards
            .iter()
            .filter(|c| self.seen_in_view.contains(&c.id))
            .map(|c| c.id.clone())
            .collect();
        ViewSlice { cards, excluded }
    }
}

impl StackListener for SwipeLedger {
    fn on_swiped(&mut self, card: &Card, direction: SwipeDirection) {
        self.record(&card.id, direction);
    }
}
