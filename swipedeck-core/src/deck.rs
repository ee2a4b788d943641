//! The deck: a filtered, FILO-ordered view over a card collection.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::{Card, CardId, DeckError, DeckResult};

/// Default number of cards rendered in the stack.
pub const DEFAULT_VISIBLE_COUNT: usize = 3;

/// A read-only view of a card collection minus the excluded cards.
///
/// Cards are stored most-recently-supplied first, so index 0 of
/// [`Deck::available_cards`] is the last card handed to [`Deck::new`].
/// A deck is never edited in place; [`Deck::with_excluded`] derives a new one.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in surfacing order (reverse of insertion).
    items: Arc<[Card]>,
    /// Excluded ids, always a subset of the ids in `items`.
    excluded: HashSet<CardId>,
    /// Positions in `items` that are not excluded.
    available: Vec<usize>,
}

impl Deck {
    /// Build a deck from cards in insertion order.
    ///
    /// Exclusions that name no card in `cards` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCardId`] if two cards share an id.
    pub fn new<I>(cards: Vec<Card>, excluded: I) -> DeckResult<Self>
    where
        I: IntoIterator<Item = CardId>,
    {
        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !seen.insert(&card.id) {
                return Err(DeckError::DuplicateCardId(card.id.to_string()));
            }
        }

        let mut items = cards;
        items.reverse();
        Ok(Self::derive(items.into(), excluded))
    }

    /// Create an empty deck.
    #[must_use]
    pub fn empty() -> Self {
        Self::derive(Arc::from(Vec::new()), [])
    }

    /// Derive a deck over the same cards with a different exclusion set.
    #[must_use]
    pub fn with_excluded<I>(&self, excluded: I) -> Self
    where
        I: IntoIterator<Item = CardId>,
    {
        Self::derive(Arc::clone(&self.items), excluded)
    }

    fn derive<I>(items: Arc<[Card]>, excluded: I) -> Self
    where
        I: IntoIterator<Item = CardId>,
    {
        let known: HashSet<&CardId> = items.iter().map(|c| &c.id).collect();
        let excluded: HashSet<CardId> = excluded
            .into_iter()
            .filter(|id| known.contains(id))
            .collect();
        let available = items
            .iter()
            .enumerate()
            .filter(|(_, card)| !excluded.contains(&card.id))
            .map(|(i, _)| i)
            .collect();

        Self {
            items,
            excluded,
            available,
        }
    }

    /// Cards not yet excluded, most recently supplied first.
    pub fn available_cards(&self) -> impl Iterator<Item = &Card> {
        self.available.iter().map(|&i| &self.items[i])
    }

    /// Up to `count` available cards starting at `cursor`.
    ///
    /// Out-of-range cursors yield an empty slice rather than panicking.
    #[must_use]
    pub fn visible(&self, cursor: usize, count: usize) -> Vec<&Card> {
        let start = cursor.min(self.available.len());
        let end = cursor.saturating_add(count).min(self.available.len());
        self.available[start..end]
            .iter()
            .map(|&i| &self.items[i])
            .collect()
    }

    /// The card a gesture may act on, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.available.first().map(|&i| &self.items[i])
    }

    /// Number of cards left to swipe.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.available.len()
    }

    /// Check if every card has been excluded (or there were none).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Total number of cards, excluded or not.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Check whether a card id is excluded.
    #[must_use]
    pub fn is_excluded(&self, id: &CardId) -> bool {
        self.excluded.contains(id)
    }

    /// The current exclusion set.
    #[must_use]
    pub fn excluded(&self) -> &HashSet<CardId> {
        &self.excluded
    }

    /// Look up any card (excluded or not) by id.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.items.iter().find(|c| &c.id == id)
    }

    /// Cards in their original insertion order.
    pub fn cards_in_insertion_order(&self) -> impl Iterator<Item = &Card> {
        self.items.iter().rev()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::empty()
    }
}

/// Summary of a deck for logs and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    /// Total cards in the collection.
    pub total: usize,
    /// Cards still available.
    pub remaining: usize,
    /// Cards excluded.
    pub excluded: usize,
}

impl From<&Deck> for DeckStats {
    fn from(deck: &Deck) -> Self {
        Self {
            total: deck.total_count(),
            remaining: deck.remaining_count(),
            excluded: deck.excluded.len(),
        }
    }
}
