//! Scripted swipe sessions.
//!
//! A session drives a [`StackController`] on a virtual clock: each swipe is
//! committed, the settle delay is waited out, and every emitted event is
//! recorded and fed to a [`SwipeLedger`]. In external mode the session plays
//! the host and syncs the ledger's exclusions back after each swipe.

use anyhow::{bail, Context};
use serde::Serialize;
use swipedeck_core::{
    Card, CardId, DeckStats, DeckView, ExclusionMode, StackController, StackEvent, StackState,
    SwipeDeckConfig, SwipeDirection, SwipeLedger,
};

/// Gap between the end of one settle and the next swipe.
const IDLE_GAP_MS: u64 = 100;

/// An event and the virtual time it was emitted at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedEvent {
    /// Virtual clock in milliseconds.
    pub at_ms: u64,
    /// The event.
    #[serde(flatten)]
    pub event: StackEvent,
}

/// Result of a session, printed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Everything the stack emitted, in order.
    pub events: Vec<TimedEvent>,
    /// Final stack state.
    pub state: StackState,
    /// Final counts.
    pub stats: DeckStats,
    /// Visible card ids, front first.
    pub visible: Vec<CardId>,
    /// View open at the end.
    pub view: DeckView,
    /// Recorded decisions.
    pub ledger: SwipeLedger,
}

/// A stack plus the host-side bookkeeping around it.
#[derive(Debug)]
pub struct SwipeSession {
    all_cards: Vec<Card>,
    stack: StackController,
    ledger: SwipeLedger,
    external: bool,
    clock_ms: u64,
    events: Vec<TimedEvent>,
}

impl SwipeSession {
    /// Build a session over a card collection.
    ///
    /// With `external` set the session owns the exclusion set and the stack
    /// only mirrors it.
    ///
    /// # Errors
    ///
    /// Returns an error if card ids repeat or the config is invalid.
    pub fn new(cards: Vec<Card>, config: SwipeDeckConfig, external: bool) -> anyhow::Result<Self> {
        let mut stack_config = config.stack;
        if external {
            stack_config.exclusion = ExclusionMode::External;
        }
        let stack = StackController::with_config(cards.clone(), stack_config, config.layout)
            .context("Failed to build card stack")?;

        Ok(Self {
            all_cards: cards,
            stack,
            ledger: SwipeLedger::new(),
            external,
            clock_ms: 0,
            events: Vec::new(),
        })
    }

    /// Current virtual time.
    #[must_use]
    pub const fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// The stack being driven.
    #[must_use]
    pub const fn stack(&self) -> &StackController {
        &self.stack
    }

    /// Decisions recorded so far.
    #[must_use]
    pub const fn ledger(&self) -> &SwipeLedger {
        &self.ledger
    }

    /// Swipe the front card and wait out the settle delay.
    ///
    /// Returns whether a card was actually swiped.
    pub fn swipe(&mut self, direction: SwipeDirection) -> bool {
        let events = self.stack.commit(direction, self.clock_ms);
        let swiped = events
            .iter()
            .any(|e| matches!(e, StackEvent::Swiped { .. }));
        self.record(events);

        if !swiped {
            tracing::warn!(%direction, at_ms = self.clock_ms, "swipe ignored: stack is empty");
        }

        self.clock_ms += self.stack.config().settle_delay_ms;
        let events = self.stack.tick(self.clock_ms);
        self.record(events);

        if self.external {
            let slice = self.ledger.slice(&self.all_cards);
            match self.stack.sync(slice.cards, Some(slice.excluded)) {
                Ok(events) => self.record(events),
                Err(e) => tracing::error!(error = %e, "host sync rejected"),
            }
        }

        self.clock_ms += IDLE_GAP_MS;
        swiped
    }

    /// Swipe once per direction. Returns how many cards were swiped.
    pub fn replay(&mut self, swipes: &[SwipeDirection]) -> usize {
        let swiped = swipes.iter().filter(|d| self.swipe(**d)).count();
        tracing::info!(requested = swipes.len(), swiped, "session replayed");
        swiped
    }

    /// Undo a decision in both the ledger and the stack.
    pub fn undo(&mut self, card_id: &CardId) -> bool {
        let recorded = self.ledger.undo(card_id).is_some();
        let changed = if self.external {
            let slice = self.ledger.slice(&self.all_cards);
            self.stack.set_excluded(slice.excluded);
            recorded
        } else {
            self.stack.undo(card_id)
        };
        changed || recorded
    }

    /// Open a ledger view and hand its cards to the stack.
    ///
    /// # Errors
    ///
    /// Returns an error when a liked or dismissed view is requested without
    /// external exclusions, since the stack would keep hiding those cards.
    pub fn open_view(&mut self, view: DeckView) -> anyhow::Result<()> {
        if !self.external {
            if view != DeckView::All {
                bail!("The {view:?} view needs --external exclusions");
            }
            return Ok(());
        }

        self.ledger.switch_view(view);
        let slice = self.ledger.slice(&self.all_cards);
        let events = self
            .stack
            .sync(slice.cards, Some(slice.excluded))
            .context("Failed to open view")?;
        self.record(events);
        Ok(())
    }

    fn record(&mut self, events: Vec<StackEvent>) {
        for event in events {
            event.dispatch(&mut self.ledger);
            self.events.push(TimedEvent {
                at_ms: self.clock_ms,
                event,
            });
        }
    }

    /// Snapshot the session.
    #[must_use]
    pub fn report(&self) -> SessionReport {
        SessionReport {
            events: self.events.clone(),
            state: self.stack.state(),
            stats: self.stack.stats(),
            visible: self.stack.visible().iter().map(|c| c.id.clone()).collect(),
            view: self.ledger.view(),
            ledger: self.ledger.clone(),
        }
    }
}
