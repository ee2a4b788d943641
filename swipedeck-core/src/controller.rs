//! # Stack Controller
//!
//! Owns the stack state and drives the deck and drag tracker.
//!
//! ```text
//! pointer ──▶ DragTracker ──commit──▶ Swiped event
//!                                      │
//!                         settle delay │ (tick)
//!                                      ▼
//!                 exclude card / hold it back ──▶ StackEmpty?
//! ```
//!
//! Time is supplied by the host as millisecond timestamps; the controller
//! never reads a clock itself. A commit holds the stack until its settle
//! task runs in [`StackController::tick`], and any swipe attempted before
//! then is dropped.

use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::deck::{DeckStats, DEFAULT_VISIBLE_COUNT};
use crate::event::{PointerEvent, PointerPhase, StackEvent, SwipeDirection};
use crate::gesture::{DragConfig, DragOutcome, DragPhase, DragState, DragTracker};
use crate::layout::{LayoutConfig, LayoutSelector, LayoutState};
use crate::render::{build_render_model, RenderInput, RenderModel, StackStyle};
use crate::{Card, CardId, Deck, DeckError, DeckResult};

/// Default pause between a commit and the stack advancing.
pub const SETTLE_DELAY_MS: u64 = 300;

/// Who writes the exclusion set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionMode {
    /// The controller adds swiped cards itself.
    #[default]
    Owned,
    /// The host records swipes and passes exclusions back through
    /// [`StackController::sync`]. Until it does, the controller holds
    /// settled cards back by id.
    External,
}

/// Stack behaviour tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Drag decision tuning.
    pub drag: DragConfig,
    /// Milliseconds between a commit and the stack advancing.
    pub settle_delay_ms: u64,
    /// Cards drawn in the stack.
    pub visible_count: usize,
    /// Who owns the exclusion set.
    pub exclusion: ExclusionMode,
    /// Offsets for cards behind the front one.
    pub style: StackStyle,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            drag: DragConfig::default(),
            settle_delay_ms: SETTLE_DELAY_MS,
            visible_count: DEFAULT_VISIBLE_COUNT,
            exclusion: ExclusionMode::Owned,
            style: StackStyle::default(),
        }
    }
}

impl StackConfig {
    /// Settle delay as a [`Duration`].
    #[must_use]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Check the values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidConfig`] for a non-positive swipe
    /// threshold, a negative rotation clamp, or a zero visible count.
    pub fn validate(&self) -> DeckResult<()> {
        let threshold = self.drag.swipe_threshold;
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(DeckError::InvalidConfig(format!(
                "swipe_threshold must be positive, got {threshold}"
            )));
        }
        if self.drag.max_rotation_deg.is_nan() || self.drag.max_rotation_deg < 0.0 {
            return Err(DeckError::InvalidConfig(format!(
                "max_rotation_deg must not be negative, got {}",
                self.drag.max_rotation_deg
            )));
        }
        if self.visible_count == 0 {
            return Err(DeckError::InvalidConfig(
                "visible_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Snapshot of the stack for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackState {
    /// Settled cards still available in the deck, hidden until the host
    /// excludes them. Always 0 in owned mode.
    pub cursor: usize,
    /// Excluded card ids, sorted.
    pub excluded_ids: BTreeSet<CardId>,
    /// Drag in progress.
    pub drag: DragState,
    /// Direction of the commit in flight.
    pub commit_direction: Option<SwipeDirection>,
    /// Current layout.
    pub layout: LayoutState,
}

#[derive(Debug, Clone)]
struct PendingSettle {
    card_id: CardId,
    direction: SwipeDirection,
    due_at_ms: u64,
}

/// The card-stack state machine.
#[derive(Debug, Clone)]
pub struct StackController {
    config: StackConfig,
    cards: Vec<Card>,
    deck: Deck,
    /// Settled ids the host has not yet excluded (external mode only).
    /// Treated as provisional exclusions.
    awaiting_sync: Vec<CardId>,
    tracker: DragTracker,
    pending: Option<PendingSettle>,
    layout: LayoutSelector,
    empty_reported: bool,
}

impl StackController {
    /// Create a controller over `cards` (insertion order) with default tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if two cards share an id.
    pub fn new(cards: Vec<Card>) -> DeckResult<Self> {
        Self::with_config(cards, StackConfig::default(), LayoutConfig::default())
    }

    /// Create with custom tuning.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or two cards share an id.
    pub fn with_config(
        cards: Vec<Card>,
        config: StackConfig,
        layout: LayoutConfig,
    ) -> DeckResult<Self> {
        config.validate()?;
        let deck = Deck::new(cards.clone(), [])?;
        let empty_reported = deck.is_empty();
        Ok(Self {
            tracker: DragTracker::with_config(config.drag),
            config,
            cards,
            deck,
            awaiting_sync: Vec::new(),
            pending: None,
            layout: LayoutSelector::with_config(layout),
            empty_reported,
        })
    }

    /// Get the current configuration.
    #[must_use]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// The deck as currently derived.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Available cards minus the ones settled but not yet synced, front first.
    fn unswiped(&self) -> impl Iterator<Item = &Card> + '_ {
        self.deck
            .available_cards()
            .filter(move |card| !self.awaiting_sync.contains(&card.id))
    }

    /// The card gestures apply to.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.unswiped().next()
    }

    /// The cards to draw, front first.
    #[must_use]
    pub fn visible(&self) -> Vec<&Card> {
        self.unswiped().take(self.config.visible_count).collect()
    }

    /// Cards left to swipe.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.unswiped().count()
    }

    fn cursor(&self) -> usize {
        self.deck.remaining_count() - self.remaining_count()
    }

    /// Check if there is nothing left to swipe.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Check if a commit is waiting to settle.
    #[must_use]
    pub fn is_committing(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending settle task is due, for hosts scheduling a timer.
    #[must_use]
    pub fn settle_due_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> LayoutState {
        self.layout.state()
    }

    /// Snapshot of the full stack state.
    #[must_use]
    pub fn state(&self) -> StackState {
        StackState {
            cursor: self.cursor(),
            excluded_ids: self.deck.excluded().iter().cloned().collect(),
            drag: self.tracker.state(),
            commit_direction: self.commit_direction(),
            layout: self.layout.state(),
        }
    }

    /// Deck counters for logging.
    #[must_use]
    pub fn stats(&self) -> DeckStats {
        DeckStats::from(&self.deck)
    }

    fn commit_direction(&self) -> Option<SwipeDirection> {
        match self.tracker.phase() {
            DragPhase::Committing(direction) => Some(direction),
            DragPhase::Idle | DragPhase::Dragging => None,
        }
    }

    /// Feed a pointer sample.
    ///
    /// A due settle task runs first, so hosts that only forward input still
    /// see the stack advance.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Vec<StackEvent> {
        let mut events = self.tick(event.timestamp_ms);

        match event.phase {
            PointerPhase::Start => {
                let front_id = self.front().map(|c| c.id.clone());
                match front_id {
                    _ if self.pending.is_some() => {
                        tracing::trace!("drag start ignored: commit in flight");
                    }
                    None => tracing::trace!("drag start ignored: stack empty"),
                    Some(front) if event.target.as_ref().is_some_and(|t| t != &front) => {
                        tracing::trace!(card = ?event.target, %front, "drag start ignored: not the front card");
                    }
                    Some(_) => {
                        self.tracker.start(event.x, event.y);
                    }
                }
            }
            PointerPhase::Move => self.tracker.move_to(event.x, event.y),
            PointerPhase::End => match self.tracker.end() {
                DragOutcome::Commit(direction) => {
                    events.extend(self.begin_commit(direction, event.timestamp_ms));
                }
                DragOutcome::SnapBack => tracing::trace!("drag released under threshold"),
                DragOutcome::Ignored => {}
            },
            PointerPhase::Cancel => self.tracker.cancel(),
        }

        events
    }

    /// Swipe the front card without a drag (buttons, keyboard).
    ///
    /// Ignored while another commit is settling or when the stack is empty.
    pub fn commit(&mut self, direction: SwipeDirection, now_ms: u64) -> Vec<StackEvent> {
        let mut events = self.tick(now_ms);
        if self.pending.is_some() {
            tracing::trace!(%direction, "commit ignored: commit in flight");
            return events;
        }
        self.tracker.force_commit(direction);
        events.extend(self.begin_commit(direction, now_ms));
        events
    }

    fn begin_commit(&mut self, direction: SwipeDirection, now_ms: u64) -> Vec<StackEvent> {
        let Some(card) = self.front().cloned() else {
            self.tracker.clear();
            return Vec::new();
        };

        let due_at_ms = now_ms.saturating_add(self.config.settle_delay_ms);
        tracing::debug!(card = %card.id, %direction, due_at_ms, "swipe committed");
        self.pending = Some(PendingSettle {
            card_id: card.id.clone(),
            direction,
            due_at_ms,
        });

        vec![StackEvent::Swiped { card, direction }]
    }

    /// Run the settle task if it is due at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> Vec<StackEvent> {
        match &self.pending {
            Some(pending) if now_ms >= pending.due_at_ms => self.settle(),
            _ => Vec::new(),
        }
    }

    /// Run the settle task immediately, regardless of its due time.
    pub fn flush(&mut self) -> Vec<StackEvent> {
        if self.pending.is_some() {
            self.settle()
        } else {
            Vec::new()
        }
    }

    fn settle(&mut self) -> Vec<StackEvent> {
        let Some(pending) = self.pending.take() else {
            return Vec::new();
        };
        self.tracker.clear();

        match self.config.exclusion {
            ExclusionMode::Owned => {
                let excluded = self
                    .deck
                    .excluded()
                    .iter()
                    .cloned()
                    .chain(std::iter::once(pending.card_id.clone()));
                self.deck = self.deck.with_excluded(excluded.collect::<Vec<_>>());
            }
            ExclusionMode::External => {
                if !self.deck.is_excluded(&pending.card_id)
                    && !self.awaiting_sync.contains(&pending.card_id)
                {
                    self.awaiting_sync.push(pending.card_id.clone());
                }
            }
        }

        tracing::debug!(
            card = %pending.card_id,
            direction = %pending.direction,
            remaining = self.remaining_count(),
            "swipe settled"
        );
        self.check_empty()
    }

    fn check_empty(&mut self) -> Vec<StackEvent> {
        if self.is_empty() {
            if !self.empty_reported {
                self.empty_reported = true;
                tracing::debug!(total = self.deck.total_count(), "stack empty");
                return vec![StackEvent::StackEmpty];
            }
        } else {
            self.empty_reported = false;
        }
        Vec::new()
    }

    /// Replace the card collection (a host re-render).
    ///
    /// In external mode `excluded` replaces the exclusion set; in owned mode
    /// it is ignored and the controller's own exclusions carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if two cards share an id. The controller is left
    /// unchanged in that case.
    pub fn sync<I>(&mut self, cards: Vec<Card>, excluded: Option<I>) -> DeckResult<Vec<StackEvent>>
    where
        I: IntoIterator<Item = CardId>,
    {
        let exclusions: Vec<CardId> = match (self.config.exclusion, excluded) {
            (ExclusionMode::External, Some(ids)) => ids.into_iter().collect(),
            _ => self.deck.excluded().iter().cloned().collect(),
        };
        self.deck = Deck::new(cards.clone(), exclusions)?;
        self.cards = cards;
        self.drop_synced();
        Ok(self.check_empty())
    }

    /// Replace only the exclusion set (external mode).
    ///
    /// Ignored in owned mode, where the controller is the only writer.
    pub fn set_excluded<I>(&mut self, excluded: I) -> Vec<StackEvent>
    where
        I: IntoIterator<Item = CardId>,
    {
        if self.config.exclusion == ExclusionMode::Owned {
            tracing::trace!("set_excluded ignored: exclusions are controller-owned");
            return Vec::new();
        }
        self.deck = self.deck.with_excluded(excluded);
        self.drop_synced();
        self.check_empty()
    }

    /// Forget settled ids the host has caught up on or removed.
    ///
    /// Ids still present and unexcluded stay hidden, so a stale re-render
    /// cannot bring a swiped card back.
    fn drop_synced(&mut self) {
        let deck = &self.deck;
        self.awaiting_sync
            .retain(|id| deck.card(id).is_some() && !deck.is_excluded(id));
    }

    /// Bring a swiped card back. Returns whether anything changed.
    ///
    /// Unknown or never-swiped ids are ignored.
    pub fn undo(&mut self, card_id: &CardId) -> bool {
        let changed = if let Some(pos) = self.awaiting_sync.iter().position(|id| id == card_id) {
            self.awaiting_sync.remove(pos);
            true
        } else if self.deck.is_excluded(card_id) {
            let remaining = self
                .deck
                .excluded()
                .iter()
                .filter(|id| *id != card_id)
                .cloned()
                .collect::<Vec<_>>();
            self.deck = self.deck.with_excluded(remaining);
            self.drop_synced();
            true
        } else {
            false
        };

        if changed {
            tracing::debug!(card = %card_id, "swipe undone");
            if !self.is_empty() {
                self.empty_reported = false;
            }
        }
        changed
    }

    /// Return to a fresh stack: cursor 0, no exclusions, no drag, no
    /// pending commit. Layout is kept.
    pub fn reset(&mut self) {
        self.deck = self.deck.with_excluded([]);
        self.awaiting_sync.clear();
        self.tracker.clear();
        if self.pending.take().is_some() {
            tracing::debug!("pending settle cancelled by reset");
        }
        self.empty_reported = self.deck.is_empty();
    }

    /// Recompute the layout for a new viewport.
    pub fn resize(&mut self, width: f32, height: f32) -> LayoutState {
        self.layout.resize(width, height)
    }

    /// Record the natural size of the card content.
    pub fn measure_content(&mut self, width: f32, height: f32) -> LayoutState {
        self.layout.measure_content(width, height)
    }

    /// Cards in the order the host supplied them.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Build the frame the presentation layer draws.
    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        build_render_model(RenderInput {
            visible: self.visible(),
            drag: self.tracker.state(),
            drag_config: self.tracker.config(),
            committing: self.commit_direction(),
            layout: self.layout.state(),
            card_size: self.layout.card_size(),
            remaining: self.remaining_count(),
            style: &self.config.style,
        })
    }

    /// Ids the host should treat as swiped: excluded plus settled-but-unsynced.
    #[must_use]
    pub fn swiped_ids(&self) -> HashSet<CardId> {
        self.deck
            .excluded()
            .iter()
            .chain(self.awaiting_sync.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::new(*id, id.to_uppercase(), "")).collect()
    }

    fn visible_ids(stack: &StackController) -> Vec<String> {
        stack.visible().iter().map(|c| c.id.to_string()).collect()
    }

    fn swipe(stack: &mut StackController, dx: f32, at: u64) -> Vec<StackEvent> {
        let mut events = stack.handle_pointer(&PointerEvent::new(PointerPhase::Start, 200.0, 300.0, at));
        events.extend(stack.handle_pointer(&PointerEvent::new(PointerPhase::Move, 200.0 + dx, 310.0, at + 16)));
        events.extend(stack.handle_pointer(&PointerEvent::new(PointerPhase::End, 200.0 + dx, 310.0, at + 32)));
        events
    }

    #[test]
    fn test_swipe_then_settle() {
        let mut stack = StackController::new(cards(&["a", "b", "c"])).expect("valid");
        assert_eq!(visible_ids(&stack), vec!["c", "b", "a"]);

        let events = swipe(&mut stack, 120.0, 0);
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], StackEvent::Swiped { card, direction: SwipeDirection::Right } if card.id.as_str() == "c"));
        assert!(stack.is_committing());
        assert_eq!(stack.state().commit_direction, Some(SwipeDirection::Right));
        assert_eq!(stack.remaining_count(), 3, "nothing moves before the settle delay");

        assert!(stack.tick(100).is_empty());
        assert_eq!(stack.remaining_count(), 3);

        assert!(stack.tick(332).is_empty());
        assert!(!stack.is_committing());
        assert_eq!(stack.remaining_count(), 2);
        assert_eq!(visible_ids(&stack), vec!["b", "a"]);
        assert_eq!(stack.state().excluded_ids.len(), 1);
        assert_eq!(stack.state().commit_direction, None);
    }

    #[test]
    fn test_snap_back_does_not_commit() {
        let mut stack = StackController::new(cards(&["a"])).expect("valid");
        assert!(swipe(&mut stack, 75.0, 0).is_empty());
        assert!(!stack.is_committing());
        assert!(!stack.state().drag.active);
    }

    #[test]
    fn test_second_commit_ignored_while_settling() {
        let mut stack = StackController::new(cards(&["a", "b", "c"])).expect("valid");
        let first = stack.commit(SwipeDirection::Left, 0);
        assert_eq!(first.len(), 1);

        assert!(stack.commit(SwipeDirection::Right, 50).is_empty());
        assert!(swipe(&mut stack, -200.0, 100).is_empty());

        stack.tick(400);
        assert_eq!(stack.remaining_count(), 2);
        assert_eq!(visible_ids(&stack), vec!["b", "a"]);
    }

    #[test]
    fn test_drag_on_non_front_card_ignored() {
        let mut stack = StackController::new(cards(&["a", "b"])).expect("valid");
        stack.handle_pointer(&PointerEvent::new(PointerPhase::Start, 0.0, 0.0, 0).on_card("a"));
        assert!(!stack.state().drag.active);

        stack.handle_pointer(&PointerEvent::new(PointerPhase::Start, 0.0, 0.0, 0).on_card("b"));
        assert!(stack.state().drag.active);
    }

    #[test]
    fn test_stack_empty_once() {
        let mut stack = StackController::new(cards(&["a"])).expect("valid");
        stack.commit(SwipeDirection::Right, 0);
        let events = stack.tick(300);
        assert_eq!(events, vec![StackEvent::StackEmpty]);

        assert!(stack.tick(10_000).is_empty());
        assert!(stack.commit(SwipeDirection::Right, 10_000).is_empty());
        assert!(stack.flush().is_empty());
        assert!(swipe(&mut stack, 300.0, 20_000).is_empty());
    }

    #[test]
    fn test_undo_is_idempotent() {
        let mut stack = StackController::new(cards(&["a", "b"])).expect("valid");
        stack.commit(SwipeDirection::Left, 0);
        stack.flush();
        let b = CardId::from("b");
        assert!(stack.deck().is_excluded(&b));

        assert!(stack.undo(&b));
        let after_first = stack.state().excluded_ids;
        assert!(!stack.undo(&b));
        assert_eq!(stack.state().excluded_ids, after_first);
        assert!(!stack.undo(&CardId::from("nope")));
        assert_eq!(visible_ids(&stack), vec!["b", "a"]);
    }

    #[test]
    fn test_undo_rearms_stack_empty() {
        let mut stack = StackController::new(cards(&["a"])).expect("valid");
        stack.commit(SwipeDirection::Right, 0);
        assert_eq!(stack.flush(), vec![StackEvent::StackEmpty]);

        assert!(stack.undo(&CardId::from("a")));
        stack.commit(SwipeDirection::Right, 1_000);
        assert_eq!(stack.flush(), vec![StackEvent::StackEmpty]);
    }

    #[test]
    fn test_reset_keeps_layout_and_cancels_pending() {
        let mut stack = StackController::new(cards(&["a", "b"])).expect("valid");
        let layout = stack.resize(1000.0, 440.0);
        stack.commit(SwipeDirection::Right, 0);
        stack.flush();
        stack.commit(SwipeDirection::Right, 10);

        stack.reset();
        let state = stack.state();
        assert_eq!(state.cursor, 0);
        assert!(state.excluded_ids.is_empty());
        assert_eq!(state.commit_direction, None);
        assert_eq!(state.drag, DragState::default());
        assert_eq!(state.layout, layout);
        assert!(stack.tick(10_000).is_empty(), "cancelled settle never runs");
        assert_eq!(stack.remaining_count(), 2);
    }

    #[test]
    fn test_external_mode_waits_for_host() {
        let config = StackConfig {
            exclusion: ExclusionMode::External,
            ..StackConfig::default()
        };
        let mut stack =
            StackController::with_config(cards(&["a", "b", "c"]), config, LayoutConfig::default())
                .expect("valid");

        stack.commit(SwipeDirection::Right, 0);
        stack.tick(300);
        assert!(stack.state().excluded_ids.is_empty(), "host owns exclusions");
        assert_eq!(stack.state().cursor, 1);
        assert_eq!(visible_ids(&stack), vec!["b", "a"]);

        let events = stack
            .sync(cards(&["a", "b", "c"]), Some(vec![CardId::from("c")]))
            .expect("valid");
        assert!(events.is_empty());
        assert_eq!(stack.state().cursor, 0);
        assert_eq!(visible_ids(&stack), vec!["b", "a"]);
    }

    #[test]
    fn test_external_mode_empty_reported_once() {
        let config = StackConfig {
            exclusion: ExclusionMode::External,
            ..StackConfig::default()
        };
        let mut stack =
            StackController::with_config(cards(&["a"]), config, LayoutConfig::default()).expect("valid");
        stack.commit(SwipeDirection::Left, 0);
        assert_eq!(stack.tick(300), vec![StackEvent::StackEmpty]);
        assert!(stack.set_excluded([CardId::from("a")]).is_empty());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_owned_mode_ignores_external_exclusions() {
        let mut stack = StackController::new(cards(&["a", "b"])).expect("valid");
        assert!(stack.set_excluded([CardId::from("a")]).is_empty());
        assert_eq!(stack.remaining_count(), 2);

        stack.commit(SwipeDirection::Left, 0);
        stack.flush();
        let events = stack
            .sync(cards(&["a", "b", "c"]), Some(Vec::<CardId>::new()))
            .expect("valid");
        assert!(events.is_empty());
        assert_eq!(visible_ids(&stack), vec!["c", "a"], "owned exclusions carry over");
    }

    #[test]
    fn test_sync_rejects_duplicates_without_changes() {
        let mut stack = StackController::new(cards(&["a"])).expect("valid");
        assert!(stack.sync(cards(&["x", "x"]), None::<Vec<CardId>>).is_err());
        assert_eq!(visible_ids(&stack), vec!["a"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = StackConfig {
            visible_count: 0,
            ..StackConfig::default()
        };
        assert!(StackController::with_config(Vec::new(), config, LayoutConfig::default()).is_err());

        let mut config = StackConfig::default();
        config.drag.swipe_threshold = 0.0;
        assert!(matches!(config.validate(), Err(DeckError::InvalidConfig(_))));
    }

    #[test]
    fn test_render_model_reflects_drag() {
        let mut stack = StackController::new(cards(&["a", "b", "c", "d"])).expect("valid");
        stack.handle_pointer(&PointerEvent::new(PointerPhase::Start, 0.0, 0.0, 0));
        stack.handle_pointer(&PointerEvent::new(PointerPhase::Move, -40.0, 0.0, 16));

        let model = stack.render_model();
        assert_eq!(model.cards.len(), 3);
        assert_eq!(model.remaining, 4);
        assert_eq!(model.cards[0].card.id.as_str(), "d");
        assert!((model.cards[0].transform.translate_x + 40.0).abs() < f32::EPSILON);
        assert!((model.cards[0].transform.rotation_deg + 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_deck_never_reports() {
        let mut stack = StackController::new(Vec::new()).expect("valid");
        assert!(stack.is_empty());
        assert!(stack.commit(SwipeDirection::Right, 0).is_empty());
        assert!(!stack.is_committing());
        assert!(stack.flush().is_empty());
    }
}
