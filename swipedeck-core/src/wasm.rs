//! WebAssembly bindings for swipedeck-core.
//!
//! This module provides JavaScript-callable functions when compiled to WASM.
//! Structured values cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::{
    cards_from_json, CardId, PointerEvent, PointerPhase, StackController, StackEvent,
    SwipeDeckConfig, SwipeDirection,
};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // JS numbers are f64; negative clamps to 0
fn to_millis(timestamp_ms: f64) -> u64 {
    timestamp_ms.max(0.0) as u64
}

fn events_json(events: &[StackEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

/// Card stack instance for WASM.
#[wasm_bindgen]
pub struct WasmDeck {
    stack: StackController,
}

#[wasm_bindgen]
impl WasmDeck {
    /// Create a stack from a JSON array of cards.
    ///
    /// # Errors
    ///
    /// Returns an error string if the JSON is invalid or ids repeat.
    #[wasm_bindgen(constructor)]
    pub fn new(cards_json: &str) -> Result<WasmDeck, String> {
        Self::with_config(cards_json, "{}")
    }

    /// Create a stack with a JSON config.
    ///
    /// # Errors
    ///
    /// Returns an error string if either JSON document is invalid.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(cards_json: &str, config_json: &str) -> Result<WasmDeck, String> {
        let cards = cards_from_json(cards_json).map_err(|e| e.to_string())?;
        let config = SwipeDeckConfig::from_json(config_json).map_err(|e| e.to_string())?;
        let stack = StackController::with_config(cards, config.stack, config.layout)
            .map_err(|e| e.to_string())?;
        Ok(Self { stack })
    }

    /// Feed a pointer sample. Returns emitted events as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown phase name.
    #[wasm_bindgen(js_name = handlePointer)]
    pub fn handle_pointer(
        &mut self,
        phase: &str,
        x: f32,
        y: f32,
        timestamp_ms: f64,
        target: Option<String>,
    ) -> Result<String, String> {
        let phase = PointerPhase::parse(phase).ok_or_else(|| format!("unknown phase: {phase}"))?;
        let mut event = PointerEvent::new(phase, x, y, to_millis(timestamp_ms));
        event.target = target.map(CardId::from);
        Ok(events_json(&self.stack.handle_pointer(&event)))
    }

    /// Swipe the front card from a button press.
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown direction.
    pub fn commit(&mut self, direction: &str, timestamp_ms: f64) -> Result<String, String> {
        let direction: SwipeDirection = direction.parse()?;
        Ok(events_json(&self.stack.commit(direction, to_millis(timestamp_ms))))
    }

    /// Pump the settle timer. Returns emitted events as JSON.
    pub fn tick(&mut self, timestamp_ms: f64) -> String {
        events_json(&self.stack.tick(to_millis(timestamp_ms)))
    }

    /// When the pending settle is due, or -1 if none.
    #[wasm_bindgen(js_name = settleDueAt)]
    #[allow(clippy::cast_precision_loss)] // timestamps stay well under 2^53
    #[must_use]
    pub fn settle_due_at(&self) -> f64 {
        self.stack.settle_due_at().map_or(-1.0, |t| t as f64)
    }

    /// Bring a swiped card back.
    pub fn undo(&mut self, card_id: &str) -> bool {
        self.stack.undo(&CardId::from(card_id))
    }

    /// Reset to a fresh stack.
    pub fn reset(&mut self) {
        self.stack.reset();
    }

    /// Replace the cards (and, in external mode, the exclusions).
    ///
    /// # Errors
    ///
    /// Returns an error string if either JSON document is invalid.
    pub fn sync(&mut self, cards_json: &str, excluded_json: Option<String>) -> Result<String, String> {
        let cards = cards_from_json(cards_json).map_err(|e| e.to_string())?;
        let excluded = excluded_json
            .map(|json| serde_json::from_str::<Vec<CardId>>(&json))
            .transpose()
            .map_err(|e| e.to_string())?;
        let events = self.stack.sync(cards, excluded).map_err(|e| e.to_string())?;
        Ok(events_json(&events))
    }

    /// Recompute the layout. Returns the layout state as JSON.
    pub fn resize(&mut self, width: f32, height: f32) -> String {
        let layout = self.stack.resize(width, height);
        serde_json::to_string(&layout).unwrap_or_default()
    }

    /// Record the card content's natural size. Returns the layout as JSON.
    #[wasm_bindgen(js_name = measureContent)]
    pub fn measure_content(&mut self, width: f32, height: f32) -> String {
        let layout = self.stack.measure_content(width, height);
        serde_json::to_string(&layout).unwrap_or_default()
    }

    /// Get the frame to draw as JSON.
    #[wasm_bindgen(js_name = renderModelJson)]
    #[must_use]
    pub fn render_model_json(&self) -> String {
        serde_json::to_string(&self.stack.render_model()).unwrap_or_default()
    }

    /// Get the stack state as JSON.
    #[wasm_bindgen(js_name = stateJson)]
    #[must_use]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.stack.state()).unwrap_or_default()
    }

    /// Cards left to swipe.
    #[wasm_bindgen(js_name = remainingCount)]
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.stack.remaining_count()
    }
}
