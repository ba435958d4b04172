//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level input state tracking with per-tick edge detection.
//
// Architecture:
//   InputEvent → process_events() → HashSet (symbols held) → query
//
// Tick lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, InputSymbol};

//=== StateTracker ========================================================

/// Tracks persistent state (symbols held) and per-tick deltas (pressed/released).
/// Tick lifecycle: clear() → process_events() → query.
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    down: HashSet<InputSymbol>,

    //--- Tick Deltas (reset each tick via clear()) ----------------------
    pressed_this_tick: HashSet<InputSymbol>,
    released_this_tick: HashSet<InputSymbol>,
}

impl StateTracker {
    /// Creates a new state tracker with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears tick-specific deltas (pressed/released flags).
    pub fn clear(&mut self) {
        self.pressed_this_tick.clear();
        self.released_this_tick.clear();
    }

    /// Processes input events, updating internal state.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------
    fn process_event(&mut self, event: &InputEvent) {
        let Some((symbol, pressed)) = event.symbol_transition() else {
            return;
        };

        if pressed {
            // Only mark as pressed if it wasn't already down (drops key repeat)
            if self.down.insert(symbol) {
                self.pressed_this_tick.insert(symbol);
            }
        } else if self.down.remove(&symbol) {
            self.released_this_tick.insert(symbol);
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if the symbol transitioned UP → DOWN this tick.
    ///
    /// Stays `true` for a press and release inside the same tick.
    pub fn is_pressed(&self, symbol: InputSymbol) -> bool {
        self.pressed_this_tick.contains(&symbol)
    }

    /// Returns `true` while the symbol is held.
    pub fn is_down(&self, symbol: InputSymbol) -> bool {
        self.down.contains(&symbol)
    }

    /// Returns `true` if the symbol transitioned DOWN → UP this tick.
    pub fn is_released(&self, symbol: InputSymbol) -> bool {
        self.released_this_tick.contains(&symbol)
    }

    /// Returns an iterator over all symbols currently held.
    pub fn held(&self) -> impl Iterator<Item = &InputSymbol> {
        self.down.iter()
    }

    /// Forgets every held symbol, e.g. after the host window lost focus.
    pub fn release_all(&mut self) {
        self.released_this_tick.extend(self.down.drain());
        self.pressed_this_tick.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
