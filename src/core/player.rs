//=========================================================================
// Player Context
//=========================================================================
//
// Host-facing side of arbitration.
//
// - `PlayerControls`: what the engine reads and writes on a host player
// - `BasicPlayer`: plain-data implementation for simple hosts and tests
// - `HotkeyPlayer`: per-player context with the two tick callbacks
//
// Tick order, driven by the host:
//   process_triggers(input)  →  pre_item_check(player)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::arbitration::{ActivationQueue, ArbitrationEngine, PriorityDeque, TickOutcome};
use crate::core::hotkeys::{HotkeyConfig, HotkeyInput, HotkeyLevels};
use crate::core::inventory::{InventoryView, ItemSnapshot};

//=== PlayerControls ======================================================

/// The player state arbitration needs from the host.
pub trait PlayerControls {
    /// Currently active inventory slot.
    fn selected_slot(&self) -> usize;

    /// Makes `slot` the active inventory slot.
    fn select_slot(&mut self, slot: usize);

    /// Sets the "use item" control for this tick.
    fn set_use_item(&mut self, asserted: bool);

    /// `true` while an item-use animation is running.
    fn is_swinging(&self) -> bool;

    /// Read-only view of the player's inventory.
    fn inventory(&self) -> &dyn InventoryView;
}

//=== BasicPlayer =========================================================

/// Minimal player record implementing [`PlayerControls`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPlayer {
    pub selected_slot: usize,
    pub control_use_item: bool,
    /// Remaining ticks of the current use animation; `> 0` means swinging.
    pub item_animation: u32,
    pub inventory: Vec<ItemSnapshot>,
}

impl BasicPlayer {
    /// Player on slot 0, idle, holding `inventory`.
    pub fn new(inventory: Vec<ItemSnapshot>) -> Self {
        Self {
            selected_slot: 0,
            control_use_item: false,
            item_animation: 0,
            inventory,
        }
    }
}

impl PlayerControls for BasicPlayer {
    fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    fn select_slot(&mut self, slot: usize) {
        self.selected_slot = slot;
    }

    fn set_use_item(&mut self, asserted: bool) {
        self.control_use_item = asserted;
    }

    fn is_swinging(&self) -> bool {
        self.item_animation > 0
    }

    fn inventory(&self) -> &dyn InventoryView {
        &self.inventory
    }
}

//=== HotkeyPlayer ========================================================

/// Per-player hotkey context.
///
/// Owns the arbitration state for one player; the binding table is shared.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use hotkey_arbiter::prelude::*;
///
/// let config = Arc::new(HotkeyConfig::default());
/// let mut hotkeys = HotkeyPlayer::new(config);
///
/// let mut items = vec![ItemSnapshot::EMPTY; 10];
/// items[4] = ItemSnapshot::one_shot();
/// let mut player = BasicPlayer::new(items);
///
/// // "F" (slot 4) goes down this tick
/// let mut handles = [TriggerHandle::IDLE; 6];
/// handles[0] = TriggerHandle::PRESSED;
///
/// hotkeys.process_triggers(&handles[..]);
/// assert!(hotkeys.pre_item_check(&mut player));
/// assert_eq!(player.selected_slot, 4);
/// assert!(player.control_use_item);
/// ```
#[derive(Debug)]
pub struct HotkeyPlayer<Q: ActivationQueue = PriorityDeque> {
    levels: HotkeyLevels,
    engine: ArbitrationEngine<Q>,
    last_outcome: TickOutcome,
}

impl HotkeyPlayer<PriorityDeque> {
    pub fn new(config: Arc<HotkeyConfig>) -> Self {
        Self::from_engine(ArbitrationEngine::new(config))
    }
}

impl<Q: ActivationQueue> HotkeyPlayer<Q> {
    /// Wraps an engine built with a custom activation policy.
    pub fn from_engine(engine: ArbitrationEngine<Q>) -> Self {
        Self {
            levels: HotkeyLevels::default(),
            engine,
            last_outcome: TickOutcome::default(),
        }
    }

    //--- Tick Callbacks ---------------------------------------------------

    /// Input phase: samples every hotkey. Replaces last tick's levels.
    pub fn process_triggers<I: HotkeyInput + ?Sized>(&mut self, input: &I) {
        self.levels = HotkeyLevels::sample(self.engine.config(), input);
    }

    /// Item-check phase: arbitrates and applies the result to `player`.
    ///
    /// Always returns `true`: the host's own use check must still run.
    pub fn pre_item_check<P: PlayerControls + ?Sized>(&mut self, player: &mut P) -> bool {
        self.last_outcome = self.engine.arbitrate(&self.levels, player);
        true
    }

    //--- Queries ----------------------------------------------------------

    /// Levels sampled by the last `process_triggers`.
    pub fn levels(&self) -> &HotkeyLevels {
        &self.levels
    }

    /// Effects of the last `pre_item_check`.
    pub fn last_outcome(&self) -> TickOutcome {
        self.last_outcome
    }

    pub fn engine(&self) -> &ArbitrationEngine<Q> {
        &self.engine
    }

    pub fn has_queued_action(&self) -> bool {
        self.engine.has_queued_action()
    }

    pub fn has_original_selection(&self) -> bool {
        self.engine.has_original_selection()
    }

    /// Clears levels, queue and saved selection (respawn, world exit).
    pub fn reset(&mut self) {
        self.levels = HotkeyLevels::default();
        self.engine.reset();
        self.last_outcome = TickOutcome::default();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
