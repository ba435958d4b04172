//=========================================================================
// Arbitration Engine
//=========================================================================
//
// Decides, once per tick, which hotkey slot is force-selected and whether
// the use-item control is asserted.
//
// Architecture:
//   ArbitrationEngine
//     ├─ config: Arc<HotkeyConfig>     (binding table, read-only)
//     ├─ queue:  ActivationQueue       (pending presses, newest on top)
//     └─ guard:  SelectionGuard        (original selection)
//
// Per tick:
//   1. resolve slots for the current inventory
//   2. enqueue fresh presses on occupied slots (declaration order)
//   3. discard top entries whose slot has been emptied
//   4. top entry present:
//        mid-swing on another slot → release use, wait
//        otherwise                 → select it / consume one-shot, assert use,
//                                    then prune released keys from the top
//   5. queue empty with a saved selection:
//        mid-swing → release use
//        otherwise → restore
//
//=========================================================================

//=== Module Declarations =================================================

mod queue;
mod queued_slot;
mod selection_guard;

//=== Public API ==========================================================

pub use queue::{ActivationQueue, PriorityDeque};
#[allow(deprecated)]
pub use queued_slot::QueuedSlot;
pub use selection_guard::SelectionGuard;

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::hotkeys::{HotkeyConfig, HotkeyLevels};
use crate::core::inventory::{ResolvedSlot, SlotResolver};
use crate::core::player::PlayerControls;

//=== UseAction ===========================================================

/// What the engine did to the use-item control this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UseAction {
    /// Left as the host had it.
    #[default]
    Unchanged,

    /// Forced on.
    Assert,

    /// Forced off so a running swing can finish.
    Release,
}

//=== TickOutcome =========================================================

/// Effects of one arbitration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TickOutcome {
    /// Slot force-selected this tick (at most one).
    pub forced_slot: Option<usize>,

    pub use_item: UseAction,

    /// Original selection put back this tick.
    pub restored: Option<usize>,
}

//=== ArbitrationEngine ===================================================

/// Per-player arbitration state machine.
///
/// Generic over the activation policy; [`PriorityDeque`] is the default
/// and the only non-deprecated one.
#[derive(Debug)]
pub struct ArbitrationEngine<Q: ActivationQueue = PriorityDeque> {
    config: Arc<HotkeyConfig>,
    queue: Q,
    guard: SelectionGuard,
}

impl ArbitrationEngine<PriorityDeque> {
    /// Creates an engine with a deque sized from the configuration.
    pub fn new(config: Arc<HotkeyConfig>) -> Self {
        let queue = PriorityDeque::new(config.queue_capacity());
        Self::with_queue(config, queue)
    }
}

impl<Q: ActivationQueue> ArbitrationEngine<Q> {
    /// Creates an engine driving a caller-supplied activation policy.
    pub fn with_queue(config: Arc<HotkeyConfig>, queue: Q) -> Self {
        Self {
            config,
            queue,
            guard: SelectionGuard::new(),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn config(&self) -> &HotkeyConfig {
        &self.config
    }

    /// `true` while any hotkey activation is pending.
    pub fn has_queued_action(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn has_original_selection(&self) -> bool {
        self.guard.has_original()
    }

    pub fn original_selection(&self) -> Option<usize> {
        self.guard.original()
    }

    pub fn guard(&self) -> &SelectionGuard {
        &self.guard
    }

    /// Pending binding indices, lowest priority first.
    pub fn queued(&self) -> Vec<usize> {
        self.queue.snapshot()
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one arbitration pass and applies its effects to `player`.
    pub fn arbitrate<P: PlayerControls + ?Sized>(
        &mut self,
        levels: &HotkeyLevels,
        player: &mut P,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.config.is_empty() {
            return outcome;
        }

        let slots = SlotResolver::resolve(&self.config, player.inventory());
        self.enqueue_fresh_presses(levels, &slots);

        let swinging = player.is_swinging();
        let selected = player.selected_slot();

        match self.next_target(&slots) {
            Some(target) => {
                if swinging && target.slot != selected {
                    debug!("Deferring slot {} until swing on slot {} ends", target.slot, selected);
                    player.set_use_item(false);
                    outcome.use_item = UseAction::Release;
                } else {
                    if target.slot != selected || !self.guard.has_original() {
                        self.guard.force_select(player, target.slot);
                        self.queue.mark_active(target.index);
                        outcome.forced_slot = Some(target.slot);
                    } else if !target.item.is_reusable() {
                        self.queue.pop();
                        debug!("One-shot slot {} used, advancing queue", target.slot);
                    }
                    player.set_use_item(true);
                    outcome.use_item = UseAction::Assert;

                    let pruned = self.queue.prune(levels);
                    if pruned > 0 {
                        debug!("Pruned {} released hotkey(s)", pruned);
                    }
                }
            }
            None => {
                if self.guard.has_original() {
                    if swinging {
                        // Let the swing finish before reverting
                        player.set_use_item(false);
                        outcome.use_item = UseAction::Release;
                    } else {
                        outcome.restored = self.guard.restore(player);
                    }
                }
            }
        }

        trace!("Activation queue: {:?}", self.queue.snapshot());
        outcome
    }

    /// Drops all pending activations and the saved selection.
    ///
    /// The player is left untouched; hosts call this when the player's
    /// inventory context is torn down (respawn, world exit).
    pub fn reset(&mut self) {
        self.queue.clear();
        if let Some(slot) = self.guard.forget() {
            debug!("Dropped saved selection {} on reset", slot);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn enqueue_fresh_presses(&mut self, levels: &HotkeyLevels, slots: &[ResolvedSlot]) {
        for resolved in slots {
            if !levels.get(resolved.index).is_just_pressed() {
                continue;
            }
            if resolved.is_eligible() {
                self.queue.enqueue(resolved.index, resolved.item.is_reusable());
            } else {
                debug!("Ignoring hotkey {}: slot {} is empty", resolved.index, resolved.slot);
            }
        }
    }

    /// Top entry whose slot still holds an item; emptied entries are dropped.
    fn next_target(&mut self, slots: &[ResolvedSlot]) -> Option<ResolvedSlot> {
        while let Some(index) = self.queue.peek() {
            match slots.get(index) {
                Some(target) if target.is_eligible() => return Some(*target),
                _ => {
                    debug!("Discarding hotkey {}: slot no longer occupied", index);
                    self.queue.pop();
                }
            }
        }
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hotkeys::HotkeyLevel::{self, Held, Idle, JustPressed};
    use crate::core::inventory::ItemSnapshot;
    use crate::core::player::BasicPlayer;
    use pretty_assertions::assert_eq;

    //--- Test Helpers -----------------------------------------------------

    /// Hotkey 0 → slot 4, hotkey 1 → slot 5, hotkey 2 → slot 6.
    fn engine() -> ArbitrationEngine {
        let config = HotkeyConfig::builder()
            .bind(4, "F")
            .bind(5, "V")
            .bind(6, "C")
            .build()
            .unwrap();
        ArbitrationEngine::new(Arc::new(config))
    }

    /// Slot 4 one-shot, slot 5 one-shot, slot 6 autoswing, rest empty.
    fn player() -> BasicPlayer {
        let mut items = vec![ItemSnapshot::EMPTY; 10];
        items[0] = ItemSnapshot::one_shot();
        items[4] = ItemSnapshot::one_shot();
        items[5] = ItemSnapshot::one_shot();
        items[6] = ItemSnapshot::auto_reuse();
        BasicPlayer::new(items)
    }

    fn levels(levels: &[HotkeyLevel]) -> HotkeyLevels {
        HotkeyLevels::from(levels.to_vec())
    }

    fn assert_use(slot: usize) -> TickOutcome {
        TickOutcome {
            forced_slot: Some(slot),
            use_item: UseAction::Assert,
            restored: None,
        }
    }

    //=====================================================================
    // Queueing
    //=====================================================================

    #[test]
    fn idle_keys_do_nothing() {
        let mut engine = engine();
        let mut player = player();

        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);

        assert_eq!(outcome, TickOutcome::default());
        assert!(!engine.has_queued_action());
        assert!(!player.control_use_item);
    }

    #[test]
    fn press_selects_slot_and_asserts_use() {
        let mut engine = engine();
        let mut player = player();

        let outcome = engine.arbitrate(&levels(&[JustPressed, Idle, Idle]), &mut player);

        assert_eq!(outcome, assert_use(4));
        assert_eq!(player.selected_slot(), 4);
        assert!(player.control_use_item);
        assert_eq!(engine.original_selection(), Some(0));
    }

    /// Simultaneous presses: last declared binding ends on top.
    #[test]
    fn simultaneous_presses_last_declared_wins() {
        let mut engine = engine();
        let mut player = player();

        let outcome = engine.arbitrate(&levels(&[JustPressed, JustPressed, Idle]), &mut player);

        assert_eq!(outcome.forced_slot, Some(5));
        assert_eq!(engine.queued(), vec![0, 1]);
    }

    #[test]
    fn press_on_empty_slot_is_ignored() {
        let mut engine = engine();
        let mut player = player();
        player.inventory[5] = ItemSnapshot::EMPTY;

        let outcome = engine.arbitrate(&levels(&[Idle, JustPressed, Idle]), &mut player);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(player.selected_slot(), 0);
        assert!(!engine.has_queued_action());
    }

    #[test]
    fn empty_config_is_inert() {
        let config = HotkeyConfig::builder().build().unwrap();
        let mut engine = ArbitrationEngine::new(Arc::new(config));
        let mut player = player();

        let outcome = engine.arbitrate(&levels(&[JustPressed]), &mut player);

        assert_eq!(outcome, TickOutcome::default());
        assert!(!engine.has_queued_action());
    }

    //=====================================================================
    // One-shot vs Reusable
    //=====================================================================

    /// Second tick on an already-active one-shot pops it.
    #[test]
    fn one_shot_consumed_after_first_use() {
        let mut engine = engine();
        let mut player = player();

        engine.arbitrate(&levels(&[JustPressed, Idle, Idle]), &mut player);
        let outcome = engine.arbitrate(&levels(&[Held, Idle, Idle]), &mut player);

        assert_eq!(outcome.forced_slot, None);
        assert_eq!(outcome.use_item, UseAction::Assert);
        assert!(!engine.has_queued_action());
    }

    #[test]
    fn reusable_stays_queued_while_held() {
        let mut engine = engine();
        let mut player = player();

        engine.arbitrate(&levels(&[Idle, Idle, JustPressed]), &mut player);
        for _ in 0..5 {
            let outcome = engine.arbitrate(&levels(&[Idle, Idle, Held]), &mut player);
            assert_eq!(outcome.use_item, UseAction::Assert);
            assert_eq!(player.selected_slot(), 6);
        }
        assert_eq!(engine.queued(), vec![2]);
    }

    /// Key on the player's own selection: no save, keeps asserting.
    #[test]
    fn hotkey_for_current_slot_saves_nothing() {
        let mut engine = engine();
        let mut player = player();
        player.select_slot(4);

        engine.arbitrate(&levels(&[JustPressed, Idle, Idle]), &mut player);
        let outcome = engine.arbitrate(&levels(&[Held, Idle, Idle]), &mut player);

        assert_eq!(outcome, assert_use(4));
        assert!(!engine.has_original_selection());
        assert!(engine.has_queued_action());
    }

    //=====================================================================
    // Swing Deferral
    //=====================================================================

    #[test]
    fn swing_on_other_slot_defers_switch() {
        let mut engine = engine();
        let mut player = player();
        player.item_animation = 12;
        player.control_use_item = true;

        let outcome = engine.arbitrate(&levels(&[JustPressed, Idle, Idle]), &mut player);

        assert_eq!(outcome.use_item, UseAction::Release);
        assert_eq!(outcome.forced_slot, None);
        assert_eq!(player.selected_slot(), 0);
        assert!(!player.control_use_item);
        assert!(engine.has_queued_action());
    }

    /// A tap during a swing is kept and fires once the swing ends.
    #[test]
    fn key_tapped_during_swing_fires_after_swing() {
        let mut engine = engine();
        let mut player = player();
        player.selected_slot = 2;
        player.item_animation = 3;

        engine.arbitrate(&levels(&[JustPressed, Idle, Idle]), &mut player);
        player.item_animation = 2;
        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);
        assert_eq!(outcome.use_item, UseAction::Release);
        assert_eq!(engine.queued(), vec![0]);

        player.item_animation = 0;
        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);
        assert_eq!(outcome, assert_use(4));
        assert_eq!(engine.original_selection(), Some(2));
        assert!(!engine.has_queued_action());

        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);
        assert_eq!(outcome.restored, Some(2));
    }

    /// Released under a newer press: drained after acting, never selected.
    #[test]
    fn buried_released_key_is_pruned() {
        let mut engine = engine();
        let mut player = player();

        let outcome = engine.arbitrate(&levels(&[JustPressed, JustPressed, Idle]), &mut player);
        assert_eq!(outcome, assert_use(5));

        // Slot 5 one-shot consumed, released hotkey 0 drained beneath it
        let outcome = engine.arbitrate(&levels(&[Idle, Held, Idle]), &mut player);
        assert_eq!(outcome.forced_slot, None);
        assert!(!engine.has_queued_action());

        let outcome = engine.arbitrate(&levels(&[Idle, Held, Idle]), &mut player);
        assert_eq!(outcome.restored, Some(0));
        assert_eq!(player.selected_slot(), 0);
    }

    //=====================================================================
    // Restore
    //=====================================================================

    #[test]
    fn restore_waits_for_swing_to_end() {
        let mut engine = engine();
        let mut player = player();

        engine.arbitrate(&levels(&[Idle, Idle, JustPressed]), &mut player);
        player.item_animation = 20;
        // Released: last assert, then pruned
        engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);

        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);
        assert_eq!(outcome.use_item, UseAction::Release);
        assert_eq!(outcome.restored, None);
        assert_eq!(player.selected_slot(), 6);

        player.item_animation = 0;
        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Idle]), &mut player);
        assert_eq!(outcome.restored, Some(0));
        assert_eq!(player.selected_slot(), 0);
        assert!(!engine.has_original_selection());
    }

    /// Item removed from a queued slot: entry discarded, selection restored.
    #[test]
    fn emptied_slot_is_discarded() {
        let mut engine = engine();
        let mut player = player();

        engine.arbitrate(&levels(&[Idle, Idle, JustPressed]), &mut player);
        player.inventory[6] = ItemSnapshot::EMPTY;

        let outcome = engine.arbitrate(&levels(&[Idle, Idle, Held]), &mut player);

        assert_eq!(outcome.restored, Some(0));
        assert!(!engine.has_queued_action());
    }

    #[test]
    fn reset_drops_state_without_touching_player() {
        let mut engine = engine();
        let mut player = player();
        engine.arbitrate(&levels(&[JustPressed, Idle, Idle]), &mut player);

        engine.reset();

        assert!(!engine.has_queued_action());
        assert!(!engine.has_original_selection());
        assert_eq!(player.selected_slot(), 4);
    }

    //=====================================================================
    // Deprecated Policy
    //=====================================================================

    #[test]
    #[allow(deprecated)]
    fn queued_slot_policy_falls_back_to_held_reusable() {
        let config = Arc::new(
            HotkeyConfig::builder()
                .bind(6, "C")
                .bind(4, "F")
                .build()
                .unwrap(),
        );
        let mut engine = ArbitrationEngine::with_queue(config, QueuedSlot::new());
        let mut player = player();

        // Reusable on slot 6, then one-shot on slot 4
        engine.arbitrate(&levels(&[JustPressed, Idle]), &mut player);
        engine.arbitrate(&levels(&[Held, JustPressed]), &mut player);
        assert_eq!(player.selected_slot(), 4);

        // One-shot consumed, priority returns to slot 6
        engine.arbitrate(&levels(&[Held, Held]), &mut player);
        let outcome = engine.arbitrate(&levels(&[Held, Held]), &mut player);
        assert_eq!(outcome.forced_slot, Some(6));
    }
}
