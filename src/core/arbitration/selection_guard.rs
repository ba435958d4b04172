//=========================================================================
// Selection Guard
//=========================================================================
//
// Save/restore of the player's manually chosen slot around an override.
//
// Lifecycle of one override episode:
//   force_select() ── saves original once ──> [override active]
//   restore()      ── selects original, clears save ──> [idle]
//
// The saved value is never overwritten while set, and it is restored
// before it is cleared.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::player::PlayerControls;

//=== SelectionGuard ======================================================

/// Holds the original selection while a hotkey override is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionGuard {
    original: Option<usize>,
}

impl SelectionGuard {
    /// Sentinel used by hosts that mirror the guard into an integer field.
    pub const NO_SELECTION: isize = -1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn original(&self) -> Option<usize> {
        self.original
    }

    pub fn has_original(&self) -> bool {
        self.original.is_some()
    }

    /// The saved slot, or [`NO_SELECTION`](Self::NO_SELECTION).
    pub fn as_sentinel(&self) -> isize {
        self.original
            .and_then(|slot| isize::try_from(slot).ok())
            .unwrap_or(Self::NO_SELECTION)
    }

    /// Saves `current` unless a save is already active. Returns whether it saved.
    pub fn save_if_absent(&mut self, current: usize) -> bool {
        if self.original.is_some() {
            return false;
        }
        self.original = Some(current);
        true
    }

    /// Selects `slot` on the player, saving the current selection first.
    ///
    /// Nothing is saved when the player already has `slot` selected: the
    /// player chose it, so there is nothing to restore afterwards.
    pub fn force_select<P: PlayerControls + ?Sized>(&mut self, player: &mut P, slot: usize) {
        let current = player.selected_slot();
        if slot != current && self.save_if_absent(current) {
            debug!("Saved original selection {}", current);
        }
        player.select_slot(slot);
    }

    /// Puts the saved selection back and clears it.
    ///
    /// Returns the restored slot; `None` if nothing was saved.
    pub fn restore<P: PlayerControls + ?Sized>(&mut self, player: &mut P) -> Option<usize> {
        let original = self.original.take()?;
        player.select_slot(original);
        debug!("Restored original selection {}", original);
        Some(original)
    }

    /// Drops the save without touching the player.
    pub fn forget(&mut self) -> Option<usize> {
        self.original.take()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
