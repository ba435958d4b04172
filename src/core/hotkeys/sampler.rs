//=========================================================================
// Hotkey Sampler
//=========================================================================
//
// Classifies every configured hotkey once per tick.
//
// Architecture:
//   HotkeyInput (host) ──sample()──> HotkeyLevels [Idle | Held | JustPressed]
//
// Levels are index-aligned with the binding table and rebuilt from
// scratch every tick; no history is kept here. Edge detection belongs
// to the input source (host handles or `StateTracker`).
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::binding::{HotkeyBinding, HotkeyConfig};
use crate::core::input::StateTracker;

//=== HotkeyLevel =========================================================

/// Per-tick classification of one hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HotkeyLevel {
    /// Not held.
    #[default]
    Idle,

    /// Held, pressed on an earlier tick.
    Held,

    /// Went down this tick.
    JustPressed,
}

impl HotkeyLevel {
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    pub fn is_just_pressed(self) -> bool {
        self == Self::JustPressed
    }
}

//=== HotkeyInput =========================================================

/// Per-tick trigger state for a binding, provided by the host.
pub trait HotkeyInput {
    /// The binding's input went down this tick.
    fn just_pressed(&self, binding: &HotkeyBinding) -> bool;

    /// The binding's input is currently down.
    fn held(&self, binding: &HotkeyBinding) -> bool;
}

/// Trigger handle as exposed by a host hotkey registry.
///
/// A slice of handles, index-aligned with the binding table, is a
/// [`HotkeyInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriggerHandle {
    pub just_pressed: bool,
    pub held: bool,
}

impl TriggerHandle {
    pub const IDLE: Self = Self { just_pressed: false, held: false };
    pub const PRESSED: Self = Self { just_pressed: true, held: true };
    pub const HELD: Self = Self { just_pressed: false, held: true };
}

impl HotkeyInput for [TriggerHandle] {
    fn just_pressed(&self, binding: &HotkeyBinding) -> bool {
        self.get(binding.index()).is_some_and(|h| h.just_pressed)
    }

    fn held(&self, binding: &HotkeyBinding) -> bool {
        self.get(binding.index()).is_some_and(|h| h.held)
    }
}

impl HotkeyInput for StateTracker {
    fn just_pressed(&self, binding: &HotkeyBinding) -> bool {
        self.is_pressed(binding.default_symbol())
    }

    fn held(&self, binding: &HotkeyBinding) -> bool {
        self.is_down(binding.default_symbol())
    }
}

//=== HotkeyLevels ========================================================

/// Levels for every binding this tick, index-aligned with the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HotkeyLevels {
    levels: Vec<HotkeyLevel>,
}

impl HotkeyLevels {
    /// Samples every binding of `config` from `input`.
    ///
    /// A just-pressed edge wins over the held flag, so a press and release
    /// within one tick still registers.
    pub fn sample<I: HotkeyInput + ?Sized>(config: &HotkeyConfig, input: &I) -> Self {
        let levels = config
            .bindings()
            .iter()
            .map(|binding| {
                if input.just_pressed(binding) {
                    HotkeyLevel::JustPressed
                } else if input.held(binding) {
                    HotkeyLevel::Held
                } else {
                    HotkeyLevel::Idle
                }
            })
            .collect();

        Self { levels }
    }

    /// Level of binding `index`; out-of-range indices read as `Idle`.
    pub fn get(&self, index: usize) -> HotkeyLevel {
        self.levels.get(index).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = HotkeyLevel> + '_ {
        self.levels.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl From<Vec<HotkeyLevel>> for HotkeyLevels {
    fn from(levels: Vec<HotkeyLevel>) -> Self {
        Self { levels }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
