//=========================================================================
// Hotkeys
//=========================================================================
//
// Binding table and per-tick hotkey sampling.
//
// Architecture:
//   HotkeyConfig (static) + HotkeyInput (host, per tick)
//        └─ HotkeyLevels::sample() → [Idle | Held | JustPressed; N]
//
//=========================================================================

//=== Module Declarations =================================================

mod binding;
mod sampler;

//=== Public API ==========================================================

pub use binding::{
    ConfigError, HotkeyBinding, HotkeyConfig, HotkeyConfigBuilder, DEFAULT_QUEUE_CAPACITY,
    DEFAULT_SLOTS, DEFAULT_SYMBOLS,
};
pub use sampler::{HotkeyInput, HotkeyLevel, HotkeyLevels, TriggerHandle};
