//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use hotkey_arbiter::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Host facade
pub use crate::engine::{Arbiter, ArbiterBuilder};
pub use crate::core::platform_bridge::{PlatformEvent, TickControl};

// Configuration
pub use crate::core::hotkeys::{ConfigError, HotkeyBinding, HotkeyConfig};

// Sampling
pub use crate::core::hotkeys::{HotkeyInput, HotkeyLevel, HotkeyLevels, TriggerHandle};
pub use crate::core::input::{InputEvent, InputSymbol, KeyCode, MouseButton, StateTracker};

// Arbitration
pub use crate::core::arbitration::{ActivationQueue, PriorityDeque, TickOutcome, UseAction};

// Player and inventory
pub use crate::core::inventory::{InventoryView, ItemSnapshot};
pub use crate::core::player::{BasicPlayer, HotkeyPlayer, PlayerControls};
