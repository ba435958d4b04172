//=========================================================================
// Input
//=========================================================================
//
// Portable input events and edge-detecting state tracking.
//
// Architecture:
//   InputEvent → StateTracker (held / pressed / released per tick)
//
// Hosts with their own hotkey registry can skip this module and feed
// `TriggerHandle`s to the sampler instead.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
mod state_tracker;

//=== Public API ==========================================================

pub use event::{InputEvent, InputSymbol, KeyCode, MouseButton, ParseSymbolError};
pub use state_tracker::StateTracker;
