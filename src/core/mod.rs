//=========================================================================
// Core
//=========================================================================
//
// Everything that runs inside a tick.
//
// Data flow per tick:
// ```text
//   input ──> hotkeys (sampler) ──┐
//                                 ├──> arbitration ──> PlayerControls
//   inventory (slot resolver) ────┘        │            (slot, use-item)
//                                     SelectionGuard
// ```
//
// `platform_bridge` carries input events from other threads into the
// tick; it is only used by the `Arbiter` facade.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod arbitration;
pub mod hotkeys;
pub mod input;
pub mod inventory;
pub mod player;
pub(crate) mod platform_bridge;
