//=========================================================================
// Hotkey Arbiter — Library Root
//
// Tick-driven arbitration of quick-use hotkeys: while bound hotkeys are
// held, the player's active inventory slot is swapped to the bound item
// and the use control is asserted; the original selection comes back
// when the keys are released.
//
// Two ways in:
// - Hosts with their own input registry drive a `HotkeyPlayer` directly
//   (`process_triggers` then `pre_item_check`, once per tick).
// - Hosts without one use the `Arbiter` facade and feed it input events
//   through a channel.
//
// Typical usage:
// ```no_run
// use hotkey_arbiter::prelude::*;
//
// let mut arbiter = ArbiterBuilder::new().build();
// let input = arbiter.input_sender();
// let mut player = BasicPlayer::new(vec![ItemSnapshot::one_shot(); 10]);
//
// input.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::KeyF)])).unwrap();
// while arbiter.tick(&mut player) == TickControl::Continue {
//     // host simulation step
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the per-tick systems (sampling, slot resolution,
// arbitration, selection guard). `platform` maps winit events to crate
// input events for hosts built on winit.
//
pub mod core;
pub mod platform;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::{PlatformEvent, TickControl};
pub use engine::{Arbiter, ArbiterBuilder};
