//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Winit integration for hosts that run their own event loop.
//
// Architecture:
// ```text
//  Host Event Loop (main thread)         Tick (logic thread)
//  ┌──────────────────────────┐          ┌──────────────────┐
//  │  WindowEvent             │          │  Arbiter::tick   │
//  │   ↓ map_window_event()   │          │   ↓              │
//  │  InputEvent              │          │  StateTracker    │
//  │   ↓ (host batches)       │          │   ↓              │
//  │  Sender<PlatformEvent> ──┼──────────┼─> HotkeyPlayer   │
//  └──────────────────────────┘          └──────────────────┘
// ```
//
// The crate never creates windows or event loops; the host owns both and
// forwards mapped events through `Arbiter::input_sender()`: input edges
// batched as `PlatformEvent::Inputs`, focus loss via `map_focus()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== Public API ==========================================================

pub use input_processor::{map_focus, map_key, map_mouse_button, map_window_event};
