//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages a host input thread sends into the tick.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the host to the arbiter via channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Batched input events, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Host window lost focus; every held symbol counts as released.
    FocusLost,

    /// Host is shutting down; the next tick returns `Exit`.
    Shutdown,
}
