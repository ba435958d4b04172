//=========================================================================
// Platform Bridge
//=========================================================================
//
// Carries input from host threads into the single-threaded tick.
//
// Components:
// - `interface`: message type (the contract)
// - `event_collector`: tick-side draining and batching
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub use interface::PlatformEvent;
