//=========================================================================
// Event Collector
//=========================================================================
//
// Drains host input events at the start of a tick.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_tick() → pending events → TickControl
//
// Bounded draining keeps one tick from starving on a flooded channel;
// leftovers are picked up next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events with bounded polling.
///
/// `Shutdown` is never stored; it ends collection with `TickControl::Exit`.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    pending: Vec<PlatformEvent>,
    max_events_per_tick: usize,
    backlogged: bool,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>, max_events_per_tick: usize) -> Self {
        Self {
            receiver,
            pending: Vec::with_capacity(4),
            max_events_per_tick,
            backlogged: false,
        }
    }

    /// Collects pending platform events, at most `max_events_per_tick` messages.
    pub(crate) fn collect_tick(&mut self) -> TickControl {
        self.pending.clear();
        self.backlogged = false;
        let mut drained = 0;

        while drained < self.max_events_per_tick {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    if !batch.is_empty() {
                        self.pending.push(PlatformEvent::Inputs(batch));
                    }
                    drained += 1;
                }
                Ok(PlatformEvent::FocusLost) => {
                    self.pending.push(PlatformEvent::FocusLost);
                    drained += 1;
                }
                Ok(PlatformEvent::Shutdown) => {
                    info!("Shutdown requested by host");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    info!("All input senders dropped");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        // Hitting the cap only matters if messages were left behind
        self.backlogged = drained >= self.max_events_per_tick && !self.receiver.is_empty();
        if self.backlogged {
            warn!(
                "Input backlog: drained {} messages, {} left for next tick",
                drained,
                self.receiver.len()
            );
        }

        TickControl::Continue
    }

    /// `true` if the last tick stopped at the cap with messages still queued.
    pub(crate) fn is_backlogged(&self) -> bool {
        self.backlogged
    }

    /// Events collected this tick, in arrival order.
    pub(crate) fn events(&self) -> &[PlatformEvent] {
        &self.pending
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
