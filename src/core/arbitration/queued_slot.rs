//=========================================================================
// Queued Slot (deprecated policy)
//=========================================================================
//
// Single-slot predecessor of the priority deque: one queued binding plus
// two remembered values instead of an explicit stack.
//
//   queued         binding that drives the next tick
//   last_used      binding force-selected or consumed most recently
//   last_reusable  last enqueued reusable binding whose key is still down
//
// When the queued binding is consumed or released, priority falls back to
// `last_reusable`, unless that is the binding just consumed. Older one-shot
// presses are forgotten, which is where this policy diverges from the deque.
//
//=========================================================================

#![allow(deprecated)]

//=== Internal Dependencies ===============================================

use super::queue::ActivationQueue;
use crate::core::hotkeys::HotkeyLevels;

//=== QueuedSlot ==========================================================

/// Single-slot activation policy with reuse-priority fallback.
#[deprecated(note = "use `PriorityDeque`; stack order is the supported arbitration policy")]
#[derive(Debug, Clone, Default)]
pub struct QueuedSlot {
    queued: Option<usize>,
    last_used: Option<usize>,
    last_reusable: Option<usize>,
}

impl QueuedSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_used(&self) -> Option<usize> {
        self.last_used
    }

    pub fn last_reusable(&self) -> Option<usize> {
        self.last_reusable
    }
}

impl ActivationQueue for QueuedSlot {
    fn enqueue(&mut self, index: usize, reusable: bool) {
        self.queued = Some(index);
        if reusable {
            self.last_reusable = Some(index);
        }
    }

    fn peek(&self) -> Option<usize> {
        self.queued
    }

    fn pop(&mut self) -> Option<usize> {
        let used = self.queued.take();
        if used.is_some() {
            self.last_used = used;
        }
        if self.last_reusable == self.last_used {
            self.last_reusable = None;
        }
        self.queued = self.last_reusable;
        used
    }

    fn prune(&mut self, levels: &HotkeyLevels) -> usize {
        let before = self.len();

        if self.last_reusable.is_some_and(|r| levels.get(r).is_idle()) {
            self.last_reusable = None;
        }
        if self.queued.is_some_and(|q| levels.get(q).is_idle()) {
            self.queued = self.last_reusable;
        }

        before.saturating_sub(self.len())
    }

    fn mark_active(&mut self, index: usize) {
        self.last_used = Some(index);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn len(&self) -> usize {
        usize::from(self.queued.is_some())
    }

    fn snapshot(&self) -> Vec<usize> {
        self.queued.into_iter().collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
