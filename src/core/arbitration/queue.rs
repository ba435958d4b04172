//=========================================================================
// Activation Queue
//=========================================================================
//
// Pending hotkey activations, newest on top.
//
// Architecture:
//   enqueue() ──> [bottom ... top] ──peek()/pop()──> engine
//                       ▲
//                 prune(levels) drops released keys from the top
//
// The queue stores binding indices, not slot numbers, so the engine can
// look up the binding's current level and item every tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::hotkeys::HotkeyLevels;

//=== ActivationQueue =====================================================

/// Priority structure the arbitration engine drains.
///
/// [`PriorityDeque`] is the canonical implementation.
pub trait ActivationQueue {
    /// Records a fresh press of binding `index`.
    fn enqueue(&mut self, index: usize, reusable: bool);

    /// Binding with the highest priority, if any.
    fn peek(&self) -> Option<usize>;

    /// Removes the highest-priority entry.
    fn pop(&mut self) -> Option<usize>;

    /// Drops released keys from the top. Returns how many entries went away.
    fn prune(&mut self, levels: &HotkeyLevels) -> usize;

    /// Called after the engine force-selected the slot of binding `index`.
    fn mark_active(&mut self, _index: usize) {}

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending bindings, lowest priority first.
    fn snapshot(&self) -> Vec<usize>;
}

//=== PriorityDeque =======================================================

/// Bounded LIFO of binding indices.
///
/// When full, a new press evicts the oldest entry at the bottom.
#[derive(Debug, Clone)]
pub struct PriorityDeque {
    entries: VecDeque<usize>,
    capacity: usize,
}

impl PriorityDeque {
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl ActivationQueue for PriorityDeque {
    fn enqueue(&mut self, index: usize, _reusable: bool) {
        if self.entries.len() == self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                warn!("Activation queue full ({}), evicted hotkey {}", self.capacity, evicted);
            }
        }
        self.entries.push_back(index);
        debug!("Queued hotkey {} (depth {})", index, self.entries.len());
    }

    fn peek(&self) -> Option<usize> {
        self.entries.back().copied()
    }

    fn pop(&mut self) -> Option<usize> {
        self.entries.pop_back()
    }

    fn prune(&mut self, levels: &HotkeyLevels) -> usize {
        let mut pruned = 0;
        while let Some(&top) = self.entries.back() {
            if !levels.get(top).is_idle() {
                break;
            }
            self.entries.pop_back();
            pruned += 1;
        }
        pruned
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn snapshot(&self) -> Vec<usize> {
        self.entries.iter().copied().collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hotkeys::HotkeyLevel::{self, Held, Idle, JustPressed};
    use pretty_assertions::assert_eq;

    fn levels(levels: &[HotkeyLevel]) -> HotkeyLevels {
        HotkeyLevels::from(levels.to_vec())
    }

    #[test]
    fn newest_entry_on_top() {
        let mut queue = PriorityDeque::new(4);
        queue.enqueue(0, false);
        queue.enqueue(2, true);

        assert_eq!(queue.peek(), Some(2));
        assert_eq!(queue.snapshot(), vec![0, 2]);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.peek(), Some(0));
    }

    #[test]
    fn full_queue_evicts_bottom() {
        let mut queue = PriorityDeque::new(2);
        queue.enqueue(0, false);
        queue.enqueue(1, false);
        queue.enqueue(2, false);

        assert_eq!(queue.snapshot(), vec![1, 2]);
        assert_eq!(queue.len(), queue.capacity());
    }

    /// Pruning stops at the first entry whose key is still down.
    #[test]
    fn prune_only_drains_from_top() {
        let mut queue = PriorityDeque::new(8);
        queue.enqueue(0, false);
        queue.enqueue(1, false);
        queue.enqueue(2, false);

        let pruned = queue.prune(&levels(&[Idle, Held, Idle]));

        assert_eq!(pruned, 1);
        assert_eq!(queue.snapshot(), vec![0, 1]);
    }

    #[test]
    fn prune_can_empty_queue() {
        let mut queue = PriorityDeque::new(8);
        queue.enqueue(0, false);
        queue.enqueue(1, true);

        assert_eq!(queue.prune(&levels(&[Idle, Idle])), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn just_pressed_counts_as_live() {
        let mut queue = PriorityDeque::new(8);
        queue.enqueue(0, false);
        assert_eq!(queue.prune(&levels(&[JustPressed])), 0);
    }

    #[test]
    #[should_panic(expected = "Queue capacity must be positive")]
    fn zero_capacity_panics() {
        PriorityDeque::new(0);
    }
}
