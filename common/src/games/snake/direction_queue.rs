use std::collections::VecDeque;

use super::types::Direction;

/// Turns waiting to be applied, one per tick, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits `candidate` unless it reverses the last queued turn, or `active` when nothing is
    /// queued. Returns whether the turn was queued; rejected turns are dropped.
    pub fn enqueue(&mut self, candidate: Direction, active: Direction) -> bool {
        let reference = self.pending.back().copied().unwrap_or(active);
        if candidate.is_opposite(&reference) {
            return false;
        }
        self.pending.push_back(candidate);
        true
    }

    pub fn dequeue(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Direction> {
        self.pending.iter()
    }
}
