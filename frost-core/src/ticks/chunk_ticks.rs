//! Per-chunk scheduled tick storage.

use std::collections::BinaryHeap;
use std::hash::Hash;

use frost_utils::BlockPos;
use rustc_hash::FxHashSet;

use super::{ScheduledTick, TickKey};

/// Per-chunk storage for scheduled ticks.
///
/// When a tick is scheduled for a position that already has a pending tick
/// of the same type, the new tick is ignored and the existing one keeps its
/// timing.
#[derive(Debug, Clone)]
pub struct LevelChunkTicks<T: Copy + Eq + Hash> {
    /// Priority queue of scheduled ticks, ordered by trigger time.
    tick_queue: BinaryHeap<ScheduledTick<T>>,
    /// Set of (pos, type) pairs for deduplication.
    ticks_per_position: FxHashSet<TickKey<T>>,
}

impl<T: Copy + Eq + Hash> LevelChunkTicks<T> {
    /// Creates a new empty chunk tick container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_queue: BinaryHeap::new(),
            ticks_per_position: FxHashSet::default(),
        }
    }

    /// Schedules a tick if one isn't already scheduled for this (pos, type).
    ///
    /// Returns `true` if the tick was scheduled, `false` if one already exists.
    pub fn schedule(&mut self, tick: ScheduledTick<T>) -> bool {
        if self.ticks_per_position.insert(TickKey::from(&tick)) {
            self.tick_queue.push(tick);
            true
        } else {
            false
        }
    }

    /// Returns the next tick to fire, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&ScheduledTick<T>> {
        self.tick_queue.peek()
    }

    /// Removes and returns the next tick to fire.
    pub fn poll(&mut self) -> Option<ScheduledTick<T>> {
        let tick = self.tick_queue.pop()?;
        self.ticks_per_position.remove(&TickKey::from(&tick));
        Some(tick)
    }

    /// Checks if a tick is scheduled for the given position and type.
    #[must_use]
    pub fn has_scheduled_tick(&self, pos: BlockPos, tick_type: T) -> bool {
        self.ticks_per_position
            .contains(&TickKey { pos, tick_type })
    }

    /// Returns the number of scheduled ticks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tick_queue.len()
    }

    /// Returns `true` if there are no scheduled ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tick_queue.is_empty()
    }

    /// Iterates over the scheduled ticks in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTick<T>> {
        self.tick_queue.iter()
    }
}

impl<T: Copy + Eq + Hash> Default for LevelChunkTicks<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_poll() {
        let mut ticks: LevelChunkTicks<u16> = LevelChunkTicks::new();
        let pos = BlockPos::new(10, 64, 20);

        assert!(ticks.schedule(ScheduledTick::new(1, pos, 100, 0)));
        assert_eq!(ticks.count(), 1);
        assert!(ticks.has_scheduled_tick(pos, 1));

        // Same pos and type again keeps the original timing.
        assert!(!ticks.schedule(ScheduledTick::new(1, pos, 200, 1)));
        assert_eq!(ticks.count(), 1);

        // A different type at the same position is its own tick.
        assert!(ticks.schedule(ScheduledTick::new(2, pos, 50, 2)));

        assert_eq!(ticks.poll().expect("first").trigger_tick, 50);
        assert_eq!(ticks.poll().expect("second").trigger_tick, 100);
        assert!(ticks.is_empty());
        assert!(!ticks.has_scheduled_tick(pos, 1));

        assert!(ticks.schedule(ScheduledTick::new(1, pos, 300, 3)));
    }

    #[test]
    fn test_same_trigger_tick_keeps_schedule_order() {
        let mut ticks: LevelChunkTicks<u16> = LevelChunkTicks::new();
        for (order, x) in [(2, 2), (0, 0), (1, 1)] {
            ticks.schedule(ScheduledTick::new(7, BlockPos::new(x, 0, 0), 10, order));
        }
        let xs: Vec<i32> = std::iter::from_fn(|| ticks.poll()).map(|t| t.pos.x()).collect();
        assert_eq!(xs, vec![0, 1, 2]);
    }
}
