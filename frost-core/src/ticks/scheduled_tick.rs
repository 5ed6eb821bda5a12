//! Scheduled tick types.

use std::cmp::Ordering;

use frost_utils::BlockPos;

/// A tick requested for a block at some future game tick.
#[derive(Debug, Clone)]
pub struct ScheduledTick<T> {
    /// The type being ticked.
    pub tick_type: T,
    /// The position of the block.
    pub pos: BlockPos,
    /// The absolute game tick when this should fire.
    pub trigger_tick: u64,
    /// Order among ticks sharing a trigger tick. Lower values run first.
    pub sub_tick_order: u64,
}

impl<T> ScheduledTick<T> {
    /// Creates a new scheduled tick.
    pub fn new(tick_type: T, pos: BlockPos, trigger_tick: u64, sub_tick_order: u64) -> Self {
        Self {
            tick_type,
            pos,
            trigger_tick,
            sub_tick_order,
        }
    }
}

impl<T> PartialEq for ScheduledTick<T> {
    fn eq(&self, other: &Self) -> bool {
        self.trigger_tick == other.trigger_tick && self.sub_tick_order == other.sub_tick_order
    }
}

impl<T> Eq for ScheduledTick<T> {}

impl<T> PartialOrd for ScheduledTick<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTick<T> {
    /// `BinaryHeap` is a max-heap, so earlier ticks compare greater.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .trigger_tick
            .cmp(&self.trigger_tick)
            .then_with(|| other.sub_tick_order.cmp(&self.sub_tick_order))
    }
}

/// Key for deduplication in the tick set.
///
/// Only considers position and type - ignores timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickKey<T> {
    /// The position of the block.
    pub pos: BlockPos,
    /// The type being ticked.
    pub tick_type: T,
}

impl<T: Copy> From<&ScheduledTick<T>> for TickKey<T> {
    fn from(tick: &ScheduledTick<T>) -> Self {
        Self {
            pos: tick.pos,
            tick_type: tick.tick_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_ordering() {
        let pos = BlockPos::new(0, 0, 0);

        let early = ScheduledTick::new(1u16, pos, 100, 0);
        let late = ScheduledTick::new(1u16, pos, 200, 0);
        assert!(early > late);

        let first = ScheduledTick::new(1u16, pos, 100, 1);
        let second = ScheduledTick::new(1u16, pos, 100, 5);
        assert!(first > second);
    }
}
