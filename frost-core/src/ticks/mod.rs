//! Scheduled block ticks.
//!
//! Decoration runs before a chunk is live, so ticks requested during world
//! generation are only recorded on the chunk and fire once the chunk is
//! promoted and the level starts ticking it.
//!
//! - [`ScheduledTick`] - A single scheduled tick entry
//! - [`LevelChunkTicks`] - Per-chunk tick storage with deduplication

mod chunk_ticks;
mod scheduled_tick;

pub use chunk_ticks::LevelChunkTicks;
pub use scheduled_tick::{ScheduledTick, TickKey};
