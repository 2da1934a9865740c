//! Habit id generation
//!
//! Ids are time-shaped (milliseconds since the Unix epoch) so they stay
//! comparable with ids written by the legacy page, but each id is at least one
//! greater than the previous one. Two habits created within the same clock
//! tick therefore still get distinct ids.

use std::fmt::Debug;
use std::sync::Arc;

use super::habit::HabitId;

/// Millisecond time source
pub trait Clock: Debug + Send + Sync {
    fn now_millis(&self) -> u64;
}

/// Wall clock (`Date.now()` on wasm32 via chrono's wasmbind)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// Strictly increasing id source
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: HabitId,
    clock: Arc<dyn Clock>,
}

impl IdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { last: 0, clock }
    }

    /// Make sure every future id is greater than `id`
    pub fn observe(&mut self, id: HabitId) {
        self.last = self.last.max(id);
    }

    /// Issue the next id: `max(last + 1, now)`
    ///
    /// `None` once an id of `u64::MAX` has been issued or observed.
    pub fn next_id(&mut self) -> Option<HabitId> {
        let id = self.last.checked_add(1)?.max(self.clock.now_millis());
        self.last = id;
        Some(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
