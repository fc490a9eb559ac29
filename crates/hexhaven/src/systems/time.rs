//! # Time System
//!
//! Converts wall-clock time into game ticks with a fixed accumulator. One
//! tick advances the calendar by one in-game hour; leftover fractions of a
//! tick carry over to the next update, so long frames never lose time.

use hexhaven_core::World;

/// Fixed-step accumulator driving the in-game calendar.
pub struct TimeSystem {
    tick_seconds: f64,
    fractional: f64,
}

impl TimeSystem {
    /// Creates a time system that ticks every `tick_seconds` of wall time.
    ///
    /// # Panics
    ///
    /// Panics if `tick_seconds` is not strictly positive.
    #[must_use]
    pub fn new(tick_seconds: f64) -> Self {
        assert!(tick_seconds > 0.0, "tick length must be positive");
        Self {
            tick_seconds,
            fractional: 0.0,
        }
    }

    /// Accumulates `elapsed_seconds` and advances the world calendar one
    /// hour per full tick. Returns how many hours were advanced.
    pub fn advance(&mut self, world: &mut World, elapsed_seconds: f64) -> u64 {
        self.fractional += elapsed_seconds;

        let mut hours = 0;
        while self.fractional >= self.tick_seconds {
            self.fractional -= self.tick_seconds;
            hours += 1;
        }

        if hours > 0 {
            world.calendar.advance_hours(hours);
        }
        hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests use binary fractions (0.25, 0.125) so the accumulator math
    // stays exact.

    #[test]
    fn test_sub_tick_updates_accumulate() {
        let mut world = World::new(2, 2, 2);
        let mut time = TimeSystem::new(0.25);

        assert_eq!(time.advance(&mut world, 0.125), 0);
        assert_eq!(world.calendar.total_hours(), 0);
        // The second half completes the tick.
        assert_eq!(time.advance(&mut world, 0.125), 1);
        assert_eq!(world.calendar.total_hours(), 1);
    }

    #[test]
    fn test_long_frame_produces_multiple_hours() {
        let mut world = World::new(2, 2, 2);
        let mut time = TimeSystem::new(0.25);

        assert_eq!(time.advance(&mut world, 1.125), 4);
        assert_eq!(world.calendar.total_hours(), 4);
        // 0.125 left over; another 0.125 completes the fifth tick.
        assert_eq!(time.advance(&mut world, 0.125), 1);
    }
}
