//! # In-Game Calendar
//!
//! Hour-granularity game time. The simulation advances the calendar one hour
//! per game tick; agent ages are derived from the difference between the
//! current date and a stored birthday.
//!
//! A year is a flat 365 days. Close enough for lifecycle stages; nothing in
//! the simulation cares about leap years.

/// Hours in one in-game day.
pub const HOURS_PER_DAY: u64 = 24;

/// Days in one in-game year.
pub const DAYS_PER_YEAR: u64 = 365;

/// A point in game time, counted in hours since the world epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Calendar {
    hours: u64,
}

impl Calendar {
    /// The world epoch (hour zero).
    pub const EPOCH: Self = Self { hours: 0 };

    /// Creates a date a whole number of years after the epoch.
    #[inline]
    #[must_use]
    pub const fn from_years(years: u64) -> Self {
        Self {
            hours: years * DAYS_PER_YEAR * HOURS_PER_DAY,
        }
    }

    /// Creates a date from a raw hour count.
    #[inline]
    #[must_use]
    pub const fn from_hours(hours: u64) -> Self {
        Self { hours }
    }

    /// Total hours since the epoch.
    #[inline]
    #[must_use]
    pub const fn total_hours(self) -> u64 {
        self.hours
    }

    /// Total whole days since the epoch.
    #[inline]
    #[must_use]
    pub const fn total_days(self) -> u64 {
        self.hours / HOURS_PER_DAY
    }

    /// Total whole years since the epoch.
    #[inline]
    #[must_use]
    pub const fn total_years(self) -> u64 {
        self.total_days() / DAYS_PER_YEAR
    }

    /// Advances the date by `hours`.
    #[inline]
    pub fn advance_hours(&mut self, hours: u64) {
        self.hours += hours;
    }

    /// Whole years elapsed since `earlier`.
    ///
    /// Saturates at zero if `earlier` is in the future.
    #[inline]
    #[must_use]
    pub const fn years_since(self, earlier: Self) -> u64 {
        self.hours.saturating_sub(earlier.hours) / (DAYS_PER_YEAR * HOURS_PER_DAY)
    }
}
