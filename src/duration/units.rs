//! The ordered table of time units understood by the duration grammar
//!
//! Each [`TimeUnit`] pairs the way it is recognized in text with the amount of
//! time a single unit contributes. The grammar is compiled from this table and
//! the parser reduces matches by walking the same table, so the two can never
//! disagree about which component is which.

use std::time::Duration;

/// Seconds in an estimated year (365.2425 days)
const SECONDS_PER_YEAR: u64 = 31_556_952;

/// How a unit is spelled inside a duration string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    /// Quantity followed by an abbreviation, any further lowercase letters and an
    /// optional comma/whitespace separator, e.g. `3d`, `3 days,`
    Abbreviated(&'static str),
    /// Bare quantity with an optional `s`-led suffix, e.g. `45`, `45s`, `45 sec`
    Bare,
}

/// A single component of the duration grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUnit {
    name: &'static str,
    recognizer: Recognizer,
    seconds: u64,
}

impl TimeUnit {
    const fn new(name: &'static str, recognizer: Recognizer, seconds: u64) -> Self {
        Self { name, recognizer, seconds }
    }

    /// Lowercase plural unit name, also used as the capture group name
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn recognizer(&self) -> Recognizer {
        self.recognizer
    }

    /// The abbreviation this unit is recognized by, if it requires one
    pub fn abbreviation(&self) -> Option<&'static str> {
        match self.recognizer {
            Recognizer::Abbreviated(abbreviation) => Some(abbreviation),
            Recognizer::Bare => None,
        }
    }

    /// Length of a single unit
    pub fn unit_duration(&self) -> Duration {
        Duration::from_secs(self.seconds)
    }

    /// Seconds contributed by `quantity` of this unit.
    ///
    /// The largest unit times `u32::MAX` stays far below `u64::MAX`, so even the
    /// sum over every unit cannot overflow.
    pub fn contribution_secs(&self, quantity: u32) -> u64 {
        u64::from(quantity) * self.seconds
    }
}

/// Every unit in descending order of magnitude.
///
/// Months use the literal `mo` so that a lone `m` always means minutes; months
/// are still tried before minutes.
pub const UNITS: [TimeUnit; 7] = [
    TimeUnit::new("years", Recognizer::Abbreviated("y"), SECONDS_PER_YEAR),
    TimeUnit::new("months", Recognizer::Abbreviated("mo"), SECONDS_PER_YEAR / 12),
    TimeUnit::new("weeks", Recognizer::Abbreviated("w"), 7 * 86_400),
    TimeUnit::new("days", Recognizer::Abbreviated("d"), 86_400),
    TimeUnit::new("hours", Recognizer::Abbreviated("h"), 3_600),
    TimeUnit::new("minutes", Recognizer::Abbreviated("m"), 60),
    TimeUnit::new("seconds", Recognizer::Bare, 1),
];
