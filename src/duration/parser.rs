//! Parsing of human-authored duration strings

use super::grammar::CompiledGrammar;
use super::units::UNITS;
use crate::error::DurationParseError;
use regex::Captures;
use std::time::Duration;

/// Parse a duration such as `1y6mo2w3d`, `5 minutes, 30 seconds` or `45`.
///
/// The first non-empty grammar match in `input` is used; anything after it,
/// including a second duration, is ignored. Units add up without any
/// normalization, and bare digits count as seconds.
/// Each quantity must fit in an `i32`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let grammar = CompiledGrammar::shared();

    let captures = grammar
        .regex()
        .captures_iter(input)
        .find(|caps| caps.get(0).is_some_and(|m| !m.as_str().is_empty()))
        .ok_or_else(|| DurationParseError::invalid_format(input))?;

    reduce(input, &captures)
}

fn reduce(input: &str, captures: &Captures<'_>) -> Result<Duration, DurationParseError> {
    let mut total_secs: u64 = 0;

    for unit in &UNITS {
        let Some(quantity) = captures.name(unit.name()).map(|m| m.as_str()) else {
            continue;
        };
        if quantity.is_empty() {
            continue;
        }

        // quantities are capped at i32::MAX; the digit-only group is never negative
        let n: i32 = quantity.parse().map_err(|source| DurationParseError::QuantityOutOfRange {
            input: input.to_string(),
            quantity: quantity.to_string(),
            source,
        })?;
        total_secs += unit.contribution_secs(n.unsigned_abs());
    }

    Ok(Duration::from_secs(total_secs))
}
