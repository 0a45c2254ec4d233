//! Compilation of the duration grammar

use super::units::{Recognizer, TimeUnit, UNITS};
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// Immutable, case-insensitive matcher for duration strings.
///
/// Every unit in [`UNITS`] contributes one optional group, captured under the
/// unit's name.
#[derive(Debug, Clone)]
pub struct CompiledGrammar {
    regex: Regex,
}

impl CompiledGrammar {
    /// Build the grammar from the unit table
    pub fn compile() -> Self {
        let pattern = pattern_for(&UNITS);
        // ASCII-only character classes; the pattern is fixed, so this cannot fail
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .expect("duration grammar is a valid regex");

        Self { regex }
    }

    /// The process-wide grammar, built on first use
    pub fn shared() -> &'static CompiledGrammar {
        static GRAMMAR: OnceLock<CompiledGrammar> = OnceLock::new();
        GRAMMAR.get_or_init(Self::compile)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Pattern text for a unit list
pub fn pattern_for(units: &[TimeUnit]) -> String {
    units.iter().map(fragment).collect()
}

fn fragment(unit: &TimeUnit) -> String {
    let name = unit.name();
    match unit.recognizer() {
        Recognizer::Abbreviated(abbreviation) => {
            let abbreviation = regex::escape(abbreviation);
            format!(r"(?:(?P<{name}>[0-9]+)\s*{abbreviation}[a-z]*[,\s]*)?")
        }
        Recognizer::Bare => format!(r"(?:(?P<{name}>[0-9]+)\s*(?:s[a-z]*)?)?"),
    }
}
