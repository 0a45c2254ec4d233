//! Human-readable duration strings
//!
//! ```
//! use luckperms_config::duration::parse_duration;
//! use std::time::Duration;
//!
//! assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5_400));
//! assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
//! assert!(parse_duration("soon").is_err());
//! ```

pub mod grammar;
pub mod parser;
pub mod units;

pub use grammar::CompiledGrammar;
pub use parser::parse_duration;
pub use units::{Recognizer, TimeUnit, UNITS};
