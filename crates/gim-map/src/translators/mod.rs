//! Built-in translators.
//!
//! - **identity**: pass the raw text through unchanged
//! - **case**: upper/lower case folding for text attributes
//! - **find_replace**: literal substring substitution
//! - **datetime**: reformat source datetimes to ISO 8601
//! - **dms**: degrees/minutes/seconds coordinates to decimal degrees

mod case;
mod datetime;
mod dms;
mod find_replace;
mod identity;

pub use case::{Lowercase, Uppercase};
pub use datetime::DatetimeFormat;
pub use dms::DegreesMinutesSeconds;
pub use find_replace::FindReplace;
pub use identity::Identity;
