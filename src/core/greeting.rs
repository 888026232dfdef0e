use chrono::{Datelike, Local, Timelike};

/// Map an hour of day to a greeting label
///
/// Boundaries are exact: [0,5) and [22,24) are night, [5,12) morning,
/// [12,18) afternoon, [18,22) evening. Out-of-range hours fall back to
/// the night label.
#[inline]
pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=4 => "Good night",
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        18..=21 => "Good evening",
        _ => "Good night",
    }
}

/// Greeting for the current local hour
pub fn current_greeting() -> &'static str {
    greeting(Local::now().hour())
}

/// Current calendar year, for the year display slot
pub fn current_year() -> i32 {
    Local::now().year()
}
