//! Identity generation and calendar-day parsing.

use chrono::NaiveDate;
use rand::Rng;

/// Generate an entity identity: a human-readable prefix plus a random
/// four-digit suffix, e.g. `OPP-4821`.
///
/// Readable, not unique. Collisions are practically avoided, not prevented;
/// these ids must never carry security or strict-uniqueness weight.
pub fn entity_id(prefix: &str) -> String {
    let suffix: u32 = rand::rng().random_range(1000..10000);
    format!("{}-{}", prefix, suffix)
}

/// Extract the calendar day from a date string.
///
/// Accepts bare `YYYY-MM-DD` as well as timestamps like
/// `2024-06-15T09:00:00`; everything from `T` onward is ignored. Returns
/// `None` for anything that does not parse — callers treat an unparseable
/// date as "never matches" rather than an error.
pub fn day_of(s: &str) -> Option<NaiveDate> {
    let day = s.trim().split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_has_prefix_and_numeric_suffix() {
        let id = entity_id("CUS");
        let (prefix, suffix) = id.split_once('-').unwrap();
        assert_eq!(prefix, "CUS");
        let n: u32 = suffix.parse().unwrap();
        assert!((1000..10000).contains(&n));
    }

    #[test]
    fn day_of_accepts_bare_dates_and_timestamps() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(day_of("2024-06-15"), Some(d));
        assert_eq!(day_of("2024-06-15T09:00:00"), Some(d));
        assert_eq!(day_of(" 2024-06-15T17:00 "), Some(d));
    }

    #[test]
    fn day_of_rejects_garbage() {
        assert_eq!(day_of(""), None);
        assert_eq!(day_of("next tuesday"), None);
        assert_eq!(day_of("2024-13-40"), None);
    }
}
