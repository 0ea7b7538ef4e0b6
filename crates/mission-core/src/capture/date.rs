//! Due-date phrase extraction for quick capture.
//!
//! Phrases are checked in fixed precedence: "tomorrow", "today",
//! "next week", then an explicit `D/M` or `D-M` date with optional year.
//! The first match wins and its text is removed from the working string;
//! an explicit date is only honored (and removed) when it lands strictly
//! after the reference date.

use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static TOMORROW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btomorrow\b").unwrap());
static TODAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\btoday\b").unwrap());
static NEXT_WEEK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bnext\s+week\b").unwrap());
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})(?:[/-](\d{2,4}))?\b").unwrap());

/// Resolve a due date from free text against `today`. Returns the date (if
/// any) and the text with the matched phrase removed.
pub(crate) fn extract_due_date(text: &str, today: NaiveDate) -> (Option<NaiveDate>, String) {
    if TOMORROW_RE.is_match(text) {
        let cleaned = TOMORROW_RE.replace_all(text, "").into_owned();
        return (Some(today + Duration::days(1)), cleaned);
    }
    if TODAY_RE.is_match(text) {
        let cleaned = TODAY_RE.replace_all(text, "").into_owned();
        return (Some(today), cleaned);
    }
    if NEXT_WEEK_RE.is_match(text) {
        let cleaned = NEXT_WEEK_RE.replace_all(text, "").into_owned();
        return (Some(today + Duration::days(7)), cleaned);
    }

    if let Some(caps) = DATE_RE.captures(text) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = match caps.get(3) {
            Some(m) if m.len() == 2 => 2000 + m.as_str().parse::<i32>().unwrap_or(0),
            Some(m) => m.as_str().parse().unwrap_or(today.year()),
            None => today.year(),
        };

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            if date > today {
                let cleaned = text.replacen(&caps[0], "", 1);
                return (Some(date), cleaned);
            }
        }
        // A past or invalid explicit date leaves the text untouched
    }

    (None, text.to_string())
}
