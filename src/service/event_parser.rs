use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::OnceLock;

use crate::models::schedule::ScheduleEntry;

const ADD_PATTERN: &str = r"(?:add|schedule) (.+?) on (\w+ \d+)(?: at ([\d:apm\s]+))?";

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEvent {
    Valid(ScheduleEntry),
    InvalidDate,
}

fn add_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ADD_PATTERN).expect("add pattern is a valid regex"))
}

/// Current year in `tz`, used when the user names only a month and day.
pub fn current_year(tz: Tz) -> i32 {
    Utc::now().with_timezone(&tz).year()
}

/// Recognizes "add <event> on <Month> <day> [at <time>]" (or "schedule ...").
/// Returns `None` when the text is not an add command at all.
pub fn parse_add_command(text: &str, year: i32) -> Option<ParsedEvent> {
    let lower = text.to_lowercase();
    let captures = add_pattern().captures(&lower)?;
    let event = captures.get(1)?.as_str();
    let date_text = captures.get(2)?.as_str();
    let time = captures.get(3).map(|m| m.as_str().trim());

    let Some(date) = parse_month_day(date_text, year) else {
        log::debug!("Rejected date text '{}'", date_text);
        return Some(ParsedEvent::InvalidDate);
    };

    let mut description = capitalize(event.trim());
    if let Some(time) = time {
        description.push_str(" at ");
        description.push_str(time);
    }

    Some(ParsedEvent::Valid(ScheduleEntry::new(
        date.format("%Y-%m-%d").to_string(),
        description,
    )))
}

// "july 9" -> 2026-07-09. Full month names, one or two digit days.
fn parse_month_day(text: &str, year: i32) -> Option<NaiveDate> {
    let (month, day) = text.split_once(' ')?;
    let month = MONTHS.iter().position(|m| m.eq_ignore_ascii_case(month))? as u32 + 1;
    if day.is_empty() || day.len() > 2 {
        return None;
    }
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
