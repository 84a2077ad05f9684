//! Parsing and formatting helpers for dates and metrics shown on the console.

use super::error::TaskError;
use super::messages::Message;
use chrono::{Days, Local, NaiveDate};

/// Parses a user-supplied date: `today`, `tomorrow` or `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate, TaskError> {
    let trimmed = input.trim();
    let today = Local::now().date_naive();

    match trimmed.to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today
            .checked_add_days(Days::new(1))
            .ok_or_else(|| TaskError::Validation(Message::InvalidDate(input.to_string()))),
        _ => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| TaskError::Validation(Message::InvalidDate(input.to_string()))),
    }
}

/// Like [`parse_date`], with an empty input meaning "no date".
pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, TaskError> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

pub fn format_due_date(due_date: Option<NaiveDate>, date_format: &str) -> String {
    match due_date {
        Some(date) => date.format(date_format).to_string(),
        None => "-".to_string(),
    }
}

/// Percentage with two decimals, e.g. `66.67%`.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}%", rate)
}
