use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, PartialEq, Debug)]
pub enum DateFormat {
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    #[serde(rename = "MM-DD-YYYY")]
    MonthDayYear,
    #[serde(rename = "DD-MM-YYYY")]
    DayMonthYear,
    #[serde(rename = "MONTH DAY YYYY")]
    MonthNameDayYear,
    #[serde(rename = "DAY MONTH YYYY")]
    DayMonthNameYear,
}

#[derive(Deserialize, Copy, Clone, PartialEq, Debug)]
pub enum DateSeparator {
    #[serde(rename = ".")]
    Dot,
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "/")]
    Slash,
}

impl DateSeparator {
    pub fn as_char(&self) -> char {
        match self {
            DateSeparator::Dot => '.',
            DateSeparator::Dash => '-',
            DateSeparator::Slash => '/',
        }
    }
}

/// Renders a date for the post and project lists.
///
/// The separator only applies to the three numeric formats. The word-month
/// formats are always space separated, with the month name written in full.
pub fn format_date(date: &NaiveDate, format: DateFormat, separator: DateSeparator) -> String {
    let sep = separator.as_char();
    match format {
        DateFormat::YearMonthDay => {
            format!("{:04}{}{:02}{}{:02}", date.year(), sep, date.month(), sep, date.day())
        }
        DateFormat::MonthDayYear => {
            format!("{:02}{}{:02}{}{:04}", date.month(), sep, date.day(), sep, date.year())
        }
        DateFormat::DayMonthYear => {
            format!("{:02}{}{:02}{}{:04}", date.day(), sep, date.month(), sep, date.year())
        }
        DateFormat::MonthNameDayYear => date.format("%B %-d %Y").to_string(),
        DateFormat::DayMonthNameYear => date.format("%-d %B %Y").to_string(),
    }
}
