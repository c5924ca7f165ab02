use chrono::{Local, NaiveDate};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for an `<input type="date">`.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
