//! Clock and Year Stamp

use chrono::{Datelike, Local, Timelike};

/// `HH:MM:SS`, zero-padded, 24-hour
pub fn format_clock<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

pub fn now_clock() -> String {
    format_clock(&Local::now())
}

pub fn current_year() -> i32 {
    Local::now().year()
}
