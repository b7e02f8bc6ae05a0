//! Wall-clock access behind a trait so the interpreter can be tested with a
//! fixed time.

use crate::config::CAREER_START;
use crate::i18n::Language;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::cell::Cell;

const MS_PER_DAY: f64 = 86_400_000.0;

pub trait TimeSource {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;

    /// Minutes to add to local time to get UTC, as `Date.getTimezoneOffset`
    /// reports it.
    fn utc_offset_minutes(&self) -> i32 {
        0
    }
}

/// Reads the browser's `Date`. Only usable on wasm32.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

impl TimeSource for BrowserClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn utc_offset_minutes(&self) -> i32 {
        js_sys::Date::new_0().get_timezone_offset() as i32
    }
}

#[derive(Debug)]
pub struct FixedClock {
    now: Cell<f64>,
    offset: i32,
}

impl FixedClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            now: Cell::new(now_ms),
            offset: 0,
        }
    }

    pub fn with_offset(now_ms: f64, offset_minutes: i32) -> Self {
        Self {
            now: Cell::new(now_ms),
            offset: offset_minutes,
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl TimeSource for FixedClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn utc_offset_minutes(&self) -> i32 {
        self.offset
    }
}

/// Locale-style timestamp: en-US `M/D/YYYY, h:mm:ss AM`, pt-BR
/// `DD/MM/YYYY, HH:mm:ss`.
pub fn format_date(now_ms: f64, utc_offset_minutes: i32, lang: Language) -> String {
    let Some(utc) = DateTime::<Utc>::from_timestamp_millis(now_ms as i64) else {
        return String::new();
    };
    let tz = FixedOffset::west_opt(utc_offset_minutes * 60)
        .or_else(|| FixedOffset::east_opt(0));
    let pattern = match lang {
        Language::En => "%-m/%-d/%Y, %-I:%M:%S %p",
        Language::Pt => "%d/%m/%Y, %H:%M:%S",
    };
    match tz {
        Some(tz) => utc.with_timezone(&tz).format(pattern).to_string(),
        None => utc.format(pattern).to_string(),
    }
}

fn career_start_ms() -> f64 {
    let (y, m, d) = CAREER_START;
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
        .unwrap_or_default()
}

/// Whole days since the career start date. Never negative.
pub fn uptime_days(now_ms: f64) -> u64 {
    let elapsed = (now_ms - career_start_ms()) / MS_PER_DAY;
    if elapsed <= 0.0 {
        0
    } else {
        elapsed.floor() as u64
    }
}

pub fn uptime_years(days: u64) -> u64 {
    days / 365
}
