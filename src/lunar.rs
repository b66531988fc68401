//! Lunar month/day text for the live view.
//!
//! Pillars never depend on this. The live view uses
//! [`ChineseLunarCalendar`](crate::lunisolar::ChineseLunarCalendar) through
//! [`LunarCalendar`]; when a calendar fails it shows a placeholder instead.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::calculator::Chart;
use crate::error::LunarError;

pub const LUNAR_PLACEHOLDER: &str = "農曆：(計算中)";

/// Month and day names as a locale calendar writes them, e.g. `正月` / `初五`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarMonthDay {
    pub month: String,
    pub day: String,
}

pub trait LunarCalendar: Send + Sync {
    fn month_day(&self, at: NaiveDateTime) -> Result<LunarMonthDay, LunarError>;
}

/// Used when the host offers no lunar calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLunarCalendar;

impl LunarCalendar for UnavailableLunarCalendar {
    fn month_day(&self, _at: NaiveDateTime) -> Result<LunarMonthDay, LunarError> {
        Err(LunarError::Unavailable)
    }
}

/// `農曆：<year pillar>年<month><day>`, or the placeholder when the calendar fails.
pub fn lunar_text(calendar: &dyn LunarCalendar, at: NaiveDateTime, chart: &Chart) -> String {
    match calendar.month_day(at) {
        Ok(md) => format!(
            "農曆：{}{}年{}{}",
            chart.year.stem.hanzi(),
            chart.year.branch.hanzi(),
            md.month,
            md.day
        ),
        Err(err) => {
            match err {
                LunarError::Unavailable | LunarError::OutOfRange(_) => {
                    debug!(%at, error = %err, "no lunar date, showing placeholder")
                }
                LunarError::Format(_) => {
                    warn!(%at, error = %err, "lunar calendar failed, showing placeholder")
                }
            }
            LUNAR_PLACEHOLDER.to_string()
        }
    }
}

/// `公曆：YYYY/MM/DD HH:MM`.
pub fn gregorian_text(at: NaiveDateTime) -> String {
    format!("公曆：{}", at.format("%Y/%m/%d %H:%M"))
}
