//! Chinese lunisolar month and day names from a packed per-year table.
//!
//! Covers lunar years 1900 through 2100, i.e. Gregorian 1900-01-31 up to
//! 2101-01-28. Lunar 1900-01-01 falls on the same day as the day-pillar
//! anchor, so day counts are shared with [`days_from_anchor`].

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;

use crate::calculator::days_from_anchor;
use crate::error::LunarError;
use crate::lunar::{LunarCalendar, LunarMonthDay};

const FIRST_YEAR: i32 = 1900;

/// One entry per lunar year from 1900.
///
/// Bits 0-3: leap month number, 0 when there is none.
/// Bits 4-15: months 12 down to 1, set for a 30-day month.
/// Bit 16: set when the leap month has 30 days.
const YEAR_TABLE: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "臘",
];
const DAY_TENS: [&str; 3] = ["初", "十", "廿"];
const DAY_UNITS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

lazy_static! {
    /// Day offset of each lunar New Year from 1900-01-31, plus one past the last year.
    static ref NEW_YEAR_OFFSETS: Vec<i64> = {
        let mut offsets = Vec::with_capacity(YEAR_TABLE.len() + 1);
        let mut offset = 0;
        offsets.push(offset);
        for &info in YEAR_TABLE.iter() {
            offset += year_length(info);
            offsets.push(offset);
        }
        offsets
    };
}

fn leap_month(info: u32) -> u32 {
    info & 0xf
}

fn month_length(info: u32, month: u32) -> i64 {
    if info & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn leap_length(info: u32) -> i64 {
    match (leap_month(info), info & 0x10000 != 0) {
        (0, _) => 0,
        (_, true) => 30,
        (_, false) => 29,
    }
}

fn year_length(info: u32) -> i64 {
    (1..=12).map(|m| month_length(info, m)).sum::<i64>() + leap_length(info)
}

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub leap: bool,
    pub day: u32,
}

impl LunarDate {
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, LunarError> {
        let days = days_from_anchor(date);
        let offsets = &*NEW_YEAR_OFFSETS;
        let end = offsets[offsets.len() - 1];
        if days < 0 || days >= end {
            return Err(LunarError::OutOfRange(date));
        }

        // Index of the last New Year on or before `days`.
        let index = offsets.partition_point(|&start| start <= days) - 1;
        let info = YEAR_TABLE[index];
        let mut remaining = days - offsets[index];

        let leap = leap_month(info);
        for month in 1..=12 {
            let length = month_length(info, month);
            if remaining < length {
                return Ok(Self::new(index, month, false, remaining));
            }
            remaining -= length;

            if month == leap {
                let length = leap_length(info);
                if remaining < length {
                    return Ok(Self::new(index, month, true, remaining));
                }
                remaining -= length;
            }
        }
        Err(LunarError::Format(format!(
            "{} runs past the end of lunar year {}",
            date,
            FIRST_YEAR + index as i32
        )))
    }

    fn new(year_index: usize, month: u32, leap: bool, day_offset: i64) -> Self {
        Self {
            year: FIRST_YEAR + year_index as i32,
            month,
            leap,
            day: day_offset as u32 + 1,
        }
    }

    /// `正月`, `閏二月`, `冬月`, `臘月`.
    pub fn month_name(&self) -> String {
        let prefix = if self.leap { "閏" } else { "" };
        format!("{}{}月", prefix, MONTH_NAMES[(self.month - 1) as usize])
    }

    /// `初一` .. `初十`, `十一` .. `十九`, `二十`, `廿一` .. `廿九`, `三十`.
    pub fn day_name(&self) -> String {
        match self.day {
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => {
                let i = (d - 1) as usize;
                format!("{}{}", DAY_TENS[i / 10], DAY_UNITS[i % 10])
            }
        }
    }
}

/// Table-driven Chinese calendar for the live view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseLunarCalendar;

impl LunarCalendar for ChineseLunarCalendar {
    fn month_day(&self, at: NaiveDateTime) -> Result<LunarMonthDay, LunarError> {
        let date = LunarDate::from_gregorian(at.date())?;
        Ok(LunarMonthDay {
            month: date.month_name(),
            day: date.day_name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::lunar::lunar_text;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lunar(y: i32, m: u32, d: u32) -> LunarDate {
        LunarDate::from_gregorian(date(y, m, d)).unwrap()
    }

    #[test]
    fn test_new_years() {
        for (y, m, d) in [
            (1900, 1, 31),
            (1950, 2, 17),
            (1980, 2, 16),
            (2000, 2, 5),
            (2020, 1, 25),
            (2024, 2, 10),
            (2050, 1, 23),
            (2100, 2, 9),
        ] {
            let new_year = lunar(y, m, d);
            assert_eq!((new_year.year, new_year.month, new_year.day), (y, 1, 1), "{y}");
            assert!(!new_year.leap);
        }
    }

    #[test]
    fn test_day_before_new_year_is_last_month() {
        let eve = lunar(2024, 2, 9);
        assert_eq!((eve.year, eve.month, eve.day), (2023, 12, 30));
        assert_eq!(eve.month_name(), "臘月");
        assert_eq!(eve.day_name(), "三十");
    }

    #[test]
    fn test_leap_months() {
        let leap = lunar(2023, 3, 22);
        assert_eq!((leap.month, leap.leap, leap.day), (2, true, 1));
        assert_eq!(leap.month_name(), "閏二月");
        let after = lunar(2023, 4, 20);
        assert_eq!((after.month, after.leap, after.day), (3, false, 1));

        let winter = lunar(2033, 12, 22);
        assert_eq!(winter.month_name(), "閏冬月");
    }

    #[test]
    fn test_day_names() {
        let names: Vec<String> = [1, 10, 11, 20, 21, 29, 30]
            .iter()
            .map(|&day| {
                LunarDate {
                    year: 2024,
                    month: 1,
                    leap: false,
                    day,
                }
                .day_name()
            })
            .collect();
        assert_eq!(names, ["初一", "初十", "十一", "二十", "廿一", "廿九", "三十"]);
    }

    #[test]
    fn test_outside_table_is_an_error() {
        assert_eq!(
            LunarDate::from_gregorian(date(1900, 1, 30)),
            Err(LunarError::OutOfRange(date(1900, 1, 30)))
        );
        assert!(LunarDate::from_gregorian(date(2101, 1, 28)).is_ok());
        assert!(LunarDate::from_gregorian(date(2101, 1, 29)).is_err());
    }

    #[test]
    fn test_live_text_through_table_calendar() {
        let at = date(2024, 2, 14).and_hms_opt(8, 5, 0).unwrap();
        assert_eq!(
            lunar_text(&ChineseLunarCalendar, at, &compute(at)),
            "農曆：甲辰年正月初五"
        );
    }
}
