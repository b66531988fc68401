//! Gregorian date-time to Four Pillars.
//!
//! Every rule is modular arithmetic over the 10-stem and 12-branch cycles:
//!
//! * year: `(y - 4)` where `y` is the calendar year, minus one before the
//!   spring cutover; year 4 is the first position of both cycles.
//! * month: branch from the calendar month (month 1 stays on Chou, month 2
//!   moves to Yin on the cutover day), stem from the "five tigers" base of
//!   the year stem.
//! * day: linear count of calendar days from 1900-01-31, a Jia-Chen day.
//! * hour: two-hour branches starting at 23:00, stem from the "five rats"
//!   base of the day stem.
//!
//! Dates before 1900 are computed with the same recurrences and are not
//! checked against any historical almanac.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::config::SymbolStyle;
use crate::constellation::{constellation, Constellation};
use crate::cycle::{normalize_mod, Branch, Pillar, ZodiacAnimal, BRANCH_COUNT, STEM_COUNT};
use crate::element::{tally, ElementTally};
use crate::solar_term::{FixedSpringCutover, SpringCutover};

/// 1900-01-31, the day defined as stem 0 / branch 4.
pub const DAY_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 31) {
    Some(date) => date,
    None => panic!("1900-01-31 is a valid date"),
};
const DAY_ANCHOR_BRANCH: i64 = 4;
const CYCLE_ORIGIN_YEAR: i64 = 4;

/// The four pillars of one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Chart {
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The eight stem and branch symbols, year first.
    pub fn symbols(&self) -> [char; 8] {
        let [y, m, d, h] = self.pillars();
        [
            y.stem.hanzi(),
            y.branch.hanzi(),
            m.stem.hanzi(),
            m.branch.hanzi(),
            d.stem.hanzi(),
            d.branch.hanzi(),
            h.stem.hanzi(),
            h.branch.hanzi(),
        ]
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Coarse lunar label: the pillar year with the unchanged calendar month and day.
/// Not a lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarLabel {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LunarLabel {
    pub fn year_text(&self) -> String {
        format!("{}年", self.year)
    }

    pub fn date_text(&self) -> String {
        format!("{}月{}日", self.month, self.day)
    }

    /// Pillar year plus calendar month/day, e.g. `2023年 1月15日` or `2023/1/15`.
    pub fn label(&self, style: SymbolStyle) -> String {
        match style {
            SymbolStyle::Hanzi => self.to_string(),
            SymbolStyle::Pinyin => format!("{}/{}/{}", self.year, self.month, self.day),
        }
    }
}

impl fmt::Display for LunarLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year_text(), self.date_text())
    }
}

/// Everything derived from one date-time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub at: NaiveDateTime,
    pub chart: Chart,
    pub elements: ElementTally,
    pub zodiac: ZodiacAnimal,
    pub constellation: Constellation,
    pub lunar: LunarLabel,
}

#[derive(Debug, Clone)]
pub struct PillarCalculator<C = FixedSpringCutover> {
    cutover: C,
}

impl Default for PillarCalculator {
    fn default() -> Self {
        Self::new(FixedSpringCutover::default())
    }
}

impl<C: SpringCutover> PillarCalculator<C> {
    pub fn new(cutover: C) -> Self {
        Self { cutover }
    }

    pub fn cutover(&self) -> &C {
        &self.cutover
    }

    /// Calendar year shifted back by one before the spring cutover.
    pub fn pillar_year(&self, year: i32, month: u32, day: u32) -> i32 {
        if self.cutover.is_before_spring_cutover(year, month, day) {
            year - 1
        } else {
            year
        }
    }

    pub fn compute(&self, at: NaiveDateTime) -> Chart {
        let (year, month, day) = (at.year(), at.month(), at.day());

        let pillar_year = self.pillar_year(year, month, day) as i64;
        let year_stem = normalize_mod(pillar_year - CYCLE_ORIGIN_YEAR, STEM_COUNT);
        let year_branch = normalize_mod(pillar_year - CYCLE_ORIGIN_YEAR, BRANCH_COUNT);

        let month_branch = self.month_branch_index(year, month, day);
        let month_stem_base = ((year_stem % 5) * 2 + 2) % STEM_COUNT;
        let month_stem =
            (month_stem_base + normalize_mod(month_branch - 2, BRANCH_COUNT)) % STEM_COUNT;

        let days = days_from_anchor(at.date());
        let day_stem = normalize_mod(days, STEM_COUNT);
        let day_branch = normalize_mod(days + DAY_ANCHOR_BRANCH, BRANCH_COUNT);

        let hour_branch = hour_branch_index(at.hour());
        let hour_stem = ((day_stem % 5) * 2 + hour_branch) % STEM_COUNT;

        Chart {
            year: Pillar::from_indices(year_stem, year_branch),
            month: Pillar::from_indices(month_stem, month_branch),
            day: Pillar::from_indices(day_stem, day_branch),
            hour: Pillar::from_indices(hour_stem, hour_branch),
        }
    }

    pub fn profile(&self, at: NaiveDateTime) -> Profile {
        let chart = self.compute(at);
        let (month, day) = (at.month(), at.day());
        let pillar_year = self.pillar_year(at.year(), month, day);
        Profile {
            at,
            chart,
            elements: tally(&chart),
            zodiac: ZodiacAnimal::from_index(pillar_year as i64 - CYCLE_ORIGIN_YEAR),
            constellation: constellation(month, day),
            lunar: LunarLabel {
                year: pillar_year,
                month,
                day,
            },
        }
    }

    /// Branch index of the month pillar, normalised into `[0, 12)`.
    pub fn month_branch_index(&self, year: i32, month: u32, day: u32) -> i64 {
        match month {
            // Still the previous cycle's Chou month.
            1 => Branch::Chou.index() as i64,
            2 if self.cutover.is_before_spring_cutover(year, month, day) => {
                Branch::Chou.index() as i64
            }
            2 => Branch::Yin.index() as i64,
            m => normalize_mod(m as i64, BRANCH_COUNT),
        }
    }
}

/// Whole calendar days from 1900-01-31 to `date`, negative before it.
pub fn days_from_anchor(date: NaiveDate) -> i64 {
    date.signed_duration_since(DAY_ANCHOR).num_days()
}

/// Branch of the two-hour window containing `hour`; 23:00-00:59 is Zi.
pub fn hour_branch_index(hour: u32) -> i64 {
    ((hour as i64 + 1) / 2) % BRANCH_COUNT
}

/// Compute with the default fixed cutover.
pub fn compute(at: NaiveDateTime) -> Chart {
    PillarCalculator::default().compute(at)
}
