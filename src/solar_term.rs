//! Start of the solar year.
//!
//! The pillar year and the Tiger month both begin at the spring cutover
//! (lichun). It is approximated by a fixed day in February; a real
//! solar-longitude computation can replace it behind [`SpringCutover`].

/// Decides whether a Gregorian date falls before the spring cutover of its year.
pub trait SpringCutover {
    /// Day of February on which the cutover falls in `year`.
    fn cutover_day(&self, year: i32) -> u32;

    fn is_before_spring_cutover(&self, year: i32, month: u32, day: u32) -> bool {
        month < 2 || (month == 2 && day < self.cutover_day(year))
    }
}

/// Cutover on the same day of February every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSpringCutover {
    pub day: u32,
}

pub const DEFAULT_CUTOVER_DAY: u32 = 4;

impl Default for FixedSpringCutover {
    fn default() -> Self {
        Self {
            day: DEFAULT_CUTOVER_DAY,
        }
    }
}

impl SpringCutover for FixedSpringCutover {
    fn cutover_day(&self, _year: i32) -> u32 {
        self.day
    }
}
