//! Four Pillars (year, month, day, hour stem-branch) charts from Gregorian
//! local date-times, with zodiac, constellation and element tallies.
//!
//! ```
//! use bazi_calendar::{compute, tally};
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let chart = compute(at);
//! assert_eq!(chart.to_string(), "甲辰 丙寅 戊戌 戊午");
//! assert_eq!(tally(&chart).total(), 8);
//! ```

pub mod analysis;
pub mod cache;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod constellation;
pub mod cycle;
pub mod element;
pub mod error;
pub mod hourly;
pub mod input;
pub mod live;
pub mod lunar;
pub mod lunisolar;
pub mod report;
pub mod solar_term;

pub use analysis::Analysis;
pub use cache::{CalendarCache, Metrics, ParallelChartCalculator};
pub use calculator::{compute, Chart, LunarLabel, PillarCalculator, Profile};
pub use clock::{FixedClock, SystemClock, TimeSource};
pub use config::{Config, SymbolStyle};
pub use constellation::{constellation, Constellation};
pub use cycle::{normalize_mod, Branch, Pillar, Stem, ZodiacAnimal};
pub use element::{tally, Element, ElementTally};
pub use error::{CalendarError, ConfigError, LunarError};
pub use hourly::{hourly_pillars, HourSlot};
pub use input::parse_birth_datetime;
pub use live::{LiveChart, LiveSnapshot};
pub use lunar::{LunarCalendar, LunarMonthDay, UnavailableLunarCalendar};
pub use lunisolar::{ChineseLunarCalendar, LunarDate};
pub use report::{render_report, Report};
pub use solar_term::{FixedSpringCutover, SpringCutover};
