use std::sync::Arc;

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::analysis::Analysis;
use crate::cache::ParallelChartCalculator;
use crate::calculator::Profile;
use crate::clock::TimeSource;
use crate::hourly::{hourly_pillars, HourSlot};
use crate::lunar::{gregorian_text, lunar_text, LunarCalendar};

/// What the live view shows for one second.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSnapshot {
    pub now: NaiveDateTime,
    pub profile: Profile,
    pub analysis: Analysis,
    pub hourly: [HourSlot; 12],
    pub gregorian_text: String,
    pub lunar_text: String,
}

/// Keeps a snapshot of "now", recomputed when the wall-clock second changes.
pub struct LiveChart {
    calculator: Arc<ParallelChartCalculator>,
    lunar: Box<dyn LunarCalendar>,
    snapshot: LiveSnapshot,
}

impl LiveChart {
    pub fn new(
        calculator: Arc<ParallelChartCalculator>,
        lunar: Box<dyn LunarCalendar>,
        clock: &dyn TimeSource,
    ) -> Self {
        let snapshot = build_snapshot(&calculator, lunar.as_ref(), truncate_to_second(clock.now()));
        Self {
            calculator,
            lunar,
            snapshot,
        }
    }

    pub fn snapshot(&self) -> &LiveSnapshot {
        &self.snapshot
    }

    /// Recompute if `clock` has moved to another second. Returns whether anything changed.
    pub fn tick(&mut self, clock: &dyn TimeSource) -> bool {
        let now = truncate_to_second(clock.now());
        if now == self.snapshot.now {
            return false;
        }
        self.snapshot = build_snapshot(&self.calculator, self.lunar.as_ref(), now);
        debug!(%now, chart = %self.snapshot.profile.chart, "live chart refreshed");
        true
    }
}

fn truncate_to_second(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

fn build_snapshot(
    calculator: &ParallelChartCalculator,
    lunar: &dyn LunarCalendar,
    now: NaiveDateTime,
) -> LiveSnapshot {
    let profile = calculator.profile(now);
    LiveSnapshot {
        now,
        analysis: Analysis::from_profile(&profile),
        hourly: hourly_pillars(profile.chart.day.stem, now.hour()),
        gregorian_text: gregorian_text(now),
        lunar_text: lunar_text(lunar, now, &profile.chart),
        profile,
    }
}
