use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use lru::LruCache;
use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::calculator::{PillarCalculator, Profile};
use crate::solar_term::{FixedSpringCutover, SpringCutover};

// Performance metrics tracking
#[derive(Debug, Default)]
pub struct Metrics {
    calculation_time: AtomicU64,
    calculations: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_calculation(&self, duration: Duration) {
        self.calculation_time
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.calculations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits() as f64;
        let total = hits + self.cache_misses() as f64;
        if total > 0.0 {
            hits / total
        } else {
            0.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "Performance Metrics:\n\
             Calculation Time: {}µs over {} charts\n\
             Cache Hits: {}\n\
             Cache Misses: {}\n\
             Cache Hit Rate: {:.2}%",
            self.calculation_time.load(Ordering::Relaxed),
            self.calculations.load(Ordering::Relaxed),
            self.cache_hits(),
            self.cache_misses(),
            self.cache_hit_rate() * 100.0
        )
    }
}

/// Pillars only change with the date and the hour.
pub type ChartKey = (NaiveDate, u32);

pub fn chart_key(at: NaiveDateTime) -> ChartKey {
    (at.date(), at.hour())
}

pub struct CalendarCache {
    cache: LruCache<ChartKey, Profile>,
}

impl CalendarCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            cache: LruCache::new(capacity),
        }
    }

    // LruCache::get updates recency, so it needs &mut self.
    pub fn get_profile(&mut self, key: &ChartKey) -> Option<Profile> {
        self.cache.get(key).cloned()
    }

    pub fn put_profile(&mut self, key: ChartKey, profile: Profile) {
        self.cache.put(key, profile);
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// Cached chart lookups, with ranges fanned out over rayon.
pub struct ParallelChartCalculator<C = FixedSpringCutover> {
    calculator: PillarCalculator<C>,
    metrics: Arc<Metrics>,
    cache: Arc<RwLock<CalendarCache>>,
}

impl ParallelChartCalculator {
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::new(
            PillarCalculator::default(),
            Arc::new(RwLock::new(CalendarCache::new(capacity))),
            Arc::new(Metrics::new()),
        )
    }
}

impl<C: SpringCutover + Sync> ParallelChartCalculator<C> {
    pub fn new(
        calculator: PillarCalculator<C>,
        cache: Arc<RwLock<CalendarCache>>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            calculator,
            metrics,
            cache,
        }
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    pub fn cache(&self) -> &Arc<RwLock<CalendarCache>> {
        &self.cache
    }

    /// Profile for `at`; everything except `at` itself may come from the cache.
    pub fn profile(&self, at: NaiveDateTime) -> Profile {
        let key = chart_key(at);
        {
            let mut cache = self.cache.write();
            if let Some(mut profile) = cache.get_profile(&key) {
                self.metrics.record_cache_hit();
                profile.at = at;
                return profile;
            }
        }
        self.metrics.record_cache_miss();

        let calc_start = Instant::now();
        let profile = self.calculator.profile(at);
        let duration = calc_start.elapsed();
        self.metrics.record_calculation(duration);

        self.cache.write().put_profile(key, profile.clone());

        debug!(
            target: "calendar_calculation",
            "Chart for {} took {}µs",
            at,
            duration.as_micros()
        );

        profile
    }

    /// Profiles for `count` instants starting at `start`, `step` apart.
    ///
    /// Stops early at the first instant that falls outside `NaiveDateTime`'s range.
    pub fn calculate_range(
        &self,
        start: NaiveDateTime,
        count: usize,
        step: chrono::Duration,
    ) -> Vec<Profile> {
        let started = Instant::now();

        let instants: Vec<NaiveDateTime> = (0..count)
            .map_while(|offset| {
                let offset = i32::try_from(offset).ok()?;
                start.checked_add_signed(step.checked_mul(offset)?)
            })
            .collect();
        if instants.len() < count {
            warn!(
                target: "calendar_calculation",
                "Range from {} stopped after {} of {} charts",
                start,
                instants.len(),
                count
            );
        }

        let results: Vec<Profile> = instants
            .into_par_iter()
            .map(|at| self.profile(at))
            .collect();

        info!(
            target: "calendar_calculation",
            "Calculated {} charts in {}µs",
            results.len(),
            started.elapsed().as_micros()
        );

        results
    }
}
