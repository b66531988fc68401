use crate::calculator::hour_branch_index;
use crate::cycle::{Pillar, Stem, BRANCHES};

const HOUR_WINDOWS: [&str; 12] = [
    "23-01", "01-03", "03-05", "05-07", "07-09", "09-11", "11-13", "13-15", "15-17", "17-19",
    "19-21", "21-23",
];

/// One two-hour slot of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourSlot {
    pub pillar: Pillar,
    pub window: &'static str,
    pub active: bool,
}

/// The twelve hour pillars of a day with stem `day_stem`, marking the slot holding `hour`.
pub fn hourly_pillars(day_stem: Stem, hour: u32) -> [HourSlot; 12] {
    let base = (day_stem.index() % 5) * 2;
    let current = hour_branch_index(hour) as usize;
    std::array::from_fn(|i| HourSlot {
        pillar: Pillar::new(Stem::from_index((base + i) as i64), BRANCHES[i]),
        window: HOUR_WINDOWS[i],
        active: i == current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;
    use crate::cycle::Branch;
    use chrono::NaiveDate;

    #[test]
    fn test_slots_follow_five_rats() {
        let slots = hourly_pillars(Stem::Wu, 12);
        assert_eq!(slots[0].pillar, Pillar::new(Stem::Ren, Branch::Zi));
        assert_eq!(slots[1].pillar, Pillar::new(Stem::Gui, Branch::Chou));
        assert_eq!(slots[2].pillar, Pillar::new(Stem::Jia, Branch::Yin));
        assert_eq!(slots[11].window, "21-23");
        let active: Vec<usize> = (0..12).filter(|&i| slots[i].active).collect();
        assert_eq!(active, vec![6]);
    }

    #[test]
    fn test_active_slot_matches_hour_pillar() {
        let day = NaiveDate::from_ymd_opt(2023, 9, 17).unwrap();
        for hour in 0..24 {
            let at = day.and_hms_opt(hour, 30, 0).unwrap();
            let chart = compute(at);
            let slots = hourly_pillars(chart.day.stem, hour);
            let active = slots.iter().find(|s| s.active).unwrap();
            assert_eq!(active.pillar, chart.hour, "hour {hour}");
        }
    }

    #[test]
    fn test_late_night_wraps_to_zi() {
        let slots = hourly_pillars(Stem::Jia, 23);
        assert!(slots[0].active);
        assert_eq!(slots[0].window, "23-01");
    }
}
