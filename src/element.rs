use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::calculator::Chart;
use crate::config::SymbolStyle;

/// The five element categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Order used when listing elements for display: metal, wood, water, fire, earth.
pub const DISPLAY_ORDER: [Element; 5] = [
    Element::Metal,
    Element::Wood,
    Element::Water,
    Element::Fire,
    Element::Earth,
];

impl Element {
    pub fn hanzi(self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Element::Wood => "wood",
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Metal => "metal",
            Element::Water => "water",
        }
    }

    pub fn label(self, style: SymbolStyle) -> String {
        match style {
            SymbolStyle::Hanzi => self.hanzi().to_string(),
            SymbolStyle::Pinyin => self.english().to_string(),
        }
    }

    /// Element of a stem or branch symbol, `None` for anything outside the two cycles.
    pub fn of_symbol(symbol: char) -> Option<Element> {
        SYMBOL_ELEMENTS.get(&symbol).copied()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

lazy_static! {
    // Stems pair up per element; branches use their principal element.
    static ref SYMBOL_ELEMENTS: HashMap<char, Element> = {
        let mut m = HashMap::new();
        m.insert('甲', Element::Wood);
        m.insert('乙', Element::Wood);
        m.insert('丙', Element::Fire);
        m.insert('丁', Element::Fire);
        m.insert('戊', Element::Earth);
        m.insert('己', Element::Earth);
        m.insert('庚', Element::Metal);
        m.insert('辛', Element::Metal);
        m.insert('壬', Element::Water);
        m.insert('癸', Element::Water);
        m.insert('子', Element::Water);
        m.insert('丑', Element::Earth);
        m.insert('寅', Element::Wood);
        m.insert('卯', Element::Wood);
        m.insert('辰', Element::Earth);
        m.insert('巳', Element::Fire);
        m.insert('午', Element::Fire);
        m.insert('未', Element::Earth);
        m.insert('申', Element::Metal);
        m.insert('酉', Element::Metal);
        m.insert('戌', Element::Earth);
        m.insert('亥', Element::Water);
        m
    };
}

/// Count of chart symbols per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementTally {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl ElementTally {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn bump(&mut self, element: Element) {
        match element {
            Element::Wood => self.wood += 1,
            Element::Fire => self.fire += 1,
            Element::Earth => self.earth += 1,
            Element::Metal => self.metal += 1,
            Element::Water => self.water += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// Every element holding the maximum count, in display order.
    pub fn strongest(&self) -> Vec<Element> {
        let max = DISPLAY_ORDER.iter().map(|&e| self.get(e)).max().unwrap_or(0);
        DISPLAY_ORDER
            .iter()
            .copied()
            .filter(|&e| self.get(e) == max)
            .collect()
    }

    /// Fill fraction for a display bar, scaled so five symbols fill it.
    pub fn bar_fraction(&self, element: Element) -> f32 {
        (self.get(element) as f32 / 5.0).clamp(0.05, 1.0)
    }
}

/// Tally the eight stem and branch symbols of a chart by element.
pub fn tally(chart: &Chart) -> ElementTally {
    let mut counts = ElementTally::default();
    for symbol in chart.symbols() {
        if let Some(element) = Element::of_symbol(symbol) {
            counts.bump(element);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PillarCalculator;
    use crate::cycle::{BRANCHES, STEMS};
    use chrono::NaiveDate;

    #[test]
    fn test_every_symbol_is_mapped() {
        assert_eq!(SYMBOL_ELEMENTS.len(), 22);
        for stem in STEMS {
            assert!(Element::of_symbol(stem.hanzi()).is_some());
        }
        for branch in BRANCHES {
            assert!(Element::of_symbol(branch.hanzi()).is_some());
        }
        assert_eq!(Element::of_symbol('x'), None);
    }

    #[test]
    fn test_tally_sums_to_eight() {
        let calculator = PillarCalculator::default();
        let start = NaiveDate::from_ymd_opt(1950, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        for step in 0..2000 {
            let at = start + chrono::Duration::hours(step * 37);
            let chart = calculator.compute(at);
            assert_eq!(tally(&chart).total(), 8, "tally at {at}");
        }
    }

    #[test]
    fn test_known_chart_tally() {
        // 2024-02-04 12:00 is 甲辰 丙寅 戊戌 戊午.
        let at = NaiveDate::from_ymd_opt(2024, 2, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let counts = tally(&PillarCalculator::default().compute(at));
        assert_eq!(counts.wood, 2);
        assert_eq!(counts.fire, 2);
        assert_eq!(counts.earth, 4);
        assert_eq!(counts.metal, 0);
        assert_eq!(counts.water, 0);
        assert_eq!(counts.strongest(), vec![Element::Earth]);
    }

    #[test]
    fn test_strongest_keeps_ties_in_display_order() {
        let counts = ElementTally {
            wood: 3,
            fire: 1,
            earth: 1,
            metal: 3,
            water: 0,
        };
        assert_eq!(counts.strongest(), vec![Element::Metal, Element::Wood]);
    }

    #[test]
    fn test_bar_fraction_is_clamped() {
        let counts = ElementTally {
            wood: 0,
            fire: 6,
            earth: 2,
            metal: 0,
            water: 0,
        };
        assert_eq!(counts.bar_fraction(Element::Wood), 0.05);
        assert_eq!(counts.bar_fraction(Element::Fire), 1.0);
        assert!((counts.bar_fraction(Element::Earth) - 0.4).abs() < f32::EPSILON);
    }
}
