use std::fmt;

use crate::calculator::Profile;
use crate::config::SymbolStyle;
use crate::cycle::Stem;
use crate::element::Element;

/// Static reading: the day master and the dominant element(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub day_master: Stem,
    pub strongest: Vec<Element>,
}

impl Analysis {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            day_master: profile.chart.day.stem,
            strongest: profile.elements.strongest(),
        }
    }

    pub fn render(&self, style: SymbolStyle) -> String {
        match style {
            SymbolStyle::Hanzi => {
                let strongest: Vec<String> =
                    self.strongest.iter().map(|e| e.hanzi().to_string()).collect();
                format!(
                    "命造日主為「{}」。\n五行能量分佈中，最強旺的是：「{}」。",
                    self.day_master.hanzi(),
                    strongest.join("、")
                )
            }
            SymbolStyle::Pinyin => {
                let strongest: Vec<&str> = self.strongest.iter().map(|e| e.english()).collect();
                format!(
                    "Day master: {}.\nStrongest element: {}.",
                    self.day_master.pinyin(),
                    strongest.join(", ")
                )
            }
        }
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SymbolStyle::Hanzi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PillarCalculator;
    use chrono::NaiveDate;

    #[test]
    fn test_analysis_of_known_chart() {
        let at = NaiveDate::from_ymd_opt(2024, 2, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let analysis = Analysis::from_profile(&PillarCalculator::default().profile(at));
        assert_eq!(analysis.day_master, Stem::Wu);
        assert_eq!(analysis.strongest, vec![Element::Earth]);
        assert_eq!(
            analysis.to_string(),
            "命造日主為「戊」。\n五行能量分佈中，最強旺的是：「土」。"
        );
        assert_eq!(
            analysis.render(SymbolStyle::Pinyin),
            "Day master: Wu.\nStrongest element: earth."
        );
    }

    #[test]
    fn test_ties_are_joined() {
        let analysis = Analysis {
            day_master: Stem::Jia,
            strongest: vec![Element::Metal, Element::Water],
        };
        assert!(analysis.render(SymbolStyle::Hanzi).ends_with("「金、水」。"));
    }
}
