use std::fmt;

use crate::analysis::Analysis;
use crate::calculator::Profile;
use crate::config::SymbolStyle;
use crate::element::DISPLAY_ORDER;

/// Plain-text report for one profile.
pub fn render_report(profile: &Profile, style: SymbolStyle) -> String {
    Report { profile, style }.to_string()
}

/// A profile laid out as the text report, one labelled field per line.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub profile: &'a Profile,
    pub style: SymbolStyle,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (profile, style) = (self.profile, self.style);
        let chart = &profile.chart;
        writeln!(f, "📆 Gregorian: {}", profile.at.format("%Y-%m-%d %H:%M"))?;
        writeln!(
            f,
            "🀄 Pillars (year month day hour): {} | {} | {} | {}",
            chart.year.label(style),
            chart.month.label(style),
            chart.day.label(style),
            chart.hour.label(style)
        )?;
        writeln!(f, "🐉 Zodiac: {}", profile.zodiac.label(style))?;
        writeln!(f, "✨ Constellation: {}", profile.constellation.label(style))?;
        writeln!(f, "🌙 Lunar label: {}", profile.lunar.label(style))?;

        let counts: Vec<String> = DISPLAY_ORDER
            .iter()
            .map(|&e| format!("{} {}", e.label(style), profile.elements.get(e)))
            .collect();
        writeln!(f, "⚖️ Elements: {}", counts.join(", "))?;

        writeln!(f, "📜 {}", Analysis::from_profile(profile).render(style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::PillarCalculator;
    use chrono::NaiveDate;

    fn profile() -> Profile {
        let at = NaiveDate::from_ymd_opt(2024, 2, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        PillarCalculator::default().profile(at)
    }

    #[test]
    fn test_hanzi_report() {
        let report = render_report(&profile(), SymbolStyle::Hanzi);
        assert!(report.contains("甲辰 | 丙寅 | 戊戌 | 戊午"));
        assert!(report.contains("Zodiac: 龍"));
        assert!(report.contains("Constellation: 水瓶座"));
        assert!(report.contains("Lunar label: 2024年 2月4日"));
        assert!(report.contains("金 0, 木 2, 水 0, 火 2, 土 4"));
    }

    #[test]
    fn test_pinyin_report() {
        let report = render_report(&profile(), SymbolStyle::Pinyin);
        assert!(report.contains("Jia Chen | Bing Yin | Wu Xu | Wu Wu"));
        assert!(report.contains("Zodiac: Dragon"));
        assert!(report.contains("Constellation: Aquarius"));
        assert!(report.contains("Day master: Wu."));
        assert!(report.contains("Lunar label: 2024/2/4"));
    }

    #[test]
    fn test_report_has_one_line_per_field() {
        let profile = profile();
        let out = Report {
            profile: &profile,
            style: SymbolStyle::Hanzi,
        }
        .to_string();
        assert_eq!(out, render_report(&profile, SymbolStyle::Hanzi));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "📆 Gregorian: 2024-02-04 12:00");
        assert!(lines[6].starts_with("📜 命造日主為「戊」。"));
        assert_eq!(lines[7], "五行能量分佈中，最強旺的是：「土」。");
    }
}
