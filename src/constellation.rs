use std::fmt;

use crate::config::SymbolStyle;

/// Western sun signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constellation {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// First day of the sign belonging to each calendar month.
const CUTOVER_DAYS: [u32; 12] = [20, 19, 21, 20, 21, 21, 23, 23, 23, 23, 22, 22];

// Capricorn sits at both ends so December's late sign wraps without a modulo.
const SIGNS: [Constellation; 13] = [
    Constellation::Capricorn,
    Constellation::Aquarius,
    Constellation::Pisces,
    Constellation::Aries,
    Constellation::Taurus,
    Constellation::Gemini,
    Constellation::Cancer,
    Constellation::Leo,
    Constellation::Virgo,
    Constellation::Libra,
    Constellation::Scorpio,
    Constellation::Sagittarius,
    Constellation::Capricorn,
];

/// Sign for a calendar `month` (1-12) and `day`.
pub fn constellation(month: u32, day: u32) -> Constellation {
    let month = month.clamp(1, 12) as usize;
    let before_cutover = day < CUTOVER_DAYS[month - 1];
    SIGNS[month - usize::from(before_cutover)]
}

impl Constellation {
    pub fn hanzi(self) -> &'static str {
        match self {
            Constellation::Capricorn => "摩羯座",
            Constellation::Aquarius => "水瓶座",
            Constellation::Pisces => "雙魚座",
            Constellation::Aries => "白羊座",
            Constellation::Taurus => "金牛座",
            Constellation::Gemini => "雙子座",
            Constellation::Cancer => "巨蟹座",
            Constellation::Leo => "獅子座",
            Constellation::Virgo => "處女座",
            Constellation::Libra => "天秤座",
            Constellation::Scorpio => "天蠍座",
            Constellation::Sagittarius => "射手座",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Constellation::Capricorn => "Capricorn",
            Constellation::Aquarius => "Aquarius",
            Constellation::Pisces => "Pisces",
            Constellation::Aries => "Aries",
            Constellation::Taurus => "Taurus",
            Constellation::Gemini => "Gemini",
            Constellation::Cancer => "Cancer",
            Constellation::Leo => "Leo",
            Constellation::Virgo => "Virgo",
            Constellation::Libra => "Libra",
            Constellation::Scorpio => "Scorpio",
            Constellation::Sagittarius => "Sagittarius",
        }
    }

    pub fn label(self, style: SymbolStyle) -> &'static str {
        match style {
            SymbolStyle::Hanzi => self.hanzi(),
            SymbolStyle::Pinyin => self.english(),
        }
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_before_cutover_is_previous_sign() {
        assert_eq!(constellation(3, 20), Constellation::Pisces);
        assert_eq!(constellation(3, 21), Constellation::Aries);
    }

    #[test]
    fn test_year_wraps_to_capricorn() {
        assert_eq!(constellation(1, 1), Constellation::Capricorn);
        assert_eq!(constellation(1, 19), Constellation::Capricorn);
        assert_eq!(constellation(1, 20), Constellation::Aquarius);
        assert_eq!(constellation(12, 21), Constellation::Sagittarius);
        assert_eq!(constellation(12, 22), Constellation::Capricorn);
    }

    #[test]
    fn test_each_month_has_two_signs() {
        for month in 1..=12u32 {
            let early = constellation(month, 1);
            let late = constellation(month, 28);
            assert_ne!(early, late, "month {month}");
        }
    }
}
