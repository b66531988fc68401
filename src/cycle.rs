use std::fmt;

use crate::config::SymbolStyle;

pub const STEM_COUNT: i64 = 10;
pub const BRANCH_COUNT: i64 = 12;

/// Reduce `x` into `[0, n)`, also for negative `x`.
pub fn normalize_mod(x: i64, n: i64) -> i64 {
    ((x % n) + n) % n
}

/// The ten heavenly stems, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

pub const STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANZI: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const STEM_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// Look up the stem at `index`, normalised mod 10.
    pub fn from_index(index: i64) -> Self {
        STEMS[normalize_mod(index, STEM_COUNT) as usize]
    }

    pub fn from_hanzi(c: char) -> Option<Self> {
        STEM_HANZI.iter().position(|&h| h == c).map(|i| STEMS[i])
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hanzi(self) -> char {
        STEM_HANZI[self.index()]
    }

    pub fn pinyin(self) -> &'static str {
        STEM_PINYIN[self.index()]
    }

    pub fn label(self, style: SymbolStyle) -> String {
        match style {
            SymbolStyle::Hanzi => self.hanzi().to_string(),
            SymbolStyle::Pinyin => self.pinyin().to_string(),
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// The twelve earthly branches, in cycle order starting at Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

pub const BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_HANZI: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];
const BRANCH_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Branch {
    /// Look up the branch at `index`, normalised mod 12.
    pub fn from_index(index: i64) -> Self {
        BRANCHES[normalize_mod(index, BRANCH_COUNT) as usize]
    }

    pub fn from_hanzi(c: char) -> Option<Self> {
        BRANCH_HANZI.iter().position(|&h| h == c).map(|i| BRANCHES[i])
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hanzi(self) -> char {
        BRANCH_HANZI[self.index()]
    }

    pub fn pinyin(self) -> &'static str {
        BRANCH_PINYIN[self.index()]
    }

    pub fn label(self, style: SymbolStyle) -> String {
        match style {
            SymbolStyle::Hanzi => self.hanzi().to_string(),
            SymbolStyle::Pinyin => self.pinyin().to_string(),
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

/// A (stem, branch) pair for one time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    pub fn from_indices(stem: i64, branch: i64) -> Self {
        Self {
            stem: Stem::from_index(stem),
            branch: Branch::from_index(branch),
        }
    }

    pub fn label(&self, style: SymbolStyle) -> String {
        match style {
            SymbolStyle::Hanzi => format!("{}{}", self.stem.hanzi(), self.branch.hanzi()),
            SymbolStyle::Pinyin => format!("{} {}", self.stem.pinyin(), self.branch.pinyin()),
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Zodiac animals, aligned with the branch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub const ZODIAC_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

const ZODIAC_HANZI: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];
const ZODIAC_ENGLISH: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl ZodiacAnimal {
    pub fn from_index(index: i64) -> Self {
        ZODIAC_ANIMALS[normalize_mod(index, BRANCH_COUNT) as usize]
    }

    pub fn hanzi(self) -> &'static str {
        ZODIAC_HANZI[self as usize]
    }

    pub fn english(self) -> &'static str {
        ZODIAC_ENGLISH[self as usize]
    }

    pub fn label(self, style: SymbolStyle) -> &'static str {
        match style {
            SymbolStyle::Hanzi => self.hanzi(),
            SymbolStyle::Pinyin => self.english(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_mod_stays_in_range() {
        for x in -250..250 {
            for n in [5, 10, 12, 60] {
                let r = normalize_mod(x, n);
                assert!((0..n).contains(&r), "normalize_mod({x}, {n}) = {r}");
                assert_eq!(r, x.rem_euclid(n));
            }
        }
        assert_eq!(normalize_mod(-1, 12), 11);
        assert_eq!(normalize_mod(-12, 12), 0);
    }

    #[test]
    fn test_cycles_wrap() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Branch::from_index(13), Branch::Chou);
        assert_eq!(Branch::from_index(-2), Branch::Xu);
        assert_eq!(ZodiacAnimal::from_index(2020), ZodiacAnimal::Dragon);
    }

    #[test]
    fn test_index_matches_table_position() {
        for (i, stem) in STEMS.iter().enumerate() {
            assert_eq!(stem.index(), i);
            assert_eq!(Stem::from_hanzi(stem.hanzi()), Some(*stem));
        }
        for (i, branch) in BRANCHES.iter().enumerate() {
            assert_eq!(branch.index(), i);
            assert_eq!(Branch::from_hanzi(branch.hanzi()), Some(*branch));
        }
        assert_eq!(Stem::from_hanzi('子'), None);
    }

    #[test]
    fn test_pillar_labels() {
        let pillar = Pillar::from_indices(0, 4);
        assert_eq!(pillar.to_string(), "甲辰");
        assert_eq!(pillar.label(SymbolStyle::Pinyin), "Jia Chen");
        assert_eq!(ZodiacAnimal::Dragon.label(SymbolStyle::Hanzi), "龍");
    }
}
