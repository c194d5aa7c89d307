use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The five colors a deck can be built around. Declaration order is the
/// canonical WUBRG order used for iteration and output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn code(self) -> char {
        self.symbol().code()
    }

    pub fn symbol(self) -> ManaSymbol {
        match self {
            Self::White => ManaSymbol::White,
            Self::Blue => ManaSymbol::Blue,
            Self::Black => ManaSymbol::Black,
            Self::Red => ManaSymbol::Red,
            Self::Green => ManaSymbol::Green,
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.code() == code)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Single-letter mana symbols tallied from mana costs, including colorless `C`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ManaSymbol {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "C")]
    Colorless,
}

impl ManaSymbol {
    pub const ALL: [ManaSymbol; 6] = [
        ManaSymbol::White,
        ManaSymbol::Blue,
        ManaSymbol::Black,
        ManaSymbol::Red,
        ManaSymbol::Green,
        ManaSymbol::Colorless,
    ];

    pub fn code(self) -> char {
        match self {
            Self::White => 'W',
            Self::Blue => 'U',
            Self::Black => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Colorless => 'C',
        }
    }

    pub fn basic_land(self) -> &'static str {
        match self {
            Self::White => "Plains",
            Self::Blue => "Island",
            Self::Black => "Swamp",
            Self::Red => "Mountain",
            Self::Green => "Forest",
            Self::Colorless => "Wastes",
        }
    }
}

impl fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSet {
    colors: BTreeSet<Color>,
}

impl ColorSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn insert(&mut self, color: Color) -> bool {
        self.colors.insert(color)
    }

    /// Colors in canonical WUBRG order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn is_superset_of<'a>(&self, identity: impl IntoIterator<Item = &'a Color>) -> bool {
        identity.into_iter().all(|color| self.contains(*color))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "colorless");
        }
        for color in self.iter() {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}
