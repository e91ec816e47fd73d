//! Vowel-cancellation marks.
//!
//! A canceller is written after a consonant glyph to strip its inherent `a`.
//! Fonts render each of the four ASCII symbols as their own mark, so the
//! symbol itself is what goes into the output stream.

use std::fmt;

/// One of the four vowel-cancellation conventions.
///
/// Declaration order is the canonical enumeration order used by the
/// resolver fallback and by [`crate::supported_cancellers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum VowelCanceller {
    /// `+`, the cross used by most modern fonts.
    #[default]
    Kurus,
    /// `x`, a rotated cross placed below the character.
    Ekis,
    /// `]`, a bracket placed next to the character.
    Pamudpod,
    /// `_`, placed below the character.
    Pangaltas,
}

impl VowelCanceller {
    pub const ALL: [VowelCanceller; 4] = [
        VowelCanceller::Kurus,
        VowelCanceller::Ekis,
        VowelCanceller::Pamudpod,
        VowelCanceller::Pangaltas,
    ];

    /// Parse a canceller from its symbol. Returns `None` for anything other
    /// than `+`, `x`, `]` or `_`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Kurus),
            "x" => Some(Self::Ekis),
            "]" => Some(Self::Pamudpod),
            "_" => Some(Self::Pangaltas),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Kurus => '+',
            Self::Ekis => 'x',
            Self::Pamudpod => ']',
            Self::Pangaltas => '_',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Kurus => "Kurus",
            Self::Ekis => "Ekis",
            Self::Pamudpod => "Pamudpod",
            Self::Pangaltas => "Pangaltas",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Kurus => "Cross symbol placed below the character to cancel vowel sound",
            Self::Ekis => {
                "Traditional rotated cross symbol placed below the character to cancel vowel sound"
            }
            Self::Pamudpod => {
                "Traditional close bracket symbol placed next to the character to cancel vowel sound"
            }
            Self::Pangaltas => {
                "Modern vowel cancellation symbol developed by Leyson, placed below the character"
            }
        }
    }

    /// Only Pangaltas is a modern invention; the others are attested
    /// historically.
    pub fn is_modern(self) -> bool {
        matches!(self, Self::Pangaltas)
    }

    /// Whether rendering depends on the selected font. True for every
    /// canceller the fonts know about.
    pub fn is_font_dependent(self) -> bool {
        true
    }
}

impl fmt::Display for VowelCanceller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
