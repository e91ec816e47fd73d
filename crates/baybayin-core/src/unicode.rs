//! Character-level constants and classification for the Baybayin block.

pub const VOWEL_A: char = '\u{1700}';
pub const VOWEL_I: char = '\u{1701}';
pub const VOWEL_U: char = '\u{1702}';

pub const KA: char = '\u{1703}';
pub const GA: char = '\u{1704}';
pub const NGA: char = '\u{1705}';
pub const TA: char = '\u{1706}';
pub const DA: char = '\u{1707}';
pub const MA: char = '\u{170B}';
pub const YA: char = '\u{170C}';
pub const WA: char = '\u{170F}';
pub const SA: char = '\u{1710}';

/// Kudlit above the consonant: `e` / `i`.
pub const KUDLIT_I: char = '\u{1712}';
/// Kudlit below the consonant: `o` / `u`.
pub const KUDLIT_U: char = '\u{1713}';

/// Check the Tagalog block (U+1700..U+171F), which holds the Baybayin
/// letters and marks.
pub fn is_baybayin(c: char) -> bool {
    ('\u{1700}'..='\u{171F}').contains(&c)
}

/// Combining vowel signs and the virama (U+1712..U+1715).
pub fn is_baybayin_mark(c: char) -> bool {
    ('\u{1712}'..='\u{1715}').contains(&c)
}

/// Vowel classes that share one kudlit in the syllable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelClass {
    A,
    EI,
    OU,
}

impl VowelClass {
    /// Classify a Latin vowel, case-insensitively.
    pub fn of(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Self::A),
            'e' | 'i' => Some(Self::EI),
            'o' | 'u' => Some(Self::OU),
            _ => None,
        }
    }

    /// The kudlit that decorates a consonant for this class; `a` is inherent.
    pub fn kudlit(self) -> Option<char> {
        match self {
            Self::A => None,
            Self::EI => Some(KUDLIT_I),
            Self::OU => Some(KUDLIT_U),
        }
    }

    /// Independent vowel letter for this class.
    pub fn letter(self) -> char {
        match self {
            Self::A => VOWEL_A,
            Self::EI => VOWEL_I,
            Self::OU => VOWEL_U,
        }
    }
}

/// Push `base` followed by the kudlit for `vowel`.
pub(crate) fn push_syllable(out: &mut String, base: char, vowel: VowelClass) {
    out.push(base);
    if let Some(mark) = vowel.kudlit() {
        out.push(mark);
    }
}
