//! Grapheme mapper: turns one word token into Baybayin.
//!
//! The cursor walks the word once. At each position the rule classes are
//! tried in a fixed priority order and the first match consumes its
//! characters; consumed characters are never looked at again.
//!
//! 1. `nga`-family trigraphs
//! 2. bare `ng`
//! 3. loanword clusters (`qu`, `j`, `ch`, `cy`/`ci`)
//! 4. `x` as /ks/
//! 5. loanword localization (`f v z c`)
//! 6. case-sensitive `A` / `a`
//! 7. consonant + vowel syllables
//! 8. bare consonant, bare vowel, or pass-through

mod loanword;

#[cfg(test)]
mod tests;

use crate::canceller::VowelCanceller;
use crate::grapheme::GraphemeTable;
use crate::unicode::{push_syllable, VowelClass, NGA};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Rewrite `-hn` / `-gh` word endings before mapping (John → Jon).
    pub normalize_endings: bool,
}

/// Read-only view of the word being mapped.
pub(crate) struct Word<'w> {
    chars: &'w [char],
}

impl<'w> Word<'w> {
    fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    /// ASCII-lowercased character at `i`.
    fn lower(&self, i: usize) -> Option<char> {
        self.get(i).map(|c| c.to_ascii_lowercase())
    }

    fn vowel_at(&self, i: usize) -> Option<VowelClass> {
        self.get(i).and_then(VowelClass::of)
    }

    fn starts_with_at(&self, i: usize, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(k, p)| self.lower(i + k) == Some(p))
    }
}

/// Maps word tokens for one canceller. The character buffer is reused
/// across the words of a single conversion.
pub struct WordMapper<'t> {
    table: &'t GraphemeTable,
    canceller: VowelCanceller,
    options: MapOptions,
    buf: Vec<char>,
}

impl<'t> WordMapper<'t> {
    pub fn new(table: &'t GraphemeTable, canceller: VowelCanceller, options: MapOptions) -> Self {
        Self {
            table,
            canceller,
            options,
            buf: Vec::new(),
        }
    }

    /// Append the Baybayin rendering of `word` to `out`.
    pub fn map(&mut self, word: &str, out: &mut String) {
        self.buf.clear();
        self.buf.extend(word.chars());
        if self.options.normalize_endings {
            loanword::normalize_ending(&mut self.buf);
        }
        let word = Word { chars: &self.buf };
        map_chars(&word, self.table, self.canceller, out);
    }
}

fn map_chars(word: &Word<'_>, table: &GraphemeTable, canceller: VowelCanceller, out: &mut String) {
    let cancel = canceller.symbol();
    let mut i = 0;
    while i < word.chars.len() {
        if let Some(n) = nga_family(word, i, cancel, out) {
            i += n;
            continue;
        }
        if let Some(n) = loanword::cluster(word, i, cancel, out) {
            i += n;
            continue;
        }
        if let Some(n) = loanword::x_sound(word, i, cancel, out) {
            i += n;
            continue;
        }

        let ch = word.chars[i];
        let local = table.localize(ch.to_ascii_lowercase());

        // Case decides the glyph here, so look it up before folding.
        if let Some(glyph) = table.case_sensitive(ch) {
            out.push_str(glyph);
            i += 1;
            continue;
        }

        if let Some(base) = table.consonant(local) {
            match word.vowel_at(i + 1) {
                Some(vowel) => {
                    out.push_str(base);
                    if let Some(mark) = vowel.kudlit() {
                        out.push(mark);
                    }
                    i += 2;
                }
                None => {
                    out.push_str(base);
                    out.push(cancel);
                    i += 1;
                }
            }
            continue;
        }

        // An empty vowel entry (the default table's `o`) counts as unmapped.
        match table.vowel(local).filter(|g| !g.is_empty()) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(ch),
        }
        i += 1;
    }
}

/// `nga nge ngi ngo ngu` as one syllable, or a bare `ng` with canceller.
fn nga_family(word: &Word<'_>, i: usize, cancel: char, out: &mut String) -> Option<usize> {
    if !word.starts_with_at(i, "ng") {
        return None;
    }
    match word.vowel_at(i + 2) {
        Some(vowel) => {
            push_syllable(out, NGA, vowel);
            Some(3)
        }
        None => {
            out.push(NGA);
            out.push(cancel);
            Some(2)
        }
    }
}
