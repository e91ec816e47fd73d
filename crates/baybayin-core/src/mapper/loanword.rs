//! Loanword clusters with no native Baybayin letter.
//!
//! Each is rendered as two native syllables joined by the canceller:
//! `j` as /dy/, `ch` as /ts/, `qu` as /kw/ (or /k/ before e, i), `x` as /ks/.

use super::Word;
use crate::unicode::{push_syllable, VowelClass, DA, KA, KUDLIT_I, SA, TA, VOWEL_I, WA, YA};

/// `qu`, `j`, `ch` and `cy`/`ci` clusters, in that order.
pub(super) fn cluster(word: &Word<'_>, i: usize, cancel: char, out: &mut String) -> Option<usize> {
    match word.lower(i)? {
        'q' if word.lower(i + 1) == Some('u') => {
            match word.lower(i + 2)? {
                'e' | 'i' => push_syllable(out, KA, VowelClass::EI),
                'a' => joined(out, KA, cancel, WA, VowelClass::A),
                'o' => joined(out, KA, cancel, WA, VowelClass::OU),
                _ => return None,
            }
            Some(3)
        }
        'j' => {
            let vowel = word.vowel_at(i + 1)?;
            joined(out, DA, cancel, YA, vowel);
            Some(2)
        }
        'c' if word.lower(i + 1) == Some('h') => {
            let vowel = word.vowel_at(i + 2)?;
            joined(out, TA, cancel, SA, vowel);
            Some(3)
        }
        'c' if matches!(word.lower(i + 1), Some('y' | 'i')) => {
            out.push(SA);
            out.push(cancel);
            out.push(KUDLIT_I);
            Some(2)
        }
        _ => None,
    }
}

/// `x` as /ks/, preceded by a seed vowel taken from the previous letter.
///
/// Word-initial `x` and `x` after a hyphen are seeded with `i` (as in
/// "eks"). After a consonant there is no seed.
pub(super) fn x_sound(word: &Word<'_>, i: usize, cancel: char, out: &mut String) -> Option<usize> {
    if word.lower(i)? != 'x' {
        return None;
    }
    let seed = match i.checked_sub(1).and_then(|p| word.get(p)) {
        None | Some('-') => Some(VOWEL_I),
        Some(prev) => VowelClass::of(prev).map(VowelClass::letter),
    };
    if let Some(seed) = seed {
        out.push(seed);
    }
    out.push(KA);
    out.push(cancel);
    out.push(SA);
    out.push(cancel);
    Some(1)
}

fn joined(out: &mut String, first: char, cancel: char, second: char, vowel: VowelClass) {
    out.push(first);
    out.push(cancel);
    push_syllable(out, second, vowel);
}

/// Rewrite English spelling endings that Baybayin cannot sound out.
///
/// `-hn` loses its `h` (John → Jon) and `-gh` loses its `h` (burgh → burg).
/// Only the first matching rule is applied.
pub(crate) fn normalize_ending(chars: &mut Vec<char>) {
    let n = chars.len();
    if n < 2 {
        return;
    }
    let tail = [
        chars[n - 2].to_ascii_lowercase(),
        chars[n - 1].to_ascii_lowercase(),
    ];
    match tail {
        ['h', 'n'] => {
            chars.remove(n - 2);
        }
        ['g', 'h'] => {
            chars.pop();
        }
        _ => {}
    }
}
