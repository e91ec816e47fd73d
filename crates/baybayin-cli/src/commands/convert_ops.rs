use std::io::{self, BufRead};

use unicode_width::UnicodeWidthStr;

use baybayin_engine::segment::{segment, Span};
use baybayin_engine::settings::settings;
use baybayin_engine::unicode::{is_baybayin, is_baybayin_mark};
use baybayin_engine::{convert, resolve, FontProfile, VowelCanceller};

/// Fill in the configured defaults for options left off the command line.
fn target(canceller: Option<&str>, font: Option<&str>) -> (String, String) {
    let defaults = &settings().defaults;
    let canceller = canceller
        .map(str::to_string)
        .unwrap_or_else(|| defaults.canceller().to_string());
    let font = font
        .map(str::to_string)
        .unwrap_or_else(|| defaults.font().name().to_string());
    (canceller, font)
}

/// Tell the user when their choices were substituted.
fn report_substitutions(canceller: &str, font: &str) {
    if FontProfile::from_name(font).is_none() {
        eprintln!("note: unknown font {font:?}, using {}", FontProfile::default());
    }
    let resolved = resolve(canceller, font);
    if resolved.symbol().to_string() != canceller {
        eprintln!(
            "note: canceller {canceller:?} not available, using {} ({})",
            resolved,
            resolved.name()
        );
    }
}

pub fn convert_cmd(text: Option<&str>, canceller: Option<&str>, font: Option<&str>) {
    let (canceller, font) = target(canceller, font);
    report_substitutions(&canceller, &font);

    match text {
        Some(text) => println!("{}", convert(text, &canceller, &font)),
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                println!("{}", convert(&line, &canceller, &font));
            }
        }
    }
}

/// Baybayin letters in `glyphs`, not counting kudlit or the virama.
fn letter_count(glyphs: &str) -> usize {
    glyphs
        .chars()
        .filter(|&c| is_baybayin(c) && !is_baybayin_mark(c))
        .count()
}

/// Word-by-word breakdown with aligned columns.
pub fn inspect_cmd(text: &str, canceller: Option<&str>, font: Option<&str>) {
    let (canceller, font) = target(canceller, font);
    report_substitutions(&canceller, &font);

    let rows: Vec<(&str, String)> = segment(text)
        .filter_map(|span| match span {
            Span::Word(word) => Some((word, convert(word, &canceller, &font))),
            Span::Whitespace(_) => None,
        })
        .collect();
    // Kudlit are zero-width, so pad by display width rather than chars.
    let col = rows.iter().map(|(w, _)| w.width()).max().unwrap_or(0);
    for (word, glyphs) in &rows {
        println!(
            "{word}{}  {glyphs}  ({} letters)",
            " ".repeat(col - word.width()),
            letter_count(glyphs)
        );
    }
}

pub fn resolve_cmd(canceller: &str, font: &str) {
    let resolved = resolve(canceller, font);
    println!("{} ({})", resolved, resolved.name());
}

pub fn fonts_cmd() {
    let col = FontProfile::ALL
        .iter()
        .map(|f| f.name().width())
        .max()
        .unwrap_or(0);
    print!("{:<col$}", "Font");
    for c in VowelCanceller::ALL {
        print!("  {c}");
    }
    println!("  fallback");
    for f in FontProfile::ALL {
        print!("{:<col$}", f.name());
        for c in VowelCanceller::ALL {
            print!("  {}", if f.supports(c) { "✓" } else { "·" });
        }
        println!("  {}", f.fallback_canceller());
    }
}

pub fn cancellers_cmd(font: Option<&str>) {
    let available: Vec<VowelCanceller> = match font {
        Some(font) => baybayin_engine::supported_cancellers(font),
        None => VowelCanceller::ALL.to_vec(),
    };
    for c in available {
        println!(
            "{}  {:<9}  {:<10}  {}",
            c,
            c.name(),
            if c.is_modern() { "modern" } else { "historical" },
            c.description()
        );
    }
}
