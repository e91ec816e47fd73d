use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_table_toml, TableEntries, TableError};

pub const DEFAULT_TOML: &str = include_str!("default_table.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Single-character Latin → Baybayin lookups.
///
/// Consonant entries hold the bare base glyph only. Canceller and kudlit
/// variants are derived by the caller, so one table serves every
/// font/canceller combination.
#[derive(Debug, Clone)]
pub struct GraphemeTable {
    consonants: BTreeMap<char, String>,
    vowels: BTreeMap<char, String>,
    case_sensitive: BTreeMap<char, String>,
    localization: BTreeMap<char, char>,
}

impl GraphemeTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static GraphemeTable {
        static INSTANCE: OnceLock<GraphemeTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            // init_custom validated the custom text; the default is checked by build.rs
            let entries = parse_table_toml(toml_str).expect("grapheme TOML must be valid");
            Self::from_entries(entries)
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, TableError> {
        parse_table_toml(toml_str).map(Self::from_entries)
    }

    pub fn from_entries(entries: TableEntries) -> Self {
        Self {
            consonants: entries.consonants,
            vowels: entries.vowels,
            case_sensitive: entries.case_sensitive,
            localization: entries.localization,
        }
    }

    /// Base glyph for a lowercase consonant letter.
    pub fn consonant(&self, c: char) -> Option<&str> {
        self.consonants.get(&c).map(String::as_str)
    }

    /// Standalone glyph for a lowercase vowel letter, exactly as configured
    /// (possibly empty).
    pub fn vowel(&self, c: char) -> Option<&str> {
        self.vowels.get(&c).map(String::as_str)
    }

    /// Glyph for a letter whose case selects the glyph (`A` vs `a`).
    pub fn case_sensitive(&self, c: char) -> Option<&str> {
        self.case_sensitive.get(&c).map(String::as_str)
    }

    /// Fold a lowercase loanword letter into the native inventory.
    pub fn localize(&self, c: char) -> char {
        self.localization.get(&c).copied().unwrap_or(c)
    }

    /// Total number of single-letter entries.
    pub fn len(&self) -> usize {
        self.consonants.len()
            + self.vowels.len()
            + self.case_sensitive.len()
            + self.localization.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
