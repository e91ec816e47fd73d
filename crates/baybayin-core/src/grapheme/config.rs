use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    consonants: BTreeMap<String, String>,
    vowels: BTreeMap<String, String>,
    case_sensitive: BTreeMap<String, String>,
    #[serde(default)]
    localization: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[consonants] table is empty")]
    Empty,
    #[error("invalid key in [{section}]: {key:?}")]
    InvalidKey { section: &'static str, key: String },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("[case_sensitive] must map both `A` and `a`, missing {0:?}")]
    MissingCaseForm(char),
    #[error("localization {from} -> {to}: target is not a consonant")]
    UnknownLocalizationTarget { from: char, to: String },
    #[error("grapheme table already initialized")]
    AlreadyInitialized,
}

/// Parsed and validated table contents, keyed by single characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntries {
    pub consonants: BTreeMap<char, String>,
    pub vowels: BTreeMap<char, String>,
    pub case_sensitive: BTreeMap<char, String>,
    pub localization: BTreeMap<char, char>,
}

fn single_letter(
    section: &'static str,
    key: &str,
    accept: impl Fn(char) -> bool,
) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if accept(c) => Ok(c),
        _ => Err(TableError::InvalidKey {
            section,
            key: key.to_string(),
        }),
    }
}

/// Parse TOML text into validated [`TableEntries`].
pub fn parse_table_toml(toml_str: &str) -> Result<TableEntries, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.consonants.is_empty() {
        return Err(TableError::Empty);
    }

    let mut consonants = BTreeMap::new();
    for (key, value) in config.consonants {
        let c = single_letter("consonants", &key, |c| c.is_ascii_lowercase())?;
        if value.is_empty() {
            return Err(TableError::EmptyValue(key));
        }
        consonants.insert(c, value);
    }

    // Empty vowel values are allowed: they disable the mapping.
    let mut vowels = BTreeMap::new();
    for (key, value) in config.vowels {
        let c = single_letter("vowels", &key, |c| matches!(c, 'e' | 'i' | 'o' | 'u'))?;
        vowels.insert(c, value);
    }

    let mut case_sensitive = BTreeMap::new();
    for (key, value) in config.case_sensitive {
        let c = single_letter("case_sensitive", &key, |c| matches!(c, 'A' | 'a'))?;
        if value.is_empty() {
            return Err(TableError::EmptyValue(key));
        }
        case_sensitive.insert(c, value);
    }
    for form in ['A', 'a'] {
        if !case_sensitive.contains_key(&form) {
            return Err(TableError::MissingCaseForm(form));
        }
    }

    let mut localization = BTreeMap::new();
    for (key, value) in config.localization {
        let from = single_letter("localization", &key, |c| c.is_ascii_lowercase())?;
        let to = match single_letter("localization", &value, |c| c.is_ascii_lowercase()) {
            Ok(to) if consonants.contains_key(&to) => to,
            _ => return Err(TableError::UnknownLocalizationTarget { from, to: value }),
        };
        localization.insert(from, to);
    }

    Ok(TableEntries {
        consonants,
        vowels,
        case_sensitive,
        localization,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[consonants]
k = "ᜃ"

[vowels]
i = "ᜁ"

[case_sensitive]
A = "A"
a = "a"
"#;

    #[test]
    fn parse_minimal_toml() {
        let t = parse_table_toml(MINIMAL).unwrap();
        assert_eq!(t.consonants.len(), 1);
        assert_eq!(t.consonants[&'k'], "ᜃ");
        assert_eq!(t.vowels[&'i'], "ᜁ");
        assert!(t.localization.is_empty());
    }

    #[test]
    fn parse_default_toml() {
        let t = parse_table_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert_eq!(t.consonants.len(), 14);
        assert_eq!(t.vowels.len(), 4);
        assert_eq!(t.vowels[&'o'], "");
        assert_eq!(t.localization[&'f'], 'p');
        assert_eq!(t.localization[&'c'], 'k');
    }

    #[test]
    fn error_empty_consonants() {
        let toml = "[consonants]\n[vowels]\n[case_sensitive]\nA = \"A\"\na = \"a\"\n";
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(err, TableError::Empty));
    }

    #[test]
    fn error_multi_letter_key() {
        let toml = MINIMAL.replace("k = ", "ka = ");
        let err = parse_table_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidKey {
                section: "consonants",
                ..
            }
        ));
    }

    #[test]
    fn error_uppercase_consonant_key() {
        let toml = MINIMAL.replace("k = ", "K = ");
        let err = parse_table_toml(&toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidKey { .. }));
    }

    #[test]
    fn error_consonant_in_vowels() {
        let toml = MINIMAL.replace("i = ", "t = ");
        let err = parse_table_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::InvalidKey {
                section: "vowels",
                ..
            }
        ));
    }

    #[test]
    fn error_empty_consonant_value() {
        let toml = MINIMAL.replace("k = \"ᜃ\"", "k = \"\"");
        let err = parse_table_toml(&toml).unwrap_err();
        assert!(matches!(err, TableError::EmptyValue(_)));
    }

    #[test]
    fn error_missing_case_form() {
        let toml = MINIMAL.replace("A = \"A\"\n", "");
        let err = parse_table_toml(&toml).unwrap_err();
        assert!(matches!(err, TableError::MissingCaseForm('A')));
    }

    #[test]
    fn error_localization_to_unknown_consonant() {
        let toml = format!("{MINIMAL}\n[localization]\nf = \"p\"\n");
        let err = parse_table_toml(&toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::UnknownLocalizationTarget { from: 'f', .. }
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableError::Parse(_)));
    }
}
