use std::fs;

use baybayin_engine::grapheme::{self, GraphemeTable};
use baybayin_engine::settings;

pub fn table_export() {
    print!("{}", grapheme::default_toml());
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(GraphemeTable::from_toml(&content), "Error: {}");
    println!("OK: {} mappings", table.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: defaults.canceller={}, defaults.font={}, loanwords.normalize_endings={}",
        s.defaults.canceller(),
        s.defaults.font(),
        s.loanwords.normalize_endings
    );
}

/// Install custom table and settings files before any conversion runs.
pub fn load_overrides(table: Option<&str>, settings_file: Option<&str>) {
    if let Some(path) = table {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(GraphemeTable::init_custom(content), "Error in {path}: {}");
    }
    if let Some(path) = settings_file {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(settings::init_custom(content), "Error in {path}: {}");
    }
}
