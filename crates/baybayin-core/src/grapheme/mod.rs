//! Grapheme table: the configurable single-letter layer of the converter.
//!
//! The default table is embedded from `default_table.toml`; a custom one can
//! be installed with [`GraphemeTable::init_custom`] before first use.

mod config;
mod table;

pub use config::{parse_table_toml, TableEntries, TableError};
pub use table::GraphemeTable;

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
