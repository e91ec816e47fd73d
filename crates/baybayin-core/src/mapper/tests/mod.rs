mod loanwords;

use super::{MapOptions, WordMapper};
use crate::canceller::VowelCanceller;
use crate::grapheme::GraphemeTable;

pub(super) fn map_with(word: &str, canceller: VowelCanceller, options: MapOptions) -> String {
    let mut mapper = WordMapper::new(GraphemeTable::global(), canceller, options);
    let mut out = String::new();
    mapper.map(word, &mut out);
    out
}

pub(super) fn map(word: &str) -> String {
    map_with(word, VowelCanceller::Kurus, MapOptions::default())
}
