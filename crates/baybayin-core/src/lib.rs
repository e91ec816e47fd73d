//! Latin → Baybayin transliteration.
//!
//! [`convert`] is the main entry point. It is a pure function of its inputs:
//! the grapheme table and settings are loaded once and only read afterwards,
//! so it can be called from any thread on every keystroke.

pub mod canceller;
pub mod convert;
pub mod font;
pub mod grapheme;
pub mod mapper;
pub mod segment;
pub mod settings;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use canceller::VowelCanceller;
pub use convert::{convert, convert_default, ConversionRequest, Transliterator, MGA_GLYPHS};
pub use font::{resolve, supported_cancellers, FontProfile};
