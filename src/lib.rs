//! Baybayin engine facade.
//!
//! Re-exports the transliteration core and adds the pieces that touch the
//! outside world: tracing setup and the streaming translation client.

mod trace_init;
pub mod translate;

pub use baybayin_core::{
    canceller, convert, convert_default, font, grapheme, mapper, resolve, segment, settings,
    supported_cancellers, unicode, ConversionRequest, FontProfile, Transliterator,
    VowelCanceller, MGA_GLYPHS,
};
pub use trace_init::init_tracing;
pub use translate::{TranslateClient, TranslateError, Translation, TranslationTask};
