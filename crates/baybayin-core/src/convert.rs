//! Conversion entry points: resolve the canceller, segment the text, map each
//! word, and stitch the spans back together in order.

use crate::canceller::VowelCanceller;
use crate::font::{font_or_default, FontProfile};
use crate::grapheme::GraphemeTable;
use crate::mapper::{MapOptions, WordMapper};
use crate::segment::{is_standalone_mga, segment, Span};
use crate::settings::settings;

/// `mga` is read "ma-nga": no canceller between the two letters.
pub const MGA_GLYPHS: &str = "\u{170B}\u{1704}";

/// A single conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub text: String,
    pub canceller: VowelCanceller,
    pub font: FontProfile,
}

impl ConversionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            canceller: VowelCanceller::default(),
            font: FontProfile::default(),
        }
    }

    pub fn with_canceller(mut self, canceller: VowelCanceller) -> Self {
        self.canceller = canceller;
        self
    }

    pub fn with_font(mut self, font: FontProfile) -> Self {
        self.font = font;
        self
    }
}

/// A grapheme table plus mapping options. Cheap to copy; holds no per-call
/// state.
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t GraphemeTable,
    options: MapOptions,
}

impl Transliterator<'static> {
    /// Uses the global grapheme table and the configured loanword options.
    pub fn global() -> Self {
        Self::new(GraphemeTable::global(), settings().map_options())
    }
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t GraphemeTable, options: MapOptions) -> Self {
        Self { table, options }
    }

    pub fn options(&self) -> MapOptions {
        self.options
    }

    /// Convert `text` for `font`, using `canceller` if the font supports it.
    ///
    /// `None` stands for a canceller symbol that was not recognized; it is
    /// resolved like any unsupported request.
    pub fn convert(
        &self,
        text: &str,
        canceller: Option<VowelCanceller>,
        font: FontProfile,
    ) -> String {
        if text.is_empty() {
            return String::new();
        }
        let canceller = font.resolve(canceller);
        #[cfg(feature = "trace")]
        let _span = tracing::debug_span!(
            "convert",
            font = %font,
            canceller = %canceller,
            len = text.len()
        )
        .entered();

        let mut mapper = WordMapper::new(self.table, canceller, self.options);
        let mut out = String::with_capacity(text.len() * 2);
        for span in segment(text) {
            match span {
                Span::Whitespace(ws) => out.push_str(ws),
                Span::Word(word) => {
                    if is_standalone_mga(word) {
                        out.push_str(MGA_GLYPHS);
                    } else {
                        mapper.map(word, &mut out);
                    }
                }
            }
        }
        #[cfg(feature = "trace")]
        tracing::debug!(
            words = segment(text).filter(|s| matches!(s, Span::Word(_))).count(),
            out_len = out.len()
        );
        out
    }

    pub fn convert_request(&self, request: &ConversionRequest) -> String {
        self.convert(&request.text, Some(request.canceller), request.font)
    }
}

/// Convert Latin text to Baybayin.
///
/// Never fails: an unknown font is replaced by Baybayin Simple, an unknown or
/// unsupported canceller by the font's fallback, and unrecognized characters
/// are copied through. Empty input gives empty output.
pub fn convert(text: &str, canceller: &str, font: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    Transliterator::global().convert(
        text,
        VowelCanceller::from_symbol(canceller),
        font_or_default(font),
    )
}

/// [`convert`] with the canceller and font from [`settings()`].
pub fn convert_default(text: &str) -> String {
    let defaults = &settings().defaults;
    Transliterator::global().convert(text, Some(defaults.canceller()), defaults.font())
}
