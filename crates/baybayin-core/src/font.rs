//! Font profiles and vowel-canceller negotiation.
//!
//! Each Baybayin typeface ships glyphs for only some of the four cancellers.
//! The support matrix below is fixed; callers ask for a canceller and get back
//! one the font can actually draw.

use std::fmt;

use crate::canceller::VowelCanceller;

/// A named Baybayin typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontProfile {
    #[default]
    BaybayinSimple,
    TawbidUkit,
    BaybayinKariktan,
    BaybayinFilipino,
    DoctrinaChristiana,
    BaybayinJoseRizal,
}

impl FontProfile {
    pub const ALL: [FontProfile; 6] = [
        FontProfile::BaybayinSimple,
        FontProfile::TawbidUkit,
        FontProfile::BaybayinKariktan,
        FontProfile::BaybayinFilipino,
        FontProfile::DoctrinaChristiana,
        FontProfile::BaybayinJoseRizal,
    ];

    /// Look up a profile by its display name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::BaybayinSimple => "Baybayin Simple",
            Self::TawbidUkit => "Tawbid Ukit",
            Self::BaybayinKariktan => "Baybayin Kariktan",
            Self::BaybayinFilipino => "Baybayin Filipino",
            Self::DoctrinaChristiana => "Doctrina Christiana",
            Self::BaybayinJoseRizal => "Baybayin Jose Rizal",
        }
    }

    /// Support flags indexed in [`VowelCanceller::ALL`] order (`+ x ] _`).
    const fn support_row(self) -> [bool; 4] {
        match self {
            Self::BaybayinSimple => [true, true, true, true],
            Self::BaybayinJoseRizal => [true, true, false, false],
            Self::BaybayinKariktan => [false, false, true, true],
            Self::TawbidUkit => [true, true, true, false],
            Self::DoctrinaChristiana => [true, false, false, false],
            Self::BaybayinFilipino => [true, true, true, false],
        }
    }

    pub fn supports(self, canceller: VowelCanceller) -> bool {
        self.support_row()[canceller as usize]
    }

    /// Supported cancellers in canonical order.
    pub fn cancellers(self) -> impl Iterator<Item = VowelCanceller> {
        VowelCanceller::ALL
            .into_iter()
            .filter(move |c| self.supports(*c))
    }

    /// The canceller to use when the requested one is unavailable.
    ///
    /// Kariktan documents `]` as its own default; every other font takes the
    /// first supported entry.
    pub fn fallback_canceller(self) -> VowelCanceller {
        if self == Self::BaybayinKariktan {
            return VowelCanceller::Pamudpod;
        }
        self.cancellers().next().unwrap_or(VowelCanceller::Kurus)
    }

    /// Pick a canceller this font can render, preferring `requested`.
    pub fn resolve(self, requested: Option<VowelCanceller>) -> VowelCanceller {
        match requested {
            Some(c) if self.supports(c) => c,
            _ => self.fallback_canceller(),
        }
    }
}

impl fmt::Display for FontProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a font name to its profile, substituting Baybayin Simple for names
/// that are not registered.
pub fn font_or_default(name: &str) -> FontProfile {
    FontProfile::from_name(name).unwrap_or_else(|| {
        #[cfg(feature = "trace")]
        tracing::debug!(font = name, "unknown font, using default profile");
        FontProfile::default()
    })
}

/// Reconcile a requested canceller symbol with what `font` supports.
///
/// Total: unknown fonts fall back to the default profile and unknown symbols
/// are treated as unsupported.
pub fn resolve(requested: &str, font: &str) -> VowelCanceller {
    let resolved = font_or_default(font).resolve(VowelCanceller::from_symbol(requested));
    #[cfg(feature = "trace")]
    tracing::debug!(requested, font, resolved = %resolved);
    resolved
}

/// Cancellers `font` supports, in canonical `+ x ] _` order.
pub fn supported_cancellers(font: &str) -> Vec<VowelCanceller> {
    font_or_default(font).cancellers().collect()
}
