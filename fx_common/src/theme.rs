//! Colour palette used by the pages.
//!
//! Cards are tinted per provider; slippage boxes are tinted by their verdict. The
//! provider mapping is total: unknown or missing providers get the neutral colour.
use strum_macros::{Display, EnumString};

use crate::analytics::Verdict;

/// Named colours understood by the terminal renderer.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Palette {
    Green,
    Purple,
    Blue,
    Orange,
    Red,
    Gray,
}

/// Colour of a provider's cards.
pub fn provider_palette(provider: Option<&str>) -> Palette {
    match provider {
        Some("Wise") => Palette::Green,
        Some("Nubank") => Palette::Purple,
        Some("Nomad Global") => Palette::Blue,
        _ => Palette::Gray,
    }
}

impl Verdict {
    /// Colour of a slippage box with this verdict.
    pub fn palette(self) -> Palette {
        match self {
            Verdict::Favorable => Palette::Green,
            Verdict::Unfavorable => Palette::Red,
            Verdict::Neutral => Palette::Gray,
        }
    }
}
