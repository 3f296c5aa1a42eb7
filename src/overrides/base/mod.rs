//! Base override tables (compiled into the binary)
//!
//! One module per palette so a table can be tuned without loading the other
//! four into context. Each table is the medium-opacity baseline; the level
//! generator rewrites the alpha channels for the other intensity levels.

use crate::overrides::Palette;

mod espresso;
mod frappe;
mod latte;
mod macchiato;
mod mocha;

/// Baseline style overrides for a palette, as (style-key, value) pairs.
pub fn for_palette(palette: Palette) -> &'static [(&'static str, &'static str)] {
    match palette {
        Palette::Latte => latte::OVERRIDES,
        Palette::Frappe => frappe::OVERRIDES,
        Palette::Macchiato => macchiato::OVERRIDES,
        Palette::Mocha => mocha::OVERRIDES,
        Palette::Espresso => espresso::OVERRIDES,
    }
}
