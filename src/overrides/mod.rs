// Override tables - which style keys get replaced, per palette and level
//
// Construction is static: each palette defines one baseline override set
// (see base/), and OverrideTable::build derives the set for every
// (palette, level) pair by rewriting alpha channels through the level
// generator. The table is built once at startup and passed into the merge
// explicitly, never referenced as global state.

mod base;
mod levels;

pub use levels::{apply_level, BlurLevel};

use anyhow::{bail, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Mapping of style-key to replacement value, scoped to one (palette, level)
/// pair. Immutable once constructed.
pub type OverrideSet = BTreeMap<String, String>;

/// The closed set of palette variants this tool knows how to patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Latte,
    Frappe,
    Macchiato,
    Mocha,
    /// Synthetic - derived from Macchiato at merge time, not fetched upstream
    Espresso,
}

impl Palette {
    pub const ALL: [Palette; 5] = [
        Palette::Latte,
        Palette::Frappe,
        Palette::Macchiato,
        Palette::Mocha,
        Palette::Espresso,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Palette::Latte => "latte",
            Palette::Frappe => "frappe",
            Palette::Macchiato => "macchiato",
            Palette::Mocha => "mocha",
            Palette::Espresso => "espresso",
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered upstream-name matchers, checked top to bottom with
/// first-match-wins. Frappé appears twice to cover both the accented and the
/// plain spelling. Espresso is deliberately absent: it does not exist
/// upstream and is patched once at synthesis time.
const VARIANT_MATCHERS: &[(&str, Palette)] = &[
    ("latte", Palette::Latte),
    ("frappé", Palette::Frappe),
    ("frappe", Palette::Frappe),
    ("macchiato", Palette::Macchiato),
    ("mocha", Palette::Mocha),
];

/// Resolve a variant display name to a known palette by case-insensitive
/// substring match. Returns None for names this tool does not recognize.
pub fn match_palette(variant_name: &str) -> Option<Palette> {
    let name = variant_name.to_lowercase();
    VARIANT_MATCHERS
        .iter()
        .find(|(needle, _)| name.contains(needle))
        .map(|(_, palette)| *palette)
}

/// Fully expanded override table: every (palette, level) pair resolved.
pub struct OverrideTable {
    sets: HashMap<(Palette, BlurLevel), OverrideSet>,
}

impl OverrideTable {
    /// Build the full table by running every palette baseline through the
    /// level generator at every intensity.
    pub fn build() -> Self {
        let mut sets = HashMap::new();

        for palette in Palette::ALL {
            let baseline: OverrideSet = base::for_palette(palette)
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();

            for level in BlurLevel::ALL {
                sets.insert((palette, level), apply_level(&baseline, level));
            }
        }

        Self { sets }
    }

    /// Look up the override set for a (palette, level) pair.
    ///
    /// Every enumerated pair is populated by `build`, so a miss is a
    /// programming error, not a runtime condition to recover from.
    pub fn get(&self, palette: Palette, level: BlurLevel) -> Result<&OverrideSet> {
        match self.sets.get(&(palette, level)) {
            Some(set) => Ok(set),
            None => bail!("no override set registered for {palette} at level {level}"),
        }
    }
}
