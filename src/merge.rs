// Theme merger - applies override sets onto the fetched variant list
//
// Order of operations is load-bearing:
// 1. Synthesize Espresso from a DEEP copy of Macchiato, before Macchiato
//    itself is patched, so Espresso inherits the unpatched syntax colors.
// 2. Append it to the variant list.
// 3. Patch every variant whose name resolves to a known palette.
// 4. Suffix every display name, the synthetic variant included.

use crate::overrides::{match_palette, BlurLevel, OverrideSet, OverrideTable, Palette};
use crate::theme::{Appearance, StyleMap, ThemeFamily, Variant};
use anyhow::Result;
use serde_json::Value;

/// Display name written into the merged family metadata.
pub const FAMILY_NAME: &str = "Catppuccin Blur";
pub const FAMILY_AUTHOR: &str = "Jens Lystad <jens@lystad.io>";

/// Case-insensitive marker locating the variant Espresso is derived from.
const BASE_VARIANT_MARKER: &str = "macchiato";
const SYNTHETIC_NAME: &str = "Catppuccin Espresso";
const NAME_SUFFIX: &str = " (Blur)";

/// Merge the override table into the fetched theme family at `level`.
///
/// Mutates the family in place: appends the synthetic variant, patches the
/// style mappings, renames every variant, and rewrites the family metadata.
pub fn merge(family: &mut ThemeFamily, table: &OverrideTable, level: BlurLevel) -> Result<()> {
    match synthesize_espresso(&family.themes, table, level)? {
        Some(espresso) => family.themes.push(espresso),
        None => {
            tracing::debug!("no {BASE_VARIANT_MARKER} variant upstream, skipping espresso synthesis")
        }
    }

    for variant in &mut family.themes {
        match match_palette(&variant.name) {
            Some(palette) => {
                apply_overrides(&mut variant.style, table.get(palette, level)?);
                tracing::info!("applied {} overrides to {:?}", palette, variant.name);
            }
            None => tracing::debug!(
                "variant {:?} matches no known palette, styles left untouched",
                variant.name
            ),
        }
    }

    for variant in &mut family.themes {
        variant.name.push_str(NAME_SUFFIX);
    }

    family.name = FAMILY_NAME.to_string();
    family.author = FAMILY_AUTHOR.to_string();

    Ok(())
}

/// Clone the base variant into the synthetic Espresso variant.
///
/// Returns None when no base variant exists upstream - the merge then simply
/// proceeds without the synthetic variant. The clone is deep (Variant owns
/// its style tree), so patching Espresso's chrome never corrupts the source.
fn synthesize_espresso(
    themes: &[Variant],
    table: &OverrideTable,
    level: BlurLevel,
) -> Result<Option<Variant>> {
    let Some(base) = themes
        .iter()
        .find(|v| v.name.to_lowercase().contains(BASE_VARIANT_MARKER))
    else {
        return Ok(None);
    };

    let mut espresso = base.clone();
    espresso.name = SYNTHETIC_NAME.to_string();
    espresso.appearance = Appearance::Dark;
    // Syntax colors inherit from the base; only UI chrome keys are replaced
    apply_overrides(&mut espresso.style, table.get(Palette::Espresso, level)?);

    Ok(Some(espresso))
}

/// Overwrite matching style keys; keys absent from the override set are kept.
fn apply_overrides(style: &mut StyleMap, overrides: &OverrideSet) {
    for (key, value) in overrides {
        style.insert(key.clone(), Value::String(value.clone()));
    }
}
