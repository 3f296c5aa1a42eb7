// Blur intensity levels and the alpha-channel rewriter
//
// A level defines four two-digit alpha suffixes, one per key category.
// `apply_level` copies a base override set and rewrites the alpha channel of
// every `#RRGGBBAA` value whose key matches one of the ordered category
// rules below. First match wins - the rule order is load-bearing, e.g.
// "tab.active_background" must hit the active rule before the surface rule
// would ever see it, and ghost_element.hover must never reach the
// hover/selected rule.

use crate::overrides::OverrideSet;
use anyhow::{bail, Result};
use std::fmt;

/// Named degree of transparency. Higher alphas = more opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlurLevel {
    /// 60% opacity
    Light,
    /// 85% opacity (the default, used for the plain "(Blur)" variant names)
    Medium,
    /// 88% opacity
    Heavy,
}

/// The four alpha substitution values a level applies, one per key category.
pub struct LevelAlphas {
    /// Primary surfaces: window background, status bar, title bar
    pub main: &'static str,
    /// Secondary surfaces
    pub surface: &'static str,
    /// Interactive elements: scrollbar thumb, hover, selected
    pub elements: &'static str,
    /// Active/highlighted elements: active tab, drop target, ghost elements
    pub active: &'static str,
}

impl BlurLevel {
    pub const ALL: [BlurLevel; 3] = [BlurLevel::Light, BlurLevel::Medium, BlurLevel::Heavy];

    pub fn alphas(self) -> LevelAlphas {
        match self {
            BlurLevel::Light => LevelAlphas {
                main: "99",
                surface: "8c",
                elements: "04",
                active: "06",
            },
            BlurLevel::Medium => LevelAlphas {
                main: "d7",
                surface: "d0",
                elements: "12",
                active: "18",
            },
            BlurLevel::Heavy => LevelAlphas {
                main: "e0",
                surface: "db",
                elements: "1e",
                active: "24",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlurLevel::Light => "light",
            BlurLevel::Medium => "medium",
            BlurLevel::Heavy => "heavy",
        }
    }

    /// Parse a level name from config or the command line.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "light" => Ok(BlurLevel::Light),
            "medium" => Ok(BlurLevel::Medium),
            "heavy" => Ok(BlurLevel::Heavy),
            other => bail!("unknown blur level {other:?} (expected light, medium or heavy)"),
        }
    }
}

impl fmt::Display for BlurLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Key classification
// ─────────────────────────────────────────────────────────────────────────────

/// Which of a level's four alpha values a style key receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaSlot {
    Main,
    Surface,
    Active,
    Elements,
}

/// One classification rule: a named predicate plus the slot it assigns.
struct AlphaRule {
    /// Rule label, read by the table-audit tests
    #[allow(dead_code)]
    name: &'static str,
    matches: fn(&str) -> bool,
    slot: AlphaSlot,
}

/// Ordered rule list, evaluated top to bottom with first-match-wins.
const ALPHA_RULES: &[AlphaRule] = &[
    AlphaRule {
        name: "primary surface",
        matches: |key| {
            key.contains("background")
                && (key.contains("status_bar") || key.contains("title_bar") || key == "background")
        },
        slot: AlphaSlot::Main,
    },
    AlphaRule {
        name: "surface",
        matches: |key| key.contains("surface"),
        slot: AlphaSlot::Surface,
    },
    AlphaRule {
        name: "active element",
        matches: |key| {
            ["ghost_element", "drop_target", "tab.active"]
                .iter()
                .any(|needle| key.contains(needle))
        },
        slot: AlphaSlot::Active,
    },
    AlphaRule {
        name: "interactive element",
        matches: |key| {
            ["thumb", "hover", "selected"]
                .iter()
                .any(|needle| key.contains(needle))
        },
        slot: AlphaSlot::Elements,
    },
];

/// Classify a style key against the ordered rule list.
/// Returns None for keys no rule claims (left untouched by `apply_level`).
pub fn classify(key: &str) -> Option<AlphaSlot> {
    ALPHA_RULES
        .iter()
        .find(|rule| (rule.matches)(key))
        .map(|rule| rule.slot)
}

/// Explain which rule claimed a key, for table audits.
#[cfg(test)]
fn classify_rule_name(key: &str) -> Option<&'static str> {
    ALPHA_RULES
        .iter()
        .find(|rule| (rule.matches)(key))
        .map(|rule| rule.name)
}

/// A value is alpha-rewritable only when it is a `#RRGGBBAA` hex string.
/// The ASCII check keeps the later byte-slice on a char boundary.
fn has_explicit_alpha(value: &str) -> bool {
    value.len() == 9 && value.is_ascii() && value.starts_with('#')
}

/// Derive the override set for `level` from the baseline set.
///
/// Total function: keys matching no rule and values without an explicit alpha
/// channel pass through unchanged. Re-applying the same level is a no-op.
pub fn apply_level(base: &OverrideSet, level: BlurLevel) -> OverrideSet {
    let alphas = level.alphas();

    base.iter()
        .map(|(key, value)| {
            let rewritten = if has_explicit_alpha(value) {
                match classify(key) {
                    Some(AlphaSlot::Main) => Some(alphas.main),
                    Some(AlphaSlot::Surface) => Some(alphas.surface),
                    Some(AlphaSlot::Active) => Some(alphas.active),
                    Some(AlphaSlot::Elements) => Some(alphas.elements),
                    None => None,
                }
            } else {
                None
            };

            let value = match rewritten {
                Some(alpha) => format!("{}{}", &value[..7], alpha),
                None => value.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::OverrideSet;

    fn base() -> OverrideSet {
        OverrideSet::from([
            ("background.appearance".to_string(), "blurred".to_string()),
            ("background".to_string(), "#24273ad7".to_string()),
            ("status_bar.background".to_string(), "#24273ad7".to_string()),
            ("surface.background".to_string(), "#24273ad0".to_string()),
            ("tab.active_background".to_string(), "#f4dbd612".to_string()),
            ("ghost_element.hover".to_string(), "#f4dbd608".to_string()),
            (
                "scrollbar.thumb.background".to_string(),
                "#f4dbd612".to_string(),
            ),
            ("editor.line_number".to_string(), "#ffffff20".to_string()),
            ("elevated_surface.background".to_string(), "#1e2030".to_string()),
            ("panel.focused_border".to_string(), "00000000".to_string()),
        ])
    }

    #[test]
    fn test_classification_precedence() {
        // Primary surface before the generic background check
        assert_eq!(classify("background"), Some(AlphaSlot::Main));
        assert_eq!(classify("status_bar.background"), Some(AlphaSlot::Main));
        assert_eq!(classify("title_bar.background"), Some(AlphaSlot::Main));

        // Surface rule
        assert_eq!(classify("surface.background"), Some(AlphaSlot::Surface));
        assert_eq!(
            classify("elevated_surface.background"),
            Some(AlphaSlot::Surface)
        );

        // Active rule claims ghost elements before the hover/selected rule can
        assert_eq!(classify("ghost_element.hover"), Some(AlphaSlot::Active));
        assert_eq!(classify("ghost_element.selected"), Some(AlphaSlot::Active));
        assert_eq!(classify("tab.active_background"), Some(AlphaSlot::Active));
        assert_eq!(classify("drop_target.background"), Some(AlphaSlot::Active));

        // Interactive elements
        assert_eq!(
            classify("scrollbar.thumb.background"),
            Some(AlphaSlot::Elements)
        );

        // Unclaimed keys
        assert_eq!(classify("editor.line_number"), None);
        assert_eq!(classify("border"), None);
    }

    #[test]
    fn test_ghost_elements_never_reach_interactive_rule() {
        assert_eq!(classify_rule_name("ghost_element.hover"), Some("active element"));
        assert_eq!(
            classify_rule_name("ghost_element.selected"),
            Some("active element")
        );
    }

    #[test]
    fn test_apply_level_rewrites_alpha_only() {
        let out = apply_level(&base(), BlurLevel::Light);

        // Color body preserved, alpha replaced per category
        assert_eq!(out["background"], "#24273a99");
        assert_eq!(out["status_bar.background"], "#24273a99");
        assert_eq!(out["surface.background"], "#24273a8c");
        assert_eq!(out["tab.active_background"], "#f4dbd606");
        assert_eq!(out["ghost_element.hover"], "#f4dbd606");
        assert_eq!(out["scrollbar.thumb.background"], "#f4dbd604");
    }

    #[test]
    fn test_apply_level_passes_through_unmatched_and_malformed() {
        let out = apply_level(&base(), BlurLevel::Heavy);

        // Unclaimed key with an alpha channel
        assert_eq!(out["editor.line_number"], "#ffffff20");
        // Not a color at all
        assert_eq!(out["background.appearance"], "blurred");
        // 6-digit color (no explicit alpha)
        assert_eq!(out["elevated_surface.background"], "#1e2030");
        // Malformed value (missing '#') is left alone even though the key
        // would otherwise be unclaimed anyway
        assert_eq!(out["panel.focused_border"], "00000000");
    }

    #[test]
    fn test_apply_level_same_level_is_idempotent() {
        let once = apply_level(&base(), BlurLevel::Medium);
        let twice = apply_level(&once, BlurLevel::Medium);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_level_different_level_overwrites() {
        let medium = apply_level(&base(), BlurLevel::Medium);
        let then_light = apply_level(&medium, BlurLevel::Light);

        assert_eq!(medium["background"], "#24273ad7");
        assert_eq!(then_light["background"], "#24273a99");
        // And is identical to deriving light directly from the base
        assert_eq!(then_light, apply_level(&base(), BlurLevel::Light));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(BlurLevel::from_name("medium").unwrap(), BlurLevel::Medium);
        assert_eq!(BlurLevel::from_name(" Heavy ").unwrap(), BlurLevel::Heavy);
        assert!(BlurLevel::from_name("opaque").is_err());
    }
}
