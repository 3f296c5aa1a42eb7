// Upstream theme fetch
//
// The upstream JSON is hand-maintained and occasionally carries trailing
// commas, which serde_json rightly rejects. The repair pass strips them
// before parsing. No retry policy: a failed fetch aborts the run.

use crate::error::SyncError;
use crate::theme::ThemeFamily;
use anyhow::{anyhow, Context};
use regex::Regex;

/// Fetch and parse the upstream theme family document.
pub async fn fetch_theme(client: &reqwest::Client, url: &str) -> Result<ThemeFamily, SyncError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| SyncError::Network(anyhow!(e).context(format!("GET {url}"))))?;

    let body = response
        .text()
        .await
        .map_err(|e| SyncError::Network(anyhow!(e).context(format!("reading body of {url}"))))?;

    parse_theme(&body)
}

/// Parse a theme family document, tolerating trailing commas.
pub fn parse_theme(body: &str) -> Result<ThemeFamily, SyncError> {
    let repaired = strip_trailing_commas(body);
    serde_json::from_str(&repaired)
        .context("upstream theme JSON did not match the expected shape")
        .map_err(SyncError::Parse)
}

/// Remove commas that directly precede a closing brace or bracket.
pub fn strip_trailing_commas(json: &str) -> String {
    // Pattern is a literal, construction cannot fail
    let re = Regex::new(r",(\s*[}\]])").expect("trailing comma pattern");
    re.replace_all(json, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_commas() {
        assert_eq!(
            strip_trailing_commas(r#"{"a": 1,}"#),
            r#"{"a": 1}"#
        );
        assert_eq!(
            strip_trailing_commas("[1, 2,\n]"),
            "[1, 2\n]"
        );
        // Element-separating commas are untouched
        assert_eq!(
            strip_trailing_commas(r#"{"a": "x,y", "b": 2}"#),
            r#"{"a": "x,y", "b": 2}"#
        );
    }

    #[test]
    fn test_parse_theme_tolerates_trailing_commas() {
        let body = r##"{
            "name": "Catppuccin",
            "author": "Catppuccin Org",
            "themes": [
                {
                    "name": "Catppuccin Mocha",
                    "appearance": "dark",
                    "style": {
                        "background": "#1e1e2eff",
                    },
                },
            ],
        }"##;

        let family = parse_theme(body).unwrap();
        assert_eq!(family.themes.len(), 1);
        assert_eq!(family.themes[0].name, "Catppuccin Mocha");
    }

    #[test]
    fn test_parse_theme_surfaces_parse_errors() {
        let err = parse_theme("not json at all").unwrap_err();
        assert!(matches!(err, SyncError::Parse(_)));
    }
}
