//! Rewriting matched citations into linked text.
//!
//! Walks the matches left to right and splices replacement markup over each
//! valid, non-linked, non-escaped reference. Running the rewrite over its own
//! output changes nothing: every inserted link form ends in `](…)` or
//! `</a>`, which the next scan flags as already linked.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::ident;
use crate::matcher::find_references;
use crate::reference::Reference;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"https://[^\s)]+")
        .unwrap_or_else(|e| unreachable!("invalid url pattern: {e}"));
}

/// How a rewritten citation is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Canonical display text only, no link.
    Plain,
    /// Markdown link `[display](url)`.
    #[default]
    Markdown,
    /// HTML anchor with the target visible on hover.
    Html,
}

/// Result of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The rewritten text (identical to the input when nothing changed).
    pub result: String,
    /// Whether at least one replacement was made.
    pub changed: bool,
    /// Matched substrings that resolved to a book but failed validation.
    pub invalid: Vec<String>,
}

/// Replace every valid scripture reference in `input` with the chosen
/// display form.
///
/// References that are already links are skipped; references escaped with a
/// leading quote are normalized to their display text without a link, and
/// the quote itself stays in the output so later passes still see the
/// escape. Invalid references are reported, never silently rewritten.
#[must_use]
pub fn link_references(input: &str, mode: DisplayMode, settings: &Settings) -> Rendered {
    // Rendered headings and data elements keep their formatting; only text
    // fragments are rewritten.
    if input.starts_with("<h") || input.starts_with("<div data") {
        return Rendered { result: input.to_string(), changed: false, invalid: Vec::new() };
    }

    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut changed = false;
    let mut invalid = Vec::new();

    for raw in find_references(input, settings.lang) {
        let Some(reference) = Reference::from_match(&raw, settings.lang) else {
            continue;
        };
        if reference.is_link_already {
            continue;
        }
        if !reference.has_valid_passage() {
            invalid.push(reference.matched.clone());
            continue;
        }

        let display = reference.display(settings);
        let markup = if reference.is_plain_text {
            display
        } else {
            match mode {
                DisplayMode::Plain => display,
                DisplayMode::Markdown => match reference.canonical_id() {
                    Some(id) => format!("[{display}]({})", ident::library_link(&id)),
                    None => display,
                },
                DisplayMode::Html => match reference.canonical_id() {
                    Some(id) => {
                        let url = ident::library_link(&id);
                        // keep the target visible on hover
                        format!(r#"<a href="{url}" title="{url}">{display}</a>"#)
                    }
                    None => display,
                },
            }
        };

        out.push_str(&input[cursor..reference.start]);
        if markup != input[reference.start..reference.end] {
            changed = true;
        }
        out.push_str(&markup);
        cursor = reference.end;
    }

    out.push_str(&input[cursor..]);
    Rendered { result: out, changed, invalid }
}

/// Swap jw.org finder and WOL urls in `input` for JW Library app urls.
#[must_use]
pub fn convert_to_library_urls(input: &str) -> Rendered {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut changed = false;

    for m in URL_RE.find_iter(input) {
        let url = m.as_str();
        let replacement = if url.starts_with(ident::WOL_ROOT) {
            match ident::wol_params(url) {
                Ok(params) => {
                    let mut link = format!("{}docid={}", ident::LIBRARY_FINDER, params.doc_id);
                    if let Some(par) = params.par_id {
                        link.push_str(&format!("&par={par}"));
                    }
                    Some(link)
                }
                Err(_) => None,
            }
        } else if url.starts_with(ident::WEB_FINDER) {
            Some(url.replacen(ident::WEB_FINDER, ident::LIBRARY_FINDER, 1))
        } else {
            None
        };

        if let Some(replacement) = replacement {
            out.push_str(&input[cursor..m.start()]);
            out.push_str(&replacement);
            cursor = m.end();
            changed = true;
        }
    }

    out.push_str(&input[cursor..]);
    Rendered { result: out, changed, invalid: Vec::new() }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn markdown_mode_inserts_a_library_link() {
        let r = link_references("See Gen 2:6 here", DisplayMode::Markdown, &settings());
        assert!(r.changed);
        assert_eq!(
            r.result,
            "See [Genesis 2:6](jwlibrary:///finder?bible=01002006) here"
        );
    }

    #[test]
    fn html_mode_shows_the_target_on_hover() {
        let r = link_references("Gen 2:6", DisplayMode::Html, &settings());
        let url = "jwlibrary:///finder?bible=01002006";
        assert_eq!(
            r.result,
            format!(r#"<a href="{url}" title="{url}">Genesis 2:6</a>"#)
        );
    }

    #[test]
    fn plain_mode_expands_abbreviations_without_linking() {
        let r = link_references("ps 5:10", DisplayMode::Plain, &settings());
        assert_eq!(r.result, "Psalms 5:10");
    }

    #[test]
    fn nbsp_spaced_references_still_link() {
        let r = link_references("1&nbsp;Co 13:4", DisplayMode::Markdown, &settings());
        assert!(r.changed);
        assert_eq!(
            r.result,
            "[1 Corinthians 13:4](jwlibrary:///finder?bible=46013004)"
        );
    }

    #[test]
    fn existing_links_are_not_relinked() {
        let input = "[Gen 1:1](jwlibrary:///finder?bible=01001001)";
        let r = link_references(input, DisplayMode::Markdown, &settings());
        assert!(!r.changed);
        assert_eq!(r.result, input);
    }

    #[test]
    fn rewriting_is_idempotent_on_its_own_output() {
        let first = link_references("Gen 1:1 and 1 Co 13:4-7", DisplayMode::Markdown, &settings());
        assert!(first.changed);
        let second = link_references(&first.result, DisplayMode::Markdown, &settings());
        assert!(!second.changed);
        assert_eq!(second.result, first.result);

        let html = link_references("Gen 1:1", DisplayMode::Html, &settings());
        let again = link_references(&html.result, DisplayMode::Html, &settings());
        assert!(!again.changed);
    }

    #[test]
    fn escaped_references_stay_plain() {
        let r = link_references("'Gen 2:6", DisplayMode::Markdown, &settings());
        assert!(r.changed);
        assert_eq!(r.result, "'Genesis 2:6");
        // the quote survives, so another pass leaves the text alone
        let again = link_references(&r.result, DisplayMode::Markdown, &settings());
        assert!(!again.changed);
        assert_eq!(again.result, "'Genesis 2:6");
    }

    #[test]
    fn invalid_references_are_reported_not_rewritten() {
        let r = link_references("Genesis 2:999", DisplayMode::Markdown, &settings());
        assert!(!r.changed);
        assert_eq!(r.result, "Genesis 2:999");
        assert_eq!(r.invalid, vec!["Genesis 2:999".to_string()]);
    }

    #[test]
    fn headings_pass_through_untouched() {
        let input = "<h2>Gen 2:6</h2>";
        let r = link_references(input, DisplayMode::Html, &settings());
        assert!(!r.changed);
        assert_eq!(r.result, input);
    }

    #[test]
    fn multiple_references_all_rewrite() {
        let r = link_references("Gen 1:1, then Jude 5.", DisplayMode::Markdown, &settings());
        assert!(r.result.contains("[Genesis 1:1](jwlibrary:///finder?bible=01001001)"));
        assert!(r.result.contains("[Jude 5](jwlibrary:///finder?bible=65001005)"));
    }

    #[test]
    fn wol_urls_convert_to_library_urls() {
        let r = convert_to_library_urls("see https://wol.jw.org/en/wol/d/r1/lp-e/2024240#h=5 now");
        assert!(r.changed);
        assert_eq!(r.result, "see jwlibrary:///finder?docid=2024240&par=5 now");
    }

    #[test]
    fn web_finder_urls_convert_to_library_urls() {
        let r = convert_to_library_urls("https://www.jw.org/finder?bible=01002006");
        assert!(r.changed);
        assert_eq!(r.result, "jwlibrary:///finder?bible=01002006");
    }

    #[test]
    fn unrelated_urls_are_left_alone() {
        let input = "https://example.com/page";
        let r = convert_to_library_urls(input);
        assert!(!r.changed);
        assert_eq!(r.result, input);
    }
}
