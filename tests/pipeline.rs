//! End-to-end tests over the match, validate and rewrite pipeline.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::collections::HashMap;

use async_trait::async_trait;

use verselink::canon::Language;
use verselink::config::Settings;
use verselink::error::{Error, Result};
use verselink::fetch::{cite_scripture, CiteKind, ContentSource};
use verselink::matcher::{find_reference_at, find_references};
use verselink::reference::Reference;
use verselink::render::{convert_to_library_urls, link_references, DisplayMode};

fn settings() -> Settings {
    Settings::default()
}

fn french() -> Settings {
    Settings { lang: Language::French, ..Settings::default() }
}

fn first_reference(text: &str, lang: Language) -> Reference {
    let matches = find_references(text, lang);
    assert!(!matches.is_empty(), "no match in {text:?}");
    Reference::from_match(&matches[0], lang).unwrap_or_else(|| panic!("unresolved: {text:?}"))
}

#[test]
fn prose_with_mixed_references_links_them_all() {
    let input = "Read Gen 1:1, then 1 Co 13:4-7, and finally Jude 5.";
    let rendered = link_references(input, DisplayMode::Markdown, &settings());
    assert!(rendered.changed);
    assert!(rendered.invalid.is_empty());
    assert_eq!(
        rendered.result,
        "Read [Genesis 1:1](jwlibrary:///finder?bible=01001001), \
         then [1 Corinthians 13:4-7](jwlibrary:///finder?bible=46013004-46013007), \
         and finally [Jude 5](jwlibrary:///finder?bible=65001005)."
    );
}

#[test]
fn adjacent_comma_verses_coalesce_into_one_range() {
    let reference = first_reference("Ps 23:1,2", Language::English);
    assert_eq!(reference.display(&settings()), "Psalms 23:1, 2");
    assert_eq!(reference.canonical_id().as_deref(), Some("19023001-19023002"));
}

#[test]
fn non_adjacent_comma_verses_stay_separate() {
    let reference = first_reference("Ps 23:1,4", Language::English);
    assert_eq!(reference.display(&settings()), "Psalms 23:1, 4");
    assert_eq!(reference.passages.len(), 2);
    // The link targets the first passage only
    assert_eq!(reference.canonical_id().as_deref(), Some("19023001"));
}

#[test]
fn chapter_groups_keep_their_punctuation() {
    let reference = first_reference("Ps 23:1; 24:3-5", Language::English);
    assert_eq!(reference.display(&settings()), "Psalms 23:1; 24:3-5");
    // The deep link addresses the first passage
    assert_eq!(reference.canonical_id().as_deref(), Some("19023001"));
}

#[test]
fn single_chapter_books_match_without_a_chapter() {
    let rendered = link_references("see Jude 5 and Phm 7", DisplayMode::Markdown, &settings());
    assert!(rendered.result.contains("[Jude 5](jwlibrary:///finder?bible=65001005)"));
    assert!(rendered.result.contains("[Philemon 7](jwlibrary:///finder?bible=57001007)"));
}

#[test]
fn multi_chapter_books_need_a_chapter_and_verse() {
    assert!(find_references("read Gen 5 today", Language::English).is_empty());
}

#[test]
fn out_of_range_references_are_reported_invalid() {
    let rendered = link_references("Genesis 51:1 and Gen 1:1", DisplayMode::Markdown, &settings());
    assert_eq!(rendered.invalid, vec!["Genesis 51:1".to_string()]);
    assert!(rendered.result.contains("[Genesis 1:1]"));
    assert!(rendered.result.contains("Genesis 51:1"));
}

#[test]
fn french_lexicon_resolves_and_links() {
    let rendered = link_references("voir Jean 3:16", DisplayMode::Markdown, &french());
    assert_eq!(
        rendered.result,
        "voir [Jean 3:16](jwlibrary:///finder?bible=43003016)"
    );
}

#[test]
fn french_abbreviations_match_without_diacritics() {
    let reference = first_reference("Ephesiens 2:8", Language::French);
    assert_eq!(reference.book, 49);
    assert_eq!(reference.canonical_id().as_deref(), Some("49002008"));
}

#[test]
fn relinking_rewritten_text_changes_nothing() {
    let input = "Gen 1:1 and Ps 23:1,2 and Jude 5 near https://example.com";
    let first = link_references(input, DisplayMode::Markdown, &settings());
    let second = link_references(&first.result, DisplayMode::Markdown, &settings());
    assert!(!second.changed);
    assert_eq!(second.result, first.result);
}

#[test]
fn caret_position_selects_the_enclosing_reference() {
    let input = "Gen 1:1 some words Ps 23:1";
    let caret = input.find("23").unwrap();
    let raw = find_reference_at(input, caret, Language::English).unwrap();
    assert_eq!(raw.reference, "Ps 23:1");
    assert!(find_reference_at(input, input.find("words").unwrap(), Language::English).is_none());
}

#[test]
fn url_conversion_covers_wol_and_web_finder() {
    let input = "a https://wol.jw.org/en/wol/d/r1/lp-e/2024240#h=12 \
                 b https://www.jw.org/finder?bible=01002006 \
                 c https://example.com/keep";
    let rendered = convert_to_library_urls(input);
    assert_eq!(
        rendered.result,
        "a jwlibrary:///finder?docid=2024240&par=12 \
         b jwlibrary:///finder?bible=01002006 \
         c https://example.com/keep"
    );
}

struct FakeSource {
    pages: HashMap<String, String>,
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::lookup_status(format!("no page for {url}"), 404))
    }
}

#[tokio::test]
async fn matched_text_cites_end_to_end() {
    let page = concat!(
        r#"<p><span id="v46013004">4 Love is patient<sup>+</sup> and kind.</span>"#,
        r#"<span id="v46013005">5 It does not become provoked.</span></p>"#
    );
    let mut pages = HashMap::new();
    pages.insert(
        "https://www.jw.org/finder?bible=46013004-46013005".to_string(),
        page.to_string(),
    );
    let source = FakeSource { pages };

    let reference = first_reference("1 Co 13:4, 5", Language::English);
    let citation = cite_scripture(&source, &reference, &settings(), CiteKind::Entire)
        .await
        .unwrap();

    assert!(citation.title.contains("1 Corinthians 13:4, 5"));
    assert!(citation.text.contains("**4** Love is patient and kind."));
    assert!(citation.text.contains("**5** It does not become provoked."));
    assert!(citation.rendered.starts_with("> [!verse] BIBLE"));
}
