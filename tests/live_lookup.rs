//! Live citation lookups against jw.org.

// Network-dependent; enable explicitly with --features integration_test.
#![cfg(feature = "integration_test")]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use verselink::canon::Language;
use verselink::config::Settings;
use verselink::fetch::{cite_scripture, CiteKind, HttpSource};
use verselink::matcher::find_references;
use verselink::reference::Reference;

#[tokio::test]
async fn fetches_a_real_verse() {
    let settings = Settings::default();
    let matches = find_references("Gen 1:1", Language::English);
    let reference = Reference::from_match(&matches[0], Language::English).unwrap();

    match cite_scripture(&HttpSource::new(), &reference, &settings, CiteKind::Entire).await {
        Ok(citation) => {
            println!("Fetched: {}", citation.rendered);
            assert!(citation.title.contains("Genesis 1:1"));
            assert!(!citation.text.is_empty());
        }
        Err(e) => {
            println!("Skipping live assertion, lookup failed: {e}");
        }
    }
}
