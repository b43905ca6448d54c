//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Settings are threaded explicitly into the matcher, validator and citation
//! builder; nothing here is global mutable state.

use dotenv::dotenv;
use std::env;

use crate::canon::Language;
use crate::error::Result;

/// Default template when citing entire Bible verses.
pub const DEFAULT_SCRIPTURE_TEMPLATE: &str = "> [!verse] BIBLE — {title}\n> {text}\n";

/// Default template when citing an entire publication paragraph.
pub const DEFAULT_PARAGRAPH_TEMPLATE: &str = "> [!cite] PAR. — {title}\n> {text}\n";

/// Default template when citing a short snippet.
pub const DEFAULT_SNIPPET_TEMPLATE: &str = "{title}\u{2002}\u{201c}*{text}*\u{201d}";

/// Configuration for citation matching and formatting.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Active language: selects the book-name and abbreviation tables.
    pub lang: Language,
    /// Insert a space after `,`/`.`/`;` in cleaned citation text.
    pub space_after_punct: bool,
    /// Apply bold markup to verse and paragraph numbers in cited text.
    pub bold_verse_no: bool,
    /// Also add a library deep link when inserting a citation.
    pub citation_link: bool,
    /// Word count limit for snippet citations.
    pub snippet_length: usize,
    /// Template for full scripture citations (`{title}`, `{text}`).
    pub scripture_template: String,
    /// Template for publication paragraph citations (`{title}`, `{text}`).
    pub paragraph_template: String,
    /// Template for snippet citations (`{title}`, `{text}`).
    pub snippet_template: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: Language::English,
            space_after_punct: true,
            bold_verse_no: true,
            citation_link: true,
            snippet_length: 20,
            scripture_template: DEFAULT_SCRIPTURE_TEMPLATE.to_string(),
            paragraph_template: DEFAULT_PARAGRAPH_TEMPLATE.to_string(),
            snippet_template: DEFAULT_SNIPPET_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let lang = env::var("VERSELINK_LANG").ok().map_or(Language::English, |code| {
            Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!("Unknown VERSELINK_LANG {code:?}, keeping English");
                Language::English
            })
        });

        let snippet_length = env::var("VERSELINK_SNIPPET_LENGTH")
            .ok()
            .and_then(|words| words.parse::<usize>().ok())
            .map_or(20, |words| words.clamp(1, 100));

        Ok(Self {
            lang,
            space_after_punct: env_flag("VERSELINK_SPACE_AFTER_PUNCT", true),
            bold_verse_no: env_flag("VERSELINK_BOLD_VERSE_NO", true),
            citation_link: env_flag("VERSELINK_CITATION_LINK", true),
            snippet_length,
            scripture_template: env_or("VERSELINK_SCRIPTURE_TEMPLATE", DEFAULT_SCRIPTURE_TEMPLATE),
            paragraph_template: env_or("VERSELINK_PARAGRAPH_TEMPLATE", DEFAULT_PARAGRAPH_TEMPLATE),
            snippet_template: env_or("VERSELINK_SNIPPET_TEMPLATE", DEFAULT_SNIPPET_TEMPLATE),
        })
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name).map_or(default, |flag| flag != "0" && flag.to_lowercase() != "false")
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
