//! Passage validation and normalization.
//!
//! Turns a raw match (book token plus chapter:verse groups) into a
//! [`Reference`]: one resolved book and an ordered list of [`Passage`]s,
//! each validated against the canon dataset. Invalid passages are kept and
//! marked rather than dropped, so callers can render or report them
//! alongside their valid siblings.

use serde::{Deserialize, Serialize};

use crate::canon::{self, resolve_book, Language};
use crate::config::Settings;
use crate::ident;
use crate::matcher::RawMatch;

/// The separator that joined a passage's verses in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Separator {
    /// A single verse, no separator.
    #[default]
    None,
    /// An inclusive `-` range.
    Range,
    /// A `,` list of adjacent verses.
    List,
}

/// How much context a passage shows in the rendered display string,
/// determined by its position within the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassagePrefix {
    /// First passage: show "Book Chapter:".
    BookAndChapter,
    /// Passage opening a new chapter: show "Chapter:" only.
    ChapterOnly,
    /// Passage continuing the current chapter: show only the verses.
    VerseOnly,
}

/// Validation outcome of a passage. Computed once, never re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassageState {
    /// Chapter and verses are all within the canon.
    Valid,
    /// Chapter or verse out of range for the book; no link is produced.
    Invalid,
}

/// One contiguous verse span within one chapter of the resolved book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Book ordinal (1..=66), shared with the parent reference.
    pub book: u8,
    /// Chapter number (1 for books without chapter divisions).
    pub chapter: u16,
    /// First verse of the span.
    pub first: u16,
    /// Last verse of the span (`>= first`).
    pub last: u16,
    /// Separator used in the source.
    pub separator: Separator,
    /// Display prefix policy for this passage's position.
    pub prefix: PassagePrefix,
    /// Validation outcome.
    pub state: PassageState,
}

impl Passage {
    /// Whether the passage validated against the canon.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state == PassageState::Valid
    }

    /// The canonical id (or id range) for a valid passage.
    #[must_use]
    pub fn canonical_id(&self) -> Option<String> {
        self.is_valid()
            .then(|| ident::encode_span(self.book, self.chapter, self.first, self.last))
    }

    /// The ordered per-verse element ids needed to fetch this passage's
    /// text. Empty for invalid passages.
    #[must_use]
    pub fn element_ids(&self) -> Vec<String> {
        if self.is_valid() {
            ident::span_element_ids(self.book, self.chapter, self.first, self.last)
        } else {
            Vec::new()
        }
    }

    /// The verse numbers as displayed, e.g. `6`, `4-7` or `1, 2`.
    #[must_use]
    pub fn verse_display(&self, settings: &Settings) -> String {
        match self.separator {
            Separator::None => self.first.to_string(),
            Separator::Range => format!("{}-{}", self.first, self.last),
            Separator::List => {
                let space = if settings.space_after_punct { " " } else { "" };
                format!("{},{space}{}", self.first, self.last)
            }
        }
    }

    /// The passage's display fragment under its prefix policy,
    /// e.g. `Genesis 2:6`, `24:3-5` or `5`.
    #[must_use]
    pub fn display_fragment(&self, settings: &Settings) -> String {
        let verses = self.verse_display(settings);
        match self.prefix {
            PassagePrefix::BookAndChapter => {
                let book = canon::book_name(self.book, settings.lang).unwrap_or("?");
                if canon::has_chapters(self.book) {
                    format!("{book} {}:{verses}", self.chapter)
                } else {
                    format!("{book} {verses}")
                }
            }
            PassagePrefix::ChapterOnly => format!("{}:{verses}", self.chapter),
            PassagePrefix::VerseOnly => verses,
        }
    }
}

/// A full matched citation: one resolved book plus its passages in source
/// order, along with everything needed to rewrite the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Resolved book ordinal (1..=66).
    pub book: u8,
    /// Passages in source order. Individual entries may be invalid.
    pub passages: Vec<Passage>,
    /// The original matched substring, for replacement.
    pub matched: String,
    /// Byte offset of the match start in the scanned input.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Display without a hyperlink even though valid.
    pub is_plain_text: bool,
    /// Already inside a rendered link; must not be re-linked.
    pub is_link_already: bool,
}

impl Reference {
    /// Resolve and validate a raw match.
    ///
    /// Returns `None` when the book token does not resolve in the active
    /// language; most citation-shaped text is not a scripture reference,
    /// so this is the normal negative outcome.
    #[must_use]
    pub fn from_match(raw: &RawMatch, lang: Language) -> Option<Self> {
        let book = resolve_book(&raw.book_token, lang)?;

        let mut passages = Vec::new();
        for segment in &raw.segments {
            build_passages(book, &segment.text, raw.no_chapter, &mut passages);
        }
        if passages.is_empty() {
            return None;
        }

        Some(Self {
            book,
            passages,
            matched: raw.reference.clone(),
            start: raw.start,
            end: raw.end,
            is_plain_text: raw.is_plain_text,
            is_link_already: raw.is_link_already,
        })
    }

    /// Whether at least one passage validated.
    #[must_use]
    pub fn has_valid_passage(&self) -> bool {
        self.passages.iter().any(Passage::is_valid)
    }

    /// Whether every passage validated.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.passages.iter().all(Passage::is_valid)
    }

    /// The canonical id (or id range) used when linking the whole
    /// reference: the first valid passage's span.
    #[must_use]
    pub fn canonical_id(&self) -> Option<String> {
        self.passages.iter().find_map(Passage::canonical_id)
    }

    /// Every per-verse element id across the valid passages, in order.
    #[must_use]
    pub fn element_ids(&self) -> Vec<String> {
        self.passages.iter().flat_map(|p| p.element_ids()).collect()
    }

    /// The canonical human-readable form, e.g. `Genesis 2:6` or
    /// `Psalms 23:1, 2; 24:3-5`.
    #[must_use]
    pub fn display(&self, settings: &Settings) -> String {
        let space = if settings.space_after_punct { " " } else { "" };
        let mut out = String::new();
        for passage in &self.passages {
            match passage.prefix {
                PassagePrefix::BookAndChapter => {}
                PassagePrefix::ChapterOnly => out.push_str(&format!(";{space}")),
                PassagePrefix::VerseOnly => out.push_str(&format!(",{space}")),
            }
            out.push_str(&passage.display_fragment(settings));
        }
        out
    }
}

/// A parsed verse token: first verse, last verse and the separator that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseSpan {
    /// First verse of the span.
    pub first: u16,
    /// Last verse of the span.
    pub last: u16,
    /// Source separator.
    pub separator: Separator,
}

impl VerseSpan {
    /// Parse one verse token.
    ///
    /// A bare number yields a single verse. A `-` pair yields an inclusive
    /// range; an inverted range collapses to the first verse. A `,` pair is
    /// accepted as a two-verse range only when the numbers are adjacent
    /// (the `AdjacentVerseOnly` policy inherited from the data source);
    /// otherwise only the first verse survives the token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some((a, b)) = token.split_once('-') {
            let first = parse_verse(a)?;
            let last = parse_verse(b).unwrap_or(first);
            if last > first {
                return Some(Self { first, last, separator: Separator::Range });
            }
            return Some(Self { first, last: first, separator: Separator::None });
        }
        if let Some((a, b)) = token.split_once(',') {
            let first = parse_verse(a)?;
            // AdjacentVerseOnly: "4,5" is a shorthand range, "4,9" is not
            if parse_verse(b) == Some(first + 1) {
                return Some(Self { first, last: first + 1, separator: Separator::List });
            }
            return Some(Self { first, last: first, separator: Separator::None });
        }
        let first = parse_verse(token)?;
        Some(Self { first, last: first, separator: Separator::None })
    }
}

fn parse_verse(text: &str) -> Option<u16> {
    text.trim().parse::<u16>().ok()
}

/// Parse one chapter:verse group into passages, appending to `passages`.
///
/// Prefix policy is assigned by position: the very first passage shows book
/// and chapter, a chapter change shows the chapter, and a continuation
/// shows only the verses. Adjacent single verses in a comma list coalesce
/// into one list-separated range passage.
fn build_passages(book: u8, segment: &str, no_chapter: bool, passages: &mut Vec<Passage>) {
    let (chapter, verse_list) = if no_chapter {
        (1, segment)
    } else {
        match segment.split_once(':') {
            Some((chapter, verses)) => (chapter.trim().parse::<u16>().unwrap_or(0), verses),
            // A group without a colon cannot name a verse; record it as
            // an invalid chapter rather than dropping it silently.
            None => (0, segment),
        }
    };

    for token in verse_list.split(',') {
        let Some(span) = VerseSpan::from_token(token) else {
            continue;
        };

        // Coalesce "4,5" style lists: a single verse directly following
        // the previous passage's last verse extends it instead of opening
        // a new passage. Compares verse numbers, not token shapes.
        let coalesces = span.separator == Separator::None
            && passages.last().is_some_and(|prev| {
                prev.chapter == chapter
                    && prev.separator != Separator::Range
                    && prev.is_valid()
                    && span.first == prev.last + 1
            })
            && verse_in_range(book, chapter, span.first);
        if coalesces {
            if let Some(prev) = passages.last_mut() {
                prev.last = span.first;
                prev.separator = Separator::List;
            }
            continue;
        }

        let prefix = match passages.last() {
            None => PassagePrefix::BookAndChapter,
            Some(prev) if prev.chapter == chapter => PassagePrefix::VerseOnly,
            Some(_) => PassagePrefix::ChapterOnly,
        };

        let state = if chapter_in_range(book, chapter)
            && verse_in_range(book, chapter, span.first)
            && verse_in_range(book, chapter, span.last)
        {
            PassageState::Valid
        } else {
            PassageState::Invalid
        };

        passages.push(Passage {
            book,
            chapter,
            first: span.first,
            last: span.last,
            separator: span.separator,
            prefix,
            state,
        });
    }
}

fn chapter_in_range(book: u8, chapter: u16) -> bool {
    chapter >= 1 && canon::chapter_count(book).is_ok_and(|count| chapter <= count)
}

fn verse_in_range(book: u8, chapter: u16, verse: u16) -> bool {
    verse >= 1 && canon::max_verse(book, chapter).is_ok_and(|max| verse <= max)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::matcher::find_references;

    fn parse_one(text: &str) -> Reference {
        let matches = find_references(text, Language::English);
        assert_eq!(matches.len(), 1, "expected one match in {text:?}");
        Reference::from_match(&matches[0], Language::English)
            .unwrap_or_else(|| panic!("no reference in {text:?}"))
    }

    #[test]
    fn simple_reference_validates() {
        let settings = Settings::default();
        let r = parse_one("Gen 2:6");
        assert_eq!(r.book, 1);
        assert_eq!(r.passages.len(), 1);
        let p = &r.passages[0];
        assert_eq!((p.chapter, p.first, p.last), (2, 6, 6));
        assert!(p.is_valid());
        assert_eq!(r.display(&settings), "Genesis 2:6");
        assert_eq!(r.canonical_id().as_deref(), Some("01002006"));
    }

    #[test]
    fn verse_out_of_range_is_invalid_but_kept() {
        let r = parse_one("Genesis 2:999");
        assert_eq!(r.passages.len(), 1);
        assert!(!r.passages[0].is_valid());
        assert_eq!(r.passages[0].state, PassageState::Invalid);
        assert_eq!(r.canonical_id(), None);
        assert!(r.element_ids().is_empty());
    }

    #[test]
    fn chapter_out_of_range_is_invalid() {
        let r = parse_one("Gen 51:1");
        assert!(!r.passages[0].is_valid());
    }

    #[test]
    fn dash_range_produces_one_passage() {
        let settings = Settings::default();
        let r = parse_one("1 Co 13:4-7");
        assert_eq!(r.book, 46);
        assert_eq!(r.passages.len(), 1);
        let p = &r.passages[0];
        assert_eq!((p.first, p.last), (4, 7));
        assert_eq!(p.separator, Separator::Range);
        assert_eq!(r.display(&settings), "1 Corinthians 13:4-7");
        assert_eq!(r.canonical_id().as_deref(), Some("46013004-46013007"));
    }

    #[test]
    fn inverted_range_collapses_to_single_verse() {
        let r = parse_one("Gen 2:7-4");
        let p = &r.passages[0];
        assert_eq!((p.first, p.last), (7, 7));
        assert_eq!(p.separator, Separator::None);
    }

    #[test]
    fn no_chapter_book_gets_implicit_chapter_one() {
        let settings = Settings::default();
        let r = parse_one("Jude 5");
        assert_eq!(r.book, 65);
        let p = &r.passages[0];
        assert_eq!((p.chapter, p.first), (1, 5));
        assert!(p.is_valid());
        assert_eq!(r.display(&settings), "Jude 5");
        assert_eq!(r.canonical_id().as_deref(), Some("65001005"));
    }

    #[test]
    fn adjacent_comma_verses_coalesce_into_a_list_range() {
        let settings = Settings::default();
        let r = parse_one("Ps 23:1,2");
        assert_eq!(r.passages.len(), 1);
        let p = &r.passages[0];
        assert_eq!((p.first, p.last), (1, 2));
        assert_eq!(p.separator, Separator::List);
        assert_eq!(r.display(&settings), "Psalms 23:1, 2");
        assert_eq!(r.canonical_id().as_deref(), Some("19023001-19023002"));
    }

    #[test]
    fn non_adjacent_comma_verses_stay_separate_passages() {
        let settings = Settings::default();
        let r = parse_one("Ps 23:1,5");
        assert_eq!(r.passages.len(), 2);
        assert_eq!((r.passages[0].first, r.passages[0].last), (1, 1));
        assert_eq!((r.passages[1].first, r.passages[1].last), (5, 5));
        assert_eq!(r.passages[1].prefix, PassagePrefix::VerseOnly);
        assert_eq!(r.display(&settings), "Psalms 23:1, 5");
        // the reference link targets the first valid passage
        assert_eq!(r.canonical_id().as_deref(), Some("19023001"));
    }

    #[test]
    fn longer_adjacent_runs_extend_the_same_passage() {
        let r = parse_one("Ps 23:1,2,3");
        assert_eq!(r.passages.len(), 1);
        assert_eq!((r.passages[0].first, r.passages[0].last), (1, 3));
    }

    #[test]
    fn semicolon_groups_share_the_book() {
        let settings = Settings::default();
        let r = parse_one("Ps 23:1; 24:3-5");
        assert_eq!(r.passages.len(), 2);
        assert_eq!(r.passages[0].prefix, PassagePrefix::BookAndChapter);
        assert_eq!(r.passages[1].prefix, PassagePrefix::ChapterOnly);
        assert_eq!(r.passages[1].chapter, 24);
        assert_eq!(r.display(&settings), "Psalms 23:1; 24:3-5");
    }

    #[test]
    fn invalid_passage_does_not_sink_its_siblings() {
        let r = parse_one("Ps 23:1; 24:999");
        assert_eq!(r.passages.len(), 2);
        assert!(r.passages[0].is_valid());
        assert!(!r.passages[1].is_valid());
        assert!(r.has_valid_passage());
        assert!(!r.all_valid());
        assert_eq!(r.canonical_id().as_deref(), Some("19023001"));
    }

    #[test]
    fn unresolved_book_token_is_a_silent_non_match() {
        let matches = find_references("Meeting at 10:30", Language::English);
        assert_eq!(matches.len(), 1);
        assert!(Reference::from_match(&matches[0], Language::English).is_none());
    }

    #[test]
    fn element_ids_cover_all_valid_passages() {
        let r = parse_one("1 Co 13:4-7");
        assert_eq!(
            r.element_ids(),
            vec!["46013004", "46013005", "46013006", "46013007"]
        );
    }

    #[test]
    fn spacing_toggle_controls_list_display() {
        let settings = Settings { space_after_punct: false, ..Settings::default() };
        let r = parse_one("Ps 23:1,2");
        assert_eq!(r.display(&settings), "Psalms 23:1,2");
    }

    #[test]
    fn verse_span_tokens() {
        assert_eq!(
            VerseSpan::from_token("6"),
            Some(VerseSpan { first: 6, last: 6, separator: Separator::None })
        );
        assert_eq!(
            VerseSpan::from_token("4-7"),
            Some(VerseSpan { first: 4, last: 7, separator: Separator::Range })
        );
        assert_eq!(
            VerseSpan::from_token("4, 5"),
            Some(VerseSpan { first: 4, last: 5, separator: Separator::List })
        );
        // AdjacentVerseOnly: the non-adjacent tail is discarded
        assert_eq!(
            VerseSpan::from_token("4,9"),
            Some(VerseSpan { first: 4, last: 4, separator: Separator::None })
        );
        assert_eq!(VerseSpan::from_token("x"), None);
    }

    #[test]
    fn french_display_uses_the_french_table() {
        let settings = Settings { lang: Language::French, ..Settings::default() };
        let matches = find_references("Genèse 2:6", Language::French);
        assert_eq!(matches.len(), 1);
        let r = Reference::from_match(&matches[0], Language::French)
            .unwrap_or_else(|| panic!("french reference"));
        assert_eq!(r.book, 1);
        assert_eq!(r.display(&settings), "Genèse 2:6");
    }
}
