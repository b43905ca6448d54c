//! Canonical verse identifier codec.
//!
//! The wire format is a hard external contract shared with the link scheme
//! and the content source: `BBCCCVVV` with a 2-digit book, 3-digit chapter
//! and 3-digit verse, and `BBCCCVVV-BBCCCVVV` for an inclusive range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Deep-link prefix for the JW Library app.
pub const LIBRARY_FINDER: &str = "jwlibrary:///finder?";

/// Web finder prefix on jw.org.
pub const WEB_FINDER: &str = "https://www.jw.org/finder?";

/// Root of the Watchtower Online Library.
pub const WOL_ROOT: &str = "https://wol.jw.org";

/// Query parameter carrying a canonical verse id.
pub const BIBLE_PARAM: &str = "bible=";

/// One fully addressed verse: book, chapter and verse number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseId {
    /// Book ordinal (1..=66).
    pub book: u8,
    /// Chapter number (1-indexed).
    pub chapter: u16,
    /// Verse number (1-indexed).
    pub verse: u16,
}

impl VerseId {
    /// Create a verse id from its components.
    #[must_use]
    pub const fn new(book: u8, chapter: u16, verse: u16) -> Self {
        Self { book, chapter, verse }
    }

    /// The fixed-width canonical encoding, e.g. Genesis 2:6 -> `01002006`.
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{:02}{:03}{:03}", self.book, self.chapter, self.verse)
    }

    /// The page element id used by the content source, e.g. `1002006`.
    /// The book number is not zero-padded in this form.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{}{:03}{:03}", self.book, self.chapter, self.verse)
    }

    /// Decode a fixed-width canonical id back into its components.
    pub fn parse(id: &str) -> Result<Self> {
        if id.len() != 8 || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::parse(
                "canonical verse id must be 8 digits",
                Some(id.to_string()),
            ));
        }
        let book = id[0..2]
            .parse::<u8>()
            .map_err(|e| Error::parse(e.to_string(), Some(id.to_string())))?;
        let chapter = id[2..5]
            .parse::<u16>()
            .map_err(|e| Error::parse(e.to_string(), Some(id.to_string())))?;
        let verse = id[5..8]
            .parse::<u16>()
            .map_err(|e| Error::parse(e.to_string(), Some(id.to_string())))?;
        Ok(Self { book, chapter, verse })
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Encode a verse span as a canonical id or id range.
///
/// A single verse yields `BBCCCVVV`; a span with `last > first` yields
/// `BBCCCVVV-BBCCCVVV` with both triples in the same book and chapter.
#[must_use]
pub fn encode_span(book: u8, chapter: u16, first: u16, last: u16) -> String {
    let start = VerseId::new(book, chapter, first).canonical();
    if last > first {
        format!("{start}-{}", VerseId::new(book, chapter, last).canonical())
    } else {
        start
    }
}

/// Decode a canonical id or id range into its start and optional end.
pub fn decode_span(id: &str) -> Result<(VerseId, Option<VerseId>)> {
    match id.split_once('-') {
        Some((start, end)) => Ok((VerseId::parse(start)?, Some(VerseId::parse(end)?))),
        None => Ok((VerseId::parse(id)?, None)),
    }
}

/// The ordered per-verse ids covering a span, in element-id form.
///
/// These are the ids the content source uses to address each verse's text
/// on a fetched page.
#[must_use]
pub fn span_element_ids(book: u8, chapter: u16, first: u16, last: u16) -> Vec<String> {
    (first..=last.max(first))
        .map(|verse| VerseId::new(book, chapter, verse).element_id())
        .collect()
}

/// Build a JW Library app deep link for a canonical id or id range.
#[must_use]
pub fn library_link(id: &str) -> String {
    format!("{LIBRARY_FINDER}{BIBLE_PARAM}{id}")
}

/// Build a jw.org web finder link for a canonical id or id range.
#[must_use]
pub fn web_link(id: &str) -> String {
    format!("{WEB_FINDER}{BIBLE_PARAM}{id}")
}

/// Document and paragraph ids extracted from a WOL article URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WolParams {
    /// Document id, the last path segment.
    pub doc_id: String,
    /// Paragraph anchor id, when the URL carries an `#h=` fragment.
    pub par_id: Option<String>,
}

/// Extract the document and paragraph id from a WOL url.
///
/// The document id is the final path segment; a paragraph id rides in the
/// `#h=` fragment when present.
pub fn wol_params(url: &str) -> Result<WolParams> {
    if !url.starts_with(WOL_ROOT) {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    let last = url
        .rsplit('/')
        .next()
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;
    match last.split_once("#h=") {
        Some((doc, par)) => Ok(WolParams {
            doc_id: doc.to_string(),
            par_id: Some(par.to_string()),
        }),
        None => Ok(WolParams { doc_id: last.to_string(), par_id: None }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn canonical_encoding_is_fixed_width() {
        assert_eq!(VerseId::new(1, 2, 6).canonical(), "01002006");
        assert_eq!(VerseId::new(66, 22, 21).canonical(), "66022021");
        assert_eq!(VerseId::new(19, 119, 176).canonical(), "19119176");
    }

    #[test]
    fn element_id_book_is_unpadded() {
        assert_eq!(VerseId::new(1, 2, 6).element_id(), "1002006");
        assert_eq!(VerseId::new(46, 13, 4).element_id(), "46013004");
    }

    #[test]
    fn round_trip() {
        for (book, chapter, verse) in [(1, 1, 1), (9, 31, 13), (40, 28, 20), (66, 22, 21)] {
            let id = VerseId::new(book, chapter, verse);
            assert_eq!(VerseId::parse(&id.canonical()).unwrap(), id);
        }
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!(VerseId::parse("123").is_err());
        assert!(VerseId::parse("0100200x").is_err());
        assert!(VerseId::parse("010020066").is_err());
    }

    #[test]
    fn span_encoding() {
        assert_eq!(encode_span(46, 13, 4, 7), "46013004-46013007");
        assert_eq!(encode_span(46, 13, 4, 4), "46013004");
        // Inverted spans collapse to the start verse
        assert_eq!(encode_span(46, 13, 7, 4), "46013007");
    }

    #[test]
    fn span_decoding() {
        let (start, end) = decode_span("46013004-46013007").unwrap();
        assert_eq!(start, VerseId::new(46, 13, 4));
        assert_eq!(end, Some(VerseId::new(46, 13, 7)));
        let (start, end) = decode_span("01002006").unwrap();
        assert_eq!(start, VerseId::new(1, 2, 6));
        assert_eq!(end, None);
    }

    #[test]
    fn element_ids_cover_the_span_in_order() {
        assert_eq!(
            span_element_ids(46, 13, 4, 7),
            vec!["46013004", "46013005", "46013006", "46013007"]
        );
        assert_eq!(span_element_ids(1, 2, 6, 6), vec!["1002006"]);
    }

    #[test]
    fn link_builders() {
        assert_eq!(
            library_link("01002006"),
            "jwlibrary:///finder?bible=01002006"
        );
        assert_eq!(
            web_link("46013004-46013007"),
            "https://www.jw.org/finder?bible=46013004-46013007"
        );
    }

    #[test]
    fn wol_params_extraction() {
        let p = wol_params("https://wol.jw.org/en/wol/d/r1/lp-e/2024240#h=5").unwrap();
        assert_eq!(p.doc_id, "2024240");
        assert_eq!(p.par_id.as_deref(), Some("5"));

        let p = wol_params("https://wol.jw.org/en/wol/d/r1/lp-e/2024240").unwrap();
        assert_eq!(p.doc_id, "2024240");
        assert_eq!(p.par_id, None);

        assert!(wol_params("https://example.com/2024240").is_err());
    }
}
