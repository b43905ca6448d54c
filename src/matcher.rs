//! Citation-shaped substring matching.
//!
//! Scans arbitrary text (raw markdown or a rendered HTML fragment) for
//! substrings shaped like scripture references and returns immutable match
//! records carrying byte offsets. The scan itself is pure: no shared state
//! survives between calls, and every record can be processed independently.
//!
//! Two rules run over the input. The general rule requires a
//! `chapter:verse` body with optional `,`/`-` verse continuations and
//! `;`-separated additional chapter groups. A separate rule accepts the
//! no-chapter form (`Jude 5`) and only survives when its book token resolves
//! to one of the single-chapter books.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::canon::{self, resolve_book, Language};

// Ordinal/book/chapter separator: plain space, no-break space, or the
// literal entity left behind by rendered HTML.
const SEP: &str = r"(?:[ \x{A0}]|&nbsp;)";

lazy_static! {
    static ref GENERAL_RE: Regex = Regex::new(&format!(
        r"(?i)('?)(((?:[123]{SEP}?)?(?:song of solomon|chant de salomon|[\p{{L}}\p{{M}}\.]{{2,}})){SEP}?(\d{{1,3}}:\d{{1,3}}(?:[-,] ?\d{{1,3}})*(?:; ?\d{{1,3}}:\d{{1,3}}(?:[-,] ?\d{{1,3}})*)*))(\]|</a>)?"
    ))
    .unwrap_or_else(|e| unreachable!("invalid citation pattern: {e}"));

    static ref NO_CHAPTER_RE: Regex = Regex::new(&format!(
        r"(?i)('?)(((?:[123]{SEP}?)?[\p{{L}}\p{{M}}\.]{{2,}}){SEP}(\d{{1,3}}(?:[-,] ?\d{{1,3}})*))(\]|</a>)?"
    ))
    .unwrap_or_else(|e| unreachable!("invalid no-chapter citation pattern: {e}"));
}

/// One raw `chapter:verse` group inside a match, with its byte span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// The group text, e.g. `2:6` or `13:4-7` (bare verses for the
    /// no-chapter rule).
    pub text: String,
    /// Byte offset of the group start in the scanned input.
    pub start: usize,
    /// Byte offset one past the group end.
    pub end: usize,
}

impl Segment {
    /// Whether a caret offset sits inside this group (inclusive bounds).
    #[must_use]
    pub const fn contains(&self, caret: usize) -> bool {
        self.start <= caret && caret <= self.end
    }
}

/// A citation-shaped substring found in caller-supplied text.
///
/// Transient: produced per match, consumed by validation or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMatch {
    /// The matched reference substring (escape marker and trailing link
    /// marker excluded). This is the exact text a renderer replaces.
    pub reference: String,
    /// Byte offset of the reference start in the scanned input.
    pub start: usize,
    /// Byte offset one past the reference end.
    pub end: usize,
    /// The raw book token as written, including any leading ordinal.
    pub book_token: String,
    /// The chapter:verse groups, split on `;`, in source order.
    pub segments: Vec<Segment>,
    /// Matched by the single-chapter rule: segments carry bare verses and
    /// the chapter is implicitly 1.
    pub no_chapter: bool,
    /// The user escaped the match with a leading quote: display without a
    /// hyperlink.
    pub is_plain_text: bool,
    /// The match is already inside a rendered link and must be skipped.
    pub is_link_already: bool,
}

impl RawMatch {
    /// Whether a caret offset sits inside the matched span (inclusive).
    #[must_use]
    pub const fn contains(&self, caret: usize) -> bool {
        self.start <= caret && caret <= self.end
    }

    /// The segment containing the caret, if any.
    #[must_use]
    pub fn segment_at(&self, caret: usize) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(caret))
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Find every citation-shaped substring, non-overlapping, left to right.
///
/// The language selects the lexicon used to qualify no-chapter matches;
/// general matches are reported whether or not their book token resolves,
/// since resolution is the next pipeline stage.
#[must_use]
pub fn find_references(text: &str, lang: Language) -> Vec<RawMatch> {
    let mut matches: Vec<RawMatch> = GENERAL_RE
        .captures_iter(text)
        .filter_map(|caps| build_match(&caps, false))
        .collect();

    for caps in NO_CHAPTER_RE.captures_iter(text) {
        let Some(candidate) = build_match(&caps, true) else {
            continue;
        };
        let single_chapter = resolve_book(&candidate.book_token, lang)
            .is_some_and(|book| !canon::has_chapters(book));
        if single_chapter && !matches.iter().any(|m| m.overlaps(&candidate)) {
            matches.push(candidate);
        }
    }

    matches.sort_by_key(|m| m.start);
    matches
}

/// Find the single reference whose span contains the caret offset.
///
/// Used for "open this verse" behavior on the current line or selection;
/// the caller can then narrow to the exact group with
/// [`RawMatch::segment_at`].
#[must_use]
pub fn find_reference_at(text: &str, caret: usize, lang: Language) -> Option<RawMatch> {
    find_references(text, lang)
        .into_iter()
        .find(|m| m.contains(caret))
}

fn build_match(caps: &regex::Captures<'_>, no_chapter: bool) -> Option<RawMatch> {
    let reference = caps.get(2)?;
    let book_token = caps.get(3)?;
    let body = caps.get(4)?;

    let is_plain_text = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
    let is_link_already = caps.get(5).is_some();

    Some(RawMatch {
        reference: reference.as_str().to_string(),
        start: reference.start(),
        end: reference.end(),
        book_token: book_token.as_str().to_string(),
        segments: split_segments(body.as_str(), body.start()),
        no_chapter,
        is_plain_text,
        is_link_already,
    })
}

/// Split a match body on `;`, keeping absolute byte offsets per group.
fn split_segments(body: &str, body_start: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut offset = 0;
    for part in body.split(';') {
        let trimmed = part.trim_start();
        let lead = part.len() - trimmed.len();
        let trimmed_end = trimmed.trim_end();
        if !trimmed_end.is_empty() {
            segments.push(Segment {
                text: trimmed_end.to_string(),
                start: body_start + offset + lead,
                end: body_start + offset + lead + trimmed_end.len(),
            });
        }
        offset += part.len() + 1; // account for the ';'
    }
    segments
}
