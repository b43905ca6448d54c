//! Canon dataset: the fixed 66-book addressing scheme.
//!
//! Read-only lookups over the ordered book list, the per-chapter verse-count
//! table and the per-language abbreviation lexicon. Loaded once as static
//! data, never mutated.

pub mod books;
mod resolve;
mod verses;

pub use books::BookEntry;
pub use resolve::resolve_book;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of books in the canon.
pub const BOOK_COUNT: u8 = 66;

/// Ordinals of the books with no chapter division (Obadiah, Philemon,
/// 2 John, 3 John, Jude). Citations of these may omit the chapter number,
/// which is then implicitly 1.
pub const SINGLE_CHAPTER_BOOKS: [u8; 5] = [31, 57, 63, 64, 65];

/// Supported lexicon languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English book names and abbreviations.
    #[default]
    English,
    /// French book names and abbreviations.
    French,
}

impl Language {
    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::English, Self::French]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::French => "FR",
        }
    }

    /// Parse a language code or name ("EN", "fr", "French").
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EN" | "ENGLISH" => Some(Self::English),
            "FR" | "FRENCH" => Some(Self::French),
            _ => None,
        }
    }

    /// The book table for this language, in canonical order.
    #[must_use]
    pub const fn books(self) -> &'static [BookEntry; 66] {
        match self {
            Self::English => &books::BOOKS_EN,
            Self::French => &books::BOOKS_FR,
        }
    }
}

/// Whether a book has a chapter division.
#[must_use]
pub fn has_chapters(book: u8) -> bool {
    !SINGLE_CHAPTER_BOOKS.contains(&book)
}

/// Canonical display name of a book in the given language.
pub fn book_name(book: u8, lang: Language) -> Result<&'static str> {
    let entry = lang
        .books()
        .get(usize::from(book.wrapping_sub(1)))
        .ok_or(Error::UnknownBook(book))?;
    Ok(entry.name)
}

/// Number of chapters in a book.
pub fn chapter_count(book: u8) -> Result<u16> {
    let chapters = verses::CHAPTER_VERSES
        .get(usize::from(book.wrapping_sub(1)))
        .ok_or(Error::UnknownBook(book))?;
    u16::try_from(chapters.len()).map_err(|_| Error::UnknownBook(book))
}

/// Maximum valid verse number for a chapter of a book.
pub fn max_verse(book: u8, chapter: u16) -> Result<u16> {
    let chapters = verses::CHAPTER_VERSES
        .get(usize::from(book.wrapping_sub(1)))
        .ok_or(Error::UnknownBook(book))?;
    chapters
        .get(usize::from(chapter.wrapping_sub(1)))
        .copied()
        .ok_or(Error::UnknownChapter { book, chapter })
}

/// The accepted abbreviation tokens for a book in the given language.
pub fn abbreviation_tokens(book: u8, lang: Language) -> Result<&'static [&'static str]> {
    let entry = lang
        .books()
        .get(usize::from(book.wrapping_sub(1)))
        .ok_or(Error::UnknownBook(book))?;
    Ok(entry.abbreviations)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn book_names_by_language() {
        assert_eq!(book_name(1, Language::English).unwrap(), "Genesis");
        assert_eq!(book_name(1, Language::French).unwrap(), "Genèse");
        assert_eq!(book_name(66, Language::English).unwrap(), "Revelation");
    }

    #[test]
    fn out_of_range_book_is_an_error() {
        assert!(matches!(book_name(0, Language::English), Err(Error::UnknownBook(0))));
        assert!(matches!(book_name(67, Language::English), Err(Error::UnknownBook(67))));
        assert!(matches!(max_verse(0, 1), Err(Error::UnknownBook(0))));
    }

    #[test]
    fn chapter_counts_match_the_canon() {
        assert_eq!(chapter_count(1).unwrap(), 50); // Genesis
        assert_eq!(chapter_count(19).unwrap(), 150); // Psalms
        assert_eq!(chapter_count(65).unwrap(), 1); // Jude
    }

    #[test]
    fn verse_counts_match_the_canon() {
        assert_eq!(max_verse(1, 2).unwrap(), 25); // Genesis 2
        assert_eq!(max_verse(19, 119).unwrap(), 176); // Psalm 119
        assert_eq!(max_verse(65, 1).unwrap(), 25); // Jude
        assert!(matches!(
            max_verse(1, 51),
            Err(Error::UnknownChapter { book: 1, chapter: 51 })
        ));
    }

    #[test]
    fn every_book_has_a_verse_entry_for_every_chapter() {
        for book in 1..=BOOK_COUNT {
            let chapters = chapter_count(book).unwrap();
            assert!(chapters >= 1);
            for chapter in 1..=chapters {
                assert!(max_verse(book, chapter).unwrap() >= 1);
            }
        }
    }

    #[test]
    fn single_chapter_books_have_one_chapter() {
        for book in SINGLE_CHAPTER_BOOKS {
            assert_eq!(chapter_count(book).unwrap(), 1, "book {book}");
            assert!(!has_chapters(book));
        }
        assert!(has_chapters(1));
    }

    #[test]
    fn both_lexicons_cover_all_books() {
        for lang in [Language::English, Language::French] {
            for book in 1..=BOOK_COUNT {
                assert!(!abbreviation_tokens(book, lang).unwrap().is_empty());
            }
        }
    }
}
