//! Abbreviation resolution: raw book tokens to canonical ordinals.
//!
//! A candidate token matches a lexicon entry only when it is anchored at the
//! start of an abbreviation. This prevents substring hits inside unrelated
//! names: "eph" resolves to Ephesians and never matches inside "zephaniah".

use super::Language;

/// Resolve a raw book token to its canonical ordinal (1..=66).
///
/// The token may carry a leading ordinal digit ("1 Co", "2Tim."), periods and
/// accented letters. Case is ignored. Returns `None` when nothing matches;
/// most scanned text is not a scripture reference, so this is the normal
/// negative result rather than an error.
#[must_use]
pub fn resolve_book(token: &str, lang: Language) -> Option<u8> {
    let candidate = normalize(token);
    if candidate.len() < 2 {
        return None;
    }

    // First pass compares the token as written, so that accented lexicon
    // entries keep priority over their folded look-alikes ("je" must reach
    // Jean before a folded "jérémie" would claim it).
    find_anchored(&candidate, lang, false).or_else(|| find_anchored(&candidate, lang, true))
}

fn find_anchored(candidate: &str, lang: Language, folded: bool) -> Option<u8> {
    let candidate = if folded { fold_diacritics(candidate) } else { candidate.to_string() };
    for entry in lang.books() {
        for abbr in entry.abbreviations {
            let abbr = if folded { fold_diacritics(abbr) } else { (*abbr).to_string() };
            if abbr.starts_with(candidate.as_str()) {
                return Some(entry.ordinal);
            }
        }
    }
    None
}

/// Normalize a raw token to the lexicon convention: lowercase, no periods,
/// no-break spaces (character or literal entity) treated as plain spaces,
/// and the ordinal digit joined directly to the name ("1 Co." -> "1co").
fn normalize(token: &str) -> String {
    let lowered = token
        .trim()
        .to_lowercase()
        .replace('.', "")
        .replace("&nbsp;", " ")
        .replace('\u{a0}', " ");
    match lowered.strip_prefix(['1', '2', '3']) {
        Some(rest) => {
            let mut out = String::with_capacity(lowered.len());
            out.push_str(&lowered[..1]);
            out.push_str(rest.trim_start());
            out
        }
        None => lowered,
    }
}

/// Strip the accents that occur in the supported lexicons.
fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            _ => c,
        })
        .collect()
}
