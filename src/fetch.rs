//! Citation text retrieval.
//!
//! The core treats the content source as an opaque awaited call: given a
//! finder or WOL url it returns page HTML, and everything here extracts the
//! cited verses or paragraph from that page. One fetch is issued per
//! reference; retry policy, if any, belongs to the source implementation.

use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::ident;
use crate::reference::Reference;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>")
        .unwrap_or_else(|e| unreachable!("invalid tag pattern: {e}"));
    static ref VERSE_NUM_RE: Regex = Regex::new(r"^(\d{1,3}) ")
        .unwrap_or_else(|e| unreachable!("invalid verse number pattern: {e}"));
    static ref PUNCT_RE: Regex = Regex::new(r"([,.;])(\w)")
        .unwrap_or_else(|e| unreachable!("invalid punctuation pattern: {e}"));
    static ref WOL_LINK_RE: Regex =
        Regex::new(r"(\[([^\[\]]*)\]\()?(https://wol\.jw\.org[^\s)]{2,})(\))?")
            .unwrap_or_else(|e| unreachable!("invalid wol link pattern: {e}"));
}

/// Provider of page content for citation lookups.
///
/// Implementations may fetch over HTTP, read fixtures, or serve a cache;
/// the citation builders depend only on this contract.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the page at `url` and return its HTML.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP-backed content source.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with a 30 second request timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::lookup_status(
                format!("Request to {url} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.text()
            .await
            .map_err(|e| Error::Network(format!("Reading body from {url} failed: {e}")))
    }
}

/// How much of the cited text to insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiteKind {
    /// The full verse or paragraph text.
    Entire,
    /// The first words only, with an ellipsis.
    Snippet,
    /// Only a titled link, no text (paragraph citations).
    TitleOnly,
}

/// A fetched, formatted citation ready to splice over the matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// The citation title (display text, optionally wrapped in a link).
    pub title: String,
    /// The cleaned citation body text. Verse and paragraph numbers carry
    /// their bold markup here when the setting is on.
    pub text: String,
    /// The templated block the caller inserts.
    pub rendered: String,
    /// Verse element ids that were requested but absent from the fetched
    /// page. Non-empty means the body is partial.
    pub missing: Vec<String>,
}

/// Fetch and format the text of a validated scripture reference.
///
/// Issues exactly one fetch for the whole reference and extracts each
/// verse by its element id. Returns `LookupFailed` when the page yields no
/// verse content; an invalid reference never reaches the network.
pub async fn cite_scripture(
    source: &dyn ContentSource,
    reference: &Reference,
    settings: &Settings,
    kind: CiteKind,
) -> Result<Citation> {
    let id = reference
        .canonical_id()
        .ok_or_else(|| Error::invalid_scripture(reference.matched.clone()))?;

    let display = reference.display(settings);
    let title = if settings.citation_link {
        format!("[{display}]({})", ident::library_link(&id))
    } else {
        display
    };

    let page = source.fetch(&ident::web_link(&id)).await?;

    let mut lines: Vec<String> = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for element_id in reference.element_ids() {
        let Some(fragment) = verse_fragment(&page, &element_id) else {
            tracing::warn!("No content for verse element v{element_id}");
            missing.push(element_id);
            continue;
        };
        let mut clean = extract_plain_text(fragment, ExtractKind::Body, settings);
        if fragment.contains("chapterNum") {
            // The first verse of a chapter renders the chapter number in
            // place of the verse number.
            clean = VERSE_NUM_RE.replace(&clean, "1 ").into_owned();
        }
        if settings.bold_verse_no {
            clean = VERSE_NUM_RE.replace(&clean, "**${1}** ").into_owned();
        }
        let glue = if lines.is_empty() {
            ""
        } else if starts_new_block(fragment) {
            "\n"
        } else {
            " "
        };
        lines.push(format!("{glue}{clean}"));
    }

    if lines.is_empty() {
        return Err(Error::lookup_failed(format!(
            "No verse content found for {}",
            reference.matched
        )));
    }

    let mut text = lines.concat();
    let template = match kind {
        CiteKind::Snippet => {
            text = first_words(&text, settings.snippet_length);
            &settings.snippet_template
        }
        _ => &settings.scripture_template,
    };
    let rendered = template.replace("{title}", &title).replace("{text}", &text);

    Ok(Citation { title, text, rendered, missing })
}

/// Fetch and format a publication paragraph citation from a WOL url.
///
/// The url is checked for well-formedness before any fetch attempt. The
/// title comes from the page's publication navigation (falling back to the
/// HTML title), the body from the `#p<id>` paragraph named in the url
/// fragment.
pub async fn cite_paragraph(
    source: &dyn ContentSource,
    url: &str,
    settings: &Settings,
    kind: CiteKind,
) -> Result<Citation> {
    let params = ident::wol_params(url)?;

    let page = source.fetch(url).await?;

    let page_title = fragment_between(&page, "<title>", "</title>")
        .map(|t| extract_plain_text(t, ExtractKind::Navigation, settings))
        .unwrap_or_default();
    let page_nav = fragment_after_id(&page, "publicationNavigation", &["</nav>", "</div>"])
        .map(|t| extract_plain_text(t, ExtractKind::Navigation, settings))
        .unwrap_or_default();

    let display = if page_nav.is_empty() { page_title } else { page_nav };
    if display.is_empty() {
        return Err(Error::lookup_failed(format!("No page title found at {url}")));
    }
    let title = format!("[{display}]({url})");

    if kind == CiteKind::TitleOnly {
        return Ok(Citation {
            title: title.clone(),
            text: String::new(),
            rendered: title,
            missing: Vec::new(),
        });
    }

    let par_id = params
        .par_id
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;
    let fragment = fragment_after_id(&page, &format!("p{par_id}"), &["</p>"])
        .ok_or_else(|| Error::lookup_failed(format!("No paragraph p{par_id} at {url}")))?;
    let mut text = extract_plain_text(fragment, ExtractKind::Body, settings);

    let template = match kind {
        CiteKind::Snippet => {
            text = first_words(&text, settings.snippet_length);
            &settings.snippet_template
        }
        _ => {
            if settings.bold_verse_no {
                text = VERSE_NUM_RE.replace(&text, "**${1}** ").into_owned();
            }
            &settings.paragraph_template
        }
    };
    let rendered = template.replace("{title}", &title).replace("{text}", &text);

    Ok(Citation { title, text, rendered, missing: Vec::new() })
}

/// Fetch citations for several references concurrently, one fetch each.
///
/// Failed lookups are reported per reference rather than aborting the
/// batch.
pub async fn cite_references(
    source: &dyn ContentSource,
    references: &[Reference],
    settings: &Settings,
    kind: CiteKind,
) -> Vec<(String, Result<Citation>)> {
    let futures = references
        .iter()
        .map(|r| cite_scripture(source, r, settings, kind));
    let outcomes = futures::future::join_all(futures).await;
    references
        .iter()
        .map(|r| r.matched.clone())
        .zip(outcomes)
        .collect()
}

/// The WOL link nearest the caret position in `input`, as
/// `(whole match, link title, url)`.
#[must_use]
pub fn wol_link_at(input: &str, caret: usize) -> Option<(String, String, String)> {
    for caps in WOL_LINK_RE.captures_iter(input) {
        let whole = caps.get(0)?;
        if whole.start() <= caret && caret <= whole.end() {
            let title = caps
                .get(1)
                .and_then(|_| caps.get(2))
                .map_or(String::new(), |m| m.as_str().to_string());
            let url = caps.get(3).map_or(String::new(), |m| m.as_str().to_string());
            return Some((whole.as_str().to_string(), title, url));
        }
    }
    None
}

/// Which cleanup profile to apply when flattening HTML to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractKind {
    /// Verse or paragraph body text.
    Body,
    /// Navigation or title text: flattened onto one line.
    Navigation,
}

/// Flatten an HTML fragment to clean plain text.
///
/// Strips markup and study-note symbols, decodes entities, and normalizes
/// whitespace; the space-after-punctuation repair is driven by settings.
#[must_use]
pub fn extract_plain_text(html: &str, kind: ExtractKind, settings: &Settings) -> String {
    let mut text = html.replace("&nbsp;", " ");
    // Block markers become linebreaks before the tags are dropped
    text = text
        .replace(r#"<span class="newblock"></span>"#, "\n")
        .replace(r#"<span class="parabreak"></span>"#, "\n");
    text = TAG_RE.replace_all(&text, "").into_owned();
    text = html_escape::decode_html_entities(&text).into_owned();

    match kind {
        ExtractKind::Body => {
            text = text.replace("  ", " ");
            if settings.space_after_punct {
                text = PUNCT_RE.replace_all(&text, "${1} ${2}").into_owned();
            }
            text = text.replace(['+', '*', '#'], "");
            text = text.replace("\r\n", "\n");
            while text.contains("\n\n") {
                text = text.replace("\n\n", "\n");
            }
        }
        ExtractKind::Navigation => {
            text = text.replace(['\t', '\n', '\r'], " ");
        }
    }

    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text.trim().to_string()
}

/// Returns the first `count` words of `sentence`, with an ellipsis when
/// truncated.
#[must_use]
pub fn first_words(sentence: &str, count: usize) -> String {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() > count {
        format!("{}…", words[..count].join(" "))
    } else {
        sentence.to_string()
    }
}

/// The inner HTML of the verse element `id="v<element_id>"`.
///
/// Verse spans sit side by side in the page, so the fragment runs until
/// the next verse span opens or the enclosing paragraph closes.
fn verse_fragment<'a>(page: &'a str, element_id: &str) -> Option<&'a str> {
    fragment_after_id(page, &format!("v{element_id}"), &[r#"<span id="v"#, "</p>"])
}

/// Content following the tag carrying `id="<id>"`, up to the earliest of
/// the given end markers (or the end of the page).
fn fragment_after_id<'a>(page: &'a str, id: &str, end_markers: &[&str]) -> Option<&'a str> {
    let attr = format!(r#"id="{id}""#);
    let tag_pos = page.find(&attr)?;
    let content_start = tag_pos + page[tag_pos..].find('>')? + 1;
    let rest = &page[content_start..];
    let end = end_markers
        .iter()
        .filter_map(|m| rest.find(m))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Content strictly between two literal markers.
fn fragment_between<'a>(page: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = page.find(open)? + open.len();
    let end = page[start..].find(close)? + start;
    Some(&page[start..end])
}

/// Whether a verse fragment opens a new poetic line or block.
fn starts_new_block(fragment: &str) -> bool {
    let lead = fragment.trim_start();
    lead.starts_with(r#"<span class="style-l"#) || lead.starts_with(r#"<span class="newblock"#)
}
