//! HTML to plain-text normalization.
//!
//! Paragraph extraction only: the text of every `<p>` element, in document
//! order, joined by blank lines. Pages that carry their copy outside of
//! paragraph tags fall back to the whole `<body>` text.

use once_cell::sync::Lazy;
use schreiber_core::text::truncate_chars;
use scraper::{Html, Selector};

/// Hard cap on normalized website text, counted in characters.
pub const WEB_TEXT_CAP: usize = 200_000;

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());
static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// Normalize an HTML document to bounded plain text.
pub fn normalize_html(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut paragraphs: Vec<String> = Vec::new();
    for element in document.select(&PARAGRAPH) {
        let text = element.text().collect::<String>().trim().to_string();
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    let text = if paragraphs.is_empty() {
        document
            .select(&BODY)
            .next()
            .map(|body| body.text().collect::<String>())
            .unwrap_or_default()
    } else {
        paragraphs.join("\n\n")
    };

    truncate_chars(text.trim(), WEB_TEXT_CAP).to_string()
}
