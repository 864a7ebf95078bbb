// src/core/extract.rs
// Shared "select + clean" step used by every page spec.
// All three stages must clean text identically, so this lives in exactly
// one place.

use std::collections::HashSet;

use scraper::{Html, Selector};

use super::error::ScrapeError;

/// Text content of every element matching `selector`, in document order,
/// cleaned and deduplicated (first occurrence wins).
///
/// Zero matches is a legitimate empty result, not an error. Only a
/// syntactically invalid selector fails.
pub fn select_texts(doc: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = Selector::parse(selector)
        .map_err(|_| ScrapeError::Selector(selector.to_string()))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for el in doc.select(&sel) {
        let text: String = el.text().collect();
        let text = clean_text(&text);
        if text.is_empty() {
            continue;
        }
        if seen.insert(text.clone()) {
            out.push(text);
        }
    }

    Ok(out)
}

/// Strip CR/LF, then trim surrounding whitespace. Idempotent.
pub fn clean_text(s: &str) -> String {
    let stripped: String = s.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_crlf_and_trims() {
        assert_eq!(clean_text("  Little Rock\r\n"), "Little Rock");
        assert_eq!(clean_text("Little\nRock"), "LittleRock");
    }

    #[test]
    fn clean_is_idempotent() {
        for input in ["  a b \r\n", "plain", "\r\r\n\n", "  mixed \n inner  "] {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn select_texts_dedups_preserving_first_seen_order() {
        let doc = Html::parse_document(
            "<ul>\
             <li class=\"x\">B</li>\
             <li class=\"x\">A</li>\
             <li class=\"x\">B</li>\
             <li class=\"x\"> A </li>\
             </ul>",
        );
        let got = select_texts(&doc, "li.x").unwrap();
        assert_eq!(got, vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn select_texts_empty_match_is_not_an_error() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert_eq!(select_texts(&doc, "li.missing").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn select_texts_rejects_malformed_selector() {
        let doc = Html::parse_document("<p>x</p>");
        assert!(matches!(
            select_texts(&doc, "li[unclosed"),
            Err(ScrapeError::Selector(_))
        ));
    }
}
