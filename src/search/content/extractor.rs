//! HTML content extraction
//!
//! Extracts main-body visible text from web pages using CSS selectors.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Elements that never carry page content
const NOISE_SELECTOR: &str = "script, style, nav, header, footer, aside";

fn content_class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)content|article|post").unwrap())
}

/// Extract main content from HTML
///
/// Noise elements are removed first, then the first match wins:
/// 1. `<article>` tag
/// 2. `<main>` tag
/// 3. `<div>` whose class matches content/article/post (case-insensitive)
/// 4. `<body>`
///
/// # Returns
/// Visible text with whitespace runs collapsed, or an empty string
pub fn extract_main_content(html: &str) -> String {
    let mut document = Html::parse_document(html);
    strip_noise(&mut document);

    match select_main_region(&document) {
        Some(element) => clean_text(&extract_text_from_element(&element)),
        None => String::new(),
    }
}

/// Detach script/style/navigation/header/footer/sidebar subtrees
fn strip_noise(document: &mut Html) {
    let Ok(selector) = Selector::parse(NOISE_SELECTOR) else {
        return;
    };

    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn select_main_region(document: &Html) -> Option<ElementRef<'_>> {
    for selector_str in ["article", "main"] {
        if let Some(element) = first_match(document, selector_str) {
            return Some(element);
        }
    }

    if let Ok(selector) = Selector::parse("div[class]") {
        let pattern = content_class_pattern();
        if let Some(element) = document
            .select(&selector)
            .find(|el| el.value().classes().any(|class| pattern.is_match(class)))
        {
            return Some(element);
        }
    }

    first_match(document, "body")
}

fn first_match<'a>(document: &'a Html, selector_str: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector_str).ok()?;
    document.select(&selector).next()
}

/// Extract text from an HTML element, stripping tags
fn extract_text_from_element(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean text: collapse whitespace runs into single spaces
fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
