//! Markup-to-text for search results and feed summaries, backed by `scraper`.

use scraper::{ElementRef, Html, Node};

/// Elements whose content is never visible.
const HIDDEN: [&str; 5] = ["script", "style", "noscript", "template", "head"];

/// Elements that start a new line of text.
const BLOCKS: [&str; 14] = [
    "p", "div", "br", "li", "tr", "td", "th", "h1", "h2", "h3", "h4", "h5", "h6", "blockquote",
];

/// Visible text of an HTML fragment, entities decoded and whitespace collapsed.
pub fn to_text(markup: &str) -> String {
    let fragment = Html::parse_fragment(markup);
    let mut out = String::new();
    collect_text(fragment.root_element(), &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of an element already located in a parsed document.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    collect_text(element, &mut out);
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if HIDDEN.contains(&el.name()) => {}
            Node::Element(el) => {
                let block = BLOCKS.contains(&el.name());
                if block {
                    out.push(' ');
                }
                if let Some(inner) = ElementRef::wrap(child) {
                    collect_text(inner, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
