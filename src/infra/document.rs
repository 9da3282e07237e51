//! Tree queries the extractor relies on, kept independent of the HTML library.

use regex::Regex;
use scraper::{ElementRef, Html};

/// Attribute condition an element must satisfy to match a query.
#[derive(Debug, Clone, Copy)]
pub enum AttrFilter<'r> {
    Any,
    /// Element carries this class among its class list.
    Class(&'r str),
    /// Element has an `href` the pattern finds a match in.
    HrefMatches(&'r Regex),
}

pub trait Element: Sized {
    /// First descendant, in document order, with tag `tag` passing `filter`.
    fn find_first(&self, tag: &str, filter: &AttrFilter) -> Option<Self>;

    /// All descendants, in document order, with tag `tag` passing `filter`.
    fn find_all(&self, tag: &str, filter: &AttrFilter) -> Vec<Self>;

    /// Concatenated text of the element and everything below it.
    fn text_content(&self) -> String;
}

pub fn parse(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

impl<'a> Element for ElementRef<'a> {
    fn find_first(&self, tag: &str, filter: &AttrFilter) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| matches(el, tag, filter))
    }

    fn find_all(&self, tag: &str, filter: &AttrFilter) -> Vec<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| matches(el, tag, filter))
            .collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}

fn matches(el: &ElementRef<'_>, tag: &str, filter: &AttrFilter) -> bool {
    let value = el.value();
    if !value.name().eq_ignore_ascii_case(tag) {
        return false;
    }
    match filter {
        AttrFilter::Any => true,
        AttrFilter::Class(class) => value.classes().any(|c| c == *class),
        AttrFilter::HrefMatches(pattern) => value.attr("href").is_some_and(|href| pattern.is_match(href)),
    }
}
