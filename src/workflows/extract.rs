use regex::Regex;
use tracing::{debug, warn};

use crate::domain::models::SeriesRecord;
use crate::infra::document::{AttrFilter, Element};

const ITEM_CLASS: &str = "lister-item-content";
const RATING_CLASS: &str = "ratings-imdb-rating";
const GENRE_CLASS: &str = "genre";
const RUNTIME_CLASS: &str = "runtime";
const RUNTIME_UNIT: &str = "min";
const PERSON_HREF: &str = r"/name/nm\d+";

/// Outcome of walking one listing page.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<SeriesRecord>,
    /// Item blocks found on the page, including skipped ones.
    pub blocks: usize,
    /// Zero-based positions of blocks dropped for lacking a title.
    pub skipped: Vec<usize>,
}

pub struct SeriesExtractor {
    person_href: Regex,
}

impl Default for SeriesExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesExtractor {
    pub fn new() -> Self {
        Self {
            person_href: Regex::new(PERSON_HREF).expect("person href pattern is valid"),
        }
    }

    /// One record per item block under `root`, in document order.
    pub fn extract<E: Element>(&self, root: &E) -> Extraction {
        let blocks = root.find_all("div", &AttrFilter::Class(ITEM_CLASS));
        debug!(blocks = blocks.len(), "located item blocks");

        let mut extraction = Extraction {
            blocks: blocks.len(),
            ..Extraction::default()
        };
        for (index, block) in blocks.iter().enumerate() {
            match self.extract_block(block) {
                Some(record) => extraction.records.push(record),
                None => {
                    warn!(index, "skipping item block without a title");
                    extraction.skipped.push(index);
                }
            }
        }
        extraction
    }

    /// `None` when the block has no title; every other field degrades to "".
    pub fn extract_block<E: Element>(&self, block: &E) -> Option<SeriesRecord> {
        let title = block
            .find_first("h3", &AttrFilter::Any)?
            .find_first("a", &AttrFilter::Any)?
            .text_content();
        if title.trim().is_empty() {
            return None;
        }

        let rating = trimmed_text(block, "div", RATING_CLASS);
        let genres = trimmed_text(block, "span", GENRE_CLASS);
        let runtime = strip_unit(&trimmed_text(block, "span", RUNTIME_CLASS));

        let cast = block
            .find_all("a", &AttrFilter::HrefMatches(&self.person_href))
            .iter()
            .map(|link| link.text_content().trim().to_string())
            .collect::<Vec<_>>()
            .join(",");

        Some(SeriesRecord {
            title,
            rating,
            genres,
            cast,
            runtime,
        })
    }
}

fn trimmed_text<E: Element>(block: &E, tag: &str, class: &str) -> String {
    block
        .find_first(tag, &AttrFilter::Class(class))
        .map(|el| el.text_content().trim().to_string())
        .unwrap_or_default()
}

/// `"45 min"` -> `"45"`. Text without the unit passes through.
fn strip_unit(runtime: &str) -> String {
    runtime
        .strip_suffix(RUNTIME_UNIT)
        .map(str::trim_end)
        .unwrap_or(runtime)
        .to_string()
}
