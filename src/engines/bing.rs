//! Bing results-page parser.

use super::{parse_records, SelectorSet};
use crate::{Result, SearchResult};

/// Bing's result markup: blocks under `#b_results`, `h2` titles whose anchor
/// carries the outbound link, captions in `.b_caption`.
const SELECTORS: SelectorSet = SelectorSet {
    container: "#b_results .b_algo",
    title: "h2",
    link: "h2 a[href]",
    snippet: ".b_caption",
};

pub(super) fn parse(html: &str) -> Result<Vec<SearchResult>> {
    parse_records(html, &SELECTORS)
}
