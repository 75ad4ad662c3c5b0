//! Google results-page parser.

use super::{parse_records, SelectorSet};
use crate::{Result, SearchResult};

/// Google's result markup: `div.g` blocks, `h3` titles, the first anchor in
/// the block as the link, snippets in `div.VwiC3b`.
const SELECTORS: SelectorSet = SelectorSet {
    container: "div.g",
    title: "h3",
    link: "a[href]",
    snippet: "div.VwiC3b",
};

pub(super) fn parse(html: &str) -> Result<Vec<SearchResult>> {
    parse_records(html, &SELECTORS)
}
