//! Parsed search queries and their evaluation.
//!
//! A [`SearchQuery`] is the structured result of parsing one search-box
//! string: resolved filter bindings, plain-text terms, per-character
//! highlight data and diagnostics. Evaluation is a pure conjunction: every
//! binding must match, and the record's display name must contain the
//! space-joined plain-text terms.

use std::fmt;
use std::sync::Arc;

use crate::error::ParseError;
use crate::filter::StatFilter;
use crate::provider::StatProvider;
use crate::traits::Searchable;

/// One resolved stat provider bound to one resolved filter.
///
/// Created only by the parser; type agreement between the two halves holds by
/// construction, because the filter was built by the factory registered for
/// the provider's declared [`StatType`](crate::StatType).
pub struct FilterBinding<I> {
    provider: Arc<dyn StatProvider<I>>,
    filter: StatFilter,
}

impl<I> FilterBinding<I> {
    pub(crate) fn new(provider: Arc<dyn StatProvider<I>>, filter: StatFilter) -> Self {
        FilterBinding { provider, filter }
    }

    /// The bound provider.
    pub fn provider(&self) -> &dyn StatProvider<I> {
        self.provider.as_ref()
    }

    /// The bound filter.
    pub fn filter(&self) -> &StatFilter {
        &self.filter
    }

    /// Evaluates the filter against the provider's values for `item`.
    pub fn matches(&self, item: &I) -> bool {
        self.filter.matches(&self.provider.values(item))
    }
}

impl<I> fmt::Debug for FilterBinding<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBinding")
            .field("provider", &self.provider.name())
            .field("filter", &self.filter)
            .finish()
    }
}

impl<I> PartialEq for FilterBinding<I> {
    fn eq(&self, other: &Self) -> bool {
        self.provider.name() == other.provider.name() && self.filter == other.filter
    }
}

/// The structured result of parsing a search string.
///
/// Immutable once constructed. The character index lists drive UI
/// highlighting: `valid_filter_chars` covers the name portion of every token
/// whose name resolved, `ignored_chars` covers tokens and sub-tokens that
/// failed to resolve. Offsets are counted in characters, and each recorded
/// span includes one position past its natural end; downstream rendering
/// compensates for that, so the convention is preserved as-is.
pub struct SearchQuery<I> {
    raw: String,
    filters: Vec<FilterBinding<I>>,
    ignored_chars: Vec<usize>,
    valid_filter_chars: Vec<usize>,
    errors: Vec<ParseError>,
    plain_text_tokens: Vec<String>,
}

impl<I> SearchQuery<I> {
    pub(crate) fn new(
        raw: String,
        filters: Vec<FilterBinding<I>>,
        ignored_chars: Vec<usize>,
        valid_filter_chars: Vec<usize>,
        errors: Vec<ParseError>,
        plain_text_tokens: Vec<String>,
    ) -> Self {
        SearchQuery {
            raw,
            filters,
            ignored_chars,
            valid_filter_chars,
            errors,
            plain_text_tokens,
        }
    }

    /// The original input string, retained for display and re-editing.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The resolved filter bindings, in left-to-right token order.
    pub fn filters(&self) -> &[FilterBinding<I>] {
        &self.filters
    }

    /// Character offsets of tokens and sub-tokens that failed to resolve.
    pub fn ignored_chars(&self) -> &[usize] {
        &self.ignored_chars
    }

    /// Character offsets covering the name portion of every resolved filter
    /// token.
    pub fn valid_filter_chars(&self) -> &[usize] {
        &self.valid_filter_chars
    }

    /// Diagnostics collected during parsing, in left-to-right order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Whitespace-delimited substrings that were not filter tokens.
    pub fn plain_text_tokens(&self) -> &[String] {
        &self.plain_text_tokens
    }

    /// Returns `true` if the query expresses no constraints: no resolved
    /// filters and no plain-text terms.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.plain_text_tokens.is_empty()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests whether a record matches this query.
    ///
    /// An empty query matches everything. A record that cannot be adapted to
    /// the item model matches no non-empty query. Otherwise the record must
    /// satisfy every filter binding, and its display name must contain the
    /// space-joined plain-text terms (case-insensitive).
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Searchable<Item = I>,
    {
        if self.is_empty() {
            return true;
        }

        let Some(item) = record.item() else {
            return false;
        };

        self.filter_matches(item) && self.name_matches(&record.display_name())
    }

    /// `true` iff every binding matches. Vacuously true without filters.
    fn filter_matches(&self, item: &I) -> bool {
        self.filters.iter().all(|binding| binding.matches(item))
    }

    /// `true` iff there are no plain-text terms, or the display name contains
    /// their space-joined concatenation, case-folded.
    fn name_matches(&self, display_name: &str) -> bool {
        self.plain_text_tokens.is_empty()
            || display_name
                .to_lowercase()
                .contains(&self.plain_text_tokens.join(" ").to_lowercase())
    }

    /// Filters a slice, returning references to matching records.
    pub fn filter<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Searchable<Item = I>,
    {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    /// Counts the matching records.
    pub fn count<R>(&self, records: &[R]) -> usize
    where
        R: Searchable<Item = I>,
    {
        records.iter().filter(|record| self.matches(*record)).count()
    }

    /// Returns `true` if any record matches.
    pub fn any<R>(&self, records: &[R]) -> bool
    where
        R: Searchable<Item = I>,
    {
        records.iter().any(|record| self.matches(record))
    }

    /// Finds the first matching record.
    pub fn find<'a, R>(&self, records: &'a [R]) -> Option<&'a R>
    where
        R: Searchable<Item = I>,
    {
        records.iter().find(|record| self.matches(*record))
    }
}

impl<I> fmt::Debug for SearchQuery<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchQuery")
            .field("raw", &self.raw)
            .field("filters", &self.filters)
            .field("ignored_chars", &self.ignored_chars)
            .field("valid_filter_chars", &self.valid_filter_chars)
            .field("errors", &self.errors)
            .field("plain_text_tokens", &self.plain_text_tokens)
            .finish()
    }
}

impl<I> PartialEq for SearchQuery<I> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
            && self.filters == other.filters
            && self.ignored_chars == other.ignored_chars
            && self.valid_filter_chars == other.valid_filter_chars
            && self.errors == other.errors
            && self.plain_text_tokens == other.plain_text_tokens
    }
}
