//! The search engine: registry owner and query parser.

use crate::error::ParseError;
use crate::filter::{FactoryRegistry, FilterFactory};
use crate::provider::{ProviderRegistry, StatProvider};
use crate::query::{FilterBinding, SearchQuery};
use crate::traits::Searchable;
use crate::value::StatType;

/// Owns the provider and factory registries and parses search strings.
///
/// An engine is configured once at startup, before the first parse: register
/// providers, and custom factories if the defaults don't fit. It is read-only
/// afterwards, so it can be shared freely across threads.
///
/// # Example
///
/// ```
/// use statsift::{SearchEngine, StatProvider, StatType, StatValue};
///
/// struct Gear {
///     level: i64,
/// }
///
/// struct LevelProvider;
///
/// impl StatProvider<Gear> for LevelProvider {
///     fn name(&self) -> &str {
///         "level"
///     }
///
///     fn stat_type(&self) -> StatType {
///         StatType::Int
///     }
///
///     fn values(&self, item: &Gear) -> Vec<StatValue> {
///         vec![StatValue::Int(item.level)]
///     }
/// }
///
/// let engine = SearchEngine::new().with_provider(LevelProvider);
/// let query = engine.parse("level:10-20");
/// assert_eq!(query.filters().len(), 1);
/// assert!(query.errors().is_empty());
/// ```
pub struct SearchEngine<I> {
    providers: ProviderRegistry<I>,
    factories: FactoryRegistry,
}

impl<I> SearchEngine<I> {
    /// Creates an engine with no providers and the default factory set
    /// (ranged filters for `Int`, text filters for `Text`).
    pub fn new() -> Self {
        SearchEngine {
            providers: ProviderRegistry::new(),
            factories: FactoryRegistry::default(),
        }
    }

    /// Creates an engine with no providers and the given factory registry.
    ///
    /// Use this when the default set is wrong for the host; factory order is
    /// significant (see [`FactoryRegistry`]).
    pub fn with_factories(factories: FactoryRegistry) -> Self {
        SearchEngine {
            providers: ProviderRegistry::new(),
            factories,
        }
    }

    /// Registers a stat provider. Keep registration alphabetical by
    /// canonical name.
    pub fn with_provider(mut self, provider: impl StatProvider<I> + 'static) -> Self {
        self.providers.register(provider);
        self
    }

    /// Appends a `(tag, factory)` pair to the factory registry.
    pub fn with_factory(mut self, tag: StatType, factory: impl FilterFactory + 'static) -> Self {
        self.factories.register(tag, factory);
        self
    }

    /// The provider registry, e.g. for autocomplete surfaces.
    pub fn providers(&self) -> &ProviderRegistry<I> {
        &self.providers
    }

    /// Parses a raw search string.
    ///
    /// Parsing is total: malformed tokens produce diagnostics and ignored
    /// character spans on the returned query, never a failure. Tokens are
    /// space-separated; a token containing `:` is a filter token, split at
    /// the first colon into a stat name and a value (later colons belong to
    /// the value), anything else is a plain-text token.
    pub fn parse(&self, raw: &str) -> SearchQuery<I> {
        let mut filters = Vec::new();
        let mut ignored_chars = Vec::new();
        let mut valid_filter_chars = Vec::new();
        let mut errors = Vec::new();
        let mut plain_text_tokens = Vec::new();

        // Offset of the current token's first char in the raw string. Empty
        // tokens between consecutive spaces still advance it by one.
        let mut token_start = 0usize;
        for token in raw.split(' ') {
            let token_len = token.chars().count();

            if let Some((name, value)) = token.split_once(':') {
                let name_len = name.chars().count();

                match self.providers.lookup(name) {
                    None => {
                        // Unknown stat: the whole token is ignored. The spans
                        // recorded here and below run one past the natural
                        // end; the highlighter contract expects that.
                        ignored_chars.extend(token_start..=token_start + token_len);
                        errors.push(ParseError::UnknownStat {
                            name: name.to_string(),
                        });
                    }
                    Some(provider) => {
                        // The name resolved; highlight it even if the value
                        // turns out invalid or is still being typed.
                        valid_filter_chars.extend(token_start..=token_start + name_len);

                        if !value.is_empty() {
                            match self.factories.create(provider.stat_type(), value) {
                                None => {
                                    ignored_chars.extend(
                                        token_start + name_len + 1..=token_start + token_len,
                                    );
                                    errors.push(ParseError::InvalidFilterValue {
                                        value: value.to_string(),
                                        expected: provider.stat_type(),
                                    });
                                }
                                Some(filter) => {
                                    filters.push(FilterBinding::new(provider, filter));
                                }
                            }
                        }
                    }
                }
            } else if !token.is_empty() {
                plain_text_tokens.push(token.to_string());
            }

            token_start += token_len + 1;
        }

        SearchQuery::new(
            raw.to_string(),
            filters,
            ignored_chars,
            valid_filter_chars,
            errors,
            plain_text_tokens,
        )
    }

    /// Tests whether a record matches a parsed query.
    ///
    /// Convenience for [`SearchQuery::matches`].
    pub fn matches<R>(&self, query: &SearchQuery<I>, record: &R) -> bool
    where
        R: Searchable<Item = I>,
    {
        query.matches(record)
    }
}

impl<I> Default for SearchEngine<I> {
    fn default() -> Self {
        SearchEngine::new()
    }
}
