//! Stat providers and their registry.
//!
//! A [`StatProvider`] is a named, typed accessor exposing one queryable stat
//! of an item. Providers are registered once at startup and looked up by name
//! or alias while parsing filter tokens.

use std::sync::Arc;

use crate::value::{StatType, StatValue};

/// A named, typed accessor for one stat of an item.
///
/// Implementations supply their canonical name explicitly; it should be
/// lowercase and stable, since users type it in filter tokens and UIs may
/// list it for autocompletion. The value a provider extracts may be
/// multi-valued; single-valued stats return a one-element vec.
///
/// # Example
///
/// ```
/// use statsift::{StatProvider, StatType, StatValue};
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
///     fn aliases(&self) -> &[&str] {
///         &["lvl"]
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
/// ```
pub trait StatProvider<I>: Send + Sync {
    /// The canonical identifier of this stat, unique within a registry.
    fn name(&self) -> &str;

    /// Alternate identifiers resolving to this stat. Disjoint across
    /// providers by convention.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// The type tag used to select a compatible filter factory.
    fn stat_type(&self) -> StatType;

    /// Extracts this stat's values from an item.
    fn values(&self, item: &I) -> Vec<StatValue>;

    /// A plain-English one-liner for help and autocomplete surfaces.
    fn description(&self) -> &str {
        ""
    }
}

/// Ordered, write-once registry of stat providers.
///
/// Populated during startup, read-only afterwards. Lookup prefers canonical
/// names over aliases across the whole registry, and within each pass the
/// first registered match wins. Keep registration alphabetical by canonical
/// name; the tie-break should never be load-bearing.
pub struct ProviderRegistry<I> {
    providers: Vec<Arc<dyn StatProvider<I>>>,
}

impl<I> ProviderRegistry<I> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ProviderRegistry {
            providers: Vec::new(),
        }
    }

    /// Appends a provider to the registry.
    pub fn register(&mut self, provider: impl StatProvider<I> + 'static) {
        self.providers.push(Arc::new(provider));
    }

    /// Resolves an identifier to a provider.
    ///
    /// Returns the first provider whose canonical name equals `identifier`,
    /// else the first whose alias list contains it, else `None`.
    pub fn lookup(&self, identifier: &str) -> Option<Arc<dyn StatProvider<I>>> {
        self.providers
            .iter()
            .find(|p| p.name() == identifier)
            .or_else(|| {
                self.providers
                    .iter()
                    .find(|p| p.aliases().contains(&identifier))
            })
            .cloned()
    }

    /// Returns the registered providers in registration order.
    pub fn providers(&self) -> &[Arc<dyn StatProvider<I>>] {
        &self.providers
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` if no providers are registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<I> Default for ProviderRegistry<I> {
    fn default() -> Self {
        ProviderRegistry::new()
    }
}
