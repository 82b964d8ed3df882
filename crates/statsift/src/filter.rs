//! Stat filters, filter factories, and the factory registry.
//!
//! A [`StatFilter`] is an immutable predicate over the values of one stat,
//! produced by a [`FilterFactory`] from the raw value portion of a filter
//! token. Factories are registered against a [`StatType`] tag; the registry
//! scans its entries in order and invokes the first factory whose tag
//! matches.

use crate::value::{StatType, StatValue};

/// An inclusive integer interval `[min, max]`.
///
/// Parsed from the value portion of an integer filter token. Accepted forms:
///
/// | Input    | Interval            |
/// |----------|---------------------|
/// | `17`     | `[17, 17]`          |
/// | `10-20`  | `[10, 20]`          |
/// | `>10`    | `[11, i64::MAX]`    |
/// | `>=10`   | `[10, i64::MAX]`    |
/// | `<10`    | `[i64::MIN, 9]`     |
/// | `<=10`   | `[i64::MIN, 10]`    |
///
/// Bounds are stored as given; an inverted interval like `20-10` parses but
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangedFilter {
    min: i64,
    max: i64,
}

impl RangedFilter {
    /// Creates a filter covering `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        RangedFilter { min, max }
    }

    /// Creates a filter matching exactly `n`.
    pub fn exactly(n: i64) -> Self {
        RangedFilter { min: n, max: n }
    }

    /// Creates a filter matching any value `>= n`.
    pub fn at_least(n: i64) -> Self {
        RangedFilter {
            min: n,
            max: i64::MAX,
        }
    }

    /// Creates a filter matching any value `<= n`.
    pub fn at_most(n: i64) -> Self {
        RangedFilter {
            min: i64::MIN,
            max: n,
        }
    }

    /// Parses the value portion of an integer filter token.
    ///
    /// Returns `None` if the input fits none of the accepted forms.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(rest) = input.strip_prefix(">=") {
            return rest.parse().ok().map(Self::at_least);
        }
        if let Some(rest) = input.strip_prefix("<=") {
            return rest.parse().ok().map(Self::at_most);
        }
        if let Some(rest) = input.strip_prefix('>') {
            // Saturate at the extremes instead of overflowing.
            return rest.parse::<i64>().ok().map(|n| Self::at_least(n.saturating_add(1)));
        }
        if let Some(rest) = input.strip_prefix('<') {
            return rest.parse::<i64>().ok().map(|n| Self::at_most(n.saturating_sub(1)));
        }
        if let Ok(n) = input.parse() {
            return Some(Self::exactly(n));
        }
        if let Some((lo, hi)) = input.split_once('-') {
            if let (Ok(lo), Ok(hi)) = (lo.parse(), hi.parse()) {
                return Some(Self::new(lo, hi));
            }
        }
        None
    }

    /// Returns the lower bound.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Returns `true` if `n` lies within the interval.
    pub fn contains(&self, n: i64) -> bool {
        self.min <= n && n <= self.max
    }
}

/// A case-insensitive text match.
///
/// The value portion of a text filter token is matched against a stat's text
/// values by substring containment; surrounding the value in double quotes
/// asks for whole-value equality instead. Either way the comparison is
/// case-insensitive, and every input is a valid text filter, which is what
/// makes [`StatType::Text`] the conventional fallback tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
    exact: bool,
}

impl TextFilter {
    /// Parses the value portion of a text filter token. Never declines.
    pub fn parse(input: &str) -> Self {
        if input.len() >= 2 && input.starts_with('"') && input.ends_with('"') {
            TextFilter {
                needle: input[1..input.len() - 1].to_lowercase(),
                exact: true,
            }
        } else {
            TextFilter {
                needle: input.to_lowercase(),
                exact: false,
            }
        }
    }

    /// Returns `true` if this filter requires whole-value equality.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns `true` if `value` satisfies the match.
    pub fn matches_str(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        if self.exact {
            value == self.needle
        } else {
            value.contains(&self.needle)
        }
    }
}

/// A typed predicate over the values of one stat.
///
/// The closed set of filter kinds; each variant matches values of exactly one
/// [`StatType`], and a value of any other type never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatFilter {
    /// Integer interval filter.
    Range(RangedFilter),
    /// Case-insensitive text filter.
    Text(TextFilter),
}

impl StatFilter {
    /// Returns the [`StatType`] this filter applies to.
    pub fn stat_type(&self) -> StatType {
        match self {
            StatFilter::Range(_) => StatType::Int,
            StatFilter::Text(_) => StatType::Text,
        }
    }

    /// Evaluates this filter against a single value.
    pub fn matches_value(&self, value: &StatValue) -> bool {
        match (self, value) {
            (StatFilter::Range(range), StatValue::Int(n)) => range.contains(*n),
            (StatFilter::Text(text), StatValue::Text(s)) => text.matches_str(s),
            // Type mismatch never matches.
            _ => false,
        }
    }

    /// Evaluates this filter against a stat's value list.
    ///
    /// A multi-valued stat matches if any of its values does; an empty list
    /// matches nothing.
    pub fn matches(&self, values: &[StatValue]) -> bool {
        values.iter().any(|value| self.matches_value(value))
    }
}

/// Parses the raw value portion of a filter token into a [`StatFilter`],
/// or declines.
///
/// Factories are stateless and pure; they are registered once against a
/// [`StatType`] tag and owned by the [`FactoryRegistry`].
pub trait FilterFactory: Send + Sync {
    /// Attempts to parse `input` into a filter. Returns `None` to decline.
    fn create(&self, input: &str) -> Option<StatFilter>;
}

/// Factory for [`RangedFilter`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangedFilterFactory;

impl FilterFactory for RangedFilterFactory {
    fn create(&self, input: &str) -> Option<StatFilter> {
        RangedFilter::parse(input).map(StatFilter::Range)
    }
}

/// Factory for [`TextFilter`]s. Accepts any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFilterFactory;

impl FilterFactory for TextFilterFactory {
    fn create(&self, input: &str) -> Option<StatFilter> {
        Some(StatFilter::Text(TextFilter::parse(input)))
    }
}

/// Ordered, write-once registry of `(tag, factory)` pairs.
///
/// Resolution scans the pairs in registration order, picks the first whose
/// tag matches, and invokes that factory once: if it declines, resolution
/// fails for the tag with no fallback to a later factory of the same tag.
/// Register more specific parsers for a tag before more permissive ones, and
/// keep [`StatType::Text`] last; any input is a valid text filter, so it
/// acts as the universal fallback.
pub struct FactoryRegistry {
    factories: Vec<(StatType, Box<dyn FilterFactory>)>,
}

impl FactoryRegistry {
    /// Creates a registry with no factories.
    pub fn empty() -> Self {
        FactoryRegistry {
            factories: Vec::new(),
        }
    }

    /// Appends a `(tag, factory)` pair.
    pub fn register(&mut self, tag: StatType, factory: impl FilterFactory + 'static) {
        self.factories.push((tag, Box::new(factory)));
    }

    /// Resolves a raw value against the first factory registered for `tag`.
    pub fn create(&self, tag: StatType, input: &str) -> Option<StatFilter> {
        self.factories
            .iter()
            .find(|(registered, _)| *registered == tag)
            .and_then(|(_, factory)| factory.create(input))
    }

    /// Returns the number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no factories are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for FactoryRegistry {
    /// The canonical factory set: ranged filters for integers first, text
    /// filters last as the fallback.
    fn default() -> Self {
        let mut registry = FactoryRegistry::empty();
        registry.register(StatType::Int, RangedFilterFactory);
        registry.register(StatType::Text, TextFilterFactory);
        registry
    }
}
