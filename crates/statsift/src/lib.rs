//! Statsift - search-box query language for filtering typed item collections.
//!
//! Statsift parses the free-text string a user types into a search box into a
//! structured query of typed stat filters and plain-text terms, reports
//! per-character validity so a UI can highlight what it understood and grey
//! out what it didn't, and evaluates the parsed query against arbitrary
//! records. It supports:
//!
//! - `name:value` filter tokens resolved against named, typed stat providers
//!   (with aliases), e.g. `level:10-20` or `profession:mining`
//! - Integer filters in range and comparator forms (`17`, `10-20`, `>=10`),
//!   case-insensitive text filters with a quoted exact form (`"sword"`)
//! - Plain-text terms matched against a record's display name
//! - Character-exact highlight spans and human-readable diagnostics for
//!   malformed tokens; parsing never fails, it degrades
//!
//! # Quick Start
//!
//! ```rust
//! use statsift::{SearchEngine, Searchable, StatProvider, StatType, StatValue};
//!
//! // Define your item model
//! struct Gear {
//!     name: String,
//!     level: i64,
//! }
//!
//! // Expose one queryable stat
//! struct LevelProvider;
//!
//! impl StatProvider<Gear> for LevelProvider {
//!     fn name(&self) -> &str {
//!         "level"
//!     }
//!
//!     fn aliases(&self) -> &[&str] {
//!         &["lvl"]
//!     }
//!
//!     fn stat_type(&self) -> StatType {
//!         StatType::Int
//!     }
//!
//!     fn values(&self, item: &Gear) -> Vec<StatValue> {
//!         vec![StatValue::Int(item.level)]
//!     }
//! }
//!
//! // Make your records searchable
//! impl Searchable for Gear {
//!     type Item = Gear;
//!
//!     fn item(&self) -> Option<&Gear> {
//!         Some(self)
//!     }
//!
//!     fn display_name(&self) -> String {
//!         self.name.clone()
//!     }
//! }
//!
//! // Configure once at startup, parse and evaluate per keystroke
//! let engine = SearchEngine::new().with_provider(LevelProvider);
//! let query = engine.parse("cool sword level:5");
//!
//! let item = Gear { name: "A Cool Sword".into(), level: 5 };
//! assert!(query.matches(&item));
//!
//! let item = Gear { name: "A Cool Sword".into(), level: 6 };
//! assert!(!query.matches(&item));
//! ```
//!
//! # Query Syntax
//!
//! A query is a space-separated list of tokens. A token containing `:` is a
//! filter token: the part before the first colon names a stat, the rest is
//! the filter value (later colons are part of the value). Every other
//! non-empty token is a plain-text term; a record matches when every filter
//! matches and its display name contains the space-joined terms,
//! case-insensitively.
//!
//! Malformed tokens never abort parsing. An unknown stat name ignores the
//! whole token; a value its type's factory rejects ignores just the value,
//! keeping the name highlighted. Both record a diagnostic, and the query's
//! [`ignored_chars`](SearchQuery::ignored_chars) /
//! [`valid_filter_chars`](SearchQuery::valid_filter_chars) spans tell the UI
//! exactly which characters to grey out or highlight.

mod engine;
mod error;
mod filter;
mod provider;
mod query;
mod traits;
mod value;

// Re-export public API
pub use engine::SearchEngine;
pub use error::ParseError;
pub use filter::{
    FactoryRegistry, FilterFactory, RangedFilter, RangedFilterFactory, StatFilter, TextFilter,
    TextFilterFactory,
};
pub use provider::{ProviderRegistry, StatProvider};
pub use query::{FilterBinding, SearchQuery};
pub use traits::Searchable;
pub use value::{StatType, StatValue};
