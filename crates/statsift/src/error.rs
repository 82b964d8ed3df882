//! Parse diagnostics.

use thiserror::Error;

use crate::value::StatType;

/// A diagnostic produced while parsing a search query.
///
/// Both kinds are recoverable: the parser never aborts, it records the
/// diagnostic, marks the offending character span as ignored and moves on to
/// the next token. The rendered message is intended for direct display next
/// to the search box.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A filter token's name portion matched no provider, by canonical name
    /// or alias. The whole token is ignored.
    #[error("unknown stat '{name}'")]
    UnknownStat {
        /// The unresolved identifier as typed.
        name: String,
    },

    /// The name resolved, but the value portion was rejected by the factory
    /// registered for the provider's type. Only the value span is ignored.
    #[error("'{value}' is not a valid {expected} filter value")]
    InvalidFilterValue {
        /// The rejected raw value as typed.
        value: String,
        /// The type the provider declared.
        expected: StatType,
    },
}
