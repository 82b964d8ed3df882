//! Stat type tags and runtime values.
//!
//! Every stat a provider exposes is tagged with a [`StatType`], and every
//! value it extracts from an item is a [`StatValue`]. The two enums are the
//! closed set of kinds the filter machinery dispatches on: a filter built for
//! one tag never matches values of another.

use std::fmt;

/// Type tag for a stat.
///
/// The tag is declared by each [`StatProvider`](crate::StatProvider) and used
/// to select a compatible filter factory when a query is parsed. It also
/// names the expected type in diagnostics (`"integer"`, `"text"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatType {
    /// Integer-valued stats, filterable by ranges and comparators.
    Int,
    /// Text-valued stats, filterable by substring or exact match.
    Text,
}

impl StatType {
    /// Returns the display name of this type, as used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            StatType::Int => "integer",
            StatType::Text => "text",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Runtime value of a stat, extracted from an item by a provider.
///
/// A provider returns a list of these: most stats are single-valued, but some
/// (e.g. a "profession" stat on an item usable by several professions) carry
/// several values, and a filter matches if any of them does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
}

impl StatValue {
    /// Returns the [`StatType`] tag this value belongs to.
    pub fn stat_type(&self) -> StatType {
        match self {
            StatValue::Int(_) => StatType::Int,
            StatValue::Text(_) => StatType::Text,
        }
    }

    /// Returns `true` if this is an `Int` value.
    pub fn is_int(&self) -> bool {
        matches!(self, StatValue::Int(_))
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, StatValue::Text(_))
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StatValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for StatValue {
    fn from(n: i64) -> Self {
        StatValue::Int(n)
    }
}

impl From<i32> for StatValue {
    fn from(n: i32) -> Self {
        StatValue::Int(n as i64)
    }
}

impl From<String> for StatValue {
    fn from(s: String) -> Self {
        StatValue::Text(s)
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}
