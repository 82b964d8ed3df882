//! The record adaptation capability.

/// A record that can be searched.
///
/// The evaluator consumes records through this trait: [`item`](Searchable::item)
/// adapts the record to the internal item model providers extract stats from,
/// and [`display_name`](Searchable::display_name) supplies the name plain-text
/// tokens are matched against. A record that fails adaptation never matches a
/// non-empty query.
///
/// `display_name` should return the name with any display formatting already
/// stripped; matching is case-insensitive, so casing does not matter.
///
/// # Example
///
/// ```
/// use statsift::Searchable;
///
/// struct Gear {
///     name: String,
///     level: i64,
/// }
///
/// /// Inventory slots may be empty.
/// struct Slot(Option<Gear>);
///
/// impl Searchable for Slot {
///     type Item = Gear;
///
///     fn item(&self) -> Option<&Gear> {
///         self.0.as_ref()
///     }
///
///     fn display_name(&self) -> String {
///         self.0.as_ref().map(|gear| gear.name.clone()).unwrap_or_default()
///     }
/// }
/// # let _ = Slot(None).item().map(|g| g.level);
/// ```
pub trait Searchable {
    /// The internal item model stat providers extract values from.
    type Item;

    /// Adapts this record to the item model, or `None` if it has no item
    /// representation (an empty slot, an unrecognized entry).
    fn item(&self) -> Option<&Self::Item>;

    /// The record's display name, formatting stripped.
    fn display_name(&self) -> String;
}
