//! End-to-end tests against a small gear-item model.

use statsift::{
    ParseError, RangedFilter, SearchEngine, Searchable, StatFilter, StatProvider, StatType,
    StatValue,
};

// ============================================================================
// Fixture: item model, records, providers
// ============================================================================

#[derive(Debug, Clone)]
struct GearItem {
    name: String,
    level: i64,
    professions: Vec<String>,
}

/// An inventory slot as the host hands it to us: possibly empty, with a
/// display name that may carry `§x` formatting codes.
#[derive(Debug, Clone)]
struct Slot {
    item: Option<GearItem>,
    display_name: String,
}

impl Slot {
    fn filled(name: &str, level: i64, professions: &[&str]) -> Self {
        Slot {
            item: Some(GearItem {
                name: name.to_string(),
                level,
                professions: professions.iter().map(|p| p.to_string()).collect(),
            }),
            display_name: name.to_string(),
        }
    }

    fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = display_name.to_string();
        self
    }

    fn empty() -> Self {
        Slot {
            item: None,
            display_name: String::new(),
        }
    }
}

impl Searchable for Slot {
    type Item = GearItem;

    fn item(&self) -> Option<&GearItem> {
        self.item.as_ref()
    }

    fn display_name(&self) -> String {
        // Strip `§x` formatting codes the way the host's styled-text layer
        // would before matching.
        let mut stripped = String::with_capacity(self.display_name.len());
        let mut chars = self.display_name.chars();
        while let Some(c) = chars.next() {
            if c == '§' {
                chars.next();
            } else {
                stripped.push(c);
            }
        }
        stripped
    }
}

struct LevelProvider;

impl StatProvider<GearItem> for LevelProvider {
    fn name(&self) -> &str {
        "level"
    }

    fn aliases(&self) -> &[&str] {
        &["lvl"]
    }

    fn stat_type(&self) -> StatType {
        StatType::Int
    }

    fn values(&self, item: &GearItem) -> Vec<StatValue> {
        vec![StatValue::Int(item.level)]
    }

    fn description(&self) -> &str {
        "The combat level required to use the item"
    }
}

struct ProfessionProvider;

impl StatProvider<GearItem> for ProfessionProvider {
    fn name(&self) -> &str {
        "profession"
    }

    fn aliases(&self) -> &[&str] {
        &["prof"]
    }

    fn stat_type(&self) -> StatType {
        StatType::Text
    }

    fn values(&self, item: &GearItem) -> Vec<StatValue> {
        item.professions
            .iter()
            .map(|p| StatValue::Text(p.clone()))
            .collect()
    }
}

fn engine() -> SearchEngine<GearItem> {
    // Alphabetical by canonical name.
    SearchEngine::new()
        .with_provider(LevelProvider)
        .with_provider(ProfessionProvider)
}

// ============================================================================
// Parsing scenarios
// ============================================================================

#[test]
fn scenario_range_filter_plus_unknown_stat() {
    let query = engine().parse("level:10-20 tier:mythic");

    assert_eq!(query.filters().len(), 1);
    let binding = &query.filters()[0];
    assert_eq!(binding.provider().name(), "level");
    assert_eq!(
        binding.filter(),
        &StatFilter::Range(RangedFilter::new(10, 20))
    );
    assert_eq!(binding.filter().stat_type(), binding.provider().stat_type());

    // "tier:mythic" starts at char 12 and is 11 chars long; the recorded
    // span runs through one past the end.
    assert_eq!(
        query.ignored_chars(),
        (12..=23).collect::<Vec<_>>().as_slice()
    );
    // "level" plus the colon position.
    assert_eq!(query.valid_filter_chars(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(
        query.errors(),
        [ParseError::UnknownStat {
            name: "tier".to_string()
        }]
    );
    assert!(query.plain_text_tokens().is_empty());
}

#[test]
fn scenario_invalid_integer_value() {
    let query = engine().parse("level:invalidnumber");

    assert!(query.filters().is_empty());
    assert_eq!(
        query.valid_filter_chars(),
        (0..=5).collect::<Vec<_>>().as_slice()
    );
    assert_eq!(
        query.ignored_chars(),
        (6..=19).collect::<Vec<_>>().as_slice()
    );
    assert_eq!(
        query.errors(),
        [ParseError::InvalidFilterValue {
            value: "invalidnumber".to_string(),
            expected: StatType::Int
        }]
    );
}

#[test]
fn scenario_plain_text_with_filter() {
    let query = engine().parse("cool sword level:5");

    assert_eq!(query.plain_text_tokens(), ["cool", "sword"]);
    assert_eq!(query.filters().len(), 1);
    assert_eq!(
        query.filters()[0].filter(),
        &StatFilter::Range(RangedFilter::exactly(5))
    );

    let matching = Slot::filled("A Cool Sword of Testing", 5, &[]);
    assert!(query.matches(&matching));

    let wrong_level = Slot::filled("A Cool Sword of Testing", 6, &[]);
    assert!(!query.matches(&wrong_level));

    let wrong_name = Slot::filled("A Cool Bow of Testing", 5, &[]);
    assert!(!query.matches(&wrong_name));
}

#[test]
fn name_with_empty_value_is_highlighted_but_inert() {
    let query = engine().parse("level:");

    assert!(query.filters().is_empty());
    assert!(query.errors().is_empty());
    assert!(query.ignored_chars().is_empty());
    assert_eq!(query.valid_filter_chars(), [0, 1, 2, 3, 4, 5]);
    assert!(query.is_empty());
    // An inert query still matches everything.
    assert!(query.matches(&Slot::filled("Anything", 1, &[])));
}

#[test]
fn diagnostics_are_ordered_left_to_right() {
    let query = engine().parse("tier:mythic level:bad rarity:rare");

    assert_eq!(query.errors().len(), 3);
    assert_eq!(
        query.errors()[0],
        ParseError::UnknownStat {
            name: "tier".to_string()
        }
    );
    assert_eq!(
        query.errors()[1],
        ParseError::InvalidFilterValue {
            value: "bad".to_string(),
            expected: StatType::Int
        }
    );
    assert_eq!(
        query.errors()[2],
        ParseError::UnknownStat {
            name: "rarity".to_string()
        }
    );

    // Diagnostics render as display strings for the UI.
    assert_eq!(query.errors()[0].to_string(), "unknown stat 'tier'");
    assert_eq!(
        query.errors()[1].to_string(),
        "'bad' is not a valid integer filter value"
    );
}

#[test]
fn comparator_forms_parse_to_half_open_ranges() {
    let engine = engine();

    let query = engine.parse("level:>=50");
    assert_eq!(
        query.filters()[0].filter(),
        &StatFilter::Range(RangedFilter::at_least(50))
    );

    let query = engine.parse("level:>50");
    assert_eq!(
        query.filters()[0].filter(),
        &StatFilter::Range(RangedFilter::at_least(51))
    );

    let query = engine.parse("level:<=50");
    assert_eq!(
        query.filters()[0].filter(),
        &StatFilter::Range(RangedFilter::at_most(50))
    );

    let query = engine.parse("level:<50");
    assert_eq!(
        query.filters()[0].filter(),
        &StatFilter::Range(RangedFilter::at_most(49))
    );
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn empty_query_matches_every_record() {
    for raw in ["", " ", "   "] {
        let query = engine().parse(raw);
        assert!(query.is_empty(), "{raw:?} should parse to an empty query");
        assert!(query.matches(&Slot::filled("Sword", 1, &[])));
        assert!(query.matches(&Slot::empty()));
    }
}

#[test]
fn empty_slot_never_matches_a_constrained_query() {
    let query = engine().parse("level:5");
    assert!(!query.matches(&Slot::empty()));

    let query = engine().parse("sword");
    assert!(!query.matches(&Slot::empty()));
}

#[test]
fn multi_valued_profession_matches_any() {
    let query = engine().parse("profession:mining");

    assert!(query.matches(&Slot::filled("Gathering Pick", 1, &["mining", "woodcutting"])));
    assert!(query.matches(&Slot::filled("Miner Hat", 1, &["mining"])));
    assert!(!query.matches(&Slot::filled("Fishing Rod", 1, &["fishing"])));
    assert!(!query.matches(&Slot::filled("Plain Sword", 1, &[])));
}

#[test]
fn quoted_text_value_requires_exact_match() {
    let contains = engine().parse("profession:fish");
    assert!(contains.matches(&Slot::filled("Rod", 1, &["fishing"])));

    let exact = engine().parse("profession:\"fish\"");
    assert!(!exact.matches(&Slot::filled("Rod", 1, &["fishing"])));
    assert!(exact.matches(&Slot::filled("Rod", 1, &["Fish"])));
}

#[test]
fn conjunction_of_filters() {
    let both = engine().parse("level:10-20 profession:mining");
    let level_only = engine().parse("level:10-20");
    let profession_only = engine().parse("profession:mining");

    let records = [
        Slot::filled("Pick", 15, &["mining"]),
        Slot::filled("Pick", 25, &["mining"]),
        Slot::filled("Pick", 15, &["fishing"]),
        Slot::filled("Pick", 25, &["fishing"]),
    ];

    for record in &records {
        assert_eq!(
            both.matches(record),
            level_only.matches(record) && profession_only.matches(record)
        );
    }
}

#[test]
fn name_matching_strips_formatting_and_case() {
    let query = engine().parse("cool sword");

    let fancy = Slot::filled("Cool Sword", 1, &[]).with_display_name("§6Cool §bSword");
    assert!(query.matches(&fancy));

    let plain = Slot::filled("COOL SWORD", 1, &[]);
    assert!(query.matches(&plain));
}

#[test]
fn malformed_tokens_do_not_constrain_matching() {
    // The unknown stat is ignored; only the level filter applies.
    let query = engine().parse("tier:mythic level:5");
    assert!(query.matches(&Slot::filled("Sword", 5, &[])));
    assert!(!query.matches(&Slot::filled("Sword", 6, &[])));
}

#[test]
fn collection_helpers() {
    let records = vec![
        Slot::filled("Iron Sword", 10, &[]),
        Slot::filled("Oak Bow", 10, &[]),
        Slot::filled("Steel Sword", 30, &[]),
        Slot::empty(),
    ];

    let query = engine().parse("sword level:<=20");
    let hits = query.filter(&records);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name(), "Iron Sword");
    assert_eq!(query.count(&records), 1);
    assert!(query.any(&records));
    assert_eq!(
        query.find(&records).unwrap().display_name(),
        "Iron Sword"
    );
}

// ============================================================================
// Engine surface
// ============================================================================

#[test]
fn provider_registry_is_inspectable() {
    let engine = engine();
    let providers = engine.providers();

    assert_eq!(providers.len(), 2);
    assert_eq!(providers.providers()[0].name(), "level");
    assert_eq!(providers.providers()[1].name(), "profession");
    assert_eq!(
        providers.providers()[0].description(),
        "The combat level required to use the item"
    );
    assert_eq!(providers.lookup("prof").unwrap().name(), "profession");
}

#[test]
fn engine_matches_delegates_to_query() {
    let engine = engine();
    let query = engine.parse("level:5");
    let record = Slot::filled("Sword", 5, &[]);

    assert_eq!(engine.matches(&query, &record), query.matches(&record));
}

#[test]
fn reparse_round_trip_is_structural_identity() {
    let engine = engine();
    let inputs = [
        "cool sword level:10-20 tier:mythic profession:",
        "  lvl:5  ",
        ":broken level:bad",
    ];

    for raw in inputs {
        let first = engine.parse(raw);
        let second = engine.parse(first.raw());
        assert_eq!(first, second, "re-parsing {raw:?} changed the query");
    }
}
