#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for tag derivation during catalog loading.

use std::cell::RefCell;

use mixology_core::{Catalog, CatalogEntity};
use mixology_data::parse_catalog;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const FIXTURE: &str = include_str!("fixtures/cocktails.json");

/// Scenario state shared between steps.
pub struct LoadContext {
    json: RefCell<Option<String>>,
    catalog: RefCell<Option<Catalog>>,
}

#[fixture]
/// Build an empty context for each scenario.
pub fn context() -> LoadContext {
    LoadContext {
        json: RefCell::new(None),
        catalog: RefCell::new(None),
    }
}

#[given("the sample cocktail catalog")]
fn sample_catalog(context: &LoadContext) {
    *context.json.borrow_mut() = Some(FIXTURE.to_owned());
}

#[given("a catalog with one blank record and one valid record")]
fn catalog_with_blank_record(context: &LoadContext) {
    let json = r#"[
        {"id": "  ", "name": "Blank", "base_spirit": "gin", "build_method": "shaken"},
        {"id": "gimlet", "name": "Gimlet", "base_spirit": "gin", "build_method": "shaken"}
    ]"#;
    *context.json.borrow_mut() = Some(json.to_owned());
}

#[when("I load the catalog")]
fn load(context: &LoadContext) {
    let json = context.json.borrow().clone().expect("catalog json set");
    let catalog = parse_catalog(json.as_bytes()).expect("catalog parses");
    *context.catalog.borrow_mut() = Some(catalog);
}

#[then("{id} carries the mood tag {tag}")]
fn has_mood_tag(context: &LoadContext, id: String, tag: String) {
    with_entity(context, &id, |entity| {
        assert!(entity.mood_tags.contains(unquote(&tag)), "{id} lacks mood {tag}");
    });
}

#[then("{id} carries the occasion tag {tag}")]
fn has_occasion_tag(context: &LoadContext, id: String, tag: String) {
    with_entity(context, &id, |entity| {
        assert!(
            entity.occasion_tags.contains(unquote(&tag)),
            "{id} lacks occasion {tag}"
        );
    });
}

#[then("{id} carries the style tag {tag}")]
fn has_style_tag(context: &LoadContext, id: String, tag: String) {
    with_entity(context, &id, |entity| {
        assert!(entity.style_tags.contains(unquote(&tag)), "{id} lacks style {tag}");
    });
}

#[then("the catalog holds {count} cocktail")]
fn catalog_size(context: &LoadContext, count: usize) {
    let guard = context.catalog.borrow();
    let catalog = guard.as_ref().expect("catalog loaded");
    assert_eq!(catalog.len(), count);
}

fn with_entity(context: &LoadContext, id: &str, check: impl FnOnce(&CatalogEntity)) {
    let guard = context.catalog.borrow();
    let catalog = guard.as_ref().expect("catalog loaded");
    let entity = catalog.get(unquote(id)).expect("entity present");
    check(entity);
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

#[scenario(path = "tests/features/tag_derivation.feature", index = 0)]
fn stirred_bitter_is_cozy(context: LoadContext) {
    let _ = context;
}

#[scenario(path = "tests/features/tag_derivation.feature", index = 1)]
fn built_spritz_is_light(context: LoadContext) {
    let _ = context;
}

#[scenario(path = "tests/features/tag_derivation.feature", index = 2)]
fn blank_records_are_skipped(context: LoadContext) {
    let _ = context;
}
