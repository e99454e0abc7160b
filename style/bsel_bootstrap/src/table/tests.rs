//! Tests for the lookup table.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use pretty_assertions::assert_eq;

use super::*;

fn snapshot() -> Vec<String> {
    GROUPS
        .iter()
        .flat_map(|group| group.entries.iter())
        .map(|entry| match &entry.value {
            Value::Literal(selector) => selector.as_str().to_owned(),
            Value::Formatter(formatter) => formatter(7).as_str().to_owned(),
        })
        .collect()
}

#[test]
fn grid_row_resolves_to_literal() {
    let value = lookup("grid", "row").unwrap();
    assert_eq!(value.as_literal().unwrap(), &grid::ROW);
}

#[test]
fn grid_span_resolves_to_formatter() {
    let value = lookup("grid", "span").unwrap();
    assert!(value.as_literal().is_none());
    assert_eq!(value.format(4).unwrap(), ".span4");
    assert_eq!(value.format(12).unwrap(), ".span12");
}

#[test]
fn button_entries_resolve() {
    let def = lookup("btn", "def").unwrap();
    assert_eq!(def.as_literal().unwrap(), &btn::DEF);

    let primary = lookup("btn", "primary").unwrap();
    assert_eq!(primary.as_literal().unwrap(), &btn::PRIMARY);
}

#[test]
fn literals_do_not_format() {
    assert!(lookup("btn", "def").unwrap().format(4).is_none());
}

#[test]
fn unknown_names_yield_none() {
    assert!(lookup("grid", "column").is_none());
    assert!(lookup("nav", "row").is_none());
    assert!(lookup("", "").is_none());
}

#[test]
fn groups_are_declared_in_order() {
    let names: Vec<&str> = GROUPS.iter().map(|group| group.name).collect();
    assert_eq!(names, vec!["grid", "btn"]);
}

#[test]
fn literals_are_well_formed_class_selectors() {
    for group in GROUPS {
        for entry in group.entries {
            if let Value::Literal(selector) = &entry.value {
                assert!(!selector.as_str().is_empty());
                assert!(
                    selector.as_str().starts_with('.'),
                    "{}.{} is not a class selector",
                    group.name,
                    entry.name
                );
            }
        }
    }
}

#[test]
fn repeated_lookups_observe_the_same_values() {
    let before = snapshot();
    let mut churn = 0;
    for cols in 0..100 {
        churn += grid::span(cols).as_str().len();
        churn += usize::from(lookup("btn", "def").is_some());
    }
    assert!(churn > 0);
    assert_eq!(before, snapshot());
}

#[test]
fn map_view_agrees_with_the_static_table() {
    let map = TableMap::new();
    for group in GROUPS {
        for entry in group.entries {
            assert!(
                map.lookup(group.name, entry.name).is_some(),
                "{}.{} missing from map view",
                group.name,
                entry.name
            );
        }
    }
}
