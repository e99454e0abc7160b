//! Two-level lookup table over the selector groups.
//!
//! [`GROUPS`] declares every entry as static data; [`TableMap`] is a
//! pre-computed hash-map view over it for name-based resolution. Callers
//! that know the entry they want at compile time should import the constants
//! from [`crate::grid`] and [`crate::btn`] directly instead.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use bsel_selector::Selector;

use crate::{btn, grid};

/// The value bound to an entry name.
#[derive(Clone, Debug)]
pub enum Value {
    /// A fixed selector.
    Literal(Selector),
    /// A formatter from a column count to a selector.
    Formatter(fn(u32) -> Selector),
}

impl Value {
    /// The literal selector, if this entry is one.
    #[inline]
    pub fn as_literal(&self) -> Option<&Selector> {
        match self {
            Value::Literal(selector) => Some(selector),
            Value::Formatter(_) => None,
        }
    }

    /// Apply the formatter with `cols`, if this entry is one.
    #[inline]
    pub fn format(&self, cols: u32) -> Option<Selector> {
        match self {
            Value::Literal(_) => None,
            Value::Formatter(formatter) => Some(formatter(cols)),
        }
    }
}

/// A named entry within a group.
#[derive(Clone, Debug)]
pub struct Entry {
    /// Entry name within its group (e.g. `"row"`).
    pub name: &'static str,
    /// The bound value.
    pub value: Value,
}

/// A named group of entries.
#[derive(Clone, Debug)]
pub struct Group {
    /// Group name (e.g. `"grid"`).
    pub name: &'static str,
    /// Entries in declaration order.
    pub entries: &'static [Entry],
}

/// Every selector group, in declaration order.
pub static GROUPS: &[Group] = &[
    Group {
        name: "grid",
        entries: &[
            Entry {
                name: "row",
                value: Value::Literal(grid::ROW),
            },
            Entry {
                name: "span",
                value: Value::Formatter(grid::span),
            },
        ],
    },
    Group {
        name: "btn",
        entries: &[
            Entry {
                name: "def",
                value: Value::Literal(btn::DEF),
            },
            Entry {
                name: "primary",
                value: Value::Literal(btn::PRIMARY),
            },
        ],
    },
];

/// Pre-computed lookup over [`GROUPS`].
///
/// Nested maps mirror the two-level namespace: group name → entry name →
/// value.
pub struct TableMap {
    groups: FxHashMap<&'static str, FxHashMap<&'static str, &'static Value>>,
}

impl TableMap {
    /// Build the map view from the static table.
    pub fn new() -> Self {
        let mut groups = FxHashMap::default();
        for group in GROUPS {
            let entries: FxHashMap<_, _> = group
                .entries
                .iter()
                .map(|entry| (entry.name, &entry.value))
                .collect();
            groups.insert(group.name, entries);
        }
        TableMap { groups }
    }

    /// Look up an entry by group and entry name.
    #[inline]
    pub fn lookup(&self, group: &str, entry: &str) -> Option<&'static Value> {
        self.groups.get(group)?.get(entry).copied()
    }
}

impl Default for TableMap {
    fn default() -> Self {
        Self::new()
    }
}

// Global singleton for the table map
static GLOBAL_TABLE_MAP: OnceLock<TableMap> = OnceLock::new();

/// Get the global table map (lazily initialized).
///
/// This is a singleton to avoid rebuilding the lookup table repeatedly.
pub fn global_table_map() -> &'static TableMap {
    GLOBAL_TABLE_MAP.get_or_init(TableMap::new)
}

/// Look up an entry in the global table map.
///
/// Unknown group or entry names yield `None`.
#[inline]
pub fn lookup(group: &str, entry: &str) -> Option<&'static Value> {
    global_table_map().lookup(group, entry)
}

#[cfg(test)]
mod tests;
