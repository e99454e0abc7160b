//! Bootstrap selector table.
//!
//! Named, symbolic access to the Bootstrap grid and button class selectors,
//! sparing callers from hardcoding selector literals:
//!
//! - [`grid`]: row container and column-span selectors
//! - [`btn`]: button selectors
//! - [`table`]: the same entries as a two-level name → value lookup table
//!
//! Constants are exported directly and the table is a `static`; nothing
//! registers itself into a shared namespace at load time.

pub mod btn;
pub mod grid;
mod table;

pub use bsel_selector::{Selector, SelectorError};
pub use table::{global_table_map, lookup, Entry, Group, TableMap, Value, GROUPS};
