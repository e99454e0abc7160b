//! CSS class selector strings.
//!
//! This crate provides [`Selector`], an immutable, validated class selector
//! (`.row`, `.btn.primary`, ...). It is standalone, with no bsel_*
//! dependencies, so external tools can use the type without pulling in the
//! selector tables built on top of it.
//!
//! Constants are built with [`Selector::from_static`], which checks
//! well-formedness during `const` evaluation; runtime strings go through
//! [`Selector::new`], which reports violations as [`SelectorError`].

mod selector;

pub use selector::{Selector, SelectorError};
