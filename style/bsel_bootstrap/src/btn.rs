//! Button selectors.

use bsel_selector::Selector;

/// Base button class.
pub const DEF: Selector = Selector::from_static(".btn");

/// Primary call-to-action button.
pub const PRIMARY: Selector = Selector::from_static(".btn.primary");
