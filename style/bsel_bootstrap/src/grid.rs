//! Grid system selectors.

use bsel_selector::Selector;

/// Row container.
pub const ROW: Selector = Selector::from_static(".row");

/// Base class for column spans; [`span`] appends the column count.
const SPAN: Selector = Selector::from_static(".span");

/// Selector for a span of `cols` columns.
///
/// The count is appended in decimal with no separator: `span(4)` is `.span4`
/// and `span(0)` is `.span0`. Every `u32` value is accepted; no range check
/// is applied.
#[inline]
pub fn span(cols: u32) -> Selector {
    SPAN.numbered(cols)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn row_selector() {
        assert_eq!(ROW, ".row");
    }

    #[test]
    fn span_appends_decimal_count() {
        assert_eq!(span(4), ".span4");
        assert_eq!(span(12), ".span12");
    }

    #[test]
    fn span_zero() {
        assert_eq!(span(0), ".span0");
    }

    #[test]
    fn span_max() {
        assert_eq!(span(u32::MAX), ".span4294967295");
    }
}
