//! Scroll window over the ranked list

/// Compute the first visible row so `highlighted` stays on screen
///
/// Scrolls up when the highlight is above the window, down when it is below,
/// and otherwise keeps `current_offset`. The result is clamped to
/// `[0, max(0, len - visible_rows)]`.
#[must_use]
pub fn reconcile(highlighted: usize, len: usize, visible_rows: usize, current_offset: usize) -> usize {
    if len == 0 || visible_rows == 0 {
        return 0;
    }

    let offset = if highlighted < current_offset {
        highlighted
    } else if highlighted >= current_offset + visible_rows {
        highlighted + 1 - visible_rows
    } else {
        current_offset
    };

    offset.min(len.saturating_sub(visible_rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_inside_window() {
        assert_eq!(reconcile(5, 50, 10, 3), 3);
        assert_eq!(reconcile(12, 50, 10, 3), 3);
    }

    #[test]
    fn test_scroll_up() {
        assert_eq!(reconcile(2, 50, 10, 5), 2);
        assert_eq!(reconcile(0, 50, 10, 5), 0);
    }

    #[test]
    fn test_scroll_down() {
        assert_eq!(reconcile(10, 50, 10, 0), 1);
        assert_eq!(reconcile(49, 50, 10, 0), 40);
    }

    #[test]
    fn test_clamped_when_list_shrinks() {
        // Offset left over from a longer list is pulled back
        assert_eq!(reconcile(3, 5, 10, 3), 0);
        assert_eq!(reconcile(7, 8, 5, 6), 3);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(reconcile(0, 0, 10, 7), 0);
    }

    #[test]
    fn test_invariant_holds_for_every_position() {
        let rows = 4;
        let len = 11;
        let mut offset = 0;
        for highlighted in (0..len).chain((0..len).rev()) {
            offset = reconcile(highlighted, len, rows, offset);
            assert!(offset <= highlighted);
            assert!(highlighted < offset + rows);
        }
    }
}
