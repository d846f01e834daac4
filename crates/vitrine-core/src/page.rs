// ── Pagination engine ──
//
// Slices a filtered view into fixed-size pages and computes the numbered
// page-button window. Out-of-range pages are the caller's bug: the event
// router validates before requesting, so the engine only debug-asserts.

/// Products per page.
pub const PAGE_SIZE: usize = 10;

/// How many numbered page buttons are visible at most.
const WINDOW_SIZE: usize = 5;

/// One page of a non-empty view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Result of paginating a view. An empty view is a distinct state, not
/// "page 1 of 1" — the UI suppresses the pagination bar entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paginated<T> {
    Empty,
    Page(PageView<T>),
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Page(view) => view.total_pages,
        }
    }
}

/// Slice `view` into its `page`-th chunk (1-based) of `page_size` items.
pub fn paginate<T: Clone>(view: &[T], page: usize, page_size: usize) -> Paginated<T> {
    if view.is_empty() {
        return Paginated::Empty;
    }

    let total_pages = view.len().div_ceil(page_size).max(1);
    debug_assert!(
        (1..=total_pages).contains(&page),
        "page {page} out of range 1..={total_pages}"
    );

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = view
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Paginated::Page(PageView {
        items,
        page,
        total_pages,
        total_items: view.len(),
    })
}

/// The visible window of numbered page buttons.
///
/// At most [`WINDOW_SIZE`] buttons, centered on the current page where
/// possible; near a boundary the window shifts so exactly five show
/// whenever there are five or more pages. When an edge falls outside the
/// window, a "1" / "last" button appears with a gap marker as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// First numbered button (1-based, inclusive).
    pub start: usize,
    /// Last numbered button (inclusive).
    pub end: usize,
    /// Render a standalone "1" button before the window.
    pub show_first: bool,
    /// Render "…" between "1" and the window.
    pub leading_gap: bool,
    /// Render "…" between the window and the last button.
    pub trailing_gap: bool,
    /// Render a standalone last-page button after the window.
    pub show_last: bool,
}

impl PageWindow {
    pub fn compute(page: usize, total_pages: usize) -> Self {
        let mut start = page.saturating_sub(WINDOW_SIZE / 2).max(1);
        let end = (start + WINDOW_SIZE - 1).min(total_pages);

        // Re-anchor at the tail so a late current page still shows a
        // full window.
        if end - start + 1 < WINDOW_SIZE {
            start = end.saturating_sub(WINDOW_SIZE - 1).max(1);
        }

        Self {
            start,
            end,
            show_first: start > 1,
            leading_gap: start > 2,
            trailing_gap: end < total_pages.saturating_sub(1),
            show_last: end < total_pages,
        }
    }

    /// The numbered buttons, in order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + use<> {
        self.start..=self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    fn page_of(p: Paginated<usize>) -> PageView<usize> {
        match p {
            Paginated::Page(view) => view,
            Paginated::Empty => panic!("expected a page"),
        }
    }

    #[test]
    fn empty_view_is_distinct_from_one_page() {
        assert_eq!(paginate::<usize>(&[], 1, PAGE_SIZE), Paginated::Empty);
    }

    #[test]
    fn twelve_items_make_two_pages_of_ten_and_two() {
        let v = view(12);

        let first = page_of(paginate(&v, 1, PAGE_SIZE));
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.page, 1);

        let second = page_of(paginate(&v, 2, PAGE_SIZE));
        assert_eq!(second.items, vec![10, 11]);
    }

    #[test]
    fn page_lengths_follow_the_slice_arithmetic() {
        let v = view(37);
        for page in 1..=4 {
            let len = page_of(paginate(&v, page, PAGE_SIZE)).items.len();
            assert_eq!(len, 10.min(37 - 10 * (page - 1)));
        }
    }

    #[test]
    fn concatenating_pages_reconstructs_the_view() {
        let v = view(37);
        let total = page_of(paginate(&v, 1, PAGE_SIZE)).total_pages;
        let mut rebuilt = Vec::new();
        for page in 1..=total {
            rebuilt.extend(page_of(paginate(&v, page, PAGE_SIZE)).items);
        }
        assert_eq!(rebuilt, v);
    }

    #[test]
    fn exact_multiple_has_no_phantom_page() {
        let first = page_of(paginate(&view(20), 1, PAGE_SIZE));
        assert_eq!(first.total_pages, 2);
    }

    // ── Window policy ────────────────────────────────────────────────

    #[test]
    fn window_centers_on_the_current_page() {
        let w = PageWindow::compute(7, 20);
        assert_eq!((w.start, w.end), (5, 9));
        assert!(w.show_first && w.leading_gap);
        assert!(w.trailing_gap && w.show_last);
    }

    #[test]
    fn window_clamps_at_the_head() {
        let w = PageWindow::compute(1, 20);
        assert_eq!((w.start, w.end), (1, 5));
        assert!(!w.show_first && !w.leading_gap);
        assert!(w.trailing_gap && w.show_last);
    }

    #[test]
    fn window_reanchors_at_the_tail() {
        let w = PageWindow::compute(20, 20);
        assert_eq!((w.start, w.end), (16, 20));
        assert!(w.show_first && w.leading_gap);
        assert!(!w.trailing_gap && !w.show_last);
    }

    #[test]
    fn window_shows_exactly_five_whenever_possible() {
        for page in 1..=9 {
            let w = PageWindow::compute(page, 9);
            assert_eq!(w.end - w.start + 1, 5, "page {page}");
        }
    }

    #[test]
    fn window_with_few_pages_shows_them_all() {
        let w = PageWindow::compute(2, 3);
        assert_eq!((w.start, w.end), (1, 3));
        assert!(!w.show_first && !w.show_last);
        assert!(!w.leading_gap && !w.trailing_gap);
    }

    #[test]
    fn adjacent_edge_gets_a_button_but_no_gap() {
        // Window 2..=6 of 7: "1" button, no ellipsis before it; "7"
        // button, no ellipsis after 6.
        let w = PageWindow::compute(4, 7);
        assert_eq!((w.start, w.end), (2, 6));
        assert!(w.show_first && !w.leading_gap);
        assert!(w.show_last && !w.trailing_gap);
    }
}
