//! Pagination bar — numbered buttons from the core page window, plus
//! always-present Prev/Next controls (disabled at the boundaries, never
//! hidden).

use ratatui::text::{Line, Span};

use vitrine_core::PageWindow;

use crate::theme;

/// One control in the pagination bar. `target: None` means disabled —
/// the router ignores activations of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageButton {
    Prev { target: Option<usize> },
    Number { page: usize, active: bool },
    Gap,
    Next { target: Option<usize> },
}

/// Decode the current page position into the button row.
pub fn page_buttons(page: usize, total_pages: usize) -> Vec<PageButton> {
    let window = PageWindow::compute(page, total_pages);
    let mut buttons = Vec::with_capacity(10);

    buttons.push(PageButton::Prev {
        target: (page > 1).then_some(page - 1),
    });

    if window.show_first {
        buttons.push(PageButton::Number {
            page: 1,
            active: false,
        });
    }
    if window.leading_gap {
        buttons.push(PageButton::Gap);
    }
    for p in window.pages() {
        buttons.push(PageButton::Number {
            page: p,
            active: p == page,
        });
    }
    if window.trailing_gap {
        buttons.push(PageButton::Gap);
    }
    if window.show_last {
        buttons.push(PageButton::Number {
            page: total_pages,
            active: false,
        });
    }

    buttons.push(PageButton::Next {
        target: (page < total_pages).then_some(page + 1),
    });

    buttons
}

/// "Page X of Y • N products" info suffix.
pub fn page_info(page: usize, total_pages: usize, total_items: usize) -> String {
    format!("Page {page} of {total_pages} \u{2022} {total_items} products")
}

/// Render the full pagination line.
pub fn render_line(page: usize, total_pages: usize, total_items: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];

    for button in page_buttons(page, total_pages) {
        match button {
            PageButton::Prev { target } => {
                let style = if target.is_some() {
                    theme::key_hint_key()
                } else {
                    theme::key_hint()
                };
                spans.push(Span::styled("‹ Prev ", style));
            }
            PageButton::Number { page: p, active } => {
                if active {
                    spans.push(Span::styled(format!(" [{p}]"), theme::tab_active()));
                } else {
                    spans.push(Span::styled(format!("  {p} "), theme::tab_inactive()));
                }
            }
            PageButton::Gap => {
                spans.push(Span::styled(" …", theme::key_hint()));
            }
            PageButton::Next { target } => {
                let style = if target.is_some() {
                    theme::key_hint_key()
                } else {
                    theme::key_hint()
                };
                spans.push(Span::styled("  Next ›", style));
            }
        }
    }

    spans.push(Span::styled(
        format!("   {}", page_info(page, total_pages, total_items)),
        theme::key_hint(),
    ));

    Line::from(spans)
}
