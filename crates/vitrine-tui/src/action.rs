//! All possible UI actions. Actions are the sole mechanism for state
//! mutation: every control decodes once into a variant here and is routed
//! through a single match.

use std::sync::Arc;

use vitrine_core::{Product, ProductId};

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A transient status-bar notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Data (from the fetch task) ─────────────────────────────────
    ProductsLoaded(Vec<Product>),
    FetchFailed(String),
    Retry,

    // ── Data (app → catalog screen) ────────────────────────────────
    ProductsUpdated(Arc<Vec<Arc<Product>>>),

    // ── Brand filter ───────────────────────────────────────────────
    NextBrand,
    PrevBrand,

    // ── Search ─────────────────────────────────────────────────────
    OpenSearch,
    CloseSearch,
    SearchInput(String),
    SearchSubmit,

    // ── Pagination ─────────────────────────────────────────────────
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    GoToPage(usize),

    // ── Detail overlay ─────────────────────────────────────────────
    OpenDetail(ProductId),
    CloseDetail,

    // ── Carousel ───────────────────────────────────────────────────
    CarouselNext,
    CarouselPrev,
    CarouselJump(usize),

    // ── Ordering ───────────────────────────────────────────────────
    OrderProduct(ProductId),

    // ── Help / notifications ───────────────────────────────────────
    ToggleHelp,
    Notify(Notification),
}
