//! Catalog screen — product card grid with brand tabs, live search,
//! pagination, and the detail overlay.
//!
//! This screen is the event router for browsing: every control decodes
//! into an [`Action`] in `handle_key_event` and is applied in `update`,
//! so the whole pipeline (filter → paginate → view-model) is driven by
//! plain values and stays testable without a terminal.

use std::cell::Cell;
use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell as TableCell, Clear, Paragraph, Row, Table,
};
use tracing::debug;

use vitrine_core::{
    BrandFilter, CardImage, DetailView, FilterState, PAGE_SIZE, PageView, Paginated, Product,
    ProductCard, ProductId, distinct_brands, filter_products, paginate, similar_products, view,
};

use crate::action::Action;
use crate::carousel::Carousel;
use crate::component::Component;
use crate::theme;
use crate::widgets::{pagination, sub_tabs};

/// How many similar products the detail overlay lists.
const SIMILAR_LIMIT: usize = 3;

/// State scoped to one open detail overlay. Dropping it tears down the
/// carousel with it — nothing overlay-related survives a close.
struct DetailState {
    view: DetailView,
    carousel: Option<Carousel>,
    similar_selected: usize,
}

pub struct CatalogScreen {
    /// Full collection snapshot from the app.
    products: Arc<Vec<Arc<Product>>>,
    /// Brand tab labels (without the leading "all").
    brands: Vec<String>,
    filter: FilterState,
    /// Current page, 1-based. Reset to 1 on any filter change.
    page: usize,
    /// Cached filtered view, recomputed on filter/collection change.
    filtered: Vec<Arc<Product>>,
    /// Selected card index within the current page.
    selected: usize,
    detail: Option<DetailState>,
    /// Overlay rect from the last render, for outside-click detection.
    overlay_area: Cell<Option<Rect>>,
}

impl CatalogScreen {
    pub fn new() -> Self {
        Self {
            products: Arc::new(Vec::new()),
            brands: Vec::new(),
            filter: FilterState::default(),
            page: 1,
            filtered: Vec::new(),
            selected: 0,
            detail: None,
            overlay_area: Cell::new(None),
        }
    }

    // ── Derived state ────────────────────────────────────────────────

    fn paged(&self) -> Paginated<Arc<Product>> {
        paginate(&self.filtered, self.page, PAGE_SIZE)
    }

    fn total_pages(&self) -> usize {
        self.paged().total_pages()
    }

    fn current_items(&self) -> Vec<Arc<Product>> {
        match self.paged() {
            Paginated::Empty => Vec::new(),
            Paginated::Page(PageView { items, .. }) => items,
        }
    }

    fn selected_product(&self) -> Option<Arc<Product>> {
        self.current_items().into_iter().nth(self.selected)
    }

    /// Active tab index into `["all"] + brands`.
    fn active_tab(&self) -> usize {
        match &self.filter.brand {
            BrandFilter::All => 0,
            BrandFilter::Brand(b) => self
                .brands
                .iter()
                .position(|x| x.eq_ignore_ascii_case(b))
                .map_or(0, |i| i + 1),
        }
    }

    // ── State transitions ────────────────────────────────────────────

    /// Recompute the filtered view and clamp page/selection into range.
    fn recompute(&mut self) {
        self.filtered = filter_products(&self.products, &self.filter);
        let total = self.total_pages();
        if total == 0 {
            self.page = 1;
        } else if self.page > total {
            self.page = total;
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.current_items().len();
        self.selected = if len == 0 { 0 } else { self.selected.min(len - 1) };
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.current_items().len();
        if len == 0 {
            return;
        }
        let current = isize::try_from(self.selected).unwrap_or(0);
        let max = isize::try_from(len - 1).unwrap_or(0);
        let next = (current + delta).clamp(0, max);
        self.selected = usize::try_from(next).unwrap_or(0);
    }

    /// Set the brand filter by tab index and reset the page.
    fn set_brand_tab(&mut self, tab: usize) {
        self.filter.brand = if tab == 0 {
            BrandFilter::All
        } else {
            match self.brands.get(tab - 1) {
                Some(brand) => BrandFilter::Brand(brand.clone()),
                None => BrandFilter::All,
            }
        };
        self.page = 1;
        self.recompute();
        self.selected = 0;
    }

    fn cycle_brand(&mut self, delta: isize) {
        let tabs = isize::try_from(self.brands.len() + 1).unwrap_or(1);
        let current = isize::try_from(self.active_tab()).unwrap_or(0);
        let next = (current + delta).rem_euclid(tabs);
        self.set_brand_tab(usize::try_from(next).unwrap_or(0));
    }

    /// Pagination activation: only valid, non-current pages go through —
    /// disabled or active buttons are no-ops. No re-filter happens here.
    fn go_to_page(&mut self, target: usize) {
        let total = self.total_pages();
        if target == 0 || target > total || target == self.page {
            return;
        }
        self.page = target;
        self.selected = 0;
    }

    /// Open the detail overlay for a product id. Stale ids are silently
    /// ignored. Opening over an existing overlay replaces it, dropping
    /// the previous carousel.
    fn open_detail(&mut self, id: &ProductId) {
        let Some(product) = self.products.iter().find(|p| &p.id == id).cloned() else {
            debug!(%id, "details requested for unknown product id");
            return;
        };

        let similar = similar_products(&self.products, &product, SIMILAR_LIMIT);
        let detail_view = DetailView::build(&product, &similar);
        let carousel = Carousel::open(detail_view.images.clone());

        self.detail = Some(DetailState {
            view: detail_view,
            carousel,
            similar_selected: 0,
        });
    }

    // ── Key handling ─────────────────────────────────────────────────

    fn handle_detail_key(&mut self, key: KeyEvent) -> Option<Action> {
        let detail = self.detail.as_mut()?;
        match key.code {
            KeyCode::Esc => Some(Action::CloseDetail),

            KeyCode::Left | KeyCode::Char('h') => Some(Action::CarouselPrev),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::CarouselNext),
            KeyCode::Char(c @ '1'..='9') => {
                let dot = usize::from(u8::try_from(c).unwrap_or(b'1') - b'1');
                Some(Action::CarouselJump(dot))
            }

            KeyCode::Down | KeyCode::Char('j') => {
                let last = detail.view.similar.len().saturating_sub(1);
                detail.similar_selected = (detail.similar_selected + 1).min(last);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                detail.similar_selected = detail.similar_selected.saturating_sub(1);
                None
            }
            KeyCode::Enter => detail
                .view
                .similar
                .get(detail.similar_selected)
                .map(|s| Action::OpenDetail(s.id.clone())),

            KeyCode::Char('o') => Some(Action::OrderProduct(detail.view.id.clone())),

            _ => None,
        }
    }
}

impl Component for CatalogScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.detail.is_some() {
            return Ok(self.handle_detail_key(key));
        }

        let action = match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }

            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
            KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::Char('G') => Some(Action::LastPage),
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::GoToPage(usize::from(u8::try_from(c).unwrap_or(b'1') - b'0')))
            }

            KeyCode::Char('b') => Some(Action::NextBrand),
            KeyCode::Char('B') => Some(Action::PrevBrand),

            KeyCode::Enter => self
                .selected_product()
                .map(|p| Action::OpenDetail(p.id.clone())),
            KeyCode::Char('o') => self
                .selected_product()
                .map(|p| Action::OrderProduct(p.id.clone())),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // A click outside the overlay content closes it, like clicking
        // the backdrop of a modal.
        if self.detail.is_some()
            && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            && let Some(rect) = self.overlay_area.get()
            && !rect.contains(Position::new(mouse.column, mouse.row))
        {
            return Ok(Some(Action::CloseDetail));
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ProductsUpdated(products) => {
                self.products = Arc::clone(products);
                self.brands = distinct_brands(products);
                // A brand that vanished from the collection falls back
                // to "all".
                if let BrandFilter::Brand(b) = &self.filter.brand
                    && !self.brands.iter().any(|x| x.eq_ignore_ascii_case(b))
                {
                    self.filter.brand = BrandFilter::All;
                }
                self.recompute();
            }

            Action::SearchInput(term) => {
                self.filter.search.clone_from(term);
                self.page = 1;
                self.recompute();
                self.selected = 0;
            }

            Action::NextBrand => self.cycle_brand(1),
            Action::PrevBrand => self.cycle_brand(-1),

            Action::NextPage => self.go_to_page(self.page + 1),
            Action::PrevPage => self.go_to_page(self.page.saturating_sub(1)),
            Action::FirstPage => self.go_to_page(1),
            Action::LastPage => self.go_to_page(self.total_pages()),
            Action::GoToPage(n) => self.go_to_page(*n),

            Action::OpenDetail(id) => self.open_detail(id),
            Action::CloseDetail => {
                self.detail = None;
                self.overlay_area.set(None);
            }

            Action::CarouselPrev => {
                if let Some(c) = self.detail.as_mut().and_then(|d| d.carousel.as_mut()) {
                    c.prev();
                }
            }
            Action::CarouselNext => {
                if let Some(c) = self.detail.as_mut().and_then(|d| d.carousel.as_mut()) {
                    c.next();
                }
            }
            Action::CarouselJump(i) => {
                if let Some(c) = self.detail.as_mut().and_then(|d| d.carousel.as_mut()) {
                    c.jump_to(*i);
                }
            }

            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let shown = self.filtered.len();
        let total = self.products.len();
        let title = format!(" Products ({shown}/{total}) ");
        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(1), // brand tabs
            Constraint::Length(1), // search line
            Constraint::Min(1),    // card grid
            Constraint::Length(1), // pagination
        ])
        .split(inner);

        self.render_brand_tabs(frame, layout[0]);
        self.render_search_line(frame, layout[1]);

        match self.paged() {
            Paginated::Empty => {
                render_empty_state(frame, layout[2]);
                // Pagination area stays empty — no buttons at all.
            }
            Paginated::Page(page_view) => {
                self.render_grid(frame, layout[2], &page_view);
                frame.render_widget(
                    Paragraph::new(pagination::render_line(
                        page_view.page,
                        page_view.total_pages,
                        page_view.total_items,
                    )),
                    layout[3],
                );
            }
        }

        if self.detail.is_some() {
            self.render_detail_overlay(frame, area);
        }
    }
}

impl CatalogScreen {
    fn render_brand_tabs(&self, frame: &mut Frame, area: Rect) {
        let mut labels: Vec<&str> = vec!["all"];
        labels.extend(self.brands.iter().map(String::as_str));
        let line = sub_tabs::render_sub_tabs(&labels, self.active_tab());
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_search_line(&self, frame: &mut Frame, area: Rect) {
        let line = if self.filter.search.is_empty() {
            Line::from(Span::styled(" Search: (press / to search)", theme::key_hint()))
        } else {
            Line::from(vec![
                Span::styled(" Search: ", theme::key_hint()),
                Span::styled(self.filter.search.clone(), Style::default().fg(theme::MINT)),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, page_view: &PageView<Arc<Product>>) {
        let header = Row::new(vec![
            TableCell::from(""),
            TableCell::from("Brand").style(theme::table_header()),
            TableCell::from("Product").style(theme::table_header()),
            TableCell::from("Storage").style(theme::table_header()),
            TableCell::from("Battery").style(theme::table_header()),
            TableCell::from("Color").style(theme::table_header()),
            TableCell::from("Price").style(theme::table_header()),
            TableCell::from("Image").style(theme::table_header()),
        ]);

        let rows: Vec<Row> = page_view
            .items
            .iter()
            .enumerate()
            .map(|(i, product)| {
                let card = ProductCard::from_product(product);
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▸" } else { " " };

                let row_style = if is_selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                };

                Row::new(vec![
                    TableCell::from(prefix),
                    TableCell::from(format!("{} {}", card.brand_initial, card.brand))
                        .style(Style::default().fg(theme::MINT).add_modifier(
                            if is_selected {
                                Modifier::BOLD
                            } else {
                                Modifier::empty()
                            },
                        )),
                    TableCell::from(card.name),
                    TableCell::from(card.storage_label),
                    TableCell::from(card.battery_label),
                    TableCell::from(card.color_label),
                    TableCell::from(card.price_label).style(theme::price_style()),
                    TableCell::from(card.image.label()).style(theme::key_hint()),
                ])
                .style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Min(18),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(20),
        ];

        let table = Table::new(rows, widths).header(header);
        frame.render_widget(table, area);
    }

    #[allow(clippy::too_many_lines)]
    fn render_detail_overlay(&self, frame: &mut Frame, area: Rect) {
        let Some(detail) = &self.detail else { return };

        let width = 66u16.min(area.width.saturating_sub(4));
        let height = 24u16.min(area.height.saturating_sub(2));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let overlay = Rect::new(area.x + x, area.y + y, width, height);
        self.overlay_area.set(Some(overlay));

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .title(format!(" {} ", detail.view.title))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::overlay_border());

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let mut lines: Vec<Line> = vec![Line::from("")];

        // ── Carousel ─────────────────────────────────────────────────
        if detail.view.images.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}  (no images)", view::IMAGE_PLACEHOLDER),
                theme::key_hint(),
            )));
        } else if let Some(carousel) = &detail.carousel {
            lines.push(Line::from(vec![
                Span::styled("  ‹ ", theme::key_hint_key()),
                Span::styled(
                    carousel.current().label(),
                    Style::default().fg(theme::MINT),
                ),
                Span::styled(
                    format!("  ({}/{})", carousel.index() + 1, carousel.len()),
                    theme::key_hint(),
                ),
                Span::styled(" › ", theme::key_hint_key()),
            ]));

            // Indicator dots: the active slide is filled.
            let dots: Vec<Span> = (0..carousel.len())
                .map(|i| {
                    if i == carousel.index() {
                        Span::styled("  ●", Style::default().fg(theme::BRASS))
                    } else {
                        Span::styled("  ○", theme::key_hint())
                    }
                })
                .collect();
            lines.push(Line::from(dots).alignment(Alignment::Left));
        } else {
            // Single image: no controls.
            let only = detail
                .view
                .images
                .first()
                .map_or_else(|| CardImage::Placeholder.label(), CardImage::label);
            lines.push(Line::from(Span::styled(
                format!("  {only}"),
                Style::default().fg(theme::MINT),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", detail.view.price_label),
            theme::price_style(),
        )));
        lines.push(Line::from(""));

        // ── Spec grid ────────────────────────────────────────────────
        for spec in &detail.view.specs {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<16}", spec.label), theme::key_hint()),
                Span::styled(spec.value.clone(), theme::table_row()),
            ]));
        }

        // ── Similar products ─────────────────────────────────────────
        if !detail.view.similar.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Similar products",
                theme::table_header(),
            )));
            for (i, similar) in detail.view.similar.iter().enumerate() {
                let marker = if i == detail.similar_selected { "▸" } else { " " };
                let style = if i == detail.similar_selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {marker} {:<24}{}", similar.model, similar.price_label),
                    style,
                )));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  ←/→ ", theme::key_hint_key()),
            Span::styled("image  ", theme::key_hint()),
            Span::styled("j/k ", theme::key_hint_key()),
            Span::styled("similar  ", theme::key_hint()),
            Span::styled("Enter ", theme::key_hint_key()),
            Span::styled("details  ", theme::key_hint()),
            Span::styled("o ", theme::key_hint_key()),
            Span::styled("order  ", theme::key_hint()),
            Span::styled("Esc ", theme::key_hint_key()),
            Span::styled("close", theme::key_hint()),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Distinct empty-result placeholder; the pagination bar is suppressed
/// alongside it.
fn render_empty_state(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "No products found",
            Style::default()
                .fg(theme::PARCHMENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Try adjusting your filters or check back later for new arrivals.",
            theme::key_hint(),
        )),
    ];

    let height = 3u16;
    let y_offset = area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: height.min(area.height),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use vitrine_core::{BasicDetails, Condition};

    fn product(id: &str, name: &str, brand: &str, images: usize) -> Product {
        Product {
            id: id.into(),
            name: name.to_owned(),
            brand: brand.to_owned(),
            price: 1000.0,
            images: (0..images)
                .map(|i| format!("https://cdn.example/{id}-{i}.jpg"))
                .collect(),
            details: BasicDetails {
                brand: brand.to_owned(),
                model: name.to_owned(),
                color: None,
                storage_gb: 128,
                extra: BTreeMap::new(),
            },
            condition: Condition {
                battery_health: "90%".into(),
                extra: BTreeMap::new(),
            },
            extra: BTreeMap::new(),
        }
    }

    fn loaded_screen(products: Vec<Product>) -> CatalogScreen {
        let mut screen = CatalogScreen::new();
        let snapshot: Arc<Vec<Arc<Product>>> =
            Arc::new(products.into_iter().map(Arc::new).collect());
        screen
            .update(&Action::ProductsUpdated(snapshot))
            .unwrap();
        screen
    }

    fn twelve_products() -> Vec<Product> {
        (0..12)
            .map(|i| {
                let brand = if i % 2 == 0 { "Apple" } else { "Samsung" };
                product(&format!("p{i}"), &format!("Phone {i}"), brand, 1)
            })
            .collect()
    }

    #[test]
    fn twelve_products_land_on_page_one_of_two() {
        let screen = loaded_screen(twelve_products());
        assert_eq!(screen.page, 1);
        assert_eq!(screen.total_pages(), 2);
        assert_eq!(screen.current_items().len(), 10);
    }

    #[test]
    fn page_navigation_validates_targets() {
        let mut screen = loaded_screen(twelve_products());

        // Prev at page 1 and out-of-range jumps are no-ops.
        screen.update(&Action::PrevPage).unwrap();
        assert_eq!(screen.page, 1);
        screen.update(&Action::GoToPage(99)).unwrap();
        assert_eq!(screen.page, 1);

        screen.update(&Action::NextPage).unwrap();
        assert_eq!(screen.page, 2);
        assert_eq!(screen.current_items().len(), 2);

        // Next at the last page is a no-op.
        screen.update(&Action::NextPage).unwrap();
        assert_eq!(screen.page, 2);

        screen.update(&Action::FirstPage).unwrap();
        assert_eq!(screen.page, 1);
    }

    #[test]
    fn brand_change_resets_page() {
        let mut screen = loaded_screen(twelve_products());
        screen.update(&Action::GoToPage(2)).unwrap();
        assert_eq!(screen.page, 2);

        screen.update(&Action::NextBrand).unwrap();
        assert_eq!(screen.filter.brand, BrandFilter::Brand("Apple".into()));
        assert_eq!(screen.page, 1);
        assert_eq!(screen.filtered.len(), 6);
    }

    #[test]
    fn search_change_resets_page_and_filters() {
        let mut screen = loaded_screen(twelve_products());
        screen.update(&Action::GoToPage(2)).unwrap();

        screen
            .update(&Action::SearchInput("Phone 1".into()))
            .unwrap();
        assert_eq!(screen.page, 1);
        // "Phone 1", "Phone 10", "Phone 11"
        assert_eq!(screen.filtered.len(), 3);
    }

    #[test]
    fn unmatched_search_yields_the_empty_state() {
        let mut screen = loaded_screen(twelve_products());
        screen
            .update(&Action::SearchInput("zzz".into()))
            .unwrap();
        assert_eq!(screen.paged(), Paginated::Empty);
        assert_eq!(screen.total_pages(), 0);
    }

    #[test]
    fn brand_cycle_wraps_both_ways() {
        let mut screen = loaded_screen(twelve_products());
        assert_eq!(screen.active_tab(), 0);

        screen.update(&Action::PrevBrand).unwrap();
        assert_eq!(screen.filter.brand, BrandFilter::Brand("Samsung".into()));

        screen.update(&Action::NextBrand).unwrap();
        assert_eq!(screen.filter.brand, BrandFilter::All);
    }

    #[test]
    fn open_detail_builds_carousel_and_close_drops_it() {
        let mut screen = loaded_screen(vec![
            product("a", "iPhone 13", "Apple", 3),
            product("b", "iPhone 12", "Apple", 0),
        ]);

        screen.update(&Action::OpenDetail("a".into())).unwrap();
        let detail = screen.detail.as_ref().unwrap();
        assert!(detail.carousel.is_some());
        assert_eq!(detail.view.similar.len(), 1);

        screen.update(&Action::CloseDetail).unwrap();
        assert!(screen.detail.is_none());
    }

    #[test]
    fn stale_detail_id_is_silently_ignored() {
        let mut screen = loaded_screen(twelve_products());
        screen.update(&Action::OpenDetail("ghost".into())).unwrap();
        assert!(screen.detail.is_none());
    }

    #[test]
    fn no_carousel_for_single_image_products() {
        let mut screen = loaded_screen(vec![product("a", "iPhone 13", "Apple", 1)]);
        screen.update(&Action::OpenDetail("a".into())).unwrap();
        assert!(screen.detail.as_ref().unwrap().carousel.is_none());
    }

    #[test]
    fn three_carousel_nexts_on_three_images_return_to_start() {
        let mut screen = loaded_screen(vec![product("a", "iPhone 13", "Apple", 3)]);
        screen.update(&Action::OpenDetail("a".into())).unwrap();

        for _ in 0..3 {
            screen.update(&Action::CarouselNext).unwrap();
        }
        let carousel = screen.detail.as_ref().unwrap().carousel.as_ref().unwrap();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn opening_another_product_replaces_the_overlay() {
        let mut screen = loaded_screen(vec![
            product("a", "iPhone 13", "Apple", 3),
            product("b", "iPhone 12", "Apple", 2),
        ]);

        screen.update(&Action::OpenDetail("a".into())).unwrap();
        screen.update(&Action::CarouselNext).unwrap();

        screen.update(&Action::OpenDetail("b".into())).unwrap();
        let detail = screen.detail.as_ref().unwrap();
        assert_eq!(detail.view.id, "b".into());
        // Fresh carousel starts at index 0 again.
        assert_eq!(detail.carousel.as_ref().unwrap().index(), 0);
    }

    #[test]
    fn collection_replacement_clamps_the_page() {
        let mut screen = loaded_screen(twelve_products());
        screen.update(&Action::GoToPage(2)).unwrap();

        let small: Arc<Vec<Arc<Product>>> = Arc::new(vec![Arc::new(product(
            "only", "Phone X", "Apple", 1,
        ))]);
        screen.update(&Action::ProductsUpdated(small)).unwrap();
        assert_eq!(screen.page, 1);
        assert_eq!(screen.total_pages(), 1);
    }
}
