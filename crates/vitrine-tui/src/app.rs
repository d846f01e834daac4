//! Application core — event loop, action dispatch, fetch lifecycle.

use std::process::Command;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use vitrine_api::CatalogClient;
use vitrine_core::{ProductId, ProductStore, order_url};

use crate::action::{Action, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::fetch::spawn_fetch;
use crate::screens::CatalogScreen;
use crate::theme;
use crate::tui::Tui;

/// Frames for the loading spinner, advanced on Tick.
const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// How many ticks a notification stays visible (~4s at 4 Hz).
const NOTIFICATION_TICKS: u8 = 16;

/// Catalog fetch lifecycle as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Top-level application state and event loop.
pub struct App {
    /// The single catalog screen.
    screen: Box<dyn Component>,
    /// Whether the app should keep running.
    running: bool,
    /// Fetch lifecycle.
    load_state: LoadState,
    /// Help overlay visibility.
    help_visible: bool,
    /// Search entry mode: keystrokes edit the term instead of acting.
    search_active: bool,
    /// The search term being edited.
    search_query: String,
    /// Authoritative product collection.
    store: ProductStore,
    /// Catalog API client, shared with fetch tasks.
    client: Arc<CatalogClient>,
    /// WhatsApp destination for order links.
    whatsapp: String,
    /// Transient status-bar notification with remaining ticks.
    notification: Option<(Notification, u8)>,
    /// Tick counter for the spinner.
    ticks: u64,
    /// Action sender — components dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(client: Arc<CatalogClient>, whatsapp: String) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Box::new(CatalogScreen::new()),
            running: true,
            load_state: LoadState::Loading,
            help_visible: false,
            search_active: false,
            search_query: String::new(),
            store: ProductStore::new(),
            client,
            whatsapp,
            notification: None,
            ticks: 0,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;
        self.screen.init(self.action_tx.clone())?;

        // Startup fetch. Browsing controls stay inert until it resolves
        // simply because the collection is empty.
        spawn_fetch(Arc::clone(&self.client), self.action_tx.clone());

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = self.screen.handle_mouse_event(mouse)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// everything else is delegated to the catalog screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // In search mode every printable key edits the term.
        if self.search_active {
            return match key.code {
                KeyCode::Esc => Ok(Some(Action::CloseSearch)),
                KeyCode::Enter => Ok(Some(Action::SearchSubmit)),
                KeyCode::Backspace => {
                    self.search_query.pop();
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                _ => Ok(None),
            };
        }

        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),

            (KeyModifiers::NONE, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),

            (KeyModifiers::NONE, KeyCode::Char('/')) => return Ok(Some(Action::OpenSearch)),

            // Retry only makes sense from the failed state.
            (KeyModifiers::NONE, KeyCode::Char('r'))
                if matches!(self.load_state, LoadState::Failed(_)) =>
            {
                return Ok(Some(Action::Retry));
            }

            _ => {}
        }

        // Delegate to the catalog screen
        self.screen.handle_key_event(key)
    }

    /// Process a single action — update app state and propagate to the
    /// screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Tick => {
                self.ticks += 1;
                if let Some((_, ticks_left)) = &mut self.notification {
                    *ticks_left = ticks_left.saturating_sub(1);
                    if *ticks_left == 0 {
                        self.notification = None;
                    }
                }
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenSearch => {
                self.search_active = true;
            }

            Action::CloseSearch => {
                // Esc abandons the term entirely.
                self.search_active = false;
                self.search_query.clear();
                self.action_tx.send(Action::SearchInput(String::new()))?;
            }

            Action::SearchSubmit => {
                // Enter keeps the term active.
                self.search_active = false;
            }

            Action::Retry => {
                if self.load_state != LoadState::Loading {
                    self.load_state = LoadState::Loading;
                    spawn_fetch(Arc::clone(&self.client), self.action_tx.clone());
                }
            }

            Action::ProductsLoaded(products) => {
                self.store.replace_all(products.clone());
                self.load_state = LoadState::Ready;
                self.action_tx
                    .send(Action::ProductsUpdated(self.store.snapshot()))?;
            }

            Action::FetchFailed(message) => {
                if self.store.is_loaded() {
                    // A failed retry after a successful load keeps the
                    // old collection on screen.
                    self.notification = Some((
                        Notification::error(format!("Refresh failed: {message}")),
                        NOTIFICATION_TICKS,
                    ));
                } else {
                    self.load_state = LoadState::Failed(message.clone());
                }
            }

            Action::OrderProduct(id) => {
                self.order(id);
            }

            Action::Notify(notification) => {
                self.notification = Some((notification.clone(), NOTIFICATION_TICKS));
            }

            // Render is handled in the main loop, not here
            Action::Render | Action::Resize(..) => {}

            // Everything else belongs to the catalog screen
            other => {
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    /// Build and launch the WhatsApp order link for a product. A stale
    /// id silently aborts the action. The link is also surfaced as a
    /// notification in case no platform opener exists.
    fn order(&self, id: &ProductId) {
        let product = match self.store.require(id) {
            Ok(p) => p,
            Err(e) => {
                debug!(%e, "order aborted");
                return;
            }
        };

        let notification = match order_url(&self.whatsapp, &product) {
            Ok(url) => {
                open_external(url.as_str());
                Notification::info(format!("Order link: {url}"))
            }
            Err(e) => {
                warn!(error = %e, "could not build order link");
                Notification::error(e.to_string())
            }
        };
        let _ = self.action_tx.send(Action::Notify(notification));
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        match &self.load_state {
            LoadState::Loading => self.render_loading(frame, layout[0]),
            LoadState::Failed(message) => self.render_failed(frame, layout[0], message),
            LoadState::Ready => self.screen.render(frame, layout[0]),
        }

        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER[usize::try_from(self.ticks).unwrap_or(0) % SPINNER.len()];
        let text = format!("{spinner} Loading products\u{2026}");
        render_centered_panel(frame, area, " Vitrine ", &[Line::from(text)]);
    }

    fn render_failed(&self, frame: &mut Frame, area: Rect, message: &str) {
        let lines = vec![
            Line::from(Span::styled(
                "Error loading products. Please try again later.",
                Style::default().fg(theme::ALERT_RED),
            )),
            Line::from(""),
            Line::from(Span::styled(message.to_owned(), theme::key_hint())),
            Line::from(""),
            Line::from(vec![
                Span::styled("r ", theme::key_hint_key()),
                Span::styled("retry", theme::key_hint()),
            ]),
        ];
        render_centered_panel(frame, area, " Vitrine ", &lines);
    }

    /// Bottom status bar: load indicator, search state, key hints, and
    /// any transient notification.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let indicator = match &self.load_state {
            LoadState::Ready => Span::styled(
                format!("● {} products", self.store.len()),
                Style::default().fg(theme::OK_GREEN),
            ),
            LoadState::Loading => {
                Span::styled("◐ loading", Style::default().fg(theme::SAFFRON))
            }
            LoadState::Failed(_) => {
                Span::styled("○ fetch failed", Style::default().fg(theme::ALERT_RED))
            }
        };

        let middle = if self.search_active {
            Span::styled(
                format!(" │ Search: {}▏", self.search_query),
                Style::default().fg(theme::MINT),
            )
        } else if let Some((notification, _)) = &self.notification {
            let color = match notification.level {
                NotificationLevel::Info => theme::MINT,
                NotificationLevel::Error => theme::ALERT_RED,
            };
            Span::styled(
                format!(" │ {}", notification.message),
                Style::default().fg(color),
            )
        } else {
            Span::styled(
                " │ / search  b brand  ‹ › page  Enter details  o order  ? help  q quit",
                theme::key_hint(),
            )
        };

        let line = Line::from(vec![Span::raw(" "), indicator, middle]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 56u16.min(area.width.saturating_sub(4));
        let help_height = 18u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;
        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let row = |k: &str, d: &str| {
            Line::from(vec![
                Span::styled(format!("  {k:<10}"), theme::key_hint_key()),
                Span::styled(d.to_owned(), theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("  Browsing", Style::default().fg(theme::MINT))),
            row("j/k ↑/↓", "Move card selection"),
            row("h/l ←/→", "Previous / next page"),
            row("1-9", "Jump to page"),
            row("g/G", "First / last page"),
            row("b/B", "Cycle brand filter"),
            row("/", "Search (Esc clears, Enter keeps)"),
            Line::from(""),
            Line::from(Span::styled("  Product", Style::default().fg(theme::MINT))),
            row("Enter", "Open details"),
            row("o", "Order via WhatsApp"),
            row("←/→ 1-9", "Carousel (in details)"),
            row("Esc", "Close details"),
            Line::from(""),
            Line::from(Span::styled(
                "                      Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}

/// Render a small bordered panel with centered content.
fn render_centered_panel(frame: &mut Frame, area: Rect, title: &str, lines: &[Line]) {
    let block = Block::default()
        .title(title.to_owned())
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let y_offset = inner.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: inner.x,
        y: inner.y + y_offset,
        width: inner.width,
        height: height.min(inner.height),
    };

    let paragraph = Paragraph::new(lines.to_vec()).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}

/// Hand a link to the platform opener. Failure only logs — the link is
/// also surfaced in the status bar, so the user can act on it manually.
fn open_external(url: &str) {
    #[cfg(target_os = "macos")]
    let spawned = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let spawned = Command::new("cmd").args(["/C", "start", "", url]).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let spawned = Command::new("xdg-open").arg(url).spawn();

    if let Err(e) = spawned {
        debug!(error = %e, "no platform opener available for order link");
    }
}
