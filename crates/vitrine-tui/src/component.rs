//! Component trait — the contract between the app loop and anything
//! that renders into a frame.

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;

/// A unit of UI driven by the action loop.
///
/// The app hands each component the action sender once, at mount time;
/// afterwards the loop feeds it input events and dispatched actions and
/// asks it to render. Input handlers return an [`Action`] for the app
/// to enqueue rather than mutating anything directly.
pub trait Component: Send {
    /// Mount hook. Keep the sender if the component ever needs to
    /// dispatch outside the input path.
    fn init(&mut self, _action_tx: UnboundedSender<Action>) -> Result<()> {
        Ok(())
    }

    /// Decode a key press into an action, or `None` to ignore it.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Decode a mouse event into an action, or `None` to ignore it.
    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Apply a dispatched action; may return a follow-up to enqueue.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Draw into `area`.
    fn render(&self, frame: &mut Frame, area: Rect);
}
