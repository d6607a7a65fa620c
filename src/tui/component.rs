use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::{Action, NavigationParams};

/// A piece of shell chrome drawn into a `Rect`.
///
/// Data comes in as props (struct fields) set by the caller each frame.
/// `render` takes `&mut self` so list state and offsets can be updated while
/// drawing, the same way ratatui's `StatefulWidget` works.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns terminal input into component-level events.
pub trait EventHandler {
    type Event;

    /// `None` when the event was consumed locally or ignored.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// A routable screen hosted by the shell.
///
/// Screens receive the active `NavigationParams` on every call and must cope
/// with them being empty or naming records that do not exist, typically by
/// showing a sample record. They navigate by returning an [`Action`], which
/// the shell runs through `core::update`.
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams);

    fn handle_event(
        &mut self,
        _event: &super::event::TuiEvent,
        _params: &NavigationParams,
    ) -> Option<Action> {
        None
    }

    /// One-line key hints shown in the help bar while this screen has focus.
    fn hints(&self) -> &'static str {
        ""
    }
}
