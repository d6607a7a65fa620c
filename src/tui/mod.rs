//! # TUI Adapter
//!
//! The ratatui-specific layer, playing the part of the HRMS shell. Handles
//! terminal I/O, renders the sidebar and the active screen, and translates
//! keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to 250ms waiting for input and only redraws when
//! something changed: an event was handled, or the navigator notified its
//! observer that a new state was committed.
//!
//! ## Focus
//!
//! Tab moves focus between the sidebar and the screen. Cursor keys and Enter
//! go to whichever has focus; Esc/Backspace and q are global.

mod component;
mod components;
mod event;
pub mod screens;
mod ui;

use log::{debug, info};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::{Action, Effect, NavigationParams, Navigator, Payload, RouteTable, update};
use crate::tui::component::EventHandler;
use crate::tui::components::{SidebarEvent, SidebarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::ScreenRegistry;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Which pane receives cursor keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Screen,
}

/// TUI-specific presentation state (not part of core navigation state)
pub struct TuiState {
    pub sidebar: SidebarState,
    pub focus: Focus,
    pub screens: ScreenRegistry,
}

impl TuiState {
    pub fn new(table: &RouteTable) -> Self {
        Self {
            sidebar: SidebarState::new(table),
            focus: Focus::Screen,
            screens: ScreenRegistry::builtin(table),
        }
    }

    /// Keep the sidebar cursor on the section of the active module.
    fn sync_sidebar(&mut self, nav: &Navigator) {
        if let Some(section) = nav.route_table().sidebar_section(&nav.current().module) {
            self.sidebar.select_module(section);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Route one terminal event through the shell and the navigator.
pub fn handle_event(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::ForceQuit | TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Resize => return Effect::Render,
        TuiEvent::Back => Some(Action::GoBack),
        TuiEvent::FocusNext => {
            tui.focus = match tui.focus {
                Focus::Sidebar => Focus::Screen,
                Focus::Screen => Focus::Sidebar,
            };
            return Effect::Render;
        }
        _ if tui.focus == Focus::Sidebar => match tui.sidebar.handle_event(&event) {
            Some(SidebarEvent::Open(module)) => {
                tui.focus = Focus::Screen;
                Some(Action::navigate(&module, Payload::None))
            }
            None => return Effect::Render,
        },
        _ => {
            let current = nav.current();
            let shown = nav
                .route_table()
                .resolve_renderable(&current.module, |id| tui.screens.contains(id));
            let params = if shown == current.module {
                current.params.clone()
            } else {
                NavigationParams::new()
            };
            match tui.screens.get_mut(shown) {
                Some(screen) => screen.handle_event(&event, &params),
                None => None,
            }
        }
    };

    match action {
        Some(action) => {
            let effect = update(nav, action);
            tui.sync_sidebar(nav);
            // Screens may have moved their own cursor even when nothing was committed
            if effect == Effect::None {
                Effect::Render
            } else {
                effect
            }
        }
        None => Effect::Render,
    }
}

pub fn run(mut nav: Navigator) -> std::io::Result<()> {
    let mut tui = TuiState::new(nav.route_table());
    tui.sync_sidebar(&nav);

    let committed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&committed);
    let subscription = nav.subscribe(move |state| {
        debug!("Committed {state}");
        flag.set(true);
    });

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    info!("Shell started on {}", nav.current());

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw || committed.replace(false) {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Process first event + drain pending events before next draw
        let first_event = poll_event_timeout(POLL_TIMEOUT);
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut nav, &mut tui, event) {
                Effect::Quit => should_quit = true,
                Effect::Render => needs_redraw = true,
                Effect::None => {}
            }
            if should_quit {
                break;
            }
        }
        if should_quit {
            break Ok(());
        }
    };

    nav.unsubscribe(subscription);
    ratatui::restore();
    info!("Shell exited on {}", nav.current());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_navigator;

    fn setup() -> (Navigator, TuiState) {
        let nav = test_navigator();
        let tui = TuiState::new(nav.route_table());
        (nav, tui)
    }

    #[test]
    fn test_quit_keys() {
        let (mut nav, mut tui) = setup();
        assert_eq!(handle_event(&mut nav, &mut tui, TuiEvent::Quit), Effect::Quit);
        assert_eq!(handle_event(&mut nav, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_tab_toggles_focus() {
        let (mut nav, mut tui) = setup();
        assert_eq!(tui.focus, Focus::Screen);
        handle_event(&mut nav, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Sidebar);
        handle_event(&mut nav, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Screen);
    }

    #[test]
    fn test_sidebar_enter_navigates_and_focuses_screen() {
        let (mut nav, mut tui) = setup();
        tui.focus = Focus::Sidebar;
        handle_event(&mut nav, &mut tui, TuiEvent::CursorDown);
        assert_eq!(nav.current().module, "dashboard");
        let effect = handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        assert_eq!(effect, Effect::Render);
        assert_eq!(nav.current().module, "employees");
        assert!(nav.current().params.is_empty());
        assert_eq!(tui.focus, Focus::Screen);
    }

    #[test]
    fn test_screen_enter_navigates_with_normalized_params() {
        let (mut nav, mut tui) = setup();
        update(&mut nav, Action::navigate("employees", ()));
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        assert_eq!(nav.current().module, "employee-details");
        assert!(nav.current().params.get_int("employeeId").is_some());
        // Sidebar follows the section of the opened record
        assert_eq!(tui.sidebar.items[tui.sidebar.selected].0, "employees");
    }

    #[test]
    fn test_back_restores_previous_state() {
        let (mut nav, mut tui) = setup();
        update(&mut nav, Action::navigate("projects", ()));
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        assert_eq!(nav.current().module, "project-details");

        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert_eq!(nav.current().module, "projects");
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert_eq!(nav.current().module, "dashboard");
        // Empty history: nothing changes
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert_eq!(nav.current().module, "dashboard");
        assert_eq!(nav.history_len(), 0);
    }

    #[test]
    fn test_substituted_screen_receives_no_params() {
        let (mut nav, mut tui) = setup();
        update(&mut nav, Action::navigate("meeting-details", "M-9"));
        // The meetings section page ignores keys, so nothing is committed
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        assert_eq!(nav.current().module, "meeting-details");
        assert_eq!(nav.current().params.get_str("meetingId"), Some("M-9"));
    }

    #[test]
    fn test_observer_sees_shell_navigation() {
        let (mut nav, mut tui) = setup();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        nav.subscribe(move |_| counter.set(counter.get() + 1));
        tui.focus = Focus::Sidebar;
        handle_event(&mut nav, &mut tui, TuiEvent::Submit);
        handle_event(&mut nav, &mut tui, TuiEvent::Back);
        assert_eq!(seen.get(), 2);
    }
}
