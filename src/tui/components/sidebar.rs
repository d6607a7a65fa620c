//! # Sidebar Component
//!
//! Module list on the left of the shell. Enter on an item emits
//! `SidebarEvent::Open`, which the shell turns into a navigation.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SidebarState` lives in `TuiState`
//! - `Sidebar` is created each frame with borrowed state and per-frame props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::RouteTable;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the sidebar.
pub struct SidebarState {
    /// (module id, title) in display order.
    pub items: Vec<(String, String)>,
    pub selected: usize,
    pub list_state: ListState,
}

impl SidebarState {
    pub fn new(table: &RouteTable) -> Self {
        let items: Vec<(String, String)> = table
            .sidebar()
            .map(|e| (e.id.clone(), e.title.clone()))
            .collect();
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            items,
            selected: 0,
            list_state,
        }
    }

    /// Move the cursor onto `module` if it is listed.
    pub fn select_module(&mut self, module: &str) {
        if let Some(idx) = self.items.iter().position(|(id, _)| id == module) {
            self.selected = idx;
            self.list_state.select(Some(idx));
        }
    }
}

/// Events emitted by the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEvent {
    Open(String),
}

impl EventHandler for SidebarState {
    type Event = SidebarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SidebarEvent> {
        if self.items.is_empty() {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.items.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => self
                .items
                .get(self.selected)
                .map(|(id, _)| SidebarEvent::Open(id.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the sidebar.
pub struct Sidebar<'a> {
    state: &'a mut SidebarState,
    /// Sidebar module the active screen belongs to.
    active: Option<&'a str>,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut SidebarState, active: Option<&'a str>, focused: bool) -> Self {
        Self {
            state,
            active,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Modules ")
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .map(|(id, title)| {
                let is_active = self.active == Some(id.as_str());
                let marker = if is_active { "● " } else { "  " };
                let style = if is_active {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(title.clone(), style),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_lists_sidebar_modules_in_order() {
        let state = SidebarState::new(&RouteTable::builtin());
        assert_eq!(state.items[0].0, "dashboard");
        assert_eq!(state.items[1].0, "employees");
        assert!(!state.items.iter().any(|(id, _)| id == "employee-details"));
    }

    #[test]
    fn test_enter_opens_selected_module() {
        let mut state = SidebarState::new(&RouteTable::builtin());
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SidebarEvent::Open("employees".to_string()))
        );
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut state = SidebarState::new(&RouteTable::builtin());
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
        for _ in 0..50 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, state.items.len() - 1);
    }

    #[test]
    fn test_select_module_ignores_unlisted() {
        let mut state = SidebarState::new(&RouteTable::builtin());
        state.select_module("projects");
        assert_eq!(state.items[state.selected].0, "projects");
        state.select_module("task-details");
        assert_eq!(state.items[state.selected].0, "projects");
    }

    #[test]
    fn test_render_marks_active_module() {
        let mut terminal = Terminal::new(TestBackend::new(24, 14)).unwrap();
        let mut state = SidebarState::new(&RouteTable::builtin());
        terminal
            .draw(|f| Sidebar::new(&mut state, Some("employees"), true).render(f, f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Modules"));
        assert!(text.contains("● Employees"));
        assert!(!text.contains("● Dashboard"));
    }
}
