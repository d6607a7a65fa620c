//! # Screens
//!
//! Everything that can fill the main area of the shell, plus the
//! [`ScreenRegistry`] that maps module ids to them.
//!
//! The registry does not cover every route. Detail modules such as
//! `job-details` have a route but no screen, so the shell walks the route
//! table's fallback chain until it finds something it can render.
//!
//! ```text
//! screens/
//! ├── mod.rs          (this file: registry + list selection helper)
//! ├── sample.rs       (in-memory HRMS records)
//! ├── dashboard.rs
//! ├── employees.rs    (list + details)
//! ├── attendance.rs   (monthly calendar)
//! ├── projects.rs     (list + details)
//! ├── tasks.rs        (list + details)
//! └── section.rs      (generic section page for modules without data)
//! ```

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod projects;
pub mod sample;
pub mod section;
pub mod tasks;

use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, ListState, Padding, Paragraph, Wrap};

use crate::core::RouteTable;
use crate::tui::component::Screen;
use crate::tui::event::TuiEvent;

pub struct ScreenRegistry {
    screens: HashMap<String, Box<dyn Screen>>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self {
            screens: HashMap::new(),
        }
    }

    /// The HRMS screens, with a section page for every sidebar module that
    /// has no dedicated screen.
    pub fn builtin(table: &RouteTable) -> Self {
        let mut registry = Self::new();
        registry.register("dashboard", dashboard::DashboardScreen::new());
        registry.register("employees", employees::EmployeeListScreen::new());
        registry.register("employee-details", employees::EmployeeDetailsScreen);
        registry.register("attendance-calendar", attendance::AttendanceCalendarScreen);
        registry.register("projects", projects::ProjectListScreen::new());
        registry.register("project-details", projects::ProjectDetailsScreen::new());
        registry.register("tasks", tasks::TaskListScreen::new());
        registry.register("task-details", tasks::TaskDetailsScreen);

        for entry in table.sidebar() {
            if !registry.contains(&entry.id) {
                registry.register(&entry.id, section::SectionScreen::new(&entry.title));
            }
        }
        registry
    }

    pub fn register(&mut self, module: &str, screen: impl Screen + 'static) {
        self.screens.insert(module.to_string(), Box::new(screen));
    }

    pub fn contains(&self, module: &str) -> bool {
        self.screens.contains_key(module)
    }

    pub fn get_mut(&mut self, module: &str) -> Option<&mut (dyn Screen + 'static)> {
        self.screens.get_mut(module).map(|s| &mut **s)
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor over a fixed-length list, shared by the list screens.
#[derive(Debug, Default)]
pub struct Selection {
    pub list_state: ListState,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.list_state.selected().unwrap_or(0).min(len - 1))
    }

    /// Move the cursor for Up/Down. Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> bool {
        let Some(current) = self.selected(len) else {
            return false;
        };
        let next = match event {
            TuiEvent::CursorUp => current.saturating_sub(1),
            TuiEvent::CursorDown => (current + 1).min(len - 1),
            _ => return false,
        };
        self.list_state.select(Some(next));
        true
    }

    /// Make sure the list state points at a valid row before rendering.
    pub fn sync(&mut self, len: usize) {
        let selected = self.selected(len);
        self.list_state.select(selected);
    }
}

/// Bordered `label: value` panel used by the detail screens.
pub fn detail_panel<'a>(title: &'a str, rows: Vec<(&'a str, String)>) -> Paragraph<'a> {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<label_width$}  "),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true })
}

/// Bordered block shared by list and section screens.
pub fn list_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
        .padding(Padding::horizontal(1))
}

pub fn highlight_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Cyan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_covers_every_sidebar_module() {
        let table = RouteTable::builtin();
        let registry = ScreenRegistry::builtin(&table);
        for entry in table.sidebar() {
            assert!(registry.contains(&entry.id), "{}", entry.id);
        }
        assert!(!registry.contains("job-details"));
    }

    #[test]
    fn test_unregistered_details_resolve_to_their_section() {
        let table = RouteTable::builtin();
        let registry = ScreenRegistry::builtin(&table);
        let renderable = |id: &str| registry.contains(id);
        assert_eq!(table.resolve_renderable("job-details", renderable), "recruitment");
        assert_eq!(table.resolve_renderable("add-employee", renderable), "employees");
        assert_eq!(table.resolve_renderable("task-details", renderable), "task-details");
    }

    #[test]
    fn test_selection_clamps() {
        let mut selection = Selection::new();
        assert_eq!(selection.selected(3), Some(0));
        assert!(selection.handle_event(&TuiEvent::CursorUp, 3));
        assert_eq!(selection.selected(3), Some(0));
        selection.handle_event(&TuiEvent::CursorDown, 3);
        selection.handle_event(&TuiEvent::CursorDown, 3);
        selection.handle_event(&TuiEvent::CursorDown, 3);
        assert_eq!(selection.selected(3), Some(2));
        assert!(!selection.handle_event(&TuiEvent::Submit, 3));
        assert_eq!(selection.selected(0), None);
    }
}
