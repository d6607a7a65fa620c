//! # Dashboard Screen
//!
//! Headcount summary plus a list of quick links into other modules.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};

use super::sample::{self, EmploymentStatus, TaskStatus};
use super::{Selection, highlight_style, list_block};
use crate::core::{Action, NavigationParams};
use crate::tui::component::Screen;
use crate::tui::event::TuiEvent;

/// (label, module) pairs offered as shortcuts.
const QUICK_LINKS: &[(&str, &str)] = &[
    ("Employee directory", "employees"),
    ("Open tasks", "tasks"),
    ("Attendance calendar", "attendance-calendar"),
    ("Leave requests", "leave-requests"),
    ("Recruitment pipeline", "recruitment"),
];

pub struct DashboardScreen {
    selection: Selection,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
        }
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn stat(label: &str, value: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{value:>3} "),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw(label.to_string()),
    ])
}

impl Screen for DashboardScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _params: &NavigationParams) {
        let employees = sample::employees();
        let tasks = sample::tasks();
        let on_leave = employees
            .iter()
            .filter(|e| e.status == EmploymentStatus::OnLeave)
            .count();
        let open_tasks = tasks.iter().filter(|t| t.status != TaskStatus::Done).count();

        let [stats_area, links_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(0)]).areas(area);

        let stats = Paragraph::new(vec![
            stat("employees", employees.len()),
            stat("on leave", on_leave),
            stat("projects", sample::projects().len()),
            stat("open tasks", open_tasks),
        ])
        .block(list_block("Overview"));
        frame.render_widget(stats, stats_area);

        self.selection.sync(QUICK_LINKS.len());
        let items: Vec<ListItem> = QUICK_LINKS
            .iter()
            .map(|(label, _)| ListItem::new(*label))
            .collect();
        let list = List::new(items)
            .block(list_block("Quick links"))
            .highlight_style(highlight_style());
        frame.render_stateful_widget(list, links_area, &mut self.selection.list_state);
    }

    fn handle_event(&mut self, event: &TuiEvent, _params: &NavigationParams) -> Option<Action> {
        if self.selection.handle_event(event, QUICK_LINKS.len()) {
            return None;
        }
        match event {
            TuiEvent::Submit => self
                .selection
                .selected(QUICK_LINKS.len())
                .map(|i| Action::navigate(QUICK_LINKS[i].1, ())),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select  Enter Open"
    }
}
