//! # Employee Screens
//!
//! The directory list and the per-employee record.
//!
//! The list navigates with a bare id (`Action::navigate("employee-details", 7)`),
//! leaving the navigator to wrap it under `employeeId`. The details screen
//! reads `employeeId` and shows the first sample employee when it is absent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem};

use super::sample::{self, Employee};
use super::{Selection, detail_panel, highlight_style, list_block};
use crate::core::{Action, NavigationParams};
use crate::tui::component::Screen;
use crate::tui::event::TuiEvent;

pub struct EmployeeListScreen {
    employees: Vec<Employee>,
    selection: Selection,
}

impl EmployeeListScreen {
    pub fn new() -> Self {
        Self {
            employees: sample::employees(),
            selection: Selection::new(),
        }
    }

    fn selected(&self) -> Option<&Employee> {
        self.selection
            .selected(self.employees.len())
            .and_then(|i| self.employees.get(i))
    }
}

impl Default for EmployeeListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for EmployeeListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _params: &NavigationParams) {
        self.selection.sync(self.employees.len());
        let items: Vec<ListItem> = self
            .employees
            .iter()
            .map(|e| {
                ListItem::new(format!(
                    "#{:<3} {:<16} {:<18} {}",
                    e.id,
                    e.name,
                    e.role,
                    e.status.label()
                ))
            })
            .collect();
        let list = List::new(items)
            .block(list_block("Employees"))
            .highlight_style(highlight_style());
        frame.render_stateful_widget(list, area, &mut self.selection.list_state);
    }

    fn handle_event(&mut self, event: &TuiEvent, _params: &NavigationParams) -> Option<Action> {
        if self.selection.handle_event(event, self.employees.len()) {
            return None;
        }
        let employee = self.selected()?;
        match event {
            TuiEvent::Submit => Some(Action::navigate("employee-details", employee.id)),
            TuiEvent::InputChar('c') => Some(Action::navigate(
                "attendance-calendar",
                NavigationParams::new().with("employeeId", employee.id),
            )),
            TuiEvent::InputChar('n') => Some(Action::navigate("add-employee", ())),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select  Enter Open  c Calendar  n New"
    }
}

pub struct EmployeeDetailsScreen;

impl Screen for EmployeeDetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams) {
        let employee = sample::employee_or_sample(params.get_int("employeeId"));
        let mut rows = vec![
            ("Id", format!("#{}", employee.id)),
            ("Name", employee.name.to_string()),
            ("Role", employee.role.to_string()),
            ("Department", employee.department.to_string()),
            ("Email", employee.email.to_string()),
            ("Joined", employee.joined.format("%d %b %Y").to_string()),
            ("Status", employee.status.label().to_string()),
        ];
        if let Some(tab) = params.get_text("tab") {
            rows.push(("Tab", tab.to_string()));
        }
        frame.render_widget(detail_panel("Employee", rows), area);
    }

    fn handle_event(&mut self, event: &TuiEvent, params: &NavigationParams) -> Option<Action> {
        let employee = sample::employee_or_sample(params.get_int("employeeId"));
        match event {
            TuiEvent::InputChar('c') => Some(Action::navigate(
                "attendance-calendar",
                NavigationParams::new().with("employeeId", employee.id),
            )),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "c Attendance calendar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Payload;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(screen: &mut dyn Screen, params: &NavigationParams) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
        terminal.draw(|f| screen.render(f, f.area(), params)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_list_opens_details_with_bare_id() {
        let mut screen = EmployeeListScreen::new();
        let params = NavigationParams::new();
        screen.handle_event(&TuiEvent::CursorDown, &params);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit, &params),
            Some(Action::Navigate {
                module: "employee-details".to_string(),
                payload: Payload::from(2i64),
            })
        );
    }

    #[test]
    fn test_list_opens_calendar_with_mapping() {
        let mut screen = EmployeeListScreen::new();
        let action = screen.handle_event(&TuiEvent::InputChar('c'), &NavigationParams::new());
        assert_eq!(
            action,
            Some(Action::navigate(
                "attendance-calendar",
                NavigationParams::new().with("employeeId", 1i64)
            ))
        );
    }

    #[test]
    fn test_details_shows_requested_employee() {
        let text = render(
            &mut EmployeeDetailsScreen,
            &NavigationParams::new().with("employeeId", 7i64),
        );
        assert!(text.contains("Daniel Mensah"));
        assert!(text.contains("Recruiter"));
    }

    #[test]
    fn test_details_without_id_shows_sample() {
        let text = render(&mut EmployeeDetailsScreen, &NavigationParams::new());
        assert!(text.contains("Amara Okafor"));
    }

    #[test]
    fn test_details_with_unknown_id_shows_sample() {
        let text = render(
            &mut EmployeeDetailsScreen,
            &NavigationParams::new().with("employeeId", "not-a-number"),
        );
        assert!(text.contains("Amara Okafor"));
    }
}
