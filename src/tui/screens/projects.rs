//! # Project Screens

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{List, ListItem};

use super::sample::{self, Project, Task};
use super::{Selection, detail_panel, highlight_style, list_block};
use crate::core::{Action, NavigationParams};
use crate::tui::component::Screen;
use crate::tui::event::TuiEvent;

pub struct ProjectListScreen {
    projects: Vec<Project>,
    selection: Selection,
}

impl ProjectListScreen {
    pub fn new() -> Self {
        Self {
            projects: sample::projects(),
            selection: Selection::new(),
        }
    }
}

impl Default for ProjectListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ProjectListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, _params: &NavigationParams) {
        self.selection.sync(self.projects.len());
        let items: Vec<ListItem> = self
            .projects
            .iter()
            .map(|p| {
                ListItem::new(format!(
                    "{:<4} {:<22} due {}",
                    p.id,
                    p.name,
                    p.due.format("%d %b")
                ))
            })
            .collect();
        let list = List::new(items)
            .block(list_block("Projects"))
            .highlight_style(highlight_style());
        frame.render_stateful_widget(list, area, &mut self.selection.list_state);
    }

    fn handle_event(&mut self, event: &TuiEvent, _params: &NavigationParams) -> Option<Action> {
        if self.selection.handle_event(event, self.projects.len()) {
            return None;
        }
        let project = self
            .selection
            .selected(self.projects.len())
            .and_then(|i| self.projects.get(i))?;
        match event {
            TuiEvent::Submit => Some(Action::navigate("project-details", project.id)),
            TuiEvent::InputChar('t') => Some(Action::navigate(
                "tasks",
                NavigationParams::new().with("projectId", project.id),
            )),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select  Enter Open  t Tasks"
    }
}

/// Project record with its task list; Enter opens the selected task.
pub struct ProjectDetailsScreen {
    selection: Selection,
}

impl ProjectDetailsScreen {
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
        }
    }
}

impl Default for ProjectDetailsScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn project_and_tasks(params: &NavigationParams) -> (Project, Vec<Task>) {
    let project = sample::project_or_sample(params.get_text("projectId").as_deref());
    let tasks = sample::tasks_for_project(project.id);
    (project, tasks)
}

impl Screen for ProjectDetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams) {
        let (project, tasks) = project_and_tasks(params);
        let [info_area, tasks_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(area);

        let rows = vec![
            ("Id", project.id.to_string()),
            ("Name", project.name.to_string()),
            ("Client", project.client.to_string()),
            ("Lead", sample::employee_name(project.lead_id).to_string()),
            ("Due", project.due.format("%d %b %Y").to_string()),
        ];
        frame.render_widget(detail_panel("Project", rows), info_area);

        self.selection.sync(tasks.len());
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|t| ListItem::new(format!("{:<5} {:<28} {}", t.id, t.title, t.status.label())))
            .collect();
        let list = List::new(items)
            .block(list_block("Tasks"))
            .highlight_style(highlight_style());
        frame.render_stateful_widget(list, tasks_area, &mut self.selection.list_state);
    }

    fn handle_event(&mut self, event: &TuiEvent, params: &NavigationParams) -> Option<Action> {
        let (project, tasks) = project_and_tasks(params);
        if self.selection.handle_event(event, tasks.len()) {
            return None;
        }
        match event {
            TuiEvent::Submit => {
                let task = tasks.get(self.selection.selected(tasks.len())?)?;
                Some(Action::navigate(
                    "task-details",
                    NavigationParams::new()
                        .with("taskId", task.id)
                        .with("projectId", project.id),
                ))
            }
            TuiEvent::InputChar('l') => Some(Action::navigate("employee-details", project.lead_id)),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select  Enter Task  l Lead"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_list_submit_passes_bare_project_id() {
        let mut screen = ProjectListScreen::new();
        let params = NavigationParams::new();
        screen.handle_event(&TuiEvent::CursorDown, &params);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit, &params),
            Some(Action::navigate("project-details", "P-2"))
        );
    }

    #[test]
    fn test_details_opens_task_with_project_context() {
        let mut screen = ProjectDetailsScreen::new();
        let params = NavigationParams::new().with("projectId", "P-2");
        screen.handle_event(&TuiEvent::CursorDown, &params);
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit, &params),
            Some(Action::navigate(
                "task-details",
                NavigationParams::new()
                    .with("taskId", "T-43")
                    .with("projectId", "P-2")
            ))
        );
    }

    #[test]
    fn test_details_render_falls_back_to_first_project() {
        let mut terminal = Terminal::new(TestBackend::new(70, 16)).unwrap();
        let mut screen = ProjectDetailsScreen::new();
        terminal
            .draw(|f| screen.render(f, f.area(), &NavigationParams::new()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Onboarding Portal"));
        assert!(text.contains("SSO login for new hires"));
        assert!(text.contains("Amara Okafor"));
    }
}
