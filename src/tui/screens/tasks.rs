//! # Task Screens
//!
//! The task list honours an optional `projectId` filter; the details screen
//! reads `taskId` and shows the first sample task without one.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{List, ListItem};

use super::sample::{self, Task};
use super::{Selection, detail_panel, highlight_style, list_block};
use crate::core::{Action, NavigationParams};
use crate::tui::component::Screen;
use crate::tui::event::TuiEvent;

pub struct TaskListScreen {
    selection: Selection,
}

impl TaskListScreen {
    pub fn new() -> Self {
        Self {
            selection: Selection::new(),
        }
    }
}

impl Default for TaskListScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Tasks visible under `params`, sorted by due date.
pub fn visible_tasks(params: &NavigationParams) -> Vec<Task> {
    let mut tasks = match params.get_text("projectId") {
        Some(project_id) => sample::tasks_for_project(&project_id),
        None => sample::tasks(),
    };
    tasks.sort_by_key(|t| t.due);
    tasks
}

impl Screen for TaskListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams) {
        let tasks = visible_tasks(params);
        self.selection.sync(tasks.len());

        let title = match params.get_text("projectId") {
            Some(project_id) => format!("Tasks · {project_id}"),
            None => "Tasks".to_string(),
        };
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|t| {
                ListItem::new(format!(
                    "{:<5} {:<28} {:<12} {}",
                    t.id,
                    t.title,
                    t.status.label(),
                    t.due.format("%d %b")
                ))
            })
            .collect();
        let list = List::new(items)
            .block(list_block(&title))
            .highlight_style(highlight_style());
        frame.render_stateful_widget(list, area, &mut self.selection.list_state);
    }

    fn handle_event(&mut self, event: &TuiEvent, params: &NavigationParams) -> Option<Action> {
        let tasks = visible_tasks(params);
        if self.selection.handle_event(event, tasks.len()) {
            return None;
        }
        match event {
            TuiEvent::Submit => {
                let task = tasks.get(self.selection.selected(tasks.len())?)?;
                Some(Action::navigate("task-details", task.id))
            }
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "↑↓ Select  Enter Open"
    }
}

pub struct TaskDetailsScreen;

impl Screen for TaskDetailsScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams) {
        let task = sample::task_or_sample(params.get_text("taskId").as_deref());
        let project = sample::project_or_sample(Some(task.project_id));
        let mut rows = vec![
            ("Id", task.id.to_string()),
            ("Title", task.title.to_string()),
            ("Project", format!("{} ({})", project.name, project.id)),
            ("Assignee", sample::employee_name(task.assignee_id).to_string()),
            ("Status", task.status.label().to_string()),
            ("Due", task.due.format("%d %b %Y").to_string()),
        ];
        if let Some(from) = params.get_text("projectId")
            && from != task.project_id
        {
            rows.push(("Opened from", from.to_string()));
        }
        frame.render_widget(detail_panel("Task", rows), area);
    }

    fn handle_event(&mut self, event: &TuiEvent, params: &NavigationParams) -> Option<Action> {
        let task = sample::task_or_sample(params.get_text("taskId").as_deref());
        match event {
            TuiEvent::InputChar('p') => Some(Action::navigate("project-details", task.project_id)),
            TuiEvent::InputChar('a') => Some(Action::navigate("employee-details", task.assignee_id)),
            _ => None,
        }
    }

    fn hints(&self) -> &'static str {
        "p Project  a Assignee"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParamValue;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_project_filter_and_due_order() {
        let all = visible_tasks(&NavigationParams::new());
        assert_eq!(all.len(), sample::tasks().len());
        assert!(all.windows(2).all(|w| w[0].due <= w[1].due));

        let filtered = visible_tasks(&NavigationParams::new().with("projectId", "P-2"));
        let ids: Vec<&str> = filtered.iter().map(|t| t.id).collect();
        assert_eq!(ids, ["T-42", "T-43"]);
    }

    #[test]
    fn test_unknown_project_filter_shows_nothing() {
        assert!(visible_tasks(&NavigationParams::new().with("projectId", "P-99")).is_empty());
        let mut screen = TaskListScreen::new();
        let params = NavigationParams::new().with("projectId", "P-99");
        assert_eq!(screen.handle_event(&TuiEvent::Submit, &params), None);
    }

    #[test]
    fn test_numeric_project_filter_is_still_applied() {
        let params = NavigationParams::new().with("projectId", ParamValue::parse("2"));
        assert!(visible_tasks(&params).is_empty());
    }

    #[test]
    fn test_list_submit_passes_bare_task_id() {
        let mut screen = TaskListScreen::new();
        assert_eq!(
            screen.handle_event(&TuiEvent::Submit, &NavigationParams::new()),
            Some(Action::navigate("task-details", "T-40"))
        );
    }

    #[test]
    fn test_details_render_requested_task() {
        let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
        let params = NavigationParams::new().with("taskId", "T-42");
        terminal
            .draw(|f| TaskDetailsScreen.render(f, f.area(), &params))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Reconcile April payslips"));
        assert!(text.contains("Payroll Migration"));
        assert!(text.contains("Liam Chen"));
    }

    #[test]
    fn test_details_link_to_project() {
        let params = NavigationParams::new().with("taskId", "T-44");
        assert_eq!(
            TaskDetailsScreen.handle_event(&TuiEvent::InputChar('p'), &params),
            Some(Action::navigate("project-details", "P-3"))
        );
    }
}
