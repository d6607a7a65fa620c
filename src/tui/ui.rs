use crate::core::{NavigationParams, Navigator};
use crate::tui::component::Component;
use crate::tui::components::{Sidebar, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};

const SIDEBAR_WIDTH: u16 = 24;
const GLOBAL_HINTS: &str = "Tab Focus  Esc Back  q Quit";

pub fn draw_ui(frame: &mut Frame, nav: &Navigator, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, body_area, help_area] = layout.areas(frame.area());
    let [sidebar_area, screen_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);

    let table = nav.route_table();
    let current = nav.current();
    let shown = table.resolve_renderable(&current.module, |id| tui.screens.contains(id));

    // Title bar
    let shown_title = (shown != current.module).then(|| table.title_of(shown).to_string());
    TitleBar::new(
        table.title_of(&current.module).to_string(),
        shown_title,
        nav.history_len(),
    )
    .render(frame, title_area);

    // Sidebar
    let section = table.sidebar_section(&current.module);
    Sidebar::new(&mut tui.sidebar, section, tui.focus == Focus::Sidebar)
        .render(frame, sidebar_area);

    // Screen: a substituted screen gets no params, they belong to another module
    let empty = NavigationParams::new();
    let params = if shown == current.module {
        &current.params
    } else {
        &empty
    };
    let screen_hints = match tui.screens.get_mut(shown) {
        Some(screen) => {
            screen.render(frame, screen_area, params);
            screen.hints()
        }
        None => {
            draw_missing_screen(frame, screen_area, shown);
            ""
        }
    };

    // Help bar
    let hints = if tui.focus == Focus::Screen && !screen_hints.is_empty() {
        format!("{GLOBAL_HINTS}  │  {screen_hints}")
    } else {
        GLOBAL_HINTS.to_string()
    };
    frame.render_widget(
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

/// Only reachable when even the global fallback has no registered screen.
fn draw_missing_screen(frame: &mut Frame, area: Rect, module: &str) {
    let paragraph = Paragraph::new(format!("No screen registered for '{module}'"))
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, update};
    use crate::test_support::{buffer_text, test_navigator};
    use crate::tui::screens::ScreenRegistry;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(nav: &Navigator, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, nav, tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_dashboard() {
        let nav = test_navigator();
        let mut tui = TuiState::new(nav.route_table());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("HRMS | Dashboard"));
        assert!(text.contains("Modules"));
        assert!(text.contains("Tab Focus"));
    }

    #[test]
    fn test_draw_routed_details_screen() {
        let mut nav = test_navigator();
        update(&mut nav, Action::navigate("employee-details", 2i64));
        let mut tui = TuiState::new(nav.route_table());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("HRMS | Employee Details | ← 1"));
        assert!(text.contains("Liam Chen"));
    }

    #[test]
    fn test_unregistered_module_shows_fallback_screen() {
        let mut nav = test_navigator();
        update(&mut nav, Action::navigate("job-details", "J-1"));
        let mut tui = TuiState::new(nav.route_table());
        let text = draw(&nav, &mut tui);
        // Navigation state keeps the requested module
        assert_eq!(nav.current().module, "job-details");
        assert!(text.contains("Job Details → Recruitment"));
        assert!(!text.contains("J-1"));
    }

    #[test]
    fn test_missing_global_screen_reports_error() {
        let nav = test_navigator();
        let mut tui = TuiState::new(nav.route_table());
        tui.screens = ScreenRegistry::new();
        let text = draw(&nav, &mut tui);
        assert!(text.contains("No screen registered for 'dashboard'"));
    }

    #[test]
    fn test_screen_hints_only_when_screen_focused() {
        let nav = test_navigator();
        let mut tui = TuiState::new(nav.route_table());
        tui.focus = Focus::Sidebar;
        assert!(!draw(&nav, &mut tui).contains("Enter Open"));
        tui.focus = Focus::Screen;
        assert!(draw(&nav, &mut tui).contains("Enter Open"));
    }
}
