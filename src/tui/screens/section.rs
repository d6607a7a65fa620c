//! # Section Screen
//!
//! Stand-in page for modules that have a route but no sample data yet
//! (recruitment, meetings, payroll, ...). Shows the module title and
//! whatever params it was opened with.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::list_block;
use crate::core::NavigationParams;
use crate::tui::component::Screen;

pub struct SectionScreen {
    title: String,
}

impl SectionScreen {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Screen for SectionScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams) {
        let mut lines = vec![
            Line::raw(""),
            Line::styled(
                "No sample records for this module.",
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if !params.is_empty() {
            lines.push(Line::raw(""));
            lines.push(Line::raw(format!("Params: {params}")));
        }
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(list_block(&self.title));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shows_title_and_params() {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        let mut screen = SectionScreen::new("Leave Requests");
        let params = NavigationParams::new().with("status", "pending");
        terminal
            .draw(|f| screen.render(f, f.area(), &params))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Leave Requests"));
        assert!(text.contains("status: pending"));
    }
}
