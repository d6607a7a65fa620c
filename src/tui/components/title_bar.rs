//! # TitleBar Component
//!
//! Top line of the shell: application name, the active module's title, and
//! how deep the back history goes.
//!
//! ## Conditional Formatting
//!
//! 1. **Substituted screen**: `"HRMS | Job Details → Recruitment | ← 3"`
//! 2. **With history**: `"HRMS | Employee Details | ← 3"`
//! 3. **Default**: `"HRMS | Dashboard"`
//!
//! A substituted screen is one the route table's fallback chain picked
//! because no screen is registered for the active module.
//!
//! Text wider than the area is cut on a character boundary using display
//! width, so wide glyphs never spill past the edge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthChar;

use crate::tui::component::Component;

/// Top status bar component.
///
/// All fields are props supplied by the shell each frame.
pub struct TitleBar {
    /// Title of the module in the navigation state.
    pub module_title: String,
    /// Title of the screen actually rendered, when it differs.
    pub shown_title: Option<String>,
    /// Entries available to go back through.
    pub history_depth: usize,
}

impl TitleBar {
    pub fn new(module_title: String, shown_title: Option<String>, history_depth: usize) -> Self {
        Self {
            module_title,
            shown_title,
            history_depth,
        }
    }

    pub fn text(&self) -> String {
        let mut text = format!("HRMS | {}", self.module_title);
        if let Some(ref shown) = self.shown_title {
            text.push_str(&format!(" → {shown}"));
        }
        if self.history_depth > 0 {
            text.push_str(&format!(" | ← {}", self.history_depth));
        }
        text
    }
}

/// Cut `text` to at most `max_width` terminal columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = truncate_to_width(&self.text(), area.width as usize);
        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(text, style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_default_text() {
        let bar = TitleBar::new("Dashboard".to_string(), None, 0);
        assert_eq!(bar.text(), "HRMS | Dashboard");
    }

    #[test]
    fn test_text_with_history_and_substitution() {
        let bar = TitleBar::new("Job Details".to_string(), Some("Recruitment".to_string()), 3);
        assert_eq!(bar.text(), "HRMS | Job Details → Recruitment | ← 3");
    }

    #[test]
    fn test_truncate_respects_display_width() {
        assert_eq!(truncate_to_width("abcdef", 4), "abcd");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("ok", 10), "ok");
    }

    #[test]
    fn test_render_into_narrow_area() {
        let mut terminal = Terminal::new(TestBackend::new(12, 1)).unwrap();
        let mut bar = TitleBar::new("Employee Details".to_string(), None, 2);
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert_eq!(text, "HRMS | Emplo");
    }
}
