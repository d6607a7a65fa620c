//! # Attendance Calendar Screen
//!
//! Month grid for one employee. Reads `employeeId` and `month` (`YYYY-MM`);
//! either may be missing, in which case the sample employee and sample month
//! are shown. `[` and `]` move between months by navigating, so each month
//! visited lands in the back history.

use chrono::{Datelike, Months, NaiveDate};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::list_block;
use super::sample::{self, SAMPLE_MONTH};
use crate::core::{Action, NavigationParams};
use crate::tui::component::Screen;
use crate::tui::event::TuiEvent;

pub struct AttendanceCalendarScreen;

/// First day of the month named by `raw` (`YYYY-MM`), if it parses.
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d").ok()
}

fn month_from_params(params: &NavigationParams) -> NaiveDate {
    params
        .get_text("month")
        .and_then(|raw| parse_month(&raw))
        .or_else(|| NaiveDate::from_ymd_opt(SAMPLE_MONTH.0, SAMPLE_MONTH.1, 1))
        .unwrap_or_default()
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

fn month_key(first: NaiveDate) -> String {
    first.format("%Y-%m").to_string()
}

/// Calendar rows (Monday first), one `Line` per week.
fn calendar_lines(employee_id: i64, first: NaiveDate) -> (Vec<Line<'static>>, u32, u32) {
    let mut lines = vec![Line::from(Span::styled(
        "Mo  Tu  We  Th  Fr  Sa  Su",
        Style::default().fg(Color::DarkGray),
    ))];
    let mut present = 0;
    let mut working = 0;

    let lead = first.weekday().num_days_from_monday() as usize;
    let mut week: Vec<Span> = vec![Span::raw("    "); lead];

    for day in 1..=days_in_month(first) {
        let Some(date) = first.with_day(day) else {
            continue;
        };
        let weekend = date.weekday().num_days_from_monday() >= 5;
        let style = if weekend {
            Style::default().fg(Color::DarkGray)
        } else {
            working += 1;
            if sample::was_present(employee_id, date) {
                present += 1;
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            }
        };
        week.push(Span::styled(format!("{day:>2}  "), style));
        if week.len() == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }
    (lines, present, working)
}

impl Screen for AttendanceCalendarScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, params: &NavigationParams) {
        let employee = sample::employee_or_sample(params.get_int("employeeId"));
        let first = month_from_params(params);
        let (mut lines, present, working) = calendar_lines(employee.id, first);

        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("Present {present} of {working} working days")));

        let title = format!("{} · {}", employee.name, first.format("%B %Y"));
        frame.render_widget(Paragraph::new(lines).block(list_block(&title)), area);
    }

    fn handle_event(&mut self, event: &TuiEvent, params: &NavigationParams) -> Option<Action> {
        let first = month_from_params(params);
        let target = match event {
            TuiEvent::InputChar('[') => first.checked_sub_months(Months::new(1))?,
            TuiEvent::InputChar(']') => first.checked_add_months(Months::new(1))?,
            TuiEvent::InputChar('e') => {
                let employee = sample::employee_or_sample(params.get_int("employeeId"));
                return Some(Action::navigate("employee-details", employee.id));
            }
            _ => return None,
        };
        let mut next = NavigationParams::new().with("month", month_key(target));
        if let Some(id) = params.get("employeeId") {
            next.insert("employeeId", id.clone());
        }
        Some(Action::navigate("attendance-calendar", next))
    }

    fn hints(&self) -> &'static str {
        "[ ] Month  e Employee"
    }
}
