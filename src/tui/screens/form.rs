//! Booking form pane - the five input fields

use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::FormInput;
use crate::tui::Focus;

/// Form pane state: raw widget values, exactly as typed
pub struct BookingForm {
    booked_by: String,
    supplier_name: String,
    date: String,
    hour: String,
    minute: String,
    prefill_today: bool,
}

impl BookingForm {
    pub fn new(prefill_today: bool) -> Self {
        let mut form = Self {
            booked_by: String::new(),
            supplier_name: String::new(),
            date: String::new(),
            hour: String::new(),
            minute: String::new(),
            prefill_today,
        };
        form.reset_date();
        form
    }

    /// Current widget values for the controller
    pub fn input(&self) -> FormInput {
        FormInput {
            booked_by: self.booked_by.clone(),
            supplier_name: self.supplier_name.clone(),
            date: self.date.clone(),
            hour: self.hour.clone(),
            minute: self.minute.clone(),
        }
    }

    /// Clear all fields after a successful book/edit.
    ///
    /// The date goes back to today (when prefilling is on), hour and minute
    /// go back to empty.
    pub fn clear(&mut self) {
        self.booked_by.clear();
        self.supplier_name.clear();
        self.hour.clear();
        self.minute.clear();
        self.reset_date();
    }

    fn reset_date(&mut self) {
        self.date = if self.prefill_today {
            Local::now().format("%Y-%m-%d").to_string()
        } else {
            String::new()
        };
    }

    pub fn push_char(&mut self, field: Focus, c: char) {
        if let Some(buffer) = self.text_buffer(field) {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self, field: Focus) {
        if let Some(buffer) = self.text_buffer(field) {
            buffer.pop();
        }
    }

    fn text_buffer(&mut self, field: Focus) -> Option<&mut String> {
        match field {
            Focus::BookedBy => Some(&mut self.booked_by),
            Focus::Supplier => Some(&mut self.supplier_name),
            Focus::Date => Some(&mut self.date),
            _ => None,
        }
    }

    /// Step the hour picker through 00-23, wrapping
    pub fn cycle_hour(&mut self, step: i32) {
        self.hour = cycle(&self.hour, step, 24);
    }

    /// Step the minute picker through 00-59, wrapping
    pub fn cycle_minute(&mut self, step: i32) {
        self.minute = cycle(&self.minute, step, 60);
    }

    pub fn clear_hour(&mut self) {
        self.hour.clear();
    }

    pub fn clear_minute(&mut self) {
        self.minute.clear();
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, focus: Focus, accent: Color) {
        let lines = vec![
            field_line("Booked by", &self.booked_by, focus == Focus::BookedBy, accent),
            field_line(
                "Supplier",
                &self.supplier_name,
                focus == Focus::Supplier,
                accent,
            ),
            field_line("Date", &self.date, focus == Focus::Date, accent),
            picker_line("Hour", &self.hour, focus == Focus::Hour, accent),
            picker_line("Minute", &self.minute, focus == Focus::Minute, accent),
        ];

        let form = Paragraph::new(lines).block(
            Block::default()
                .title(" Book Meeting Room ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );
        frame.render_widget(form, area);
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool, accent: Color) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(accent)
    };

    let mut spans = vec![
        Span::styled(format!("{:<10}", label), label_style),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

fn picker_line<'a>(label: &'a str, value: &'a str, focused: bool, accent: Color) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(accent)
    };

    let shown = if value.is_empty() { "--" } else { value };
    let mut spans = vec![
        Span::styled(format!("{:<10}", label), label_style),
        Span::raw(shown),
    ];
    if focused {
        spans.push(Span::styled(
            "  ↑/↓ to pick",
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Step a zero-padded picker value, wrapping inside `0..modulo`.
///
/// An empty picker starts at 00 regardless of direction.
fn cycle(value: &str, step: i32, modulo: i32) -> String {
    let next = match value.parse::<i32>() {
        Ok(current) => (current + step).rem_euclid(modulo),
        Err(_) => 0,
    };
    format!("{:02}", next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickers_wrap_in_both_directions() {
        assert_eq!(cycle("23", 1, 24), "00");
        assert_eq!(cycle("00", -1, 24), "23");
        assert_eq!(cycle("59", 1, 60), "00");
        assert_eq!(cycle("00", -1, 60), "59");
        assert_eq!(cycle("", 1, 24), "00");
        assert_eq!(cycle("", -1, 24), "00");
    }

    #[test]
    fn clear_resets_date_and_empties_the_rest() {
        let mut form = BookingForm::new(true);
        form.push_char(Focus::BookedBy, 'A');
        form.cycle_hour(1);
        form.cycle_minute(1);

        form.clear();

        let input = form.input();
        assert!(input.booked_by.is_empty());
        assert!(input.hour.is_empty());
        assert!(input.minute.is_empty());
        assert_eq!(input.date, Local::now().format("%Y-%m-%d").to_string());
    }
}
