//! Listing pane - the sorted bookings table

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Row, Table, TableState},
};

use crate::storage::Meeting;

/// Listing pane state: the current snapshot plus row selection
pub struct ListingPane {
    meetings: Vec<Meeting>,
    state: TableState,
}

impl ListingPane {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        let mut state = TableState::default();
        if !meetings.is_empty() {
            state.select(Some(0));
        }

        Self { meetings, state }
    }

    /// Replace the snapshot after a mutation, keeping the selection sane
    pub fn set_meetings(&mut self, meetings: Vec<Meeting>) {
        self.meetings = meetings;

        let selected = match self.state.selected() {
            _ if self.meetings.is_empty() => None,
            Some(i) => Some(i.min(self.meetings.len() - 1)),
            None => Some(0),
        };
        self.state.select(selected);
    }

    pub fn next(&mut self) {
        if self.meetings.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.meetings.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.meetings.is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.meetings.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Id of the selected row, if any
    pub fn selected_id(&self) -> Option<i64> {
        self.state
            .selected()
            .and_then(|i| self.meetings.get(i))
            .map(|m| m.id)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool, accent: Color) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(accent)
        };

        let header = Row::new(["ID", "Booked By", "Supplier Name", "Date", "Time"])
            .style(Style::default().fg(accent).bold())
            .bottom_margin(1);

        let rows = self.meetings.iter().map(|meeting| {
            Row::new([
                meeting.id.to_string(),
                meeting.booked_by.clone(),
                meeting.supplier_name.clone(),
                meeting.date.clone(),
                meeting.time.clone(),
            ])
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Length(7),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!(" Bookings ({}) ", self.meetings.len()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);
    }
}
