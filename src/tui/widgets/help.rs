//! Help popup widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Help popup that shows keyboard shortcuts
pub struct HelpPopup;

impl HelpPopup {
    pub fn draw(frame: &mut Frame, area: Rect, accent: Color) {
        // Centered popup, 60% width, 70% height
        let popup_width = (area.width as f32 * 0.6) as u16;
        let popup_height = (area.height as f32 * 0.7) as u16;
        let popup_x = (area.width - popup_width) / 2;
        let popup_y = (area.height - popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Booking Form Shortcuts",
                Style::default().fg(accent).bold(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Tab     ", Style::default().fg(Color::Yellow)),
                Span::raw("Move to the next field"),
            ]),
            Line::from(vec![
                Span::styled("Enter   ", Style::default().fg(Color::Yellow)),
                Span::raw("Book with the current field values"),
            ]),
            Line::from(vec![
                Span::styled("↑/↓     ", Style::default().fg(Color::Yellow)),
                Span::raw("Pick hour/minute, or move in the list"),
            ]),
            Line::from(vec![
                Span::styled("Esc     ", Style::default().fg(Color::Yellow)),
                Span::raw("Jump to the list (from the list: quit)"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "With the list focused",
                Style::default().fg(accent).bold(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("b       ", Style::default().fg(Color::Yellow)),
                Span::raw("Book with the current field values"),
            ]),
            Line::from(vec![
                Span::styled("d       ", Style::default().fg(Color::Yellow)),
                Span::raw("Delete the selected booking"),
            ]),
            Line::from(vec![
                Span::styled("e       ", Style::default().fg(Color::Yellow)),
                Span::raw("Rewrite the selected booking from the fields"),
            ]),
            Line::from(vec![
                Span::styled("q       ", Style::default().fg(Color::Yellow)),
                Span::raw("Quit"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Edit writes what is typed in the fields right now;",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "it does not copy the selected row back into them.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let popup = Paragraph::new(help_text)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent)),
            );

        frame.render_widget(popup, popup_area);
    }
}
