//! Main TUI application state and logic

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::config::Settings;
use crate::controller::BookingController;
use crate::storage::Database;
use crate::tui::screens::{BookingForm, ListingPane};
use crate::tui::widgets::HelpPopup;
use crate::BookingError;

/// Which part of the form currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    BookedBy,
    Supplier,
    Date,
    Hour,
    Minute,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::BookedBy => Self::Supplier,
            Self::Supplier => Self::Date,
            Self::Date => Self::Hour,
            Self::Hour => Self::Minute,
            Self::Minute => Self::List,
            Self::List => Self::BookedBy,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::BookedBy => Self::List,
            Self::Supplier => Self::BookedBy,
            Self::Date => Self::Supplier,
            Self::Hour => Self::Date,
            Self::Minute => Self::Hour,
            Self::List => Self::Minute,
        }
    }
}

/// Outcome line shown under the form
#[derive(Debug, Clone)]
enum Notice {
    Success(String),
    Error(String),
}

/// Main application state
pub struct App {
    controller: BookingController,
    form: BookingForm,
    listing: ListingPane,
    focus: Focus,
    notice: Option<Notice>,
    show_help: bool,
    quit: bool,
    accent: Color,
}

impl App {
    /// Open the store and load the initial listing
    pub fn new(settings: Settings) -> crate::Result<Self> {
        let db = Database::open(&settings)?;
        let controller = BookingController::new(db);
        let meetings = controller.on_load()?;

        let accent = match settings.tui.theme.as_str() {
            "light" => Color::Blue,
            _ => Color::Cyan,
        };

        Ok(Self {
            controller,
            form: BookingForm::new(settings.tui.prefill_today),
            listing: ListingPane::new(meetings),
            focus: Focus::BookedBy,
            notice: None,
            show_help: false,
            quit: false,
            accent,
        })
    }

    /// Draw the whole screen
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Form
                Constraint::Length(1), // Notice
                Constraint::Min(5),    // Listing
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        self.form.draw(frame, chunks[0], self.focus, self.accent);
        self.draw_notice(frame, chunks[1]);
        self.listing
            .draw(frame, chunks[2], self.focus == Focus::List, self.accent);
        self.draw_help_bar(frame, chunks[3]);

        if self.show_help {
            HelpPopup::draw(frame, area, self.accent);
        }
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(Notice::Success(text)) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(Color::Green)))
            }
            Some(Notice::Error(text)) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red)))
            }
            None => Line::from(""),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Tab ", Style::default().fg(Color::Black).bg(self.accent)),
            Span::raw(" Next field  "),
            Span::styled(" Enter ", Style::default().fg(Color::Black).bg(self.accent)),
            Span::raw(" Book  "),
            Span::styled(" d ", Style::default().fg(Color::Black).bg(self.accent)),
            Span::raw(" Delete  "),
            Span::styled(" e ", Style::default().fg(Color::Black).bg(self.accent)),
            Span::raw(" Edit  "),
            Span::styled(" ? ", Style::default().fg(Color::Black).bg(self.accent)),
            Span::raw(" Help  "),
            Span::styled(" q ", Style::default().fg(Color::Black).bg(self.accent)),
            Span::raw(" Quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }

    /// Handle key input
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
            }
            KeyCode::Esc => {
                if self.focus == Focus::List {
                    self.quit = true;
                } else {
                    self.focus = Focus::List;
                }
            }
            KeyCode::Enter => {
                if self.focus != Focus::List {
                    self.book();
                }
            }
            _ => match self.focus {
                Focus::List => self.handle_list_key(key),
                _ => self.handle_field_key(key),
            },
        }
    }

    fn handle_list_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.listing.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.listing.next(),
            KeyCode::Char('b') => self.book(),
            KeyCode::Char('d') => self.delete(),
            KeyCode::Char('e') => self.edit(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Hour => match key {
                KeyCode::Up => self.form.cycle_hour(1),
                KeyCode::Down => self.form.cycle_hour(-1),
                KeyCode::Backspace => self.form.clear_hour(),
                _ => {}
            },
            Focus::Minute => match key {
                KeyCode::Up => self.form.cycle_minute(1),
                KeyCode::Down => self.form.cycle_minute(-1),
                KeyCode::Backspace => self.form.clear_minute(),
                _ => {}
            },
            field => match key {
                KeyCode::Char(c) => self.form.push_char(field, c),
                KeyCode::Backspace => self.form.pop_char(field),
                _ => {}
            },
        }
    }

    /// Book a new meeting from the form values
    fn book(&mut self) {
        match self.controller.on_create(&self.form.input()) {
            Ok(meetings) => {
                self.listing.set_meetings(meetings);
                self.form.clear();
                self.notice = Some(Notice::Success("Booking saved.".to_string()));
            }
            Err(e) => self.report(e),
        }
    }

    /// Delete the selected meeting
    fn delete(&mut self) {
        match self.controller.on_delete(self.listing.selected_id()) {
            Ok(meetings) => {
                self.listing.set_meetings(meetings);
                self.notice = Some(Notice::Success("Booking deleted.".to_string()));
            }
            Err(e) => self.report(e),
        }
    }

    /// Rewrite the selected meeting with the form values.
    ///
    /// The form is not pre-populated from the selection: whatever is typed
    /// in the inputs right now is what gets written.
    fn edit(&mut self) {
        match self
            .controller
            .on_edit(self.listing.selected_id(), &self.form.input())
        {
            Ok(meetings) => {
                self.listing.set_meetings(meetings);
                self.form.clear();
                self.notice = Some(Notice::Success("Booking updated.".to_string()));
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, err: BookingError) {
        self.notice = Some(Notice::Error(err.to_string()));
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
