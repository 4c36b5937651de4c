use crossterm::event::KeyCode;
use log::debug;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::{Cell, PracticeMode, TargetChoice};
use crate::session::{PlaceOutcome, Session};
use crate::theory::{string_number, NaturalNote};

use super::board::{board_lines, BoardGeometry, BOARD_ROWS, BOARD_WIDTH};
use super::helpers::{centered_rect, key_hints};

/// Footer space reserved for the objective, status message and key help.
const FOOTER_HEIGHT: u16 = 4;

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Application state for the terminal front-end: the practice session, the
/// keyboard cursor, and whatever the last event wants to tell the player.
pub struct App {
    session: Session,
    cursor: Cell,
    status: Option<StatusMessage>,
    board: Option<BoardGeometry>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            cursor: Cell::OPEN_LOW_E,
            status: None,
            board: None,
        };
        app.follow_active_string();
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Handle one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(-1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_mode(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.change_target(TargetChoice::Random),
            KeyCode::Char('x') | KeyCode::Char('X') => self.clear(),
            KeyCode::Char(letter) => {
                if let Some(note) = NaturalNote::from_letter(letter) {
                    self.change_target(TargetChoice::Note(note));
                }
            }
            _ => {}
        }
        false
    }

    /// Handle a left click at a terminal position. Clicks that miss the board
    /// are ignored.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(cell) = self.board.and_then(|board| board.cell_at(column, row)) else {
            return;
        };
        self.cursor = cell;
        self.place(cell);
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Too short for both: the board wins.
        if area.height <= FOOTER_HEIGHT {
            self.draw_board(frame, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .split(area);
        self.draw_board(frame, chunks[0]);
        self.draw_footer(frame, chunks[1]);
    }

    fn draw_board(&mut self, frame: &mut Frame, area: Rect) {
        let board_area = centered_rect(BOARD_WIDTH + 2, BOARD_ROWS + 2, area);
        let title = format!(
            " {} practice · target {} ",
            self.session.mode(),
            self.session.target()
        );
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(board_area);
        self.board = Some(BoardGeometry::new(inner));

        let board = Paragraph::new(board_lines(&self.session, Some(self.cursor)))
            .alignment(Alignment::Left)
            .block(block);
        frame.render_widget(board, board_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let objective = self.session.objective();
        let objective_style = if objective.is_complete() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let objective_line = Line::from(Span::styled(objective.to_string(), objective_style));

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = key_hints(&[
            ("←↑↓→", "Move"),
            ("Enter", "Mark"),
            ("C-B", "Target"),
            ("R", "Random"),
            ("Tab", "Mode"),
            ("X", "Clear"),
            ("Q", "Quit"),
        ]);

        let paragraph = Paragraph::new(vec![objective_line, status_line, instructions])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn place(&mut self, cell: Cell) {
        let target = self.session.target();
        match self.session.place_marker(cell) {
            PlaceOutcome::Placed {
                session_completed: true,
                ..
            } => {
                self.set_status(
                    format!("Complete! Found every {target}. Press X to go again."),
                    StatusKind::Info,
                );
            }
            PlaceOutcome::Placed {
                string_completed: true,
                ..
            } => {
                let next = self.session.active_string().map(string_number);
                let text = match next {
                    Some(number) => format!(
                        "String {} done. Next: string {number}",
                        string_number(cell.string())
                    ),
                    None => format!("String {} done.", string_number(cell.string())),
                };
                self.set_status(text, StatusKind::Info);
                self.follow_active_string();
            }
            PlaceOutcome::Placed { marker, .. } if marker.correct => {
                self.set_status(
                    format!(
                        "{} on string {}, fret {}",
                        marker.note,
                        string_number(cell.string()),
                        cell.fret()
                    ),
                    StatusKind::Info,
                );
            }
            PlaceOutcome::Placed { marker, .. } => {
                self.set_status(
                    format!(
                        "That's {}, not {target} (string {}, fret {})",
                        marker.note,
                        string_number(cell.string()),
                        cell.fret()
                    ),
                    StatusKind::Error,
                );
            }
            PlaceOutcome::AlreadyMarked(_) => {}
            PlaceOutcome::WrongString { active } => {
                self.set_status(
                    format!("Stay on string {} for now", string_number(active)),
                    StatusKind::Error,
                );
            }
            PlaceOutcome::Finished => {
                self.set_status(
                    "Every string is done. Press X to go again.",
                    StatusKind::Info,
                );
            }
        }
    }

    fn change_target(&mut self, choice: TargetChoice) {
        let target = self.session.set_target(choice);
        self.set_status(format!("Practice target: {target}"), StatusKind::Info);
        self.follow_active_string();
    }

    fn toggle_mode(&mut self) {
        let mode = self.session.mode().toggled();
        self.session.set_mode(mode);
        let text = match mode {
            PracticeMode::Free => "Free practice: mark the target anywhere",
            PracticeMode::Guided => "Guided practice: one string at a time",
        };
        self.set_status(text, StatusKind::Info);
        self.follow_active_string();
    }

    fn clear(&mut self) {
        self.session.reset();
        self.set_status("Board cleared", StatusKind::Info);
        self.follow_active_string();
    }

    fn move_cursor(&mut self, strings: isize, frets: isize) {
        if let Some(cell) = self.cursor.offset(strings, frets) {
            self.cursor = cell;
        }
    }

    /// Keep the keyboard cursor on the string guided mode accepts. Returns
    /// whether the cursor had to move.
    fn follow_active_string(&mut self) -> bool {
        let Some(string) = self.session.active_string() else {
            return false;
        };
        match Cell::new(string, self.cursor.fret()) {
            Ok(cell) if cell != self.cursor => {
                debug!("cursor moved to string {string}");
                self.cursor = cell;
                true
            }
            _ => false,
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }
}
