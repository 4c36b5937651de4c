//! Text rendering of the fretboard and the inverse mapping from terminal
//! positions back to board cells.
//!
//! Layout inside the board block, top to bottom: a fret-number header, one
//! row per string with the high e on top and the low E at the bottom (the way
//! tablature is written), then a row of inlay dots. Every fret owns a column
//! of `CELL_WIDTH` characters followed by a one-character fret wire; the open
//! string column is followed by the nut instead.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{Cell, Marker};
use crate::session::Session;
use crate::theory::{open_string_label, string_number, FRET_COUNT, MAX_FRET, STRING_COUNT};

/// Width of the string label gutter, e.g. `"6 E "`.
pub(crate) const LABEL_WIDTH: u16 = 4;
/// Characters per fret column, excluding the fret wire.
pub(crate) const CELL_WIDTH: u16 = 5;
/// Horizontal distance between two fret columns.
pub(crate) const COLUMN_STRIDE: u16 = CELL_WIDTH + 1;
/// Rows above the first string.
pub(crate) const HEADER_ROWS: u16 = 1;
/// Total text width of the board.
pub(crate) const BOARD_WIDTH: u16 = LABEL_WIDTH + COLUMN_STRIDE * FRET_COUNT as u16;
/// Header, strings and inlay row.
pub(crate) const BOARD_ROWS: u16 = HEADER_ROWS + STRING_COUNT as u16 + 1;

/// Frets carrying a single inlay dot; the octave fret gets two.
const SINGLE_INLAYS: [usize; 4] = [3, 5, 7, 9];
const OCTAVE_FRET: usize = 12;

/// Where the board text was last drawn. Used to resolve mouse clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoardGeometry {
    area: Rect,
}

impl BoardGeometry {
    /// `area` is the inner (border-less) rectangle the board lines start in.
    pub(crate) fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Resolve a terminal position to a board cell. Positions on the labels,
    /// header, inlay row, or outside the drawn area resolve to nothing.
    pub(crate) fn cell_at(&self, column: u16, row: u16) -> Option<Cell> {
        if column >= self.area.right() || row >= self.area.bottom() {
            return None;
        }
        let dx = column.checked_sub(self.area.x + LABEL_WIDTH)?;
        let dy = row.checked_sub(self.area.y + HEADER_ROWS)? as usize;
        let fret = (dx / COLUMN_STRIDE) as usize;
        if fret > MAX_FRET || dy >= STRING_COUNT {
            return None;
        }
        Cell::new(STRING_COUNT - 1 - dy, fret).ok()
    }

    /// Terminal position of the centre of `cell`.
    pub(crate) fn position_of(&self, cell: Cell) -> (u16, u16) {
        let x = self.area.x + LABEL_WIDTH + cell.fret() as u16 * COLUMN_STRIDE + CELL_WIDTH / 2;
        let y = self.area.y + HEADER_ROWS + (STRING_COUNT - 1 - cell.string()) as u16;
        (x, y)
    }
}

/// Build every board line for the current session state.
pub(crate) fn board_lines(session: &Session, cursor: Option<Cell>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(BOARD_ROWS as usize);
    lines.push(header_line());
    for string in (0..STRING_COUNT).rev() {
        lines.push(string_line(session, string, cursor));
    }
    lines.push(inlay_line());
    lines
}

fn header_line() -> Line<'static> {
    let style = Style::default().fg(Color::DarkGray);
    let mut text = " ".repeat(LABEL_WIDTH as usize);
    for fret in 0..FRET_COUNT {
        text.push_str(&center(&fret.to_string(), CELL_WIDTH as usize));
        text.push(' ');
    }
    Line::from(Span::styled(text, style))
}

fn string_line(session: &Session, string: usize, cursor: Option<Cell>) -> Line<'static> {
    let string_style = match session.progress() {
        None => Style::default().fg(Color::Gray),
        Some(_) if session.active_string() == Some(string) => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Some(_) => Style::default().fg(Color::DarkGray),
    };
    let wire_style = Style::default().fg(Color::Gray);

    let label = format!("{} {}", string_number(string), open_string_label(string));
    let mut spans = vec![Span::styled(
        format!("{label:<width$}", width = LABEL_WIDTH as usize),
        string_style,
    )];

    for fret in 0..FRET_COUNT {
        let Ok(cell) = Cell::new(string, fret) else {
            continue;
        };
        let selected = cursor == Some(cell);
        spans.extend(cell_spans(session.marker_at(cell), string_style, selected));
        let wire = if fret == 0 { "‖" } else { "│" };
        spans.push(Span::styled(wire, wire_style));
    }

    Line::from(spans)
}

/// Spans for one fret column: string line, optional marker, cursor highlight.
fn cell_spans(marker: Option<&Marker>, string_style: Style, selected: bool) -> Vec<Span<'static>> {
    let cursor_style = |style: Style| {
        if selected {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    };

    match marker {
        None => vec![Span::styled("─".repeat(CELL_WIDTH as usize), cursor_style(string_style))],
        Some(marker) => {
            let body = match marker.label() {
                Some(name) => format!(" {name} "),
                None => " ● ".to_string(),
            };
            let background = if marker.correct { Color::Green } else { Color::Red };
            let marker_style = Style::default()
                .fg(Color::Black)
                .bg(background)
                .add_modifier(Modifier::BOLD);
            vec![
                Span::styled("─", cursor_style(string_style)),
                Span::styled(body, cursor_style(marker_style)),
                Span::styled("─", cursor_style(string_style)),
            ]
        }
    }
}

fn inlay_line() -> Line<'static> {
    let mut text = " ".repeat(LABEL_WIDTH as usize);
    for fret in 0..FRET_COUNT {
        let dots = if SINGLE_INLAYS.contains(&fret) {
            "•"
        } else if fret == OCTAVE_FRET {
            "• •"
        } else {
            ""
        };
        text.push_str(&center(dots, CELL_WIDTH as usize));
        text.push(' ');
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// Center `text` in `width` columns, leaning left on odd padding.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let padding = width - len;
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
