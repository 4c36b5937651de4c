use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Produce a rectangle of at most `width` x `height` centered within `area`.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [horizontal] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(horizontal);
    vertical
}

/// Render `[key] action` pairs as a single help line.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        let separator = if idx + 1 == hints.len() { "" } else { "   " };
        spans.push(Span::raw(format!(" {action}{separator}")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(80, 10, area);
        assert_eq!((rect.width, rect.height), (80, 10));
        assert_eq!((rect.x, rect.y), (10, 15));
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect::new(2, 1, 30, 5);
        let rect = centered_rect(80, 10, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn key_hints_join_pairs() {
        let line = key_hints(&[("q", "Quit"), ("x", "Clear")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[q] Quit   [x] Clear");
    }
}
