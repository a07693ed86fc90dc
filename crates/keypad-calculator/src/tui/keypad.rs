//! Keypad widget for the terminal front-end
//!
//! Draws the shared [`Keypad`] grid inside a bordered block and maps mouse
//! positions back to button indices.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonVariant, Keypad};

/// Returns the screen cell occupied by button `index` when the keypad is
/// drawn into `area` (border included).
#[must_use]
pub fn cell_rect(keypad: &Keypad, area: Rect, index: usize) -> Option<Rect> {
    let (rows, cols) = keypad.dimensions();
    let btn = keypad.get_button(index)?;

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let btn_width = inner_width / cols as u16;
    let btn_height = inner_height / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    Some(Rect {
        x: area.x + 1 + btn.col as u16 * btn_width,
        y: area.y + 1 + btn.row as u16 * btn_height,
        width: btn_width,
        height: btn_height,
    })
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }

    let rel_x = x - area.x;
    let rel_y = y - area.y;

    // Border is one cell on each side
    if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
        return None;
    }

    let (rows, cols) = keypad.dimensions();
    let btn_width = (area.width - 2) / cols as u16;
    let btn_height = (area.height - 2) / rows as u16;
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((rel_x - 1) / btn_width) as usize;
    let row = ((rel_y - 1) / btn_height) as usize;

    if row < rows && col < cols {
        Some(row * cols + col)
    } else {
        None
    }
}

fn variant_style(variant: ButtonVariant) -> Style {
    match variant {
        ButtonVariant::Default => Style::default().fg(Color::White),
        ButtonVariant::Operator => Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
        ButtonVariant::Action => Style::default().fg(Color::Gray),
        ButtonVariant::Equals => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            pressed: None,
        }
    }

    /// Highlights the button at `index`
    #[must_use]
    pub fn with_pressed(mut self, pressed: Option<usize>) -> Self {
        self.pressed = pressed;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().iter().enumerate() {
            let Some(cell) = cell_rect(self.keypad, area, index) else {
                return; // Too small to render
            };

            let style = if self.pressed == Some(index) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                variant_style(btn.variant())
            };

            let label = format!("[{:^4}]", btn.label());
            let label_width = label.chars().count() as u16;
            if label_width > cell.width {
                buf.set_span(cell.x, cell.y, &Span::styled(btn.label(), style), cell.width);
                continue;
            }

            let label_x = cell.x + (cell.width - label_width) / 2;
            let label_y = cell.y + cell.height / 2;
            buf.set_span(label_x, label_y, &Span::styled(label, style), label_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Event;

    fn area() -> Rect {
        // 4 columns of 8, 5 rows of 3, plus the border
        Rect::new(10, 5, 34, 17)
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== cell_rect =====

    #[test]
    fn test_cell_rect_first_and_last() {
        let keypad = Keypad::new();
        assert_eq!(cell_rect(&keypad, area(), 0), Some(Rect::new(11, 6, 8, 3)));
        assert_eq!(cell_rect(&keypad, area(), 19), Some(Rect::new(35, 18, 8, 3)));
    }

    #[test]
    fn test_cell_rect_out_of_range_index() {
        assert_eq!(cell_rect(&Keypad::new(), area(), 20), None);
    }

    #[test]
    fn test_cell_rect_too_small() {
        assert_eq!(cell_rect(&Keypad::new(), Rect::new(0, 0, 4, 4), 0), None);
    }

    // ===== hit_test =====

    #[test]
    fn test_hit_test_every_cell_center() {
        let keypad = Keypad::new();
        for index in 0..keypad.button_count() {
            let cell = cell_rect(&keypad, area(), index).unwrap();
            let hit = hit_test(&keypad, area(), cell.x + cell.width / 2, cell.y + cell.height / 2);
            assert_eq!(hit, Some(index));
        }
    }

    #[test]
    fn test_hit_test_outside_area() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 0, 0), None);
        assert_eq!(hit_test(&keypad, area(), 44, 10), None);
        assert_eq!(hit_test(&keypad, area(), 20, 22), None);
    }

    #[test]
    fn test_hit_test_on_border() {
        let keypad = Keypad::new();
        assert_eq!(hit_test(&keypad, area(), 10, 10), None);
        assert_eq!(hit_test(&keypad, area(), 20, 5), None);
        assert_eq!(hit_test(&keypad, area(), 43, 10), None);
        assert_eq!(hit_test(&keypad, area(), 20, 21), None);
    }

    #[test]
    fn test_hit_test_top_left_button_is_clear() {
        let keypad = Keypad::new();
        let index = hit_test(&keypad, area(), 11, 6).unwrap();
        assert_eq!(keypad.get_button(index).unwrap().action, Event::Clear);
    }

    // ===== rendering =====

    #[test]
    fn test_render_draws_all_labels() {
        let keypad = Keypad::new();
        let full = Rect::new(0, 0, 50, 25);
        let mut buf = Buffer::empty(full);
        KeypadWidget::new(&keypad).render(area(), &mut buf);

        let text = buffer_text(&buf);
        for btn in keypad.buttons() {
            assert!(text.contains(btn.label()), "missing {}", btn.label());
        }
    }

    #[test]
    fn test_render_highlights_pressed_button() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 50, 25));
        KeypadWidget::new(&keypad)
            .with_pressed(Some(0))
            .render(area(), &mut buf);

        let cell = cell_rect(&keypad, area(), 0).unwrap();
        let row = cell.y + cell.height / 2;
        let highlighted = (cell.x..cell.x + cell.width)
            .filter_map(|x| buf.cell((x, row)))
            .any(|c| c.bg == Color::Yellow);
        assert!(highlighted);
    }

    #[test]
    fn test_render_tiny_area_does_not_panic() {
        let keypad = Keypad::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 5));
        KeypadWidget::new(&keypad).render(Rect::new(0, 0, 5, 5), &mut buf);
    }
}
