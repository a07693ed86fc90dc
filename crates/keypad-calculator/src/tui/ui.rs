//! TUI rendering
//!
//! One centred panel: a two-line display (preview row, value row) above
//! the keypad grid, with a one-line key hint underneath.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the calculator panel, border included
pub const PANEL_WIDTH: u16 = 36;

/// Height of the display block: border plus preview and value rows
pub const DISPLAY_HEIGHT: u16 = 4;

/// Panel title
pub const TITLE: &str = " Calculator ";

/// Key hint shown under the keypad
pub const HELP_LINE: &str = "click/type · ⏎ = · Esc AC · q quit";

/// Screen regions of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Outer panel
    pub panel: Rect,
    /// Two-line display
    pub display: Rect,
    /// Keypad grid (bordered)
    pub keypad: Rect,
    /// Key hint line
    pub help: Rect,
}

impl CalculatorLayout {
    /// Computes the layout for a terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let width = area.width.min(PANEL_WIDTH);
        let panel = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y,
            width,
            height: area.height,
        };

        let inner = Rect {
            x: panel.x + 1,
            y: panel.y + 1,
            width: panel.width.saturating_sub(2),
            height: panel.height.saturating_sub(2),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DISPLAY_HEIGHT),
                Constraint::Min(7),
                Constraint::Length(1),
            ])
            .split(inner);

        Self {
            panel,
            display: chunks[0],
            keypad: chunks[1],
            help: chunks[2],
        }
    }
}

/// Fits `text` into `width` columns, keeping the rightmost characters
#[must_use]
pub fn fit_display(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("…{tail}")
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(2) as usize;
        let preview = fit_display(&self.app.preview(), width);
        let value = fit_display(self.app.display(), width);

        let lines = vec![
            Line::from(Span::styled(preview, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = CalculatorLayout::new(area);

        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(layout.panel, buf);

        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad())
            .with_pressed(self.app.pressed())
            .render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}
