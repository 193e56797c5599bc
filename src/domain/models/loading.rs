use ratatui::prelude::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Theme;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Shown in place of the prompt input while a reply is pending.
#[derive(Default)]
pub struct Loading {
    frame: usize,
}

impl Loading {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER.len();
    }

    pub fn text(&self) -> String {
        return format!("{} AI is typing...", SPINNER[self.frame]);
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, theme: &Theme) {
        frame.render_widget(
            Paragraph::new(self.text())
                .style(Style::default().fg(theme.accent))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(theme.border))
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .alignment(Alignment::Left),
            rect,
        );
    }
}
