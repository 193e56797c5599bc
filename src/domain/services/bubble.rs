#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::Theme;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    alignment: BubbleAlignment,
    message: &'a Message,
    window_max_width: usize,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, alignment: BubbleAlignment, window_max_width: usize) -> Bubble<'a> {
        return Bubble {
            alignment,
            message,
            window_max_width,
        };
    }

    pub fn as_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        // Bubbles take at most three quarters of the window.
        let max_bubble_width = (self.window_max_width * 3 / 4).max(12);

        // left border + left padding + (text) + right padding + right border.
        let text_width = max_bubble_width.saturating_sub(4);

        let message_lines = self.message.as_string_lines(text_width);
        let username = self.message.author.to_string();
        let username_len = username.width();

        let max_line_length = message_lines
            .iter()
            .map(|line| return line.width())
            .max()
            .unwrap_or(0)
            .max(username_len);

        let style = self.style(theme);
        let bubble_padding = " ".repeat(self.window_max_width.saturating_sub(max_line_length + 4));

        let top_bar = format!(
            "╭{username}{}╮",
            "─".repeat(max_line_length + 2 - username_len)
        );
        let bottom_bar = format!("╰{}╯", "─".repeat(max_line_length + 2));

        let mut res = vec![self.pad_line(top_bar, &bubble_padding, style)];
        for line in message_lines {
            let fill = " ".repeat(max_line_length.saturating_sub(line.width()));
            res.push(self.pad_line(format!("│ {line}{fill} │"), &bubble_padding, style));
        }
        res.push(self.pad_line(bottom_bar, &bubble_padding, style));

        return res;
    }

    fn pad_line(&self, text: String, padding: &str, style: Style) -> Line<'static> {
        let span = Span::styled(text, style);
        if self.alignment == BubbleAlignment::Left {
            return Line::from(vec![span, Span::from(padding.to_string())]);
        }

        return Line::from(vec![Span::from(padding.to_string()), span]);
    }

    fn style(&self, theme: &Theme) -> Style {
        match self.message.author {
            Author::User => return Style::default().fg(theme.user_bubble),
            Author::Assistant => return Style::default().fg(theme.assistant_bubble),
        }
    }
}
