#[cfg(test)]
#[path = "bubble_list_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::prelude::Rect;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::Bubble;
use super::BubbleAlignment;
use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::Theme;

struct BubbleCacheEntry {
    text_len: usize,
    lines: Vec<Line<'static>>,
}

/// Rendered transcript. Messages never change once appended, so rendered
/// bubbles are cached by index until the width changes or the transcript is
/// reset.
pub struct BubbleList {
    cache: HashMap<usize, BubbleCacheEntry>,
    line_width: usize,
    lines_len: usize,
    messages_len: usize,
    theme: Theme,
}

impl BubbleList {
    pub fn new(theme: Theme) -> BubbleList {
        return BubbleList {
            cache: HashMap::new(),
            line_width: 0,
            lines_len: 0,
            messages_len: 0,
            theme,
        };
    }

    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        if self.line_width != line_width || messages.len() < self.messages_len {
            self.cache.clear();
            self.line_width = line_width;
        }
        self.messages_len = messages.len();

        self.lines_len = messages
            .iter()
            .enumerate()
            .map(|(idx, message)| {
                if let Some(cache_entry) = self.cache.get(&idx) {
                    if message.text.len() == cache_entry.text_len {
                        return cache_entry.lines.len();
                    }
                }

                let mut align = BubbleAlignment::Left;
                if message.author == Author::User {
                    align = BubbleAlignment::Right;
                }

                let bubble_lines = Bubble::new(message, align, line_width).as_lines(&self.theme);
                let bubble_line_len = bubble_lines.len();

                self.cache.insert(
                    idx,
                    BubbleCacheEntry {
                        text_len: message.text.len(),
                        lines: bubble_lines,
                    },
                );

                return bubble_line_len;
            })
            .sum();
    }

    pub fn len(&self) -> usize {
        return self.lines_len;
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        return (0..self.messages_len)
            .filter_map(|idx| return self.cache.get(&idx))
            .flat_map(|entry| return entry.lines.to_owned())
            .collect();
    }

    pub fn render(&self, frame: &mut Frame, rect: Rect, scroll: u16) {
        frame.render_widget(
            Paragraph::new(self.lines())
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
