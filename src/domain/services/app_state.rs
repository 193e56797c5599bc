#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::actions::help_text;
use super::BubbleList;
use super::ChatSession;
use super::Scroll;
use crate::domain::models::Action;
use crate::domain::models::SlashCommand;
use crate::domain::models::Theme;
use crate::domain::models::WeatherError;
use crate::domain::models::WeatherReport;
use crate::domain::models::WeatherState;

/// Everything the terminal loop renders. Owned by the UI task; the actions
/// service only ever sees the requests it is sent.
pub struct AppState {
    pub bubble_list: BubbleList,
    pub chat: ChatSession,
    pub last_known_height: u16,
    pub last_known_width: u16,
    pub notice: Option<String>,
    pub scroll: Scroll,
    pub theme: Theme,
    pub weather: WeatherState,
}

impl AppState {
    pub fn new(theme: Theme) -> AppState {
        let mut app_state = AppState {
            bubble_list: BubbleList::new(theme.clone()),
            chat: ChatSession::default(),
            last_known_height: 0,
            last_known_width: 0,
            notice: None,
            scroll: Scroll::default(),
            theme,
            weather: WeatherState::Loading,
        };
        app_state.sync_dependants();

        return app_state;
    }

    pub fn handle_weather(&mut self, res: Result<WeatherReport, WeatherError>) {
        self.weather = WeatherState::from_result(res);
    }

    pub fn handle_chat_reply(&mut self, generation: u64, reply: &str) {
        if self.chat.complete(generation, reply) {
            self.sync_dependants();
        }
    }

    pub fn toggle_chat(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.chat.is_open() && self.chat.is_pending() {
            tx.send(Action::ChatAbort())?;
        }

        self.chat.toggle();
        self.notice = None;
        self.sync_dependants();
        return Ok(());
    }

    /// Closing starts the next conversation from scratch, so any request
    /// still in flight is abandoned.
    pub fn close_chat(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if !self.chat.is_open() {
            return Ok(());
        }

        if self.chat.is_pending() {
            tx.send(Action::ChatAbort())?;
        }
        self.chat.close();
        tracing::debug!(generation = self.chat.generation(), "Chat closed");
        self.notice = None;
        self.sync_dependants();

        return Ok(());
    }

    /// Handles a submitted line of chat input. Returns true when the app
    /// should exit.
    pub fn submit(&mut self, input: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if let Some(command) = SlashCommand::parse(input) {
            if command.is_quit() {
                return Ok(true);
            }

            if command.is_help() {
                self.notice = Some(help_text());
                return Ok(false);
            }

            if command.is_key() {
                self.chat.set_credential_override(command.args.first().cloned());
                if self.chat.has_credential_override() {
                    self.notice = Some("Using your API key for this run.".to_string());
                } else {
                    self.notice = Some("Using the configured API key.".to_string());
                }
                return Ok(false);
            }
        }

        let temperature = self.weather.temperature();
        if let Some(request) = self.chat.begin_send(input, temperature) {
            self.notice = None;
            tx.send(Action::ChatRequest(request))?;
            self.sync_dependants();
        }

        return Ok(false);
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn sync_dependants(&mut self) {
        self.bubble_list
            .set_messages(self.chat.transcript(), self.last_known_width as usize);

        self.scroll.set_state(
            self.bubble_list.len().try_into().unwrap_or(u16::MAX),
            self.last_known_height,
        );
        self.scroll.last();
    }
}
