#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::WeatherService;
use crate::domain::models::Action;
use crate::domain::models::ChatTransportBox;
use crate::domain::models::Event;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /key (/k) [API_KEY] - Uses your own Gemini API key for the rest of this run. Omit the key to go back to the configured one. Keys are never written to disk.
- /quit /exit (/q) - Exit WeatherBot.
- /help (/h) - Provides this help menu.

HOTKEYS:
- CTRL+O - Open or close the chat. Closing the chat starts a fresh conversation.
- ESC - Close the chat.
- Up arrow - Scroll up
- Down arrow - Scroll down
- CTRL+U - Page up
- CTRL+D - Page down
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

/// Performs all outbound I/O on behalf of the UI. Requests arrive as
/// `Action`s and results are sent back as `Event`s.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        transport: ChatTransportBox,
        weather: WeatherService,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let transport = Arc::new(transport);
        let weather = Arc::new(weather);

        // Lazy default.
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            match action {
                Action::FetchWeather() => {
                    let weather = weather.clone();
                    tokio::spawn(async move {
                        let res = weather.fetch().await;
                        worker_tx.send(Event::WeatherLoaded(res))?;
                        return Ok::<(), anyhow::Error>(());
                    });
                }
                Action::ChatAbort() => {
                    worker.abort();
                }
                Action::ChatRequest(request) => {
                    let transport = transport.clone();
                    tracing::debug!(generation = request.generation, "Dispatching chat request");
                    worker = tokio::spawn(async move {
                        let reply = transport.ask(request.prompt, request.credential).await;
                        worker_tx.send(Event::ChatReply(request.generation, reply))?;
                        return Ok(());
                    });
                }
            }
        }

        return Ok(());
    }
}
