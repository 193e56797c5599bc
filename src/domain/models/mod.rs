mod action;
mod author;
mod event;
mod loading;
mod locator;
mod message;
mod prompt;
mod provider;
mod slash_commands;
mod textarea;
mod theme;
mod transport;
mod weather;

pub use action::*;
pub use author::*;
pub use event::*;
pub use loading::*;
pub use locator::*;
pub use message::*;
pub use prompt::*;
pub use provider::*;
pub use slash_commands::*;
pub use textarea::*;
pub use theme::*;
pub use transport::*;
pub use weather::*;
