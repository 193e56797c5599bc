pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
pub mod chat_session;
pub mod events;
mod scroll;
mod themes;
mod weather;
mod weather_card;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use chat_session::ChatSession;
pub use scroll::*;
pub use themes::*;
pub use weather::*;
pub use weather_card::*;
