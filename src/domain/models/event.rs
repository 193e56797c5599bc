use tui_textarea::Input;

use super::WeatherError;
use super::WeatherReport;

pub enum Event {
    ChatReply(u64, String),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardCTRLO(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardPaste(String),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
    WeatherLoaded(Result<WeatherReport, WeatherError>),
}
