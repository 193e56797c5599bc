pub mod locators;
pub mod transports;
pub mod weather;

use anyhow::bail;
use anyhow::Result;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatTransportBox;
use crate::domain::models::LocatorName;
use crate::domain::services::WeatherService;
use locators::LocatorManager;
use transports::gemini::Gemini;
use weather::openweather::OpenWeather;

/// Wires the configured locator and the OpenWeather provider together.
pub fn weather_service() -> Result<WeatherService> {
    let locator_name = Config::get(ConfigKey::Locator);
    let locator = match LocatorName::parse(&locator_name) {
        Some(name) => LocatorManager::get(name)?,
        None => bail!(format!("No locator implemented for {locator_name}")),
    };

    return Ok(WeatherService::new(
        locator,
        Box::new(OpenWeather::from_config()?),
        &Config::get(ConfigKey::FallbackCity),
    ));
}

pub fn chat_transport() -> Result<ChatTransportBox> {
    return Ok(Box::new(Gemini::from_config()?));
}
