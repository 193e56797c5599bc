#[cfg(test)]
#[path = "openweather_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use serde_derive::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ConditionCategory;
use crate::domain::models::Location;
use crate::domain::models::WeatherError;
use crate::domain::models::WeatherProvider;
use crate::domain::models::WeatherSnapshot;

fn fetch_failed(err: impl ToString) -> WeatherError {
    return WeatherError::FetchFailed(err.to_string());
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct MainReading {
    temp: f64,
    feels_like: Option<f64>,
    humidity: Option<u8>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct Wind {
    speed: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct Condition {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    name: String,
    main: MainReading,
    wind: Option<Wind>,
    visibility: Option<u32>,
    #[serde(default)]
    weather: Vec<Condition>,
}

impl From<CurrentWeatherResponse> for WeatherSnapshot {
    fn from(res: CurrentWeatherResponse) -> WeatherSnapshot {
        let condition = res.weather.into_iter().next().unwrap_or_default();

        return WeatherSnapshot {
            city: res.name,
            temperature_celsius: res.main.temp,
            short_description: condition.description,
            condition: ConditionCategory::parse(&condition.main),
            humidity_percent: res.main.humidity,
            wind_speed_mps: res.wind.and_then(|wind| return wind.speed),
            visibility_meters: res.visibility,
            feels_like_celsius: res.main.feels_like,
        };
    }
}

pub struct OpenWeather {
    url: String,
    token: String,
    timeout: Duration,
}

impl OpenWeather {
    pub fn from_config() -> Result<OpenWeather> {
        return Ok(OpenWeather {
            url: Config::get(ConfigKey::WeatherURL),
            token: Config::get(ConfigKey::WeatherToken),
            timeout: Config::get_duration(ConfigKey::WeatherTimeout)?,
        });
    }

    fn endpoint(&self, location: &Location) -> Result<Url, WeatherError> {
        let mut params = match location {
            Location::Coordinates(coords) => vec![
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ],
            Location::City(city) => vec![("q", city.to_string())],
        };
        params.push(("appid", self.token.to_string()));
        params.push(("units", "metric".to_string()));

        let base = format!("{url}/data/2.5/weather", url = self.url.trim_end_matches('/'));
        return Url::parse_with_params(&base, &params).map_err(fetch_failed);
    }
}

#[async_trait]
impl WeatherProvider for OpenWeather {
    #[allow(clippy::implicit_return)]
    async fn current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError> {
        let url = self.endpoint(location)?;
        tracing::debug!(location = location.to_string(), "Requesting current weather");

        let res = reqwest::Client::new()
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(fetch_failed)?;

        let status = res.status();
        if !status.is_success() {
            return Err(fetch_failed(format!(
                "weather service responded with status {status}"
            )));
        }

        let body = res.text().await.map_err(fetch_failed)?;
        let parsed: CurrentWeatherResponse = serde_json::from_str(&body).map_err(fetch_failed)?;

        return Ok(WeatherSnapshot::from(parsed));
    }
}
