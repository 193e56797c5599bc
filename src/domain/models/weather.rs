#[cfg(test)]
#[path = "weather_test.rs"]
mod tests;

use std::fmt;

use strum::EnumIter;
use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, strum::Display)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Other,
}

impl ConditionCategory {
    /// Maps the provider's `weather[0].main` field, ignoring case. Anything
    /// unrecognised lands in `Other`.
    pub fn parse(text: &str) -> ConditionCategory {
        let needle = text.trim().to_lowercase();
        return ConditionCategory::iter()
            .find(|category| {
                return *category != ConditionCategory::Other
                    && category.to_string().to_lowercase() == needle;
            })
            .unwrap_or(ConditionCategory::Other);
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Location {
    Coordinates(Coordinates),
    City(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Location::Coordinates(coords) => {
                return write!(f, "({}, {})", coords.latitude, coords.longitude)
            }
            Location::City(city) => return write!(f, "{city}"),
        }
    }
}

/// Point-in-time reading. Replaced wholesale on each successful fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature_celsius: f64,
    pub short_description: String,
    pub condition: ConditionCategory,
    pub humidity_percent: Option<u8>,
    pub wind_speed_mps: Option<f64>,
    pub visibility_meters: Option<u32>,
    pub feels_like_celsius: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    /// Set when the fallback city stood in for the user's location.
    pub advisory: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    #[error("location unavailable: {0}")]
    LocationDenied(String),
    #[error("failed to fetch weather: {0}")]
    FetchFailed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum WeatherState {
    #[default]
    Loading,
    Failed(String),
    Loaded(WeatherReport),
}

impl WeatherState {
    pub fn from_result(res: Result<WeatherReport, WeatherError>) -> WeatherState {
        match res {
            Ok(report) => return WeatherState::Loaded(report),
            Err(err) => return WeatherState::Failed(err.to_string()),
        }
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        if let WeatherState::Loaded(report) = self {
            return Some(&report.snapshot);
        }

        return None;
    }

    pub fn temperature(&self) -> Option<f64> {
        return self
            .snapshot()
            .map(|snapshot| return snapshot.temperature_celsius);
    }
}
