#[cfg(test)]
#[path = "configured_test.rs"]
mod tests;

use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Coordinates;
use crate::domain::models::Locator;
use crate::domain::models::LocatorName;
use crate::domain::models::WeatherError;

fn parse_coordinate(name: &str, value: &str, limit: f64) -> Result<f64, WeatherError> {
    if value.trim().is_empty() {
        return Err(WeatherError::LocationDenied(format!("no {name} configured")));
    }

    let parsed = value
        .trim()
        .parse::<f64>()
        .map_err(|_| return WeatherError::LocationDenied(format!("invalid {name} '{value}'")))?;

    if !parsed.is_finite() || parsed.abs() > limit {
        return Err(WeatherError::LocationDenied(format!(
            "{name} {parsed} is out of range"
        )));
    }

    return Ok(parsed);
}

/// Coordinates supplied up front through flags, env or the config file.
pub struct Configured {
    latitude: String,
    longitude: String,
}

impl Configured {
    pub fn from_config() -> Configured {
        return Configured {
            latitude: Config::get(ConfigKey::Latitude),
            longitude: Config::get(ConfigKey::Longitude),
        };
    }
}

#[async_trait]
impl Locator for Configured {
    fn name(&self) -> LocatorName {
        return LocatorName::Config;
    }

    #[allow(clippy::implicit_return)]
    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        return Ok(Coordinates {
            latitude: parse_coordinate("latitude", &self.latitude, 90.0)?,
            longitude: parse_coordinate("longitude", &self.longitude, 180.0)?,
        });
    }
}
