#[cfg(test)]
#[path = "weather_test.rs"]
mod tests;

use crate::domain::models::Location;
use crate::domain::models::LocatorBox;
use crate::domain::models::WeatherError;
use crate::domain::models::WeatherProviderBox;
use crate::domain::models::WeatherReport;

pub struct WeatherService {
    fallback_city: String,
    locator: LocatorBox,
    provider: WeatherProviderBox,
}

impl WeatherService {
    pub fn new(
        locator: LocatorBox,
        provider: WeatherProviderBox,
        fallback_city: &str,
    ) -> WeatherService {
        return WeatherService {
            fallback_city: fallback_city.to_string(),
            locator,
            provider,
        };
    }

    /// Locates the user and fetches current conditions. A denied location is
    /// not fatal: the fallback city is queried instead and the report carries
    /// an advisory. Provider failures are terminal for this fetch.
    pub async fn fetch(&self) -> Result<WeatherReport, WeatherError> {
        let (location, advisory) = match self.locator.locate().await {
            Ok(coords) => (Location::Coordinates(coords), None),
            Err(WeatherError::LocationDenied(reason)) => {
                tracing::warn!(
                    locator = self.locator.name().to_string(),
                    reason,
                    fallback = self.fallback_city,
                    "Location denied, falling back"
                );
                let advisory = format!(
                    "Location unavailable ({reason}). Showing weather for {city}.",
                    city = self.fallback_city
                );
                (Location::City(self.fallback_city.to_string()), Some(advisory))
            }
            Err(err) => return Err(err),
        };

        let snapshot = self.provider.current(&location).await.map_err(|err| {
            tracing::error!(location = location.to_string(), error = %err, "Weather fetch failed");
            return err;
        })?;

        tracing::info!(
            city = snapshot.city,
            temperature = snapshot.temperature_celsius,
            condition = snapshot.condition.to_string(),
            "Weather loaded"
        );

        return Ok(WeatherReport { snapshot, advisory });
    }
}
