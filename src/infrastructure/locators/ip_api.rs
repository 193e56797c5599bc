#[cfg(test)]
#[path = "ip_api_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Coordinates;
use crate::domain::models::Locator;
use crate::domain::models::LocatorName;
use crate::domain::models::WeatherError;

fn denied(err: impl ToString) -> WeatherError {
    return WeatherError::LocationDenied(err.to_string());
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Approximate location from the public address of this machine.
pub struct IpApi {
    url: String,
    timeout: Duration,
}

impl IpApi {
    pub fn from_config() -> Result<IpApi> {
        return Ok(IpApi {
            url: Config::get(ConfigKey::LocatorURL),
            timeout: Config::get_duration(ConfigKey::WeatherTimeout)?,
        });
    }
}

#[async_trait]
impl Locator for IpApi {
    fn name(&self) -> LocatorName {
        return LocatorName::Ip;
    }

    #[allow(clippy::implicit_return)]
    async fn locate(&self) -> Result<Coordinates, WeatherError> {
        let res = reqwest::Client::new()
            .get(format!("{url}/json", url = self.url.trim_end_matches('/')))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(denied)?;

        let status = res.status();
        if !status.is_success() {
            return Err(denied(format!("lookup responded with status {status}")));
        }

        let body = res.text().await.map_err(denied)?;
        let parsed: LookupResponse = serde_json::from_str(&body).map_err(denied)?;

        if parsed.status != "success" {
            return Err(denied(
                parsed
                    .message
                    .unwrap_or_else(|| return "lookup refused".to_string()),
            ));
        }

        match (parsed.lat, parsed.lon) {
            (Some(latitude), Some(longitude)) => {
                tracing::debug!(latitude, longitude, "Located by IP");
                return Ok(Coordinates {
                    latitude,
                    longitude,
                });
            }
            _ => return Err(denied("lookup returned no coordinates")),
        }
    }
}
