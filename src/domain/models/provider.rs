use async_trait::async_trait;

use super::Location;
use super::WeatherError;
use super::WeatherSnapshot;

#[async_trait]
pub trait WeatherProvider {
    /// Current conditions in metric units. Transport failures, non-success
    /// statuses and malformed payloads are all `WeatherError::FetchFailed`.
    async fn current(&self, location: &Location) -> Result<WeatherSnapshot, WeatherError>;
}

pub type WeatherProviderBox = Box<dyn WeatherProvider + Send + Sync>;
