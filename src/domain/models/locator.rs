use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::Coordinates;
use super::WeatherError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LocatorName {
    /// Coordinates from the `latitude`/`longitude` settings.
    Config,
    /// Approximate coordinates from an IP geolocation lookup.
    Ip,
}

impl LocatorName {
    pub fn parse(text: &str) -> Option<LocatorName> {
        return LocatorName::iter().find(|e| return e.to_string() == text);
    }
}

#[async_trait]
pub trait Locator {
    fn name(&self) -> LocatorName;

    /// Resolves the user's coordinates. Any refusal or failure is reported
    /// as `WeatherError::LocationDenied` so callers can fall back.
    async fn locate(&self) -> Result<Coordinates, WeatherError>;
}

pub type LocatorBox = Box<dyn Locator + Send + Sync>;
