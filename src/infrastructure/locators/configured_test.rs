use anyhow::Result;

use super::Configured;
use crate::domain::models::Coordinates;
use crate::domain::models::Locator;
use crate::domain::models::WeatherError;

fn configured(latitude: &str, longitude: &str) -> Configured {
    return Configured {
        latitude: latitude.to_string(),
        longitude: longitude.to_string(),
    };
}

#[tokio::test]
async fn it_locates_configured_coordinates() -> Result<()> {
    let coords = configured("59.9139", " 10.7522 ").locate().await?;
    assert_eq!(
        coords,
        Coordinates {
            latitude: 59.9139,
            longitude: 10.7522,
        }
    );

    return Ok(());
}

#[tokio::test]
async fn it_denies_missing_coordinates() {
    let err = configured("59.9139", "").locate().await.unwrap_err();
    assert_eq!(
        err,
        WeatherError::LocationDenied("no longitude configured".to_string())
    );
}

#[tokio::test]
async fn it_denies_unparsable_coordinates() {
    let err = configured("north", "10").locate().await.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"location unavailable: invalid latitude 'north'");
}

#[tokio::test]
async fn it_denies_out_of_range_coordinates() {
    let err = configured("95", "10").locate().await.unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"location unavailable: latitude 95 is out of range");
}
