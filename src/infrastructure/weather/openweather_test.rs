use std::time::Duration;

use anyhow::Result;
use mockito::Matcher;
use test_utils::openweather_fixture;
use test_utils::openweather_minimal_fixture;

use super::OpenWeather;
use crate::domain::models::ConditionCategory;
use crate::domain::models::Coordinates;
use crate::domain::models::Location;
use crate::domain::models::WeatherError;
use crate::domain::models::WeatherProvider;
use crate::domain::models::WeatherSnapshot;

impl OpenWeather {
    fn with_url(url: String) -> OpenWeather {
        return OpenWeather {
            url,
            token: "abc".to_string(),
            timeout: Duration::from_millis(2000),
        };
    }
}

fn query(pairs: &[(&str, &str)]) -> Matcher {
    return Matcher::AllOf(
        pairs
            .iter()
            .map(|(key, value)| {
                return Matcher::UrlEncoded(key.to_string(), value.to_string());
            })
            .collect(),
    );
}

#[tokio::test]
async fn it_fetches_weather_by_coordinates() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(query(&[
            ("lat", "51.5085"),
            ("lon", "-0.1257"),
            ("appid", "abc"),
            ("units", "metric"),
        ]))
        .with_status(200)
        .with_body(openweather_fixture())
        .create();

    let provider = OpenWeather::with_url(server.url());
    let snapshot = provider
        .current(&Location::Coordinates(Coordinates {
            latitude: 51.5085,
            longitude: -0.1257,
        }))
        .await?;

    mock.assert();
    assert_eq!(
        snapshot,
        WeatherSnapshot {
            city: "London".to_string(),
            temperature_celsius: 21.4,
            short_description: "clear sky".to_string(),
            condition: ConditionCategory::Clear,
            humidity_percent: Some(56),
            wind_speed_mps: Some(3.6),
            visibility_meters: Some(10000),
            feels_like_celsius: Some(20.9),
        }
    );

    return Ok(());
}

#[tokio::test]
async fn it_fetches_weather_by_city() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(query(&[
            ("q", "Reykjavik"),
            ("appid", "abc"),
            ("units", "metric"),
        ]))
        .with_status(200)
        .with_body(openweather_minimal_fixture())
        .create();

    let provider = OpenWeather::with_url(server.url());
    let snapshot = provider
        .current(&Location::City("Reykjavik".to_string()))
        .await?;

    mock.assert();
    assert_eq!(snapshot.city, "Reykjavik");
    assert_eq!(snapshot.temperature_celsius, -3.6);
    assert_eq!(snapshot.short_description, "");
    assert_eq!(snapshot.condition, ConditionCategory::Other);
    assert_eq!(snapshot.humidity_percent, None);
    assert_eq!(snapshot.wind_speed_mps, None);
    assert_eq!(snapshot.visibility_meters, None);
    assert_eq!(snapshot.feels_like_celsius, None);

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"cod": 401, "message": "Invalid API key."}"#)
        .create();

    let provider = OpenWeather::with_url(server.url());
    let err = provider
        .current(&Location::City("London".to_string()))
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, WeatherError::FetchFailed(_)));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn it_fails_on_malformed_bodies() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/data/2.5/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{ "name": "London", "weather": [] }"#)
        .create();

    let provider = OpenWeather::with_url(server.url());
    let res = provider
        .current(&Location::City("London".to_string()))
        .await;

    mock.assert();
    assert!(matches!(res, Err(WeatherError::FetchFailed(_))));
}

#[tokio::test]
async fn it_fails_when_the_service_is_unreachable() {
    let provider = OpenWeather::with_url("http://127.0.0.1:1".to_string());
    let res = provider
        .current(&Location::City("London".to_string()))
        .await;

    assert!(matches!(res, Err(WeatherError::FetchFailed(_))));
}
