use super::advice;
use super::format_temperature;
use super::icon;
use super::CardView;
use super::WeatherCard;
use super::DEFAULT_ADVICE;
use crate::domain::models::ConditionCategory;
use crate::domain::models::WeatherReport;
use crate::domain::models::WeatherSnapshot;
use crate::domain::models::WeatherState;
use crate::domain::services::Themes;

fn loaded(advisory: Option<String>) -> WeatherState {
    return WeatherState::Loaded(WeatherReport {
        snapshot: WeatherSnapshot {
            city: "London".to_string(),
            temperature_celsius: 21.4,
            short_description: "clear sky".to_string(),
            condition: ConditionCategory::Clear,
            humidity_percent: Some(56),
            wind_speed_mps: Some(3.6),
            visibility_meters: Some(9600),
            feels_like_celsius: Some(20.9),
        },
        advisory,
    });
}

#[test]
fn it_rounds_temperatures() {
    assert_eq!(format_temperature(21.4), "21°C");
    assert_eq!(format_temperature(21.5), "22°C");
    assert_eq!(format_temperature(-0.4), "0°C");
    assert_eq!(format_temperature(-3.6), "-4°C");
}

#[test]
fn it_looks_up_icons_and_advice() {
    assert_eq!(icon(ConditionCategory::Rain), "🌧️");
    assert_eq!(icon(ConditionCategory::Fog), icon(ConditionCategory::Mist));
    assert_eq!(icon(ConditionCategory::Other), "🌈");
    assert_eq!(advice(ConditionCategory::Other), DEFAULT_ADVICE);
    assert_ne!(advice(ConditionCategory::Snow), DEFAULT_ADVICE);
}

#[test]
fn it_renders_the_loaded_state() {
    let view = CardView::from_state(&loaded(None));
    assert_eq!(view.title, "London");
    assert_eq!(view.temperature, Some("21°C".to_string()));
    assert_eq!(view.advice, Some(advice(ConditionCategory::Clear)));
    assert_eq!(view.warning, None);

    insta::assert_snapshot!(view.to_plain_text(), @r###"
    ☀️  London
    21°C
    clear sky
    Feels like  21°C
    Humidity    56%
    Wind        3.6 m/s
    Visibility  10 km
    Perfect day to get outside. Don't forget your sunglasses!
    "###);
}

#[test]
fn it_omits_missing_details() {
    let state = WeatherState::Loaded(WeatherReport {
        snapshot: WeatherSnapshot {
            city: "Reykjavik".to_string(),
            temperature_celsius: -3.6,
            short_description: "".to_string(),
            condition: ConditionCategory::Other,
            humidity_percent: None,
            wind_speed_mps: None,
            visibility_meters: None,
            feels_like_celsius: None,
        },
        advisory: None,
    });

    let view = CardView::from_state(&state);
    assert!(view.details.is_empty());
    assert_eq!(view.temperature, Some("-4°C".to_string()));
    assert_eq!(view.advice, Some(DEFAULT_ADVICE));
}

#[test]
fn it_renders_the_advisory_alongside_the_snapshot() {
    let view = CardView::from_state(&loaded(Some(
        "Location unavailable (denied). Showing weather for London.".to_string(),
    )));

    assert_eq!(view.temperature, Some("21°C".to_string()));
    assert_eq!(
        view.to_plain_text().lines().last().unwrap(),
        "⚠ Location unavailable (denied). Showing weather for London."
    );
}

#[test]
fn it_renders_the_loading_state() {
    let view = CardView::from_state(&WeatherState::Loading);
    assert_eq!(view.title, "Loading...");
    assert!(view.temperature.is_none());
    assert_eq!(view.details.len(), 2);
}

#[test]
fn it_renders_the_failed_state() {
    let view = CardView::from_state(&WeatherState::Failed("status 401".to_string()));
    insta::assert_snapshot!(view.to_plain_text(), @r###"
    Weather unavailable
    ⚠ status 401
    "###);
}

#[test]
fn it_builds_styled_lines() {
    let theme = Themes::get("sky").unwrap();
    let view = CardView::from_state(&loaded(None));
    let lines = WeatherCard::lines(&view, &theme)
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<String>();
        })
        .collect::<Vec<String>>();

    assert_eq!(lines[0], "☀️");
    assert_eq!(lines[1], "London");
    assert_eq!(lines[2], "clear sky");
    assert!(lines.contains(&"21°C".to_string()));
}
