#[cfg(test)]
#[path = "weather_card_test.rs"]
mod tests;

use ratatui::prelude::Alignment;
use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::ConditionCategory;
use crate::domain::models::Theme;
use crate::domain::models::WeatherSnapshot;
use crate::domain::models::WeatherState;

pub const DEFAULT_ADVICE: &str = "Have a great day, whatever the weather brings!";

pub fn icon(condition: ConditionCategory) -> &'static str {
    match condition {
        ConditionCategory::Clear => return "☀️",
        ConditionCategory::Clouds => return "☁️",
        ConditionCategory::Rain => return "🌧️",
        ConditionCategory::Drizzle => return "🌦️",
        ConditionCategory::Thunderstorm => return "⛈️",
        ConditionCategory::Snow => return "❄️",
        ConditionCategory::Mist | ConditionCategory::Fog => return "🌫️",
        ConditionCategory::Other => return "🌈",
    }
}

pub fn advice(condition: ConditionCategory) -> &'static str {
    match condition {
        ConditionCategory::Clear => {
            return "Perfect day to get outside. Don't forget your sunglasses!"
        }
        ConditionCategory::Clouds => return "A bit grey out there, but still a fine day for a walk.",
        ConditionCategory::Rain => return "Grab an umbrella before heading out!",
        ConditionCategory::Drizzle => return "Light drizzle about. A hooded jacket should do.",
        ConditionCategory::Thunderstorm => return "Storms nearby. Best to stay indoors if you can.",
        ConditionCategory::Snow => return "Bundle up and watch your step on icy paths!",
        ConditionCategory::Mist | ConditionCategory::Fog => {
            return "Visibility is low. Take extra care on the roads."
        }
        ConditionCategory::Other => return DEFAULT_ADVICE,
    }
}

pub fn format_temperature(celsius: f64) -> String {
    return format!("{}°C", celsius.round() as i64);
}

/// Text content of the weather card for one state, independent of how it is
/// drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub title: String,
    pub icon: Option<&'static str>,
    pub temperature: Option<String>,
    pub description: Option<String>,
    pub details: Vec<String>,
    pub advice: Option<&'static str>,
    pub warning: Option<String>,
}

impl CardView {
    pub fn from_state(state: &WeatherState) -> CardView {
        match state {
            WeatherState::Loading => {
                return CardView {
                    title: "Loading...".to_string(),
                    icon: None,
                    temperature: None,
                    description: None,
                    details: vec!["░".repeat(16), "░".repeat(8)],
                    advice: None,
                    warning: None,
                };
            }
            WeatherState::Failed(message) => {
                return CardView {
                    title: "Weather unavailable".to_string(),
                    icon: None,
                    temperature: None,
                    description: None,
                    details: vec![],
                    advice: None,
                    warning: Some(message.to_string()),
                };
            }
            WeatherState::Loaded(report) => {
                let snapshot = &report.snapshot;
                return CardView {
                    title: snapshot.city.to_string(),
                    icon: Some(icon(snapshot.condition)),
                    temperature: Some(format_temperature(snapshot.temperature_celsius)),
                    description: Some(snapshot.short_description.to_string()),
                    details: details(snapshot),
                    advice: Some(advice(snapshot.condition)),
                    warning: report.advisory.clone(),
                };
            }
        }
    }

    /// Plain-text rendering used by the `weather` subcommand.
    pub fn to_plain_text(&self) -> String {
        let mut lines = vec![];
        if let Some(icon) = self.icon {
            lines.push(format!("{icon}  {}", self.title));
        } else {
            lines.push(self.title.to_string());
        }
        if let Some(temperature) = &self.temperature {
            lines.push(temperature.to_string());
        }
        if let Some(description) = &self.description {
            lines.push(description.to_string());
        }
        lines.extend(self.details.iter().map(|e| return e.to_string()));
        if let Some(advice) = self.advice {
            lines.push(advice.to_string());
        }
        if let Some(warning) = &self.warning {
            lines.push(format!("⚠ {warning}"));
        }

        return lines.join("\n");
    }
}

fn details(snapshot: &WeatherSnapshot) -> Vec<String> {
    let mut res = vec![];
    if let Some(feels_like) = snapshot.feels_like_celsius {
        res.push(format!("Feels like  {}", format_temperature(feels_like)));
    }
    if let Some(humidity) = snapshot.humidity_percent {
        res.push(format!("Humidity    {humidity}%"));
    }
    if let Some(wind) = snapshot.wind_speed_mps {
        res.push(format!("Wind        {wind} m/s"));
    }
    if let Some(visibility) = snapshot.visibility_meters {
        let km = (visibility as f64 / 1000.0).round() as i64;
        res.push(format!("Visibility  {km} km"));
    }

    return res;
}

pub struct WeatherCard {}

impl WeatherCard {
    pub fn lines(view: &CardView, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![];

        if let Some(icon) = view.icon {
            lines.push(Line::from(icon));
        }
        lines.push(Line::from(Span::styled(
            view.title.to_string(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(description) = &view.description {
            lines.push(Line::from(Span::styled(
                description.to_string(),
                Style::default().fg(theme.muted),
            )));
        }
        if let Some(temperature) = &view.temperature {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                temperature.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        if !view.details.is_empty() {
            lines.push(Line::from(""));
            for detail in view.details.iter() {
                lines.push(Line::from(Span::styled(
                    detail.to_string(),
                    Style::default().fg(theme.text),
                )));
            }
        }
        if let Some(advice) = view.advice {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                advice,
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        if let Some(warning) = &view.warning {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("⚠ {warning}"),
                Style::default().fg(theme.warning),
            )));
        }

        return lines;
    }

    pub fn render(frame: &mut Frame, rect: Rect, state: &WeatherState, theme: &Theme) {
        let view = CardView::from_state(state);
        frame.render_widget(
            Paragraph::new(WeatherCard::lines(&view, theme))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(theme.border))
                        .padding(Padding::new(2, 2, 1, 1)),
                ),
            rect,
        );
    }
}
