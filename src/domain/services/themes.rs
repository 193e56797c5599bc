#[cfg(test)]
#[path = "themes_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use ratatui::style::Color;
use strum::IntoEnumIterator;

use crate::domain::models::Theme;
use crate::domain::models::ThemeName;

#[derive(Default)]
pub struct Themes {}

impl Themes {
    pub fn list() -> Vec<String> {
        return ThemeName::iter()
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
    }

    pub fn get(theme_name: &str) -> Result<Theme> {
        if let Some(name) = ThemeName::parse(theme_name) {
            return Ok(Themes::load(name));
        }

        bail!(format!("Theme {theme_name} does not exist"));
    }

    pub fn load(name: ThemeName) -> Theme {
        match name {
            ThemeName::Sky => {
                return Theme {
                    name,
                    accent: Color::Rgb(37, 99, 235),
                    assistant_bubble: Color::Rgb(191, 219, 254),
                    border: Color::Rgb(96, 165, 250),
                    muted: Color::Rgb(148, 163, 184),
                    text: Color::White,
                    user_bubble: Color::Rgb(59, 130, 246),
                    warning: Color::Rgb(251, 191, 36),
                };
            }
            ThemeName::Sunset => {
                return Theme {
                    name,
                    accent: Color::Rgb(236, 72, 153),
                    assistant_bubble: Color::Rgb(251, 207, 232),
                    border: Color::Rgb(192, 132, 252),
                    muted: Color::Rgb(216, 180, 254),
                    text: Color::White,
                    user_bubble: Color::Rgb(244, 114, 182),
                    warning: Color::Rgb(253, 186, 116),
                };
            }
            ThemeName::Midnight => {
                return Theme {
                    name,
                    accent: Color::Rgb(56, 189, 248),
                    assistant_bubble: Color::Rgb(165, 180, 252),
                    border: Color::Rgb(99, 102, 241),
                    muted: Color::Rgb(100, 116, 139),
                    text: Color::Rgb(226, 232, 240),
                    user_bubble: Color::Rgb(14, 165, 233),
                    warning: Color::Rgb(250, 204, 21),
                };
            }
        }
    }
}
