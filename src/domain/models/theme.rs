use ratatui::style::Color;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeName {
    Sky,
    Sunset,
    Midnight,
}

impl ThemeName {
    pub fn parse(text: &str) -> Option<ThemeName> {
        return ThemeName::iter().find(|e| return e.to_string() == text);
    }
}

/// Visual skin shared by the weather card and the chat surface. Every skin
/// renders the same content; only colours change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub accent: Color,
    pub assistant_bubble: Color,
    pub border: Color,
    pub muted: Color,
    pub text: Color,
    pub user_bubble: Color,
    pub warning: Color,
}
