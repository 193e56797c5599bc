use super::Themes;
use crate::domain::models::ThemeName;

#[test]
fn it_lists_all_themes() {
    assert_eq!(Themes::list(), vec!["sky", "sunset", "midnight"]);
}

#[test]
fn it_gets_a_theme_by_name() {
    let theme = Themes::get("sunset").unwrap();
    assert_eq!(theme.name, ThemeName::Sunset);
}

#[test]
fn it_fails_on_unknown_themes() {
    let res = Themes::get("neon");
    assert!(res.is_err());
    assert_eq!(res.unwrap_err().to_string(), "Theme neon does not exist");
}
