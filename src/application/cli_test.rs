use anyhow::Result;

use super::build;
use super::parse_from;

#[test]
fn it_builds_a_valid_command() {
    build().debug_assert();
}

#[test]
fn it_accepts_global_flags_after_subcommands() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "weatherbot",
        "weather",
        "--locator",
        "config",
        "--latitude",
        "-33.92",
        "--longitude",
        "18.42",
    ])?;

    let (name, subcmd_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "weather");
    assert_eq!(
        subcmd_matches.get_one::<String>("latitude"),
        Some(&"-33.92".to_string())
    );
    assert_eq!(
        subcmd_matches.get_one::<String>("locator"),
        Some(&"config".to_string())
    );

    return Ok(());
}

#[test]
fn it_rejects_unknown_themes() {
    let res = build().try_get_matches_from(vec!["weatherbot", "--theme", "neon"]);
    assert!(res.is_err());
}

#[test]
fn it_requires_a_message_to_ask() {
    let res = build().try_get_matches_from(vec!["weatherbot", "ask"]);
    assert!(res.is_err());
}

#[tokio::test]
async fn it_does_not_start_the_ui_for_config_commands() -> Result<()> {
    let matches = build().try_get_matches_from(vec!["weatherbot", "config", "path"])?;
    assert!(!parse_from(matches).await?);

    return Ok(());
}
