#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::LocatorName;
use crate::domain::models::WeatherState;
use crate::domain::services::actions::help_text;
use crate::domain::services::CardView;
use crate::domain::services::ChatSession;
use crate::domain::services::Themes;
use crate::infrastructure;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path = Config::default_config_file();
    let config_path_display = config_file_path.to_string_lossy().to_string();
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_path_display}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn print_weather() -> Result<()> {
    let res = infrastructure::weather_service()?.fetch().await;
    let failed = res.is_err();
    let view = CardView::from_state(&WeatherState::from_result(res));
    println!("{}", view.to_plain_text());

    if failed {
        bail!("Weather could not be loaded");
    }

    return Ok(());
}

async fn ask_once(message: &str) -> Result<()> {
    let temperature = match infrastructure::weather_service()?.fetch().await {
        Ok(report) => Some(report.snapshot.temperature_celsius),
        Err(err) => {
            tracing::warn!(error = %err, "Asking without a temperature");
            None
        }
    };

    let transport = infrastructure::chat_transport()?;
    let mut session = ChatSession::default();
    if !session.send(message, temperature, transport.as_ref()).await {
        bail!("Message must not be empty");
    }

    if let Some(reply) = session.transcript().last() {
        println!("{}", reply.text);
    }

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Fetches the current temperature, asks WeatherBot a single question and prints the reply.")
        .arg(
            Arg::new("message")
                .help("The question to ask.")
                .num_args(1)
                .required(true),
        );
}

fn arg_with_default(key: ConfigKey, env: &'static str, help: &str) -> Arg {
    let default = Config::default(key);
    let help = if default.is_empty() {
        help.to_string()
    } else {
        format!("{help} [default: {default}]")
    };

    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(help)
        .global(true);
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("weatherbot")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Opens the weather card with the chat overlay. This is the default."))
        .subcommand(Command::new("weather").about("Fetches the current weather once and prints the card."))
        .subcommand(subcommand_ask())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("WEATHERBOT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            arg_with_default(ConfigKey::Theme, "WEATHERBOT_THEME", "Color theme for the card and the chat.")
                .short('t')
                .value_parser(PossibleValuesParser::new(Themes::list())),
        )
        .arg(
            arg_with_default(ConfigKey::Locator, "WEATHERBOT_LOCATOR", "How your location is found. 'ip' looks up your public address, 'config' uses --latitude and --longitude.")
                .short('l')
                .value_parser(PossibleValuesParser::new(LocatorName::VARIANTS)),
        )
        .arg(arg_with_default(ConfigKey::Latitude, "WEATHERBOT_LATITUDE", "Latitude used by the 'config' locator.").allow_hyphen_values(true))
        .arg(arg_with_default(ConfigKey::Longitude, "WEATHERBOT_LONGITUDE", "Longitude used by the 'config' locator.").allow_hyphen_values(true))
        .arg(arg_with_default(ConfigKey::FallbackCity, "WEATHERBOT_FALLBACK_CITY", "City shown when your location can't be found."))
        .arg(arg_with_default(ConfigKey::LocatorURL, "WEATHERBOT_LOCATOR_URL", "IP geolocation API URL used by the 'ip' locator."))
        .arg(arg_with_default(ConfigKey::WeatherURL, "WEATHERBOT_WEATHER_URL", "OpenWeather API URL."))
        .arg(arg_with_default(ConfigKey::WeatherToken, "WEATHERBOT_WEATHER_TOKEN", "OpenWeather API key."))
        .arg(arg_with_default(ConfigKey::WeatherTimeout, "WEATHERBOT_WEATHER_TIMEOUT", "Time to wait in milliseconds for location and weather lookups."))
        .arg(arg_with_default(ConfigKey::GeminiURL, "WEATHERBOT_GEMINI_URL", "Gemini API URL."))
        .arg(arg_with_default(ConfigKey::GeminiModel, "WEATHERBOT_GEMINI_MODEL", "Gemini model answering chat messages."))
        .arg(arg_with_default(ConfigKey::GeminiToken, "WEATHERBOT_GEMINI_TOKEN", "Gemini API key. Without one, chat replies run in demo mode."))
        .arg(arg_with_default(ConfigKey::ChatTimeout, "WEATHERBOT_CHAT_TIMEOUT", "Time to wait in milliseconds for a chat reply."))
        .arg(arg_with_default(ConfigKey::DemoDelay, "WEATHERBOT_DEMO_DELAY", "Delay in milliseconds before the demo reply when no Gemini API key is set."));
}

/// Parses the command line, runs one-shot subcommands, and loads config.
/// Returns true when the terminal UI should start.
pub async fn parse_from(matches: ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("weather", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            print_weather().await?;
            return Ok(false);
        }
        Some(("ask", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let message = match subcmd_matches.get_one::<String>("message") {
                Some(message) => message.to_string(),
                None => bail!("A message is required"),
            };
            ask_once(&message).await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}

pub async fn parse() -> Result<bool> {
    return parse_from(build().get_matches()).await;
}
