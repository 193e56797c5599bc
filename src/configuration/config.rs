#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::LocatorName;
use crate::domain::models::ThemeName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ChatTimeout,
    ConfigFile,
    DemoDelay,
    FallbackCity,
    GeminiModel,
    GeminiToken,
    GeminiURL,
    Latitude,
    Locator,
    LocatorURL,
    Longitude,
    Theme,
    WeatherTimeout,
    WeatherToken,
    WeatherURL,
}

fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
    let name = key.to_string();
    return cmd
        .get_arguments()
        .find(|arg| return arg.get_long() == Some(name.as_str()))
        .map(|arg| {
            return arg
                .get_possible_values()
                .iter()
                .map(|e| return e.get_name().to_string())
                .collect::<Vec<String>>();
        })
        .unwrap_or_default();
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Reads a millisecond setting.
    pub fn get_duration(key: ConfigKey) -> Result<Duration> {
        let val = Config::get(key);
        match val.trim().parse::<u64>() {
            Ok(millis) => return Ok(Duration::from_millis(millis)),
            Err(_) => bail!(format!(
                "Config key '{key}' must be a whole number of milliseconds, got '{val}'"
            )),
        }
    }

    pub fn default_config_file() -> path::PathBuf {
        return dirs::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("weatherbot/config.toml");
    }

    pub fn default(key: ConfigKey) -> String {
        let default_locator = LocatorName::Ip.to_string();
        let default_theme = ThemeName::Sky.to_string();
        let config_path = Config::default_config_file().to_string_lossy().to_string();

        let res: &str = match key {
            ConfigKey::ChatTimeout => "30000",
            ConfigKey::DemoDelay => "1000",
            ConfigKey::FallbackCity => "London",
            ConfigKey::GeminiModel => "gemini-2.0-flash",
            ConfigKey::GeminiToken => "",
            ConfigKey::GeminiURL => "https://generativelanguage.googleapis.com",
            ConfigKey::Latitude => "",
            ConfigKey::Locator => &default_locator,
            ConfigKey::LocatorURL => "http://ip-api.com",
            ConfigKey::Longitude => "",
            ConfigKey::Theme => &default_theme,
            ConfigKey::WeatherTimeout => "10000",
            ConfigKey::WeatherToken => "",
            ConfigKey::WeatherURL => "https://api.openweathermap.org",

            // Special
            ConfigKey::ConfigFile => &config_path,
        };

        return res.to_string();
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let val = match doc.get(&key.to_string()) {
                    Some(val) => val,
                    None => continue,
                };

                if let Some(val_int) = val.as_integer() {
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_float) = val.as_float() {
                    Config::set(key, &val_float.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }

                    // Use clap value parsers to do validation.
                    let possible_values = possible_values(&cmd, key);
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    Config::set(key, val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            locator = Config::get(ConfigKey::Locator),
            fallback_city = Config::get(ConfigKey::FallbackCity),
            gemini_model = Config::get(ConfigKey::GeminiModel),
            gemini_token_set = !Config::get(ConfigKey::GeminiToken).is_empty(),
            weather_token_set = !Config::get(ConfigKey::WeatherToken).is_empty(),
            theme = Config::get(ConfigKey::Theme),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let name = key.to_string();
                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(name.as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let possible_values = possible_values(&cmd, key);
                if !possible_values.is_empty() {
                    description = format!(
                        "{description} [possible values: {}]",
                        possible_values.join(", ")
                    );
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
