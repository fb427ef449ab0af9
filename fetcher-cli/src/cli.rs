use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use std::io;
use weather_fetcher_core::{
    Config, ParserKind, Settings, WeatherClient, config::DEFAULT_CITY, render::render,
    request::encode_city,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-fetcher", version, about = "Current weather for one city")]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `show` with the configured city.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current weather and print it as a table.
    Show {
        /// City name; spaces are sent as `+`.
        #[arg(long)]
        city: Option<String>,

        /// How to read the response: "markers" or "json".
        #[arg(long)]
        parser: Option<String>,
    },

    /// Interactively set the API key, city and parser.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Show { city: None, parser: None }) {
            Command::Show { city, parser } => {
                let settings = settings_for(Config::load()?.with_env(), city, parser)?;
                show(settings).await?;
            }
            Command::Configure => configure()?,
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

/// Apply command-line overrides on top of file and environment values.
fn settings_for(
    mut config: Config,
    city: Option<String>,
    parser: Option<String>,
) -> anyhow::Result<Settings> {
    if city.is_some() {
        config.city = city;
    }
    if parser.is_some() {
        config.parser = parser;
    }
    config.resolve()
}

async fn show(settings: Settings) -> anyhow::Result<()> {
    tracing::debug!(?settings, "resolved settings");

    let reading = WeatherClient::from_settings(settings).current().await?;

    render(&mut io::stdout().lock(), &reading).context("Failed to write weather table")?;
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let city = Text::new("City:")
        .with_default(config.city.as_deref().unwrap_or(DEFAULT_CITY))
        .prompt()?;

    let has_key = config.api_key.is_some();
    let mut key_prompt = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked);
    if has_key {
        key_prompt = key_prompt.with_help_message("Leave empty to keep the current key");
    }
    let api_key = key_prompt.prompt()?;

    let current = config
        .parser
        .as_deref()
        .and_then(|p| ParserKind::try_from(p).ok())
        .unwrap_or_default();
    let start = ParserKind::all().iter().position(|k| *k == current).unwrap_or(0);
    let parser = Select::new("Parser:", ParserKind::all().to_vec())
        .with_starting_cursor(start)
        .prompt()?;

    config.city = Some(encode_city(&city));
    if !api_key.trim().is_empty() || !has_key {
        config.api_key = Some(api_key.trim().to_string());
    }
    config.parser = Some(parser.to_string());

    config.save()?;
    tracing::info!("configuration saved");
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
