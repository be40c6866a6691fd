use std::io::{self, Write};

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use forecast_core::{
    Config, ForecastRequest, WeatherProvider, WeatherTranslationTable, fetch_forecast,
    provider_from_config,
};
use inquire::{InquireError, Text};
use tracing::{debug, info};

use crate::{menu::MenuChoice, render};

/// Top-level CLI struct. Lookups are chosen interactively, so there are no
/// arguments besides `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Interactive weather forecast lookup (today, weekly, monthly) backed by wttr.in"
)]
pub struct Cli {}

/// What the user answered at a prompt.
enum Answer {
    Text(String),
    /// Ctrl-C or Esc.
    Stop,
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let provider = provider_from_config(&config)?;
        let table = WeatherTranslationTable::global();
        info!(base_url = %config.base_url, "forecast CLI started");

        render::banner(&mut io::stdout().lock())?;

        loop {
            render::menu(&mut io::stdout().lock())?;

            let Answer::Text(input) = ask("Pilihan Anda:")? else {
                render::interrupted(&mut io::stdout().lock())?;
                break;
            };

            let kind = match MenuChoice::try_from(input.as_str()) {
                Ok(MenuChoice::Quit) => {
                    render::goodbye(&mut io::stdout().lock())?;
                    break;
                }
                Ok(MenuChoice::Forecast(kind)) => kind,
                Err(err) => {
                    debug!("{err}");
                    render::invalid_choice(&mut io::stdout().lock())?;
                    continue;
                }
            };

            let Answer::Text(city) = ask("Masukkan Nama Kota:")? else {
                render::interrupted(&mut io::stdout().lock())?;
                break;
            };

            let city = city.trim();
            if city.is_empty() {
                render::empty_city(&mut io::stdout().lock())?;
                continue;
            }

            let request = ForecastRequest { city: city.to_string(), kind };
            lookup(provider.as_ref(), &request, table).await?;

            if let Answer::Stop = ask("Tekan Enter untuk melanjutkan...")? {
                render::interrupted(&mut io::stdout().lock())?;
                break;
            }
        }

        Ok(())
    }
}

/// Runs one lookup and prints either the report or the error.
async fn lookup(
    provider: &dyn WeatherProvider,
    request: &ForecastRequest,
    table: &WeatherTranslationTable,
) -> anyhow::Result<()> {
    render::fetching(&mut io::stdout().lock(), &request.city)?;

    let result = fetch_forecast(provider, request, Local::now().naive_local()).await;

    let mut out = io::stdout().lock();
    match result {
        Ok(forecast) => render::forecast(&mut out, &forecast, table)?,
        Err(err) => render::error(&mut out, &err)?,
    }
    out.flush()?;

    Ok(())
}

fn ask(message: &str) -> anyhow::Result<Answer> {
    match Text::new(message).prompt() {
        Ok(text) => Ok(Answer::Text(text)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Answer::Stop)
        }
        Err(err) => Err(err).context("Failed to read input from terminal"),
    }
}
