use std::{io::Read, path::Path, time::Instant};

use anyhow::{Context, Result};
use clipsight_core::{
    AnalysisClient, ConfigStore, Configuration, format_record_readable, normalize,
};
use console::style;
use tracing::debug;

use crate::{create_spinner, format_duration};

pub async fn analyze(
    store: &ConfigStore,
    link: &str,
    sample: bool,
    endpoint: Option<String>,
    json: bool,
) -> Result<()> {
    let mut config = store.load()?;
    debug!(path = %store.path().display(), "loaded configuration");
    if sample {
        config.use_sample_data = true;
    }
    if let Some(endpoint) = endpoint {
        config.endpoint_url = endpoint;
    }

    let source = if config.use_sample_data {
        "sample data".to_string()
    } else {
        config.endpoint_url.clone()
    };

    let started = Instant::now();
    let spinner = create_spinner(&format!("Analyzing video via {}...", source));
    let result = AnalysisClient::new().analyze(link, &config).await;

    let record = match result {
        Ok(record) => {
            spinner.finish_with_message(format!(
                "{} Analyzed {}",
                style("✓").green().bold(),
                style(format!("[{}]", format_duration(started.elapsed()))).dim()
            ));
            record
        }
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", format_record_readable(&record));
    }

    Ok(())
}

pub fn normalize_payload(file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("payload is not valid JSON")?;
    println!("{}", serde_json::to_string_pretty(&normalize(&payload))?);
    Ok(())
}

fn print_config(store: &ConfigStore, config: &Configuration) {
    println!(
        "{} {}",
        style("Config file:").dim(),
        style(store.path().display()).cyan()
    );
    println!("{} {}", style("Webhook URL:").dim(), config.endpoint_url);
    println!(
        "{} {}",
        style("Sample mode:").dim(),
        if config.use_sample_data {
            style("on").yellow()
        } else {
            style("off").green()
        }
    );
}

pub fn show_config(store: &ConfigStore) -> Result<()> {
    let config = store.load()?;
    print_config(store, &config);
    Ok(())
}

pub fn update_config(store: &ConfigStore, change: impl FnOnce(&mut Configuration)) -> Result<()> {
    let mut config = store.load()?;
    change(&mut config);
    debug!(path = %store.path().display(), ?config, "saving updated configuration");
    store.save(&config)?;

    println!("{} Settings saved", style("✓").green().bold());
    print_config(store, &config);
    Ok(())
}

pub fn reset_config(store: &ConfigStore) -> Result<()> {
    update_config(store, |config| *config = Configuration::default())
}
