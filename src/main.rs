// Catppuccin Blur - blurred Catppuccin theme generator for Zed
//
// A deterministic data transformation wrapped in console cosmetics:
// fetch the upstream Catppuccin theme JSON, apply per-palette transparency
// overrides, synthesize the Espresso variant, validate against the Zed theme
// schema, and write the result only when its content hash changed.
//
// Execution is strictly sequential: fetch, then transform, then compare,
// then (maybe) write. The only race is with Ctrl-C, which aborts the whole
// run before any write happens.

mod cli;
mod config;
mod console;
mod error;
mod merge;
mod output;
mod overrides;
mod remote;
mod schema;
mod theme;

use anyhow::{Context, Result};
use config::Config;
use error::SyncError;
use overrides::{BlurLevel, OverrideTable};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// How a successful run ended.
enum Outcome {
    /// The merged theme was written to disk
    Written(PathBuf),
    /// Content hash matched the existing file, nothing written
    Unchanged,
    /// --check: a real run would write
    WouldWrite,
    /// --check: a real run would be a no-op
    UpToDate,
}

#[tokio::main]
async fn main() {
    // Subcommands (config --show etc.) are handled inside and exit early
    let Some(cli) = cli::handle_cli() else {
        return;
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli::apply_overrides(&mut config, &cli);

    // Precedence: RUST_LOG env var > config file > default "info".
    // Diagnostics go to stderr so the progress output stays clean.
    let default_filter = format!("catppuccin_blur={}", config.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    console::print_banner(&config);

    // Writes only happen after the document is fully built and hashed, so
    // aborting anywhere in run() leaves the previous output intact.
    let outcome = tokio::select! {
        result = run(&config, &cli) => result,
        _ = tokio::signal::ctrl_c() => Err(anyhow::Error::new(SyncError::Interrupted)),
    };

    match outcome {
        Ok(Outcome::Written(path)) => console::done(&format!("Updated {}", path.display())),
        Ok(Outcome::Unchanged) => console::skip("No changes detected, output left untouched"),
        Ok(Outcome::WouldWrite) => console::done("Output would change (run without --check to write)"),
        Ok(Outcome::UpToDate) => console::skip("Output is up to date"),
        Err(e) => {
            console::fail(&format!("Failed to update theme: {e:#}"));
            std::process::exit(1);
        }
    }
}

/// The whole pipeline, minus signal handling and exit-code mapping.
async fn run(config: &Config, cli: &cli::Cli) -> Result<Outcome> {
    let level =
        BlurLevel::from_name(&config.level).context("invalid blur level in configuration")?;
    let table = OverrideTable::build();
    let client = reqwest::Client::new();

    console::step("Fetching upstream theme");
    let mut family = remote::fetch_theme(&client, &config.theme_url).await?;
    tracing::debug!("fetched {} variants from {}", family.themes.len(), config.theme_url);

    console::step(&format!("Applying {level} blur overrides"));
    merge::merge(&mut family, &table, level)?;

    if config.validate {
        console::step("Validating against the theme schema");
        match schema::load_schema(&client, &config.schema_url, &config.schema_cache).await {
            Some(doc) => {
                schema::validate(&family, &doc)?;
                family.schema = Some(config.schema_url.clone());
            }
            None => console::skip("Schema unavailable, proceeding unvalidated"),
        }
    }

    let serialized =
        serde_json::to_string_pretty(&family).context("serializing merged theme")? + "\n";

    let changed = output::should_write(&config.output_path, &serialized)?;

    if cli.check {
        return Ok(if changed {
            Outcome::WouldWrite
        } else {
            Outcome::UpToDate
        });
    }

    if !changed && !cli.force {
        return Ok(Outcome::Unchanged);
    }

    output::write_atomic(&config.output_path, &serialized)?;
    Ok(Outcome::Written(config.output_path.clone()))
}
