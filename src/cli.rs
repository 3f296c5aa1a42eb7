// CLI module - command-line argument parsing and handlers
//
// The bare invocation runs the sync with reference defaults. Flags tweak a
// single run without touching the config file; the config subcommand manages
// the file itself:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Catppuccin Blur - blurred Catppuccin theme generator for Zed
#[derive(Parser)]
#[command(name = "catppuccin-blur")]
#[command(version = VERSION)]
#[command(about = "Blurred Catppuccin theme generator for Zed", long_about = None)]
pub struct Cli {
    /// Blur intensity: light, medium, heavy
    #[arg(long)]
    pub level: Option<String>,

    /// Write the merged theme to this path instead of the configured one
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Fetch and merge, but only report whether the output would change
    #[arg(long)]
    pub check: bool,

    /// Write the output even when the content is unchanged
    #[arg(long)]
    pub force: bool,

    /// Skip schema validation of the merged theme
    #[arg(long)]
    pub no_validate: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Parse the command line. Returns None when a subcommand was handled
/// (the caller should exit); Some(cli) to run the sync.
pub fn handle_cli() -> Option<Cli> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show help
                println!("Usage: catppuccin-blur config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            None
        }
        None => Some(cli),
    }
}

/// Fold per-run flags into the loaded configuration.
/// CLI flags always win over env vars and the config file.
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(level) = &cli.level {
        config.level = level.clone();
    }
    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if cli.no_validate {
        config.validate = false;
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme_url = {:?}", config.theme_url);
    println!("schema_url = {:?}", config.schema_url);
    println!("output_path = {:?}", config.output_path.display().to_string());
    println!(
        "schema_cache = {:?}",
        config.schema_cache.display().to_string()
    );
    println!("level = {:?}", config.level);
    println!("validate = {}", config.validate);
    println!("log_level = {:?}", config.log_level);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_apply_overrides_wins_over_config() {
        let mut config = Config::default();
        let cli = Cli {
            level: Some("heavy".to_string()),
            output: Some(PathBuf::from("out.json")),
            check: false,
            force: true,
            no_validate: true,
            command: None,
        };

        apply_overrides(&mut config, &cli);

        assert_eq!(config.level, "heavy");
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert!(!config.validate);
    }

    #[test]
    fn test_apply_overrides_leaves_config_alone_without_flags() {
        let mut config = Config::default();
        let cli = Cli {
            level: None,
            output: None,
            check: false,
            force: false,
            no_validate: false,
            command: None,
        };

        apply_overrides(&mut config, &cli);

        assert_eq!(config.level, "medium");
        assert!(config.validate);
    }
}
