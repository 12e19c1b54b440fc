//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use gantry_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_PROPERTIES_FILE, KEY_PROPERTIES_TEMPLATE,
};
use gantry_core::config::Config;

use crate::cli::Cli;

/// Initialize a new Gantry configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a key.properties template into the Android directory
    #[arg(long)]
    pub with_keystore_template: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_TOML));

        // Check if config already exists
        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        // Choose format if not specified
        let format = if self.yes {
            "toml"
        } else {
            let formats = vec!["toml", "yaml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            formats[selection]
        };

        // Adjust path for format
        let config_path = if format == "yaml" && config_path.extension().is_some_and(|e| e == "toml")
        {
            config_path.with_extension("yaml")
        } else {
            config_path
        };

        // Generate config
        let content = if format == "yaml" {
            // Convert TOML to YAML
            let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE)?;
            serde_yaml::to_string(&config)?
        } else {
            DEFAULT_CONFIG_TEMPLATE.to_string()
        };

        // Write config
        std::fs::write(&config_path, &content)?;

        // Optionally seed a credential file template next to the Gradle project
        if self.with_keystore_template {
            let config: Config = if format == "yaml" {
                serde_yaml::from_str(&content)?
            } else {
                toml::from_str(&content)?
            };
            let android_dir = cwd.join(&config.project.root).join(&config.project.android_dir);
            let properties_path = android_dir.join(DEFAULT_PROPERTIES_FILE);

            if properties_path.exists() {
                if !cli.quiet {
                    println!(
                        "{} {} already exists, leaving it untouched",
                        style("!").yellow().bold(),
                        properties_path.display()
                    );
                }
            } else {
                std::fs::create_dir_all(&android_dir)?;
                std::fs::write(&properties_path, KEY_PROPERTIES_TEMPLATE)?;
                if !cli.quiet {
                    println!(
                        "{} Created credential template at {}",
                        style("✓").green().bold(),
                        style(properties_path.display()).cyan()
                    );
                }
            }
        }

        if !cli.quiet {
            println!(
                "{} Created configuration at {}",
                style("✓").green().bold(),
                style(config_path.display()).cyan()
            );
            println!();
            println!("Next steps:");
            println!(
                "  1. Edit {} to set your namespace and application id",
                config_path.display()
            );
            println!(
                "  2. Run {} to verify your setup",
                style("gantry validate").cyan()
            );
            println!(
                "  3. Run {} to inspect the resolved build variants",
                style("gantry resolve").cyan()
            );
        }

        Ok(())
    }
}
