//! Validate command

use clap::Args;
use console::style;
use tracing::info;

use gantry_android::load_keystore_credentials;
use gantry_core::config::{config_warnings, Config};
use gantry_core::error::{ConfigError, GantryError};
use gantry_core::{is_flutter_project, read_project_version};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Validate configuration and project state
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Only validate configuration file
    #[arg(long)]
    pub config_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            config_only = self.config_only,
            strict = self.strict,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;

        let mut errors: Vec<String> = Vec::new();
        let mut warnings: Vec<String> = Vec::new();
        let mut notes: Vec<String> = Vec::new();

        // Validate configuration; an absent config file means defaults.
        let config_result = gantry_core::config::load_config_from_dir(&cwd);
        let (config, config_path) = match config_result {
            Ok((c, p)) => (c, Some(p)),
            Err(GantryError::Config(ConfigError::NotFound(_))) => {
                notes.push("no configuration file found, using defaults".to_string());
                (Config::default(), None)
            }
            Err(e) => {
                errors.push(format!("Configuration: {}", e));
                (Config::default(), None)
            }
        };

        warnings.extend(config_warnings(&config));

        if !self.config_only {
            let base_dir = config_path
                .as_deref()
                .and_then(|p| p.parent())
                .map(|p| p.to_path_buf())
                .unwrap_or(cwd);
            let flutter_root = base_dir.join(&config.project.root);

            // Validate the Flutter project
            if !is_flutter_project(&flutter_root) {
                errors.push(format!(
                    "Project: no Flutter pubspec.yaml found in {}",
                    flutter_root.display()
                ));
            } else if let Err(e) = read_project_version(&flutter_root) {
                errors.push(format!("Project version: {}", e));
            }

            // Validate the Android host directory
            let android_dir = flutter_root.join(&config.project.android_dir);
            if !android_dir.is_dir() {
                errors.push(format!(
                    "Android: host directory not found at {}",
                    android_dir.display()
                ));
            } else {
                // Validate the credential file state
                let credential_file = android_dir.join(&config.signing.properties_file);
                match load_keystore_credentials(&credential_file) {
                    Ok(Some(creds)) => {
                        notes.push(format!(
                            "keystore credentials loaded (alias {})",
                            creds.key_alias
                        ));
                        if !creds.store_file.exists() {
                            warnings.push(format!(
                                "Keystore file {} does not exist yet",
                                creds.store_file.display()
                            ));
                        }
                    }
                    Ok(None) => {
                        notes.push(format!(
                            "credential file absent at {}, release will fall back to debug signing",
                            credential_file.display()
                        ));
                    }
                    Err(e) => {
                        errors.push(format!("Credentials: {}", e));
                    }
                }
            }
        }

        // If strict, promote warnings to errors
        if self.strict {
            errors.append(&mut warnings);
        }

        // Output
        let passed = errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "errors": errors,
                    "warnings": warnings,
                    "notes": notes
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!("{}", style("Validation Results").bold());
                    println!();

                    if let Some(path) = config_path {
                        println!("Config: {}", style(path.display()).cyan());
                        println!();
                    }

                    if !errors.is_empty() {
                        println!("{}", style("Errors:").red().bold());
                        for error in &errors {
                            println!("  {} {}", style("✗").red(), error);
                        }
                        println!();
                    }

                    if !warnings.is_empty() {
                        println!("{}", style("Warnings:").yellow().bold());
                        for warning in &warnings {
                            println!("  {} {}", style("!").yellow(), warning);
                        }
                        println!();
                    }

                    for note in &notes {
                        println!("  {} {}", style("→").blue(), note);
                    }
                    if !notes.is_empty() {
                        println!();
                    }

                    if passed {
                        if warnings.is_empty() {
                            println!("{}", style("✓ All checks passed").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Validation passed").green().bold(),
                                warnings.len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Validation failed").red().bold(),
                            errors.len()
                        );
                    }
                }
            }
        }

        if !passed {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}
