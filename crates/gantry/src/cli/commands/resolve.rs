//! Resolve command

use clap::Args;
use console::style;
use tracing::info;

use gantry_android::{resolve, ResolvedBuildConfig, VariantConfig, VariantKind};
use gantry_core::config::load_config_or_default;

use crate::cli::{output, Cli, OutputFormat};

/// Resolve the build-variant configuration
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Only print a single variant (debug or release)
    #[arg(long)]
    pub variant: Option<String>,
}

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(variant = ?self.variant, "executing resolve command");
        let cwd = std::env::current_dir()?;

        let (config, config_path) = load_config_or_default(&cwd);
        let base_dir = config_path
            .as_deref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or(cwd);

        let resolved = resolve(&config, &base_dir)?;

        let selected = match &self.variant {
            Some(raw) => {
                let kind = VariantKind::parse(raw)
                    .ok_or_else(|| anyhow::anyhow!("Unknown variant '{raw}'"))?;
                Some(
                    resolved
                        .variant(kind)
                        .ok_or_else(|| anyhow::anyhow!("Variant '{kind}' was not resolved"))?,
                )
            }
            None => None,
        };

        match cli.format {
            OutputFormat::Json => match selected {
                Some(variant) => println!("{}", serde_json::to_string_pretty(variant)?),
                None => println!("{}", serde_json::to_string_pretty(&resolved)?),
            },
            OutputFormat::Text => {
                if !cli.quiet {
                    if cli.verbose {
                        let source = match &config_path {
                            Some(path) => path.display().to_string(),
                            None => "defaults (no config file found)".to_string(),
                        };
                        println!(
                            "Config: {}",
                            output::path_style().apply_to(source)
                        );
                        println!();
                    }
                    match selected {
                        Some(variant) => print_variant(variant),
                        None => print_resolved(&resolved),
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_resolved(resolved: &ResolvedBuildConfig) {
    println!("{}", output::header("Resolved Build Configuration"));
    println!();

    if let Some(name) = &resolved.project_name {
        println!("{}", output::key_value("project", name));
    }
    println!(
        "{}",
        output::key_value("application id", &resolved.android.application_id)
    );
    println!(
        "{}",
        output::key_value("namespace", &resolved.android.namespace)
    );
    println!(
        "{}",
        output::key_value(
            "version",
            &format!(
                "{} (code {})",
                resolved.version.version_name, resolved.version.version_code
            )
        )
    );
    println!(
        "{}",
        output::key_value(
            "sdk",
            &format!(
                "compile {} / min {} / target {}",
                resolved.android.compile_sdk, resolved.android.min_sdk, resolved.android.target_sdk
            )
        )
    );
    println!(
        "{}",
        output::key_value("ndk", &resolved.android.ndk_version)
    );
    println!(
        "{}",
        output::key_value("java", &resolved.android.java_version.to_string())
    );

    let credential_state = if resolved.credentials_loaded {
        format!(
            "loaded from {}",
            output::path_style().apply_to(resolved.credential_file.display())
        )
    } else {
        format!(
            "absent ({}), release falls back to debug signing",
            output::path_style().apply_to(resolved.credential_file.display())
        )
    };
    println!("{}", output::key_value("credentials", &credential_state));

    for variant in &resolved.variants {
        println!();
        println!("{}", style(variant.kind.as_str()).bold());
        print_variant_fields(variant);
    }
}

fn print_variant(variant: &VariantConfig) {
    println!("{}", style(variant.kind.as_str()).bold());
    print_variant_fields(variant);
}

fn print_variant_fields(variant: &VariantConfig) {
    let signing = match variant.signing.key_alias() {
        Some(alias) => format!("{} (alias {})", variant.signing.kind(), alias),
        None => variant.signing.kind().to_string(),
    };
    println!("{}", output::key_value("signing", &signing));
    println!(
        "{}",
        output::key_value("minify", &variant.minify.to_string())
    );
    println!(
        "{}",
        output::key_value("shrink resources", &variant.shrink_resources.to_string())
    );
    if !variant.proguard_files.is_empty() {
        println!(
            "{}",
            output::key_value("proguard", &variant.proguard_files.join(", "))
        );
    }
}
