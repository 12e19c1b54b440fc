//! Configuration validation

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Dotted Java package identifier: at least two segments, each starting
/// with a letter. Underscores are legal but warned about separately.
static PACKAGE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$").expect("Invalid regex")
});

/// Java compatibility levels the Android toolchain accepts
const VALID_JAVA_VERSIONS: &[u32] = &[8, 11, 17, 21];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_identifiers(config)?;
    validate_sdk_levels(config)?;
    validate_signing(config)?;
    debug!("configuration validation passed");
    Ok(())
}

/// Advisory findings that do not fail validation on their own.
///
/// Mirrors the guidance the Android tooling gives for identifiers: keep
/// applicationId aligned with the namespace, and avoid underscores.
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.android.application_id != config.android.namespace {
        warnings.push(format!(
            "application_id '{}' does not match namespace '{}'",
            config.android.application_id, config.android.namespace
        ));
    }

    for (field, value) in [
        ("android.namespace", &config.android.namespace),
        ("android.application_id", &config.android.application_id),
    ] {
        if value.contains('_') {
            warnings.push(format!(
                "{field} '{value}' contains underscores; consider removing them for long-term safety"
            ));
        }
    }

    warnings
}

fn validate_identifiers(config: &Config) -> Result<()> {
    for (field, value) in [
        ("android.namespace", &config.android.namespace),
        ("android.application_id", &config.android.application_id),
    ] {
        if !PACKAGE_ID_REGEX.is_match(value) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!(
                    "'{value}' is not a valid package identifier (expected dotted segments like com.example.app)"
                ),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_sdk_levels(config: &Config) -> Result<()> {
    let android = &config.android;

    if android.min_sdk > android.target_sdk {
        return Err(ConfigError::InvalidValue {
            field: "android.min_sdk".to_string(),
            message: format!(
                "min_sdk {} exceeds target_sdk {}",
                android.min_sdk, android.target_sdk
            ),
        }
        .into());
    }

    if android.target_sdk > android.compile_sdk {
        return Err(ConfigError::InvalidValue {
            field: "android.target_sdk".to_string(),
            message: format!(
                "target_sdk {} exceeds compile_sdk {}",
                android.target_sdk, android.compile_sdk
            ),
        }
        .into());
    }

    if !VALID_JAVA_VERSIONS.contains(&android.java_version) {
        return Err(ConfigError::InvalidValue {
            field: "android.java_version".to_string(),
            message: format!(
                "must be one of: {}",
                VALID_JAVA_VERSIONS
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
        .into());
    }

    Ok(())
}

fn validate_signing(config: &Config) -> Result<()> {
    if config.signing.properties_file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "signing.properties_file".to_string(),
            message: "properties file name cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
