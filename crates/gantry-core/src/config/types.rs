//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Version of the config schema
    #[serde(rename = "$schema")]
    pub schema: Option<String>,

    /// Project layout configuration
    pub project: ProjectConfig,

    /// Android identifier and SDK configuration
    pub android: AndroidSettings,

    /// Release signing configuration
    pub signing: SigningConfig,

    /// Release variant configuration
    pub release: ReleaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: None,
            project: ProjectConfig::default(),
            android: AndroidSettings::default(),
            signing: SigningConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

/// Project layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (defaults to the pubspec name when unset)
    pub name: Option<String>,

    /// Flutter project root, relative to the config file
    pub root: PathBuf,

    /// Android host directory, relative to the project root
    pub android_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            root: PathBuf::from("."),
            android_dir: PathBuf::from(defaults::DEFAULT_ANDROID_DIR),
        }
    }
}

/// Android identifiers and SDK levels.
///
/// Defaults track the current Flutter toolchain baseline; every field can be
/// pinned explicitly in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidSettings {
    /// Package namespace (e.g. `com.example.app`)
    pub namespace: String,

    /// Application id; should normally match the namespace
    pub application_id: String,

    /// API level to compile against
    pub compile_sdk: u32,

    /// NDK revision
    pub ndk_version: String,

    /// Minimum supported API level
    pub min_sdk: u32,

    /// API level the app targets
    pub target_sdk: u32,

    /// Java source/target compatibility level
    pub java_version: u32,
}

impl Default for AndroidSettings {
    fn default() -> Self {
        Self {
            namespace: defaults::DEFAULT_NAMESPACE.to_string(),
            application_id: defaults::DEFAULT_NAMESPACE.to_string(),
            compile_sdk: defaults::DEFAULT_COMPILE_SDK,
            ndk_version: defaults::DEFAULT_NDK_VERSION.to_string(),
            min_sdk: defaults::DEFAULT_MIN_SDK,
            target_sdk: defaults::DEFAULT_TARGET_SDK,
            java_version: defaults::DEFAULT_JAVA_VERSION,
        }
    }
}

/// Release signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningConfig {
    /// Keystore credential file, relative to the Android host directory
    pub properties_file: PathBuf,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            properties_file: PathBuf::from(defaults::DEFAULT_PROPERTIES_FILE),
        }
    }
}

/// Release variant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Extra ProGuard rule files appended after the built-in defaults
    pub extra_proguard_files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project.android_dir, PathBuf::from("android"));
        assert_eq!(config.android.namespace, config.android.application_id);
        assert_eq!(config.android.java_version, 11);
        assert!(config.android.min_sdk <= config.android.target_sdk);
        assert!(config.android.target_sdk <= config.android.compile_sdk);
        assert_eq!(
            config.signing.properties_file,
            PathBuf::from("key.properties")
        );
        assert!(config.release.extra_proguard_files.is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            "[android]\nnamespace = \"com.grabdone.interviewapp\"\napplication_id = \"com.grabdone.interviewapp\"\n",
        )
        .unwrap();

        assert_eq!(config.android.namespace, "com.grabdone.interviewapp");
        assert_eq!(config.android.min_sdk, defaults::DEFAULT_MIN_SDK);
        assert_eq!(
            config.signing.properties_file,
            PathBuf::from("key.properties")
        );
    }
}
