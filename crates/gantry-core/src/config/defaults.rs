//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "gantry.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "gantry.yaml";

/// Default Android host directory inside a Flutter project
pub const DEFAULT_ANDROID_DIR: &str = "android";

/// Default keystore credential file name
pub const DEFAULT_PROPERTIES_FILE: &str = "key.properties";

/// Placeholder namespace/application id
pub const DEFAULT_NAMESPACE: &str = "com.example.app";

/// Flutter toolchain baseline SDK levels
pub const DEFAULT_COMPILE_SDK: u32 = 35;
pub const DEFAULT_MIN_SDK: u32 = 21;
pub const DEFAULT_TARGET_SDK: u32 = 35;

/// NDK revision pinned by the Flutter Gradle plugin
pub const DEFAULT_NDK_VERSION: &str = "27.0.12077973";

/// Java source/target compatibility level
pub const DEFAULT_JAVA_VERSION: u32 = 11;

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".gantry.toml",
        ".gantry.yaml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Gantry configuration
# See https://github.com/example/gantry for documentation

[project]
# Flutter project root, relative to this file
root = "."
# Android host directory, relative to the project root
android_dir = "android"

[android]
# Keep namespace and application_id aligned; avoid underscores
namespace = "com.example.app"
application_id = "com.example.app"
compile_sdk = 35
ndk_version = "27.0.12077973"
min_sdk = 21
target_sdk = 35
java_version = 11

[signing]
# Keystore credential file, relative to the Android host directory.
# When the file is absent, release builds fall back to debug signing.
properties_file = "key.properties"

[release]
# Extra ProGuard rule files appended after the built-in defaults
extra_proguard_files = []
"#;

/// Template for a fresh `key.properties` credential file
pub const KEY_PROPERTIES_TEMPLATE: &str = r#"# Release keystore credentials. Keep this file out of version control.
keyAlias=upload
keyPassword=CHANGE_ME
storeFile=upload-keystore.jks
storePassword=CHANGE_ME
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_default_shape() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.android.namespace, DEFAULT_NAMESPACE);
        assert_eq!(config.android.compile_sdk, DEFAULT_COMPILE_SDK);
    }

    #[test]
    fn test_generated_default_config_round_trips() {
        let rendered = default_config_toml();
        let config: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(config.android.min_sdk, DEFAULT_MIN_SDK);
    }
}
