//! One-shot build configuration resolution
//!
//! A single synchronous pass: read the project version, load the optional
//! keystore credentials, resolve the release signing profile, and bind both
//! build variants. Nothing is cached or mutated after the pass returns.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use gantry_core::config::{AndroidSettings, Config};
use gantry_core::{read_project_name, read_project_version, ProjectVersion};

use crate::credentials::load_keystore_credentials;
use crate::error::{AndroidError, Result};
use crate::signing::SigningProfile;
use crate::variants::{bind_variants, VariantConfig, VariantKind};

/// The resolved Android build configuration for one project
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedBuildConfig {
    /// Project name from the config file or the pubspec
    pub project_name: Option<String>,
    /// Android identifiers and SDK levels
    pub android: AndroidSettings,
    /// Version name/code derived from `pubspec.yaml`
    pub version: ProjectVersion,
    /// Credential file location the pass consulted
    pub credential_file: PathBuf,
    /// Whether keystore credentials were loaded from it
    pub credentials_loaded: bool,
    /// Both bound build variants
    pub variants: Vec<VariantConfig>,
}

impl ResolvedBuildConfig {
    /// Look up a bound variant by kind
    pub fn variant(&self, kind: VariantKind) -> Option<&VariantConfig> {
        self.variants.iter().find(|v| v.kind == kind)
    }
}

/// Run the configuration-evaluation pass.
///
/// `base_dir` anchors the relative paths in `config.project`; it is
/// normally the directory the config file was found in (or the working
/// directory when running on defaults).
pub fn resolve(config: &Config, base_dir: &Path) -> Result<ResolvedBuildConfig> {
    let flutter_root = base_dir.join(&config.project.root);

    let version = read_project_version(&flutter_root)?;
    let project_name = match config.project.name.clone() {
        Some(name) => Some(name),
        None => read_project_name(&flutter_root)?,
    };

    let android_dir = flutter_root.join(&config.project.android_dir);
    if !android_dir.is_dir() {
        return Err(AndroidError::AndroidDirNotFound(android_dir));
    }

    let credential_file = android_dir.join(&config.signing.properties_file);
    let credentials = load_keystore_credentials(&credential_file)?;
    let credentials_loaded = credentials.is_some();

    let release_signing = SigningProfile::resolve_release(credentials);
    let variants = bind_variants(release_signing, &config.release.extra_proguard_files);

    info!(
        application_id = %config.android.application_id,
        version = %version,
        release_signing = variants
            .iter()
            .find(|v| v.kind == VariantKind::Release)
            .map(|v| v.signing.kind())
            .unwrap_or("unknown"),
        "resolved build configuration"
    );

    Ok(ResolvedBuildConfig {
        project_name,
        android: config.android.clone(),
        version,
        credential_file,
        credentials_loaded,
        variants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn flutter_project(temp: &TempDir) {
        std::fs::write(
            temp.path().join("pubspec.yaml"),
            "name: interview_app\nversion: 1.2.3+42\n\ndependencies:\n  flutter:\n    sdk: flutter\n",
        )
        .unwrap();
        std::fs::create_dir_all(temp.path().join("android")).unwrap();
    }

    fn write_credentials(temp: &TempDir) {
        std::fs::write(
            temp.path().join("android/key.properties"),
            "keyAlias=upload\nkeyPassword=kpass\nstoreFile=upload-keystore.jks\nstorePassword=spass\n",
        )
        .unwrap();
    }

    #[test]
    fn test_resolve_without_credential_file() {
        let temp = TempDir::new().unwrap();
        flutter_project(&temp);

        let resolved = resolve(&Config::default(), temp.path()).unwrap();
        assert!(!resolved.credentials_loaded);

        let release = resolved.variant(VariantKind::Release).unwrap();
        assert_eq!(release.signing, SigningProfile::DebugKeys);
        assert!(release.minify);
        assert!(release.shrink_resources);
    }

    #[test]
    fn test_resolve_with_credential_file() {
        let temp = TempDir::new().unwrap();
        flutter_project(&temp);
        write_credentials(&temp);

        let resolved = resolve(&Config::default(), temp.path()).unwrap();
        assert!(resolved.credentials_loaded);

        let release = resolved.variant(VariantKind::Release).unwrap();
        assert_eq!(release.signing.key_alias(), Some("upload"));
        assert_eq!(
            release.signing.store_file(),
            Some(temp.path().join("android/upload-keystore.jks").as_path())
        );
    }

    #[test]
    fn test_resolve_debug_variant_is_never_optimized() {
        let temp = TempDir::new().unwrap();
        flutter_project(&temp);
        write_credentials(&temp);

        let resolved = resolve(&Config::default(), temp.path()).unwrap();
        let debug = resolved.variant(VariantKind::Debug).unwrap();

        assert!(!debug.minify);
        assert!(!debug.shrink_resources);
        assert_eq!(debug.signing, SigningProfile::DebugKeys);
    }

    #[test]
    fn test_resolve_reads_version_and_name() {
        let temp = TempDir::new().unwrap();
        flutter_project(&temp);

        let resolved = resolve(&Config::default(), temp.path()).unwrap();
        assert_eq!(resolved.project_name, Some("interview_app".to_string()));
        assert_eq!(resolved.version.version_name, "1.2.3");
        assert_eq!(resolved.version.version_code, 42);
    }

    #[test]
    fn test_resolve_requires_android_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("pubspec.yaml"),
            "name: interview_app\nversion: 1.0.0\n",
        )
        .unwrap();

        let err = resolve(&Config::default(), temp.path()).unwrap_err();
        assert!(matches!(err, AndroidError::AndroidDirNotFound(_)));
    }

    #[test]
    fn test_resolve_propagates_incomplete_credentials() {
        let temp = TempDir::new().unwrap();
        flutter_project(&temp);
        std::fs::write(
            temp.path().join("android/key.properties"),
            "keyAlias=upload\n",
        )
        .unwrap();

        let err = resolve(&Config::default(), temp.path()).unwrap_err();
        assert!(matches!(err, AndroidError::IncompleteCredentials { .. }));
    }

    #[test]
    fn test_resolved_config_serializes_without_secrets() {
        let temp = TempDir::new().unwrap();
        flutter_project(&temp);
        write_credentials(&temp);

        let resolved = resolve(&Config::default(), temp.path()).unwrap();
        let json = serde_json::to_string_pretty(&resolved).unwrap();

        assert!(json.contains("\"upload\""));
        assert!(!json.contains("kpass"));
        assert!(!json.contains("spass"));
    }
}
