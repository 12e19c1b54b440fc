//! Flutter project detection and `pubspec.yaml` version resolution
//!
//! The Flutter toolchain derives the Android `versionName`/`versionCode`
//! pair from the `version:` field of `pubspec.yaml`, where `1.2.3+42` means
//! version name `1.2.3` and version code `42`. A missing build suffix
//! resolves to version code 1.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PubspecError;

/// Version code used when `version:` carries no `+build` suffix
pub const DEFAULT_VERSION_CODE: u32 = 1;

/// Parsed `pubspec.yaml` fields Gantry cares about
#[derive(Debug, Clone, Deserialize)]
struct Pubspec {
    name: Option<String>,
    version: Option<String>,
}

/// Android version name and version code for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectVersion {
    /// Human-readable version string (`versionName`)
    pub version_name: String,
    /// Monotonically increasing build number (`versionCode`)
    pub version_code: u32,
}

impl ProjectVersion {
    /// Parse a pubspec `version:` value of the form `<semver>` or `<semver>+<code>`
    pub fn parse(value: &str) -> Result<Self, PubspecError> {
        let value = value.trim();
        let (name, code) = match value.split_once('+') {
            Some((name, code)) => (name.trim(), Some(code.trim())),
            None => (value, None),
        };

        semver::Version::parse(name).map_err(|e| PubspecError::InvalidVersion {
            value: name.to_string(),
            message: e.to_string(),
        })?;

        let version_code = match code {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| PubspecError::InvalidBuildNumber(raw.to_string()))?,
            None => DEFAULT_VERSION_CODE,
        };

        Ok(Self {
            version_name: name.to_string(),
            version_code,
        })
    }
}

impl std::fmt::Display for ProjectVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.version_name, self.version_code)
    }
}

/// Read and parse the `version:` field of `<project_root>/pubspec.yaml`
pub fn read_project_version(project_root: &Path) -> Result<ProjectVersion, PubspecError> {
    let pubspec = read_pubspec(project_root)?;
    let path = project_root.join("pubspec.yaml");

    let value = pubspec
        .version
        .ok_or_else(|| PubspecError::MissingVersion(path.clone()))?;

    let version = ProjectVersion::parse(&value)?;
    debug!(
        path = %path.display(),
        version_name = %version.version_name,
        version_code = version.version_code,
        "resolved project version"
    );
    Ok(version)
}

/// Read the project name from `pubspec.yaml`, if declared
pub fn read_project_name(project_root: &Path) -> Result<Option<String>, PubspecError> {
    Ok(read_pubspec(project_root)?.name)
}

/// Whether the directory looks like a Flutter project.
///
/// Requires a `pubspec.yaml` that references the Flutter SDK.
pub fn is_flutter_project(path: &Path) -> bool {
    let pubspec = path.join("pubspec.yaml");
    if !pubspec.is_file() {
        return false;
    }

    match std::fs::read_to_string(&pubspec) {
        Ok(content) => content.contains("sdk: flutter") || content.contains("flutter:"),
        Err(_) => false,
    }
}

fn read_pubspec(project_root: &Path) -> Result<Pubspec, PubspecError> {
    let path = project_root.join("pubspec.yaml");
    if !path.is_file() {
        return Err(PubspecError::NotFound(path));
    }

    let content = std::fs::read_to_string(&path)?;
    Ok(serde_yaml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_pubspec(temp: &TempDir, version: &str) {
        std::fs::write(
            temp.path().join("pubspec.yaml"),
            format!(
                "name: interview_app\ndescription: A Flutter application.\nversion: {version}\n\nenvironment:\n  sdk: '>=3.0.0 <4.0.0'\n\ndependencies:\n  flutter:\n    sdk: flutter\n"
            ),
        )
        .unwrap();
    }

    #[test]
    fn test_parse_version_with_build_number() {
        let version = ProjectVersion::parse("1.2.3+42").unwrap();
        assert_eq!(version.version_name, "1.2.3");
        assert_eq!(version.version_code, 42);
    }

    #[test]
    fn test_parse_version_without_build_number() {
        let version = ProjectVersion::parse("1.2.3").unwrap();
        assert_eq!(version.version_name, "1.2.3");
        assert_eq!(version.version_code, DEFAULT_VERSION_CODE);
    }

    #[test]
    fn test_parse_version_rejects_non_semver() {
        let err = ProjectVersion::parse("not-a-version").unwrap_err();
        assert!(matches!(err, PubspecError::InvalidVersion { .. }));
    }

    #[test]
    fn test_parse_version_rejects_bad_build_number() {
        let err = ProjectVersion::parse("1.2.3+abc").unwrap_err();
        assert!(matches!(err, PubspecError::InvalidBuildNumber(_)));

        let err = ProjectVersion::parse("1.2.3+0").unwrap_err();
        assert!(matches!(err, PubspecError::InvalidBuildNumber(_)));
    }

    #[test]
    fn test_read_project_version() {
        let temp = TempDir::new().unwrap();
        write_pubspec(&temp, "2.0.1+7");

        let version = read_project_version(temp.path()).unwrap();
        assert_eq!(version.version_name, "2.0.1");
        assert_eq!(version.version_code, 7);
    }

    #[test]
    fn test_read_project_version_missing_field() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pubspec.yaml"), "name: interview_app\n").unwrap();

        let err = read_project_version(temp.path()).unwrap_err();
        assert!(matches!(err, PubspecError::MissingVersion(_)));
    }

    #[test]
    fn test_read_project_version_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_project_version(temp.path()).unwrap_err();
        assert!(matches!(err, PubspecError::NotFound(_)));
    }

    #[test]
    fn test_flutter_project_detection() {
        let temp = TempDir::new().unwrap();
        assert!(!is_flutter_project(temp.path()));

        write_pubspec(&temp, "1.0.0+1");
        assert!(is_flutter_project(temp.path()));
    }

    #[test]
    fn test_project_name() {
        let temp = TempDir::new().unwrap();
        write_pubspec(&temp, "1.0.0");
        assert_eq!(
            read_project_name(temp.path()).unwrap(),
            Some("interview_app".to_string())
        );
    }

    #[test]
    fn test_version_display() {
        let version = ProjectVersion::parse("1.2.3+42").unwrap();
        assert_eq!(version.to_string(), "1.2.3+42");
    }
}
