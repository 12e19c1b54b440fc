//! Keystore credential loading
//!
//! Release signing credentials live in an optional `key.properties` file
//! next to the Gradle project. Absence of the file (or a file with no
//! entries at all) is a normal state: local and debug builds work without
//! secrets. A file that carries *some* of the credential keys is treated as
//! a configuration error rather than deferred to signing time, so a loaded
//! credential set is always complete.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use gantry_core::Properties;

use crate::error::{AndroidError, Result};

/// Property key for the key alias
pub const KEY_ALIAS: &str = "keyAlias";
/// Property key for the key password
pub const KEY_PASSWORD: &str = "keyPassword";
/// Property key for the keystore file path
pub const STORE_FILE: &str = "storeFile";
/// Property key for the keystore password
pub const STORE_PASSWORD: &str = "storePassword";

/// The four keys a complete credential file must carry, in file order
pub const REQUIRED_KEYS: [&str; 4] = [KEY_ALIAS, KEY_PASSWORD, STORE_FILE, STORE_PASSWORD];

/// A complete set of release keystore credentials.
///
/// Constructed only by [`load_keystore_credentials`]; every field is
/// guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct KeystoreCredentials {
    /// Alias of the signing key inside the keystore
    pub key_alias: String,
    /// Password for the signing key
    pub key_password: String,
    /// Path to the keystore file
    pub store_file: PathBuf,
    /// Password for the keystore itself
    pub store_password: String,
}

impl std::fmt::Debug for KeystoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeystoreCredentials")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .finish()
    }
}

/// Load keystore credentials from a property file.
///
/// - File absent, or present with no entries: `Ok(None)`.
/// - File present with all four keys: `Ok(Some(credentials))`.
/// - File present with a partial credential set: error naming every
///   missing or empty field.
/// - File unreadable or malformed: error from the properties parser.
///
/// The `storeFile` value is tilde-expanded; a relative path is anchored at
/// the credential file's directory.
pub fn load_keystore_credentials(path: &Path) -> Result<Option<KeystoreCredentials>> {
    if !path.exists() {
        debug!(path = %path.display(), "credential file absent, release will use debug signing");
        return Ok(None);
    }

    let props = Properties::load(path)?;

    if props.is_empty() {
        warn!(path = %path.display(), "credential file is empty, release will use debug signing");
        return Ok(None);
    }

    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| props.get(key).map_or(true, str::is_empty))
        .map(|key| key.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AndroidError::IncompleteCredentials {
            path: path.to_path_buf(),
            fields: missing,
        });
    }

    // All four keys verified present and non-empty above.
    let credentials = KeystoreCredentials {
        key_alias: props.get(KEY_ALIAS).unwrap_or_default().to_string(),
        key_password: props.get(KEY_PASSWORD).unwrap_or_default().to_string(),
        store_file: resolve_store_file(props.get(STORE_FILE).unwrap_or_default(), path),
        store_password: props.get(STORE_PASSWORD).unwrap_or_default().to_string(),
    };

    info!(
        path = %path.display(),
        key_alias = %credentials.key_alias,
        store_file = %credentials.store_file.display(),
        "loaded release keystore credentials"
    );
    Ok(Some(credentials))
}

/// Expand `~` and anchor relative keystore paths at the credential file's directory
fn resolve_store_file(value: &str, properties_path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(value);
    let store_file = PathBuf::from(expanded.as_ref());

    if store_file.is_absolute() {
        store_file
    } else {
        match properties_path.parent() {
            Some(dir) => dir.join(store_file),
            None => store_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_properties(temp: &TempDir, content: &str) -> PathBuf {
        let path = temp.path().join("key.properties");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_absent_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let loaded = load_keystore_credentials(&temp.path().join("key.properties")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_empty_file_behaves_like_absence() {
        let temp = TempDir::new().unwrap();
        let path = write_properties(&temp, "# no credentials yet\n");

        let loaded = load_keystore_credentials(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_complete_file_loads_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = write_properties(
            &temp,
            "keyAlias=upload\nkeyPassword=kpass\nstoreFile=/keys/upload-keystore.jks\nstorePassword=spass\n",
        );

        let creds = load_keystore_credentials(&path).unwrap().unwrap();
        assert_eq!(creds.key_alias, "upload");
        assert_eq!(creds.key_password, "kpass");
        assert_eq!(creds.store_file, PathBuf::from("/keys/upload-keystore.jks"));
        assert_eq!(creds.store_password, "spass");
    }

    #[test]
    fn test_relative_store_file_anchored_at_properties_dir() {
        let temp = TempDir::new().unwrap();
        let path = write_properties(
            &temp,
            "keyAlias=upload\nkeyPassword=kpass\nstoreFile=upload-keystore.jks\nstorePassword=spass\n",
        );

        let creds = load_keystore_credentials(&path).unwrap().unwrap();
        assert_eq!(creds.store_file, temp.path().join("upload-keystore.jks"));
    }

    #[test]
    fn test_partial_file_names_missing_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_properties(&temp, "keyAlias=upload\nstorePassword=spass\n");

        let err = load_keystore_credentials(&path).unwrap_err();
        match err {
            AndroidError::IncompleteCredentials { fields, .. } => {
                assert_eq!(fields, vec!["keyPassword", "storeFile"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let temp = TempDir::new().unwrap();
        let path = write_properties(
            &temp,
            "keyAlias=upload\nkeyPassword=\nstoreFile=upload-keystore.jks\nstorePassword=spass\n",
        );

        let err = load_keystore_credentials(&path).unwrap_err();
        match err {
            AndroidError::IncompleteCredentials { fields, .. } => {
                assert_eq!(fields, vec!["keyPassword"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let path = write_properties(&temp, "keyAlias upload without separator\n");

        let err = load_keystore_credentials(&path).unwrap_err();
        assert!(matches!(err, AndroidError::Properties(_)));
    }

    #[test]
    fn test_debug_output_redacts_passwords() {
        let creds = KeystoreCredentials {
            key_alias: "upload".to_string(),
            key_password: "kpass".to_string(),
            store_file: PathBuf::from("/keys/upload.jks"),
            store_password: "spass".to_string(),
        };

        let rendered = format!("{creds:?}");
        assert!(rendered.contains("upload"));
        assert!(!rendered.contains("kpass"));
        assert!(!rendered.contains("spass"));
    }
}
