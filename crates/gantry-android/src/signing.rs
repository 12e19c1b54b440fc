//! Release signing profile resolution
//!
//! The release variant signs with the keystore credentials when they were
//! loaded, and falls back to the toolchain's debug keys otherwise. Debug
//! variants always sign with debug keys.

use std::path::Path;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::credentials::KeystoreCredentials;

/// What a build variant signs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningProfile {
    /// A populated release profile backed by keystore credentials
    Keystore(KeystoreCredentials),
    /// The implicit debug-signing fallback
    DebugKeys,
}

impl SigningProfile {
    /// Resolve the release signing profile from optionally loaded credentials.
    ///
    /// `Some` credentials are complete by construction, so the resulting
    /// profile is never partially populated.
    pub fn resolve_release(credentials: Option<KeystoreCredentials>) -> Self {
        match credentials {
            Some(creds) => {
                debug!(key_alias = %creds.key_alias, "release signing uses keystore");
                Self::Keystore(creds)
            }
            None => {
                debug!("release signing falls back to debug keys");
                Self::DebugKeys
            }
        }
    }

    /// Whether this profile is backed by keystore credentials
    pub fn is_keystore(&self) -> bool {
        matches!(self, Self::Keystore(_))
    }

    /// Short profile kind name for display
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Keystore(_) => "keystore",
            Self::DebugKeys => "debug-keys",
        }
    }

    /// Key alias, when keystore-backed
    pub fn key_alias(&self) -> Option<&str> {
        match self {
            Self::Keystore(creds) => Some(&creds.key_alias),
            Self::DebugKeys => None,
        }
    }

    /// Keystore file path, when keystore-backed
    pub fn store_file(&self) -> Option<&Path> {
        match self {
            Self::Keystore(creds) => Some(&creds.store_file),
            Self::DebugKeys => None,
        }
    }
}

// Serialized output names the alias and keystore file but never the
// passwords, so resolved configurations are safe to log or archive.
impl Serialize for SigningProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::DebugKeys => {
                let mut s = serializer.serialize_struct("SigningProfile", 1)?;
                s.serialize_field("kind", self.kind())?;
                s.end()
            }
            Self::Keystore(creds) => {
                let mut s = serializer.serialize_struct("SigningProfile", 3)?;
                s.serialize_field("kind", self.kind())?;
                s.serialize_field("key_alias", &creds.key_alias)?;
                s.serialize_field("store_file", &creds.store_file)?;
                s.end()
            }
        }
    }
}
