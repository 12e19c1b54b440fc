//! Gantry Android - Android build-variant and signing resolution
//!
//! This crate implements the Android side of the Gantry pass: loading the
//! optional keystore credential file, resolving the release signing
//! profile, and binding the debug/release build variants to their signing
//! profiles and optimization flags.

pub mod credentials;
pub mod error;
pub mod resolver;
pub mod signing;
pub mod variants;

pub use credentials::{load_keystore_credentials, KeystoreCredentials, REQUIRED_KEYS};
pub use error::{AndroidError, Result};
pub use resolver::{resolve, ResolvedBuildConfig};
pub use signing::SigningProfile;
pub use variants::{bind_variants, VariantConfig, VariantKind};
