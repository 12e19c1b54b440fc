//! Build variant binding
//!
//! One-shot binding of the `debug` and `release` variants to their signing
//! profiles and optimization flags. Only the release variant ever enables
//! minification and resource shrinking, and only the release variant
//! carries ProGuard rule references.

use serde::Serialize;

use crate::signing::SigningProfile;

/// Default Android optimize ruleset shipped with the build tools
pub const DEFAULT_OPTIMIZE_RULES: &str = "proguard-android-optimize.txt";

/// Project-local ProGuard rules file
pub const PROJECT_RULES_FILE: &str = "proguard-rules.pro";

/// Named build variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Debug,
    Release,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" | "dev" => Some(Self::Debug),
            "release" | "prod" | "production" => Some(Self::Release),
            _ => None,
        }
    }
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully bound build variant
#[derive(Debug, Clone, Serialize)]
pub struct VariantConfig {
    /// Which variant this is
    pub kind: VariantKind,
    /// Whether code minification is enabled
    pub minify: bool,
    /// Whether unused resources are stripped
    pub shrink_resources: bool,
    /// ProGuard rule file references, in application order
    pub proguard_files: Vec<String>,
    /// What this variant signs with
    pub signing: SigningProfile,
}

impl VariantConfig {
    /// The debug variant: debug-signed, no optimization passes
    pub fn debug() -> Self {
        Self {
            kind: VariantKind::Debug,
            minify: false,
            shrink_resources: false,
            proguard_files: Vec::new(),
            signing: SigningProfile::DebugKeys,
        }
    }

    /// The release variant: bound to the resolved signing profile, with
    /// minification and resource shrinking enabled and the default rule
    /// files ahead of any extra project rules.
    pub fn release(signing: SigningProfile, extra_proguard_files: &[String]) -> Self {
        let mut proguard_files = vec![
            DEFAULT_OPTIMIZE_RULES.to_string(),
            PROJECT_RULES_FILE.to_string(),
        ];
        proguard_files.extend(extra_proguard_files.iter().cloned());

        Self {
            kind: VariantKind::Release,
            minify: true,
            shrink_resources: true,
            proguard_files,
            signing,
        }
    }
}

/// Bind both variants. The resolved release signing profile applies to the
/// release variant only; debug always keeps debug keys.
pub fn bind_variants(
    release_signing: SigningProfile,
    extra_proguard_files: &[String],
) -> Vec<VariantConfig> {
    vec![
        VariantConfig::debug(),
        VariantConfig::release(release_signing, extra_proguard_files),
    ]
}
