use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, VariantNames};

/// How strictly the input image is checked against the known reference digests.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChecksumPolicy {
    /// Skip hashing entirely (synthetic test images).
    Disabled,
    /// Log mismatches but keep patching.
    #[default]
    Warn,
    /// Refuse to patch an image that is not the randomizer base.
    Enforce,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchSettings {
    #[serde(default)]
    pub checksum_policy: ChecksumPolicy,
}

impl PatchSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read settings at {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("Unable to parse settings at {}", path.display()))
    }
}
