use std::borrow::Cow;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ===== DATA STRUCTURES =====

/// Keys are kept loosely typed. Whether a missing or odd value matters depends
/// on whether the filter ever reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VersionEntry {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub version_code: Option<Value>,
}

impl VersionEntry {
    pub fn new(version_code: impl Into<String>) -> Self {
        Self {
            version_code: Some(Value::String(version_code.into())),
        }
    }

    /// True when the entry's code is the string `target`. A code of any other
    /// JSON type never matches; a missing code is an error.
    pub fn is_version(&self, target: &str) -> Result<bool> {
        let code = self
            .version_code
            .as_ref()
            .ok_or_else(|| anyhow!("version entry has no version_code"))?;
        Ok(code.as_str() == Some(target))
    }
}

/// One entry of the published device list.
///
/// A record without `supported_versions` deserializes with an empty list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceRecord {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub codename: Option<Value>,
    #[serde(default)]
    pub supported_versions: Vec<VersionEntry>,
}

impl DeviceRecord {
    pub fn new(codename: impl Into<String>) -> Self {
        Self {
            codename: Some(Value::String(codename.into())),
            supported_versions: Vec::new(),
        }
    }

    pub fn with_versions<I, S>(mut self, version_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_versions
            .extend(version_codes.into_iter().map(VersionEntry::new));
        self
    }

    /// The codename as printed: strings verbatim, any other value as JSON text.
    pub fn codename(&self) -> Result<Cow<'_, str>> {
        match &self.codename {
            Some(Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
            Some(other) => Ok(Cow::Owned(other.to_string())),
            None => Err(anyhow!("device record has no codename")),
        }
    }
}

/// Maps a present key to `Some`, including an explicit `null`. Together with
/// `#[serde(default)]` only an absent key yields `None`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
