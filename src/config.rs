/// Device list published alongside the OTA builds.
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/SonalSingh18/custom_ota12/raw/master/devices.json";

/// Release whose devices get listed.
pub const DEFAULT_TARGET_VERSION: &str = "twelve";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source_url: String,
    pub target_version: String,
}

impl Config {
    pub fn new(source_url: impl Into<String>, target_version: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            target_version: target_version.into(),
        }
    }

    /// Gets the URL of the device list
    pub fn get_source_url(&self) -> &str {
        &self.source_url
    }

    /// Gets the version code devices are matched against
    pub fn get_target_version(&self) -> &str {
        &self.target_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL, DEFAULT_TARGET_VERSION)
    }
}
