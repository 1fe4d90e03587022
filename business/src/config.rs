use std::any::Any;
use std::env::vars;

use log::info;
use roster_states::State;
use serde::Deserialize;

/// Where the member list is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub source_url: String,
}

/// Environment variables understood by [`RosterConfig::from_env`].
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_source_url: Option<String>,
}

impl RosterConfig {
    pub const DEFAULT_SOURCE_URL: &'static str =
        "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
        }
    }

    /// Reads `ROSTER_SOURCE_URL`, falling back to the default endpoint when unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.roster_source_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                info!("Using provided ROSTER_SOURCE_URL: {url}");
                Self::new(url)
            }
            None => Self::default(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SOURCE_URL)
    }
}

impl State for RosterConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
