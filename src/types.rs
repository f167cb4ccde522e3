use crate::app::ports::{EventRecorderPort, FetchRequest};
use crate::config::Config;
use crate::constants::{PSN_SOURCE, STEAM_SOURCE, XBL_SOURCE};
use crate::error::{ImportError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Ordered game titles, in the order the source page lists them
pub type TitleList = Vec<String>;

/// Third-party services a game library can be imported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Steam,
    Psn,
    Xbl,
}

impl Source {
    pub fn all() -> [Source; 3] {
        [Source::Steam, Source::Psn, Source::Xbl]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Steam => STEAM_SOURCE,
            Source::Psn => PSN_SOURCE,
            Source::Xbl => XBL_SOURCE,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            STEAM_SOURCE => Ok(Source::Steam),
            PSN_SOURCE => Ok(Source::Psn),
            XBL_SOURCE => Ok(Source::Xbl),
            other => Err(ImportError::Config(format!("unknown source '{other}'"))),
        }
    }
}

/// Core trait that every game source implements
pub trait GameSource: Send + Sync {
    fn source(&self) -> Source;

    /// Build the outbound request for a profile identifier
    fn build_request(&self, profile_id: &str, config: &Config) -> FetchRequest;

    /// Extract titles from a decoded page.
    ///
    /// Returns `Ok(None)` when `status` is not a success, so callers can tell
    /// an unreachable profile apart from one that owns zero games.
    fn extract(
        &self,
        status: u16,
        document: &str,
        recorder: &dyn EventRecorderPort,
    ) -> Result<Option<TitleList>>;
}
