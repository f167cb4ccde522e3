use super::{is_success, selector};
use crate::app::ports::{EventRecorderPort, FetchRequest, RedirectPolicy};
use crate::config::Config;
use crate::constants::{STEAM_GAMES_MARKER, STEAM_SCRIPT_SELECTOR};
use crate::error::Result;
use crate::types::{GameSource, Source, TitleList};
use scraper::Html;
use serde::Deserialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Deserialize)]
struct SteamGame {
    name: String,
}

/// Reads the owned-games list Steam embeds as a JSON literal in an inline script
pub struct SteamCrawler;

impl Default for SteamCrawler {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamCrawler {
    pub fn new() -> Self {
        Self
    }

    pub fn profile_url(host: &str, profile_id: &str) -> String {
        format!("http://{host}/id/{profile_id}/games?tab=all")
    }

    /// Text of the last script containing the games marker, or empty.
    fn games_script(html: &Html) -> Result<String> {
        let scripts = selector(STEAM_SCRIPT_SELECTOR)?;
        let mut games_script = String::new();
        for script in html.select(&scripts) {
            let text = script.text().collect::<String>();
            if text.contains(STEAM_GAMES_MARKER) {
                games_script = text;
            }
        }
        Ok(games_script)
    }

    /// Slice from the first `[` to the first `]` after it. Nested arrays
    /// ahead of the games list defeat this; it matches the page as served.
    fn array_literal(script: &str) -> &str {
        let Some(start) = script.find('[') else {
            return "";
        };
        match script[start..].find(']') {
            Some(len) => &script[start..=start + len],
            None => "",
        }
    }
}

impl GameSource for SteamCrawler {
    fn source(&self) -> Source {
        Source::Steam
    }

    fn build_request(&self, profile_id: &str, config: &Config) -> FetchRequest {
        FetchRequest {
            url: Self::profile_url(&config.hosts.steam, profile_id),
            headers: vec![("Accept-Encoding".to_string(), "gzip".to_string())],
            timeout: config.timeout(),
            redirects: RedirectPolicy::None,
        }
    }

    #[instrument(skip(self, document, _recorder), fields(bytes = document.len()))]
    fn extract(
        &self,
        status: u16,
        document: &str,
        _recorder: &dyn EventRecorderPort,
    ) -> Result<Option<TitleList>> {
        if !is_success(status) {
            debug!("Steam returned status {}, no result", status);
            return Ok(None);
        }

        let html = Html::parse_document(document);
        let script = Self::games_script(&html)?;
        let games: Vec<SteamGame> = serde_json::from_str(Self::array_literal(&script))?;

        let titles: TitleList = games.into_iter().map(|g| g.name).collect();
        info!("Extracted {} Steam titles", titles.len());
        Ok(Some(titles))
    }
}
