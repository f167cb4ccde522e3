use super::{extract_row_titles, is_success};
use crate::app::ports::{EventRecorderPort, FetchRequest, RedirectPolicy};
use crate::config::Config;
use crate::constants::{XBL_ROW_SELECTOR, XBL_TITLE_SELECTOR};
use crate::error::Result;
use crate::normalize::xbl_gamertag;
use crate::types::{GameSource, Source, TitleList};
use tracing::{debug, info, instrument};

/// Scrapes the recent-games table of a gamertag search result.
/// The search endpoint answers with a redirect to the profile, so redirects are followed.
pub struct XblCrawler;

impl Default for XblCrawler {
    fn default() -> Self {
        Self::new()
    }
}

impl XblCrawler {
    pub fn new() -> Self {
        Self
    }

    pub fn search_url(host: &str, gamertag: &str) -> String {
        format!("http://{host}/search/{}", xbl_gamertag(gamertag))
    }
}

impl GameSource for XblCrawler {
    fn source(&self) -> Source {
        Source::Xbl
    }

    fn build_request(&self, profile_id: &str, config: &Config) -> FetchRequest {
        FetchRequest {
            url: Self::search_url(&config.hosts.xbl, profile_id),
            headers: vec![("Accept-Encoding".to_string(), "gzip".to_string())],
            timeout: config.timeout(),
            redirects: RedirectPolicy::Follow,
        }
    }

    #[instrument(skip(self, document, recorder), fields(bytes = document.len()))]
    fn extract(
        &self,
        status: u16,
        document: &str,
        recorder: &dyn EventRecorderPort,
    ) -> Result<Option<TitleList>> {
        if !is_success(status) {
            debug!("XBL returned status {}, no result", status);
            return Ok(None);
        }

        let titles = extract_row_titles(
            Source::Xbl,
            document,
            XBL_ROW_SELECTOR,
            XBL_TITLE_SELECTOR,
            recorder,
        )?;
        info!("Extracted {} XBL titles", titles.len());
        Ok(Some(titles))
    }
}
