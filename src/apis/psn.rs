use super::{extract_row_titles, is_success};
use crate::app::ports::{EventRecorderPort, FetchRequest, RedirectPolicy};
use crate::config::Config;
use crate::constants::{PSN_ACCEPT_CHARSET, PSN_TITLE_SECTION_SELECTOR, PSN_TITLE_SELECTOR};
use crate::error::Result;
use crate::types::{GameSource, Source, TitleList};
use tracing::{debug, info, instrument};

/// Scrapes the trophy list fragment the PlayStation profile page loads over XHR
pub struct PsnCrawler;

impl Default for PsnCrawler {
    fn default() -> Self {
        Self::new()
    }
}

impl PsnCrawler {
    pub fn new() -> Self {
        Self
    }

    pub fn trophies_url(host: &str, psn_id: &str) -> String {
        format!("http://{host}/playstation/psn/profile/{psn_id}/get_ordered_trophies_data")
    }
}

impl GameSource for PsnCrawler {
    fn source(&self) -> Source {
        Source::Psn
    }

    fn build_request(&self, profile_id: &str, config: &Config) -> FetchRequest {
        // the endpoint only answers requests that look like the site's own XHR
        let headers = [
            ("Host", config.hosts.psn.as_str()),
            ("X-Requested-With", "XMLHttpRequest"),
            ("User-Agent", config.user_agent.as_str()),
            ("Accept-Charset", PSN_ACCEPT_CHARSET),
            ("Accept", "text/html"),
            ("Accept-Encoding", "gzip"),
        ];
        FetchRequest {
            url: Self::trophies_url(&config.hosts.psn, profile_id),
            headers: headers.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            timeout: config.timeout(),
            redirects: RedirectPolicy::None,
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
            debug!("PSN returned status {}, no result", status);
            return Ok(None);
        }

        let titles = extract_row_titles(
            Source::Psn,
            document,
            PSN_TITLE_SECTION_SELECTOR,
            PSN_TITLE_SELECTOR,
            recorder,
        )?;
        info!("Extracted {} PSN titles", titles.len());
        Ok(Some(titles))
    }
}
