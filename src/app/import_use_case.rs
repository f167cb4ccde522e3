use crate::apis::create_source;
use crate::app::ports::{EventRecorderPort, HttpClientPort, ImportEvent};
use crate::config::Config;
use crate::decoder::decode_body;
use crate::error::Result;
use crate::types::{GameSource, Source, TitleList};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

/// Outcome of one import in a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ImportOutcome {
    Imported(TitleList),
    NoResult,
    Failed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub source: Source,
    pub profile_id: String,
    #[serde(flatten)]
    pub outcome: ImportOutcome,
}

pub struct ImportUseCase<H: HttpClientPort + ?Sized> {
    pub http: Box<H>,
    pub recorder: Arc<dyn EventRecorderPort>,
    pub config: Config,
}

impl<H: HttpClientPort + ?Sized> ImportUseCase<H> {
    pub fn new(http: Box<H>, recorder: Arc<dyn EventRecorderPort>, config: Config) -> Self {
        Self { http, recorder, config }
    }

    /// Fetch, decode and extract one profile.
    ///
    /// `Ok(None)` means the site did not answer with a success status.
    /// Transport, decode and Steam JSON failures are returned as errors.
    pub async fn import(&self, source: Source, profile_id: &str) -> Result<Option<TitleList>> {
        let crawler = create_source(source);
        self.import_with(crawler.as_ref(), profile_id)
            .instrument(info_span!("import", source = %source))
            .await
    }

    pub async fn import_with(
        &self,
        crawler: &dyn GameSource,
        profile_id: &str,
    ) -> Result<Option<TitleList>> {
        let source = crawler.source();
        let request = crawler.build_request(profile_id, &self.config);
        info!("Fetching {}", request.url);

        let response = self.http.fetch(&request).await?;
        self.recorder.record(ImportEvent::Fetched {
            source,
            status: response.status,
            bytes: response.bytes.len(),
        });

        if response.status != crate::constants::HTTP_OK {
            warn!("{} answered with status {}", source, response.status);
            return Ok(None);
        }

        let document = decode_body(&response)?;
        crawler.extract(response.status, &document, &*self.recorder)
    }

    pub async fn import_steam_games(&self, steam_id: &str) -> Result<Option<TitleList>> {
        self.import(Source::Steam, steam_id).await
    }

    pub async fn import_psn_games(&self, psn_id: &str) -> Result<Option<TitleList>> {
        self.import(Source::Psn, psn_id).await
    }

    pub async fn import_xbl_games(&self, gamertag: &str) -> Result<Option<TitleList>> {
        self.import(Source::Xbl, gamertag).await
    }

    /// Run several imports one after another. A failure is reported for its
    /// own entry and does not stop the rest.
    pub async fn import_many(&self, requests: &[(Source, String)]) -> Vec<ImportReport> {
        let mut reports = Vec::with_capacity(requests.len());
        for (source, profile_id) in requests {
            let outcome = match self.import(*source, profile_id).await {
                Ok(Some(titles)) => ImportOutcome::Imported(titles),
                Ok(None) => ImportOutcome::NoResult,
                Err(e) => {
                    warn!("{} import for '{}' failed: {}", source, profile_id, e);
                    ImportOutcome::Failed(e.to_string())
                }
            };
            reports.push(ImportReport {
                source: *source,
                profile_id: profile_id.clone(),
                outcome,
            });
        }
        reports
    }
}
