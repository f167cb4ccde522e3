pub mod psn;
pub mod steam;
pub mod xbl;

pub use psn::PsnCrawler;
pub use steam::SteamCrawler;
pub use xbl::XblCrawler;

use crate::app::ports::{EventRecorderPort, ImportEvent};
use crate::constants::HTTP_OK;
use crate::error::{ImportError, Result};
use crate::normalize::ascii_title;
use crate::types::{GameSource, Source, TitleList};
use scraper::{Html, Selector};
use tracing::debug;

pub fn create_source(source: Source) -> Box<dyn GameSource> {
    match source {
        Source::Steam => Box::new(SteamCrawler::new()),
        Source::Psn => Box::new(PsnCrawler::new()),
        Source::Xbl => Box::new(XblCrawler::new()),
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ImportError::Selector(format!("{css}: {e:?}")))
}

pub(crate) fn is_success(status: u16) -> bool {
    status == HTTP_OK
}

/// Shared row scan for table-like pages: for every `row_css` match take the
/// first `title_css` descendant, ASCII-normalize its text and keep it.
/// Rows without a usable title are recorded and skipped.
pub(crate) fn extract_row_titles(
    source: Source,
    document: &str,
    row_css: &str,
    title_css: &str,
    recorder: &dyn EventRecorderPort,
) -> Result<TitleList> {
    let row_selector = selector(row_css)?;
    let title_selector = selector(title_css)?;
    let html = Html::parse_document(document);

    let mut titles = Vec::new();
    for (row_index, row) in html.select(&row_selector).enumerate() {
        let title = row
            .select(&title_selector)
            .next()
            .map(|el| ascii_title(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty());

        match title {
            Some(title) => titles.push(title),
            None => recorder.record(ImportEvent::RowSkipped { source, row_index }),
        }
    }

    debug!("{} rows yielded {} titles", source, titles.len());
    Ok(titles)
}
