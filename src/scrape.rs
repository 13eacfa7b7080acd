// src/scrape.rs
//
// Pipeline glue: fetch once, parse the cached page as often as needed,
// screen and render.

use tracing::{debug, info};

use crate::{
    core::{NumberFormat, Source},
    error::ScrapeError,
    fund::Fund,
    specs::funds::{self, ColumnMap},
    strategy::Strategy,
    table,
};

/// Results page body, held in memory. Scraping re-parses it; it never refetches.
#[derive(Clone, Debug)]
pub struct Page {
    html: String,
}

impl Page {
    pub fn new(html: impl Into<String>) -> Self { Self { html: html.into() } }

    /// Every row of the results table, in page order.
    /// The first row that fails to parse aborts the whole batch.
    pub fn scrape(&self, fmt: &NumberFormat) -> Result<Vec<Fund>, ScrapeError> {
        let bundle = funds::extract(&self.html)?;
        let map = ColumnMap::from_headers(&bundle.headers)?;

        let mut out = Vec::with_capacity(bundle.rows.len());
        for (row, cells) in bundle.rows.iter().enumerate() {
            let raw = map.route(row, cells)?;
            let fund = Fund::from_raw(&raw, fmt).map_err(|source| ScrapeError::Row { row, source })?;
            out.push(fund);
        }

        info!(funds = out.len(), "results table parsed");
        Ok(out)
    }
}

pub struct Scraper<S> {
    source: S,
    fmt: NumberFormat,
}

impl<S: Source> Scraper<S> {
    /// No I/O happens here; see `fetch`.
    pub fn new(source: S, fmt: NumberFormat) -> Self { Self { source, fmt } }

    pub fn format(&self) -> &NumberFormat { &self.fmt }

    pub fn fetch(&self) -> Result<Page, ScrapeError> {
        self.source.fetch().map(Page::new)
    }

    /// fetch → parse → filter → render. Every call is a fresh GET; use
    /// `fetch` + `Page::scrape` to screen one download more than once.
    pub fn screen(&self, strategy: &Strategy) -> Result<String, ScrapeError> {
        let page = self.fetch()?;
        let funds = page.scrape(&self.fmt)?;
        let kept = strategy.filter(&funds);
        debug!(total = funds.len(), kept = kept.len(), "strategy applied");
        Ok(table::render(kept, &self.fmt))
    }
}
