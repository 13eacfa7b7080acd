// src/core/net.rs
//
// The one network call. Building an `HttpSource` does no I/O; `fetch` does
// exactly one GET and hands back the body or the error. No retries.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::options::FetchOptions;
use crate::error::ScrapeError;

/// Anything that can produce the results page HTML.
pub trait Source {
    fn fetch(&self) -> Result<String, ScrapeError>;
}

pub struct HttpSource {
    client: Client,
    opts: FetchOptions,
}

impl HttpSource {
    pub fn new(opts: FetchOptions) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client, opts })
    }

    pub fn options(&self) -> &FetchOptions { &self.opts }
}

impl Source for HttpSource {
    fn fetch(&self) -> Result<String, ScrapeError> {
        info!(url = %self.opts.url, timeout = ?self.opts.timeout, "fetching results page");

        let resp = self.client.get(&self.opts.url).send()?.error_for_status()?;
        let status = resp.status();
        let body = resp.text()?;

        debug!(%status, bytes = body.len(), "results page fetched");
        Ok(body)
    }
}
