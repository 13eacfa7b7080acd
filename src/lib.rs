// src/lib.rs
//! Scraper and screener for the fundamentus FII results page.
//!
//! ```text
//! HttpSource::fetch → Page::scrape → Strategy::filter → table::render
//! ```

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod fund;
pub mod log;
pub mod scrape;
pub mod specs;
pub mod strategy;
pub mod table;

pub use crate::core::{HttpSource, NumberFormat, Source};
pub use error::{FundError, NumberError, ScrapeError};
pub use fund::{Fund, RawFund};
pub use scrape::{Page, Scraper};
pub use strategy::Strategy;
