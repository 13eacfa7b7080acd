// src/specs/funds.rs
//! Scraping *spec* for the FII results page (`fii_resultado.php`).
//!
//! Purpose:
//! - Find the results table by its id (`#tabelaResultado`), then its `thead`
//!   and `tbody`.
//! - Read header labels and map each required column **by name**, so a
//!   reordered or renamed column fails loudly instead of shifting data.
//! - Hand back body rows as cleaned cell text (`FundsBundle`).
//!
//! Non-Responsibilities:
//! - **No networking**; the caller passes the HTML.
//! - **No number parsing**; `fund::Fund::from_raw` does that.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::config::consts::*;
use crate::core::html::{css, find, find_in, texts};
use crate::core::sanitize::same_label;
use crate::error::ScrapeError;
use crate::fund::RawFund;

static TABLE: LazyLock<Selector> = LazyLock::new(|| css(&join!("#", TABLE_ID)));
static THEAD: LazyLock<Selector> = LazyLock::new(|| css("thead"));
static TBODY: LazyLock<Selector> = LazyLock::new(|| css("tbody"));
static TR: LazyLock<Selector> = LazyLock::new(|| css("tr"));
static TH: LazyLock<Selector> = LazyLock::new(|| css("th"));
static TD: LazyLock<Selector> = LazyLock::new(|| css("td"));

pub struct FundsBundle {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn extract(doc: &str) -> Result<FundsBundle, ScrapeError> {
    let html = Html::parse_document(doc);

    let table = find(&html, &TABLE).ok_or(ScrapeError::MissingElement("#tabelaResultado"))?;
    let thead = find_in(table, &THEAD).ok_or(ScrapeError::MissingElement("thead"))?;
    let tbody = find_in(table, &TBODY).ok_or(ScrapeError::MissingElement("tbody"))?;

    let headers = texts(thead, &TH);

    let rows = tbody
        .select(&TR)
        .map(|tr| texts(tr, &TD))
        .filter(|cells| !cells.is_empty())
        .collect();

    Ok(FundsBundle { headers, rows })
}

/// Header-name → cell-index routing for one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    code: usize,
    segment: usize,
    quote: usize,
    ffo_yield: usize,
    dividend_yield: usize,
    price_to_book: usize,
    market_value: usize,
    liquidity: usize,
    property_count: usize,
    price_per_m2: usize,
    rent_per_m2: usize,
    cap_rate: usize,
    vacancy: usize,
}

impl ColumnMap {
    pub fn from_headers(headers: &[String]) -> Result<Self, ScrapeError> {
        let col = |name: &'static str| {
            headers
                .iter()
                .position(|h| same_label(h, name))
                .ok_or(ScrapeError::MissingColumn(name))
        };

        Ok(Self {
            code: col(COL_CODE)?,
            segment: col(COL_SEGMENT)?,
            quote: col(COL_QUOTE)?,
            ffo_yield: col(COL_FFO_YIELD)?,
            dividend_yield: col(COL_DIVIDEND_YIELD)?,
            price_to_book: col(COL_PRICE_TO_BOOK)?,
            market_value: col(COL_MARKET_VALUE)?,
            liquidity: col(COL_LIQUIDITY)?,
            property_count: col(COL_PROPERTY_COUNT)?,
            price_per_m2: col(COL_PRICE_PER_M2)?,
            rent_per_m2: col(COL_RENT_PER_M2)?,
            cap_rate: col(COL_CAP_RATE)?,
            vacancy: col(COL_VACANCY)?,
        })
    }

    /// Smallest row length that covers every mapped column.
    pub fn width(&self) -> usize {
        [
            self.code, self.segment, self.quote, self.ffo_yield, self.dividend_yield,
            self.price_to_book, self.market_value, self.liquidity, self.property_count,
            self.price_per_m2, self.rent_per_m2, self.cap_rate, self.vacancy,
        ]
        .into_iter()
        .max()
        .map_or(0, |m| m + 1)
    }

    /// Route one body row's cells to named fields. `row` is only used in errors.
    pub fn route<'r>(&self, row: usize, cells: &'r [String]) -> Result<RawFund<'r>, ScrapeError> {
        let expected = self.width();
        if cells.len() < expected {
            return Err(ScrapeError::ShortRow { row, expected, found: cells.len() });
        }
        let at = |i: usize| cells[i].as_str();

        Ok(RawFund {
            code: at(self.code),
            segment: at(self.segment),
            quote: at(self.quote),
            ffo_yield: at(self.ffo_yield),
            dividend_yield: at(self.dividend_yield),
            price_to_book: at(self.price_to_book),
            market_value: at(self.market_value),
            liquidity: at(self.liquidity),
            property_count: at(self.property_count),
            price_per_m2: at(self.price_per_m2),
            rent_per_m2: at(self.rent_per_m2),
            cap_rate: at(self.cap_rate),
            vacancy: at(self.vacancy),
        })
    }
}
