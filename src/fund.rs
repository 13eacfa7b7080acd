// src/fund.rs
//
// One real-estate fund (FII) as listed on the results page.
//
// - RawFund: cell text exactly as scraped, already routed to named fields.
// - Fund: typed record. Built in one go from a RawFund; a single bad cell
//         rejects the whole record.

use crate::core::locale::NumberFormat;
use crate::error::{FundError, NumberError};

/// Cell text for one row, keyed by field rather than by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFund<'a> {
    pub code: &'a str,
    pub segment: &'a str,
    pub quote: &'a str,
    pub ffo_yield: &'a str,
    pub dividend_yield: &'a str,
    pub price_to_book: &'a str,
    pub market_value: &'a str,
    pub liquidity: &'a str,
    pub property_count: &'a str,
    pub price_per_m2: &'a str,
    pub rent_per_m2: &'a str,
    pub cap_rate: &'a str,
    pub vacancy: &'a str,
}

/// Typed fund record. Percentages hold their magnitude (`5,2%` → `5.2`).
#[derive(Clone, Debug, PartialEq)]
pub struct Fund {
    pub code: String,
    pub segment: String,
    pub quote: f64,
    pub ffo_yield: f64,
    pub dividend_yield: f64,
    pub price_to_book: f64,
    pub market_value: f64,
    pub liquidity: f64,
    pub property_count: u32,
    pub price_per_m2: f64,
    pub rent_per_m2: f64,
    pub cap_rate: f64,
    pub vacancy: f64,
}

impl Fund {
    pub fn from_raw(raw: &RawFund<'_>, fmt: &NumberFormat) -> Result<Self, FundError> {
        let dec = |field: &'static str, value: &str| field_result(field, value, fmt.parse_decimal(value));
        let pct = |field: &'static str, value: &str| field_result(field, value, fmt.parse_percent(value));

        Ok(Self {
            code: s!(raw.code.trim()),
            segment: s!(raw.segment.trim()),
            quote: dec("quote", raw.quote)?,
            ffo_yield: pct("ffo_yield", raw.ffo_yield)?,
            dividend_yield: pct("dividend_yield", raw.dividend_yield)?,
            price_to_book: dec("price_to_book", raw.price_to_book)?,
            market_value: dec("market_value", raw.market_value)?,
            liquidity: dec("liquidity", raw.liquidity)?,
            property_count: field_result(
                "property_count",
                raw.property_count,
                fmt.parse_count(raw.property_count),
            )?,
            price_per_m2: dec("price_per_m2", raw.price_per_m2)?,
            rent_per_m2: dec("rent_per_m2", raw.rent_per_m2)?,
            cap_rate: pct("cap_rate", raw.cap_rate)?,
            vacancy: pct("vacancy", raw.vacancy)?,
        })
    }
}

fn field_result<T>(
    field: &'static str,
    value: &str,
    parsed: Result<T, NumberError>,
) -> Result<T, FundError> {
    parsed.map_err(|source| FundError::Field { field, value: s!(value.trim()), source })
}
