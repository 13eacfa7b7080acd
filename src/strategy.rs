// src/strategy.rs
//
// Threshold screen over fund records: an optional exact segment match, a
// minimum per metric and a maximum vacancy. A fund passes only when every
// bound holds.

use crate::fund::Fund;

#[derive(Clone, Debug, PartialEq)]
pub struct Strategy {
    /// Exact, case-sensitive segment. Empty matches every segment.
    pub segment: String,
    pub min_quote: f64,
    pub min_ffo_yield: f64,
    pub min_dividend_yield: f64,
    pub min_price_to_book: f64,
    pub min_market_value: f64,
    pub min_liquidity: f64,
    pub min_property_count: u32,
    pub min_price_per_m2: f64,
    pub min_rent_per_m2: f64,
    pub min_cap_rate: f64,
    pub max_vacancy: f64,
}

/// Unbounded on every side: accepts any fund.
impl Default for Strategy {
    fn default() -> Self {
        Self {
            segment: s!(),
            min_quote: f64::NEG_INFINITY,
            min_ffo_yield: f64::NEG_INFINITY,
            min_dividend_yield: f64::NEG_INFINITY,
            min_price_to_book: f64::NEG_INFINITY,
            min_market_value: f64::NEG_INFINITY,
            min_liquidity: f64::NEG_INFINITY,
            min_property_count: 0,
            min_price_per_m2: f64::NEG_INFINITY,
            min_rent_per_m2: f64::NEG_INFINITY,
            min_cap_rate: f64::NEG_INFINITY,
            max_vacancy: f64::INFINITY,
        }
    }
}

impl Strategy {
    pub fn accepts(&self, fund: &Fund) -> bool {
        let segment_ok = self.segment.is_empty() || fund.segment == self.segment;

        segment_ok
            && fund.quote >= self.min_quote
            && fund.ffo_yield >= self.min_ffo_yield
            && fund.dividend_yield >= self.min_dividend_yield
            && fund.price_to_book >= self.min_price_to_book
            && fund.market_value >= self.min_market_value
            && fund.liquidity >= self.min_liquidity
            && fund.property_count >= self.min_property_count
            && fund.price_per_m2 >= self.min_price_per_m2
            && fund.rent_per_m2 >= self.min_rent_per_m2
            && fund.cap_rate >= self.min_cap_rate
            && fund.vacancy <= self.max_vacancy
    }

    /// Keep accepted funds, in input order.
    pub fn filter<'a, I>(&self, funds: I) -> Vec<&'a Fund>
    where
        I: IntoIterator<Item = &'a Fund>,
    {
        funds.into_iter().filter(|f| self.accepts(f)).collect()
    }
}
