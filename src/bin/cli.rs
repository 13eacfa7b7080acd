// src/bin/cli.rs
use color_eyre::eyre::Result;

use fii_scrape::{
    config::options::FetchOptions, log, HttpSource, NumberFormat, Scraper, Strategy,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init();

    let strategy = Strategy {
        min_quote: 50.0,
        min_dividend_yield: 5.0,
        min_price_to_book: 0.70,
        min_market_value: 200_000_000.0,
        min_liquidity: 50_000.0,
        min_property_count: 5,
        max_vacancy: 10.0,
        ..Strategy::default()
    };

    let source = HttpSource::new(FetchOptions::default())?;
    let scraper = Scraper::new(source, NumberFormat::pt_br());
    println!("{}", scraper.screen(&strategy)?);
    Ok(())
}
