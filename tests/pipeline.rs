// tests/pipeline.rs
//
// Offline run of parse → filter → render against a captured results page.

use fii_scrape::{table, Fund, NumberFormat, Page, RawFund, ScrapeError, Strategy};

const FIXTURE: &str = include_str!("fixtures/fii_resultado.html");

/// Strategy used by the binary.
fn screen() -> Strategy {
    Strategy {
        min_quote: 50.0,
        min_dividend_yield: 5.0,
        min_price_to_book: 0.70,
        min_market_value: 200_000_000.0,
        min_liquidity: 50_000.0,
        min_property_count: 5,
        max_vacancy: 10.0,
        ..Strategy::default()
    }
}

fn funds() -> Vec<Fund> {
    Page::new(FIXTURE).scrape(&NumberFormat::pt_br()).unwrap()
}

fn by_code<'a>(funds: &'a [Fund], code: &str) -> &'a Fund {
    funds.iter().find(|f| f.code == code).unwrap()
}

#[test]
fn fixture_parses_every_row() {
    let funds = funds();
    let codes: Vec<&str> = funds.iter().map(|f| f.code.as_str()).collect();
    assert_eq!(codes, ["ABCD11", "VACA11", "SMAL11", "HGLG11", "CHEA11", "ZERO11"]);

    let hglg = by_code(&funds, "HGLG11");
    assert_eq!(hglg.segment, "Logística");
    assert_eq!(hglg.quote, 160.5);
    assert_eq!(hglg.ffo_yield, -1.2);
    assert_eq!(hglg.market_value, 4_567_890_123.0);
    assert_eq!(hglg.liquidity, 8_123_456.0);
    assert_eq!(hglg.property_count, 20);
    assert_eq!(hglg.vacancy, 2.5);
}

#[test]
fn passing_fund_passes() {
    let funds = funds();
    assert!(screen().accepts(by_code(&funds, "ABCD11")));
}

#[test]
fn vacancy_over_max_fails() {
    let funds = funds();
    assert!(!screen().accepts(by_code(&funds, "VACA11")));
}

#[test]
fn small_market_value_fails() {
    let funds = funds();
    assert!(!screen().accepts(by_code(&funds, "SMAL11")));
}

#[test]
fn identity_strategy_keeps_everything() {
    let funds = funds();
    assert_eq!(Strategy::default().filter(&funds).len(), funds.len());
}

#[test]
fn segment_filter_narrows() {
    let funds = funds();
    let s = Strategy { segment: "Shoppings".into(), ..Strategy::default() };
    let kept: Vec<&str> = s.filter(&funds).into_iter().map(|f| f.code.as_str()).collect();
    assert_eq!(kept, ["ABCD11", "VACA11"]);
}

#[test]
fn screened_table_matches_layout() {
    let funds = funds();
    let kept = screen().filter(&funds);
    let out = table::render(kept, &NumberFormat::pt_br());

    let expected = [
        "╒════╤══════════╤════════════╤═════════════════╤══════════════════╕",
        "│    │ CÓDIGO   │ SEGMENTO   │ COTAÇÃO ATUAL   │ DIVIDEND YIELD   │",
        "╞════╪══════════╪════════════╪═════════════════╪══════════════════╡",
        "│  0 │ ABCD11   │ Shoppings  │ R$ 60,00        │ 6%               │",
        "├────┼──────────┼────────────┼─────────────────┼──────────────────┤",
        "│  1 │ HGLG11   │ Logística  │ R$ 160,50       │ 8,4%             │",
        "╘════╧══════════╧════════════╧═════════════════╧══════════════════╛",
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn single_record_render() {
    let raw = RawFund {
        code: "ABCD11",
        segment: "Shoppings",
        quote: "60,00",
        ffo_yield: "0,00%",
        dividend_yield: "6%",
        price_to_book: "0,80",
        market_value: "300.000.000",
        liquidity: "60.000",
        property_count: "7",
        price_per_m2: "0",
        rent_per_m2: "0",
        cap_rate: "0%",
        vacancy: "5%",
    };
    let fmt = NumberFormat::pt_br();
    let fund = Fund::from_raw(&raw, &fmt).unwrap();
    let out = table::render([&fund], &fmt);

    assert!(out.contains("│  0 │"));
    assert!(out.contains("ABCD11"));
    assert!(out.contains("Shoppings"));
    assert!(out.contains("R$ 60,00"));
    assert!(out.contains("6%"));
}

#[test]
fn renamed_column_fails_loudly() {
    let doc = FIXTURE.replace("<th>Liquidez</th>", "<th>Liquidez média diária</th>");
    let err = Page::new(doc).scrape(&NumberFormat::pt_br()).unwrap_err();
    assert!(matches!(err, ScrapeError::MissingColumn("Liquidez")));
}

#[test]
fn malformed_cell_aborts_scrape() {
    let doc = FIXTURE.replace("<td>4.567.890.123</td>", "<td>4,567,890</td>");
    let err = Page::new(doc).scrape(&NumberFormat::pt_br()).unwrap_err();
    match err {
        ScrapeError::Row { row, .. } => assert_eq!(row, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_table_is_an_error() {
    let doc = FIXTURE.replace("tabelaResultado", "tabelaAntiga");
    let err = Page::new(doc).scrape(&NumberFormat::pt_br()).unwrap_err();
    assert!(matches!(err, ScrapeError::MissingElement(_)));
}
