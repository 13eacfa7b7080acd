// src/config/consts.rs

// Net config
pub const URL: &str = "https://www.fundamentus.com.br/fii_resultado.php";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const TIMEOUT_SECS: u64 = 10;

// Page structure
pub const TABLE_ID: &str = "tabelaResultado";

// Column headers as printed by the site (matched case-insensitively)
pub const COL_CODE: &str = "Papel";
pub const COL_SEGMENT: &str = "Segmento";
pub const COL_QUOTE: &str = "Cotação";
pub const COL_FFO_YIELD: &str = "FFO Yield";
pub const COL_DIVIDEND_YIELD: &str = "Dividend Yield";
pub const COL_PRICE_TO_BOOK: &str = "P/VP";
pub const COL_MARKET_VALUE: &str = "Valor de Mercado";
pub const COL_LIQUIDITY: &str = "Liquidez";
pub const COL_PROPERTY_COUNT: &str = "Qtd de imóveis";
pub const COL_PRICE_PER_M2: &str = "Preço do m2";
pub const COL_RENT_PER_M2: &str = "Aluguel por m2";
pub const COL_CAP_RATE: &str = "Cap Rate";
pub const COL_VACANCY: &str = "Vacância Média";

// Render
pub const RENDER_HEADERS: [&str; 4] = ["CÓDIGO", "SEGMENTO", "COTAÇÃO ATUAL", "DIVIDEND YIELD"];
