//! # Scraping “specs” module
//!
//! Page-specific scraping specifications: *where the ground truth lives in the
//! HTML* and *how to get it out* as plain cell text.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched pages.
//! - **Anchor choice** (element id, then `thead`/`tbody`) and column routing by
//!   header label.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`), **number parsing** (`core::locale`),
//!   **filtering** (`strategy`) or **rendering** (`table`).
//!
//! ## Typical call chain
//! ```text
//! bin/cli → Scraper::fetch → Page::scrape → specs::funds::extract
//!                                       ↘  ColumnMap::route → Fund::from_raw
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline HTML fixtures.
pub mod funds;
