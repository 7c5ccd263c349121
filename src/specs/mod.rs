// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the data
//! lives in the HTML* and *how to extract it*, and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing**: a document string in, records out. No networking.
//! - **Selector choice & precedence**: a known layout first, a generic
//!   heuristic second.
//! - **Per-record tolerance**: a product card with a missing link or an
//!   unreadable price is dropped; the rest of the page still counts.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), persistence (`store`), statistics (`stats`).
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_products → core::net::http_get
//!                                   → specs::products::parse_doc
//!        → store::append_records → stats::PriceStats::compute
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against inline HTML fixtures.
pub mod products;
