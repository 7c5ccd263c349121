// src/scrape.rs
use chrono::Local;
use reqwest::blocking::Client;
use tracing::debug;

use crate::{
    config::consts::TIMESTAMP_FMT,
    core::net,
    progress::Progress,
    record::Record,
    specs::products::{self, Layout},
    error::Result,
};

/// Records from one page, plus how they were found.
pub struct PageScrape {
    pub layout: Layout,
    pub records: Vec<Record>,
    pub dropped: usize,
}

/// Timestamp shared by every record of a run.
pub fn run_timestamp() -> String {
    Local::now().format(TIMESTAMP_FMT).to_string()
}

/// Fetch `url` and extract its product prices.
/// Network failures propagate; per-record failures are only counted.
pub fn collect_products(
    client: &Client,
    url: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PageScrape> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Monitoring prices from {url}..."));
    }

    let html = net::http_get(client, url)?;
    let bundle = products::parse_doc(&html, url, &run_timestamp());
    debug!(url, layout = ?bundle.layout, "parsed");

    if let Some(p) = progress.as_deref_mut() {
        p.page_done(bundle.records.len(), bundle.dropped);
    }

    Ok(PageScrape { layout: bundle.layout, records: bundle.records, dropped: bundle.dropped })
}
