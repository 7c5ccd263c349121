// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::Params,
    core::net,
    error::Result,
    file::resolve_out_path,
    progress::Progress,
    scrape,
    stats::PriceStats,
    store::{self, DataSet},
};

/// What one run produced.
pub struct RunSummary {
    pub path: PathBuf,
    /// Rows already in the log before this run.
    pub prior: usize,
    /// Rows this run appended.
    pub added: usize,
    /// Page candidates dropped for missing fields or bad prices.
    pub dropped: usize,
    /// The whole log after the append.
    pub dataset: DataSet,
    /// Statistics over the whole log; `None` when it is empty.
    pub stats: Option<PriceStats>,
}

/// fetch → parse → normalize → accumulate → persist → summarize.
pub fn run(params: &Params, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let path = resolve_out_path(&params.output)?;
    let client = net::client()?;

    // Shorten the trait-object lifetime so `progress` is usable again below
    let page_progress = progress.as_deref_mut().map(|p| p as &mut dyn Progress);
    let result = scrape::collect_products(&client, params.url(), page_progress)
        .and_then(|page| {
            info!(layout = ?page.layout, kept = page.records.len(), dropped = page.dropped, "page scraped");
            let appended = store::append_records(&path, page.records)?;
            Ok((page.dropped, appended))
        });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    let (dropped, appended) = result?;

    info!(path = %path.display(), prior = appended.prior, added = appended.added, "price log updated");

    let stats = PriceStats::compute(&appended.dataset.records);
    Ok(RunSummary {
        path,
        prior: appended.prior,
        added: appended.added,
        dropped,
        dataset: appended.dataset,
        stats,
    })
}
