// src/store.rs
//
// The CSV price log. Reruns read what is there, append in memory and
// rewrite the whole file, so the log only ever grows.

use std::{fs, path::Path};

use tracing::debug;

use crate::config::consts::CSV_HEADERS;
use crate::error::Result;
use crate::file::ensure_parent;
use crate::record::Record;

#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub records: Vec<Record>,
}

impl DataSet {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn head(&self, n: usize) -> &[Record] { &self.records[..n.min(self.records.len())] }
}

/// What an append did to the log.
#[derive(Clone, Debug)]
pub struct AppendSummary {
    pub prior: usize,
    pub added: usize,
    pub dataset: DataSet,
}

/// Read every record from `path`. A missing or empty file is an empty log.
/// Any malformed row is an error, so the caller never rewrites over data it could not read.
pub fn load_dataset(path: &Path) -> Result<DataSet> {
    if !path.exists() || fs::metadata(path)?.len() == 0 {
        return Ok(DataSet::default());
    }
    let mut rdr = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    debug!(path = %path.display(), rows = records.len(), "loaded price log");
    Ok(DataSet { records })
}

/// Write the whole log, header first, via a temp file + rename.
pub fn save_dataset(path: &Path, ds: &DataSet) -> Result<()> {
    ensure_parent(path)?;
    let tmp = path.with_extension("tmp");
    {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_path(&tmp)?;
        wtr.write_record(CSV_HEADERS)?;
        for r in &ds.records {
            wtr.serialize(r)?;
        }
        wtr.flush()?;
    }
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), rows = ds.len(), "saved price log");
    Ok(())
}

/// Concatenate `new` after the existing log and rewrite it.
pub fn append_records(path: &Path, new: Vec<Record>) -> Result<AppendSummary> {
    let mut dataset = load_dataset(path)?;
    let prior = dataset.len();
    let added = new.len();
    dataset.records.extend(new);
    save_dataset(path, &dataset)?;
    Ok(AppendSummary { prior, added, dataset })
}
