// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::core::net;

/// Resolved options for one scrape run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Target page. Always carries an `http://` or `https://` scheme.
    url: String,
    /// Where the CSV log lives. May still be a directory hint until resolved.
    pub output: PathBuf,
    /// Leading rows echoed after the run.
    pub sample_rows: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            url: s!(DEFAULT_URL),
            output: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }
}

impl Params {
    pub fn new(url: &str, output: impl Into<PathBuf>) -> Self {
        let mut params = Self { output: output.into(), ..Self::default() };
        params.set_url(url);
        params
    }

    pub fn url(&self) -> &str { &self.url }

    /// Accepts bare hosts ("books.toscrape.com") by prepending `https://`.
    pub fn set_url(&mut self, text: &str) {
        self.url = net::normalize_url(text);
    }
}
