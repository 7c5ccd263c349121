// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{DEFAULT_FILE, DEFAULT_OUT_DIR, DEFAULT_SAMPLE_ROWS, DEFAULT_URL, FALLBACK_CURRENCY};
use crate::config::options::Params;
use crate::progress::Progress;
use crate::record::Record;
use crate::runner::{self, RunSummary};
use crate::stats::{dominant_currency, PriceStats};

#[derive(Debug, Parser)]
#[command(name = "price_scrape", version, about = "Track product prices from a web page into a CSV log")]
pub struct Args {
    /// Target page (https:// is added when no scheme is given)
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// CSV log path; a directory gets results.csv inside it
    #[arg(long, default_value_os_t = PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE))]
    pub output: PathBuf,

    /// Rows to echo after the run
    #[arg(long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample: usize,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn params(&self) -> Params {
        let mut params = Params::new(&self.url, self.output.clone());
        params.sample_rows = self.sample;
        params
    }
}

/// Prints status lines to stdout as the run goes.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run(args: &Args) -> crate::error::Result<()> {
    let params = args.params();
    let summary = runner::run(&params, Some(&mut ConsoleProgress))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &summary, params.sample_rows)?;
    Ok(())
}

pub fn write_report<W: Write>(mut w: W, summary: &RunSummary, sample_rows: usize) -> io::Result<()> {
    writeln!(w, "[OK] Tracked {} product prices ({} new)", summary.dataset.len(), summary.added)?;
    writeln!(w, "[OK] Saved to {}", summary.path.display())?;

    if let Some(stats) = &summary.stats {
        let cur = dominant_currency(&summary.dataset.records).unwrap_or(FALLBACK_CURRENCY);
        write_stats(&mut w, stats, cur)?;
    }

    if !summary.dataset.is_empty() && sample_rows > 0 {
        writeln!(w)?;
        writeln!(w, "[DATA] Sample data:")?;
        write_sample(&mut w, summary.dataset.head(sample_rows))?;
    }
    Ok(())
}

fn write_stats<W: Write>(mut w: W, s: &PriceStats, cur: char) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "[DATA] Price Statistics:")?;
    writeln!(w, "   Count: {}", s.count)?;
    writeln!(w, "   Mean: {cur}{:.2}", s.mean)?;
    writeln!(w, "   Median: {cur}{:.2}", s.median)?;
    writeln!(w, "   Min: {cur}{:.2}", s.min)?;
    writeln!(w, "   Max: {cur}{:.2}", s.max)?;
    if let Some(std) = s.std {
        writeln!(w, "   Std: {cur}{:.2}", std)?;
    }
    Ok(())
}

const NAME_WIDTH: usize = 40;

fn write_sample<W: Write>(mut w: W, rows: &[Record]) -> io::Result<()> {
    writeln!(w, "{:>3}  {:<nw$}  {:>10}  {:<19}  url", "", "name", "price", "timestamp", nw = NAME_WIDTH)?;
    for (i, r) in rows.iter().enumerate() {
        let price = format!("{}{:.2}", r.currency, r.price);
        writeln!(
            w, "{:>3}  {:<nw$}  {:>10}  {:<19}  {}",
            i, clip(&r.name, NAME_WIDTH), price, r.timestamp, r.source_url, nw = NAME_WIDTH
        )?;
    }
    Ok(())
}

/// Shorten to `max` chars, ending in "..." when cut.
fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s!(s);
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataSet;

    fn rec(name: &str, price: f64) -> Record {
        Record { name: s!(name), price, currency: '£', timestamp: s!("2024-05-01 12:00:00"), source_url: s!("u") }
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["price_scrape"]);
        let p = args.params();
        assert_eq!(p.url(), "https://books.toscrape.com/");
        assert_eq!(p.output, PathBuf::from("output").join("results.csv"));
        assert_eq!(p.sample_rows, 5);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_overrides() {
        let args = Args::parse_from(["price_scrape", "--url", "shop.test", "--output", "x/y.csv", "--sample", "2", "-vv"]);
        let p = args.params();
        assert_eq!(p.url(), "https://shop.test");
        assert_eq!(p.output, PathBuf::from("x/y.csv"));
        assert_eq!(p.sample_rows, 2);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn clip_marks_cut() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn report_lists_stats_and_sample() {
        let records = vec![rec("A", 10.0), rec("B", 20.0), rec("C", 30.0)];
        let summary = RunSummary {
            path: PathBuf::from("output/results.csv"),
            prior: 1,
            added: 2,
            dropped: 0,
            stats: PriceStats::compute(&records),
            dataset: DataSet { records },
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &summary, 2).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("[OK] Tracked 3 product prices (2 new)"));
        assert!(text.contains("Saved to output"));
        assert!(text.contains("   Mean: £20.00"));
        assert!(text.contains("   Median: £20.00"));
        assert!(text.contains("   Std: £10.00"));
        assert!(text.contains("£10.00"));
        assert!(text.contains("£20.00"));
        // only two sample rows
        assert!(!text.contains("  C  "));
    }

    #[test]
    fn report_without_rows_skips_stats() {
        let summary = RunSummary {
            path: PathBuf::from("r.csv"),
            prior: 0,
            added: 0,
            dropped: 3,
            stats: None,
            dataset: DataSet::default(),
        };
        let mut buf = Vec::new();
        write_report(&mut buf, &summary, 5).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Tracked 0 product prices"));
        assert!(!text.contains("Statistics"));
        assert!(!text.contains("Sample"));
    }
}
