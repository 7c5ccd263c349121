// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://books.toscrape.com/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const TIMEOUT_SECS: u64 = 10;

// Scrape
pub const FALLBACK_LIMIT: usize = 20;
pub const FALLBACK_CURRENCY: char = '$';
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// Export
pub const DEFAULT_OUT_DIR: &str = "output";
pub const DEFAULT_FILE: &str = "results.csv";
pub const CSV_HEADERS: [&str; 5] = ["name", "price", "currency", "timestamp", "url"];

// Report
pub const DEFAULT_SAMPLE_ROWS: usize = 5;
