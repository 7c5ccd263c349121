// src/stats.rs
use crate::record::Record;

/// Summary of the `price` column.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1). `None` below two rows.
    pub std: Option<f64>,
}

impl PriceStats {
    /// `None` for an empty dataset.
    pub fn compute(records: &[Record]) -> Option<Self> {
        if records.is_empty() { return None; }

        let mut prices: Vec<f64> = records.iter().map(|r| r.price).collect();
        prices.sort_by(f64::total_cmp);

        let n = prices.len();
        let mean = prices.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 1 {
            prices[n / 2]
        } else {
            (prices[n / 2 - 1] + prices[n / 2]) / 2.0
        };
        let std = (n > 1).then(|| {
            let ss: f64 = prices.iter().map(|p| (p - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        });

        Some(Self { count: n, mean, median, min: prices[0], max: prices[n - 1], std })
    }
}

/// Most frequent currency symbol; ties go to the one seen first.
pub fn dominant_currency(records: &[Record]) -> Option<char> {
    let mut counts: Vec<(char, usize)> = Vec::new();
    for r in records {
        match counts.iter_mut().find(|(c, _)| *c == r.currency) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.currency, 1)),
        }
    }
    let mut best: Option<(char, usize)> = None;
    for (c, n) in counts {
        if best.is_none_or(|(_, bn)| n > bn) {
            best = Some((c, n));
        }
    }
    best.map(|(c, _)| c)
}
