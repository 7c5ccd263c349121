// src/record.rs
use serde::{Deserialize, Serialize};

/// One product price observation. Field order is the CSV column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub price: f64,
    pub currency: char,
    pub timestamp: String,
    #[serde(rename = "url")]
    pub source_url: String,
}

impl Record {
    /// Build a record from raw price text. `None` when the text has no usable number.
    pub fn from_price_text(name: String, price_text: &str, timestamp: &str, source_url: String) -> Option<Self> {
        let price = crate::core::price::extract_price(price_text)?;
        // Records carry non-negative prices only; the number pattern has no sign
        if price < 0.0 { return None; }
        Some(Self {
            name,
            price,
            currency: crate::core::price::detect_currency(price_text),
            timestamp: s!(timestamp),
            source_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_price_text_fills_every_field() {
        let r = Record::from_price_text(s!("Book"), "£51.77", "2024-01-01 00:00:00", s!("https://x/b")).unwrap();
        assert_eq!(r.name, "Book");
        assert_eq!(r.price, 51.77);
        assert_eq!(r.currency, '£');
        assert_eq!(r.timestamp, "2024-01-01 00:00:00");
        assert_eq!(r.source_url, "https://x/b");
    }

    #[test]
    fn from_price_text_rejects_unparsable() {
        assert!(Record::from_price_text(s!("Book"), "sold out", "t", s!("u")).is_none());
    }
}
