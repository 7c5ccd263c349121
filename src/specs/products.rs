// src/specs/products.rs
//! Scraping *spec* for product listings.
//!
//! - Prefer the **catalogue layout** of books.toscrape.com:
//!   `article.product_pod` cards with `h3 a[title]` and `p.price_color`.
//! - Fall back to a **generic scan** of elements whose class mentions
//!   "product" or "item" (first 20 only) when the catalogue pass keeps nothing.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::config::consts::FALLBACK_LIMIT;
use crate::core::sanitize::element_text;
use crate::record::Record;

static PRODUCT_POD: LazyLock<Selector> = LazyLock::new(|| sel("article.product_pod"));
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| sel("h3 a"));
static PRICE_COLOR: LazyLock<Selector> = LazyLock::new(|| sel("p.price_color"));

static GENERIC_ITEM: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"[class*="product"], [class*="item"]"#));
static GENERIC_NAME: LazyLock<Selector> =
    LazyLock::new(|| sel(r#"[class*="name"], [class*="title"], h3, h4"#));
static GENERIC_PRICE: LazyLock<Selector> = LazyLock::new(|| sel(r#"[class*="price"]"#));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Which selector set produced the records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Catalogue,
    Generic,
}

pub struct ProductsBundle {
    pub layout: Layout,
    pub records: Vec<Record>,
    /// Candidates that matched a selector but were dropped.
    pub dropped: usize,
}

/// Extract records from a fetched page.
///
/// `page_url` resolves relative product links and is the source URL of
/// generic-layout records. `timestamp` is stamped on every record.
pub fn parse_doc(html: &str, page_url: &str, timestamp: &str) -> ProductsBundle {
    let doc = Html::parse_document(html);
    let base = Url::parse(page_url).ok();

    let (records, dropped) = parse_catalogue(&doc, base.as_ref(), timestamp);
    if !records.is_empty() {
        debug!(kept = records.len(), dropped, "catalogue layout");
        return ProductsBundle { layout: Layout::Catalogue, records, dropped };
    }

    info!("No catalogue products found; falling back to generic scan");
    let (records, more) = parse_generic(&doc, page_url, timestamp);
    debug!(kept = records.len(), dropped = dropped + more, "generic layout");
    ProductsBundle { layout: Layout::Generic, records, dropped: dropped + more }
}

fn parse_catalogue(doc: &Html, base: Option<&Url>, ts: &str) -> (Vec<Record>, usize) {
    let mut out = Vec::new();
    let mut dropped = 0;
    for pod in doc.select(&PRODUCT_POD) {
        match catalogue_record(pod, base, ts) {
            Some(r) => out.push(r),
            None => dropped += 1,
        }
    }
    (out, dropped)
}

fn catalogue_record(pod: ElementRef<'_>, base: Option<&Url>, ts: &str) -> Option<Record> {
    let Some(link) = pod.select(&TITLE_LINK).next() else {
        debug!("product card without title link");
        return None;
    };
    let (Some(title), Some(href)) = (link.value().attr("title"), link.value().attr("href")) else {
        debug!("title link missing title/href");
        return None;
    };
    let Some(price_el) = pod.select(&PRICE_COLOR).next() else {
        debug!(title, "no price element");
        return None;
    };
    let price_text = element_text(&price_el);

    let record = Record::from_price_text(s!(title), &price_text, ts, resolve(base, href));
    if record.is_none() {
        debug!(title, price = %price_text, "unparsable price");
    }
    record
}

fn parse_generic(doc: &Html, page_url: &str, ts: &str) -> (Vec<Record>, usize) {
    let mut out = Vec::new();
    let mut dropped = 0;
    for item in doc.select(&GENERIC_ITEM).take(FALLBACK_LIMIT) {
        let (Some(name_el), Some(price_el)) =
            (item.select(&GENERIC_NAME).next(), item.select(&GENERIC_PRICE).next())
        else {
            debug!(tag = item.value().name(), "candidate without name/price element");
            continue;
        };

        let name = element_text(&name_el);
        let price_text = element_text(&price_el);
        if name.is_empty() {
            debug!(price = %price_text, "empty product name");
            dropped += 1;
            continue;
        }
        match Record::from_price_text(name, &price_text, ts, s!(page_url)) {
            Some(r) => out.push(r),
            None => {
                debug!(price = %price_text, "unparsable price");
                dropped += 1;
            }
        }
    }
    (out, dropped)
}

/// Absolute link for `href`; the raw value when there is no usable base.
fn resolve(base: Option<&Url>, href: &str) -> String {
    base.and_then(|b| b.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| s!(href))
}
