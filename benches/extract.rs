// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use price_scrape::core::price::{detect_currency, extract_price};
use price_scrape::specs::products::parse_doc;

/// Synthetic catalogue page with `n` product cards.
fn catalogue(n: usize) -> String {
    let mut doc = String::from("<html><body><ol class=\"row\">");
    for i in 0..n {
        doc.push_str(&format!(
            r#"<li><article class="product_pod">
                 <h3><a href="catalogue/book_{i}/index.html" title="Book {i}">Book {i}</a></h3>
                 <div class="product_price"><p class="price_color">£{i}.{:02}</p></div>
               </article></li>"#,
            i % 100
        ));
    }
    doc.push_str("</ol></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let texts = ["£51.77", "$1,234.56", "Was £10.00 now £7.50", "no price"];
    c.bench_function("extract_price", |b| {
        b.iter(|| {
            for t in texts {
                black_box(extract_price(black_box(t)));
                black_box(detect_currency(black_box(t)));
            }
        })
    });

    let doc = catalogue(20);
    c.bench_function("parse_doc_catalogue_20", |b| {
        b.iter(|| {
            let out = parse_doc(black_box(&doc), "https://books.toscrape.com/", "2024-05-01 12:00:00");
            black_box(out.records.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
