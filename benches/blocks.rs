// benches/blocks.rs
use std::collections::BTreeMap;
use std::fmt::Write;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use seat_scrape::core::blocks::largest_contiguous_block;
use seat_scrape::core::seatmap::classify;

// Synthetic page: 20 rows of 40 seats, every third seat sold.
fn sample_page() -> String {
    let mut html = String::from("<html><body><div class=\"seat-map\">");
    let mut id = 0;
    for row in 0..20 {
        for seat in 1..=40 {
            id += 1;
            let state = if id % 3 == 0 { "sold" } else { "available" };
            let _ = write!(
                html,
                r#"<div id="seat-{id}" class="seat {state}" data-row="R{row}" data-seat="{seat}"></div>"#
            );
        }
    }
    html.push_str("</div></body></html>");
    html
}

fn sample_rows() -> BTreeMap<String, Vec<i64>> {
    classify(&sample_page()).rows
}

fn bench_seatmap(c: &mut Criterion) {
    let doc = sample_page();
    c.bench_function("classify_800_seats", |b| {
        b.iter(|| {
            let tally = classify(black_box(&doc));
            black_box(tally.total())
        })
    });

    let rows = sample_rows();
    c.bench_function("largest_block_20_rows", |b| {
        b.iter(|| black_box(largest_contiguous_block(black_box(&rows))))
    });
}

criterion_group!(benches, bench_seatmap);
criterion_main!(benches);
