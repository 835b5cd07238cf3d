use countrydex_core::{Browser, Catalog, CountryRecord, Paginator};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "United", "Republic", "Islands", "Saint", "North", "South", "New", "Guinea", "Land", "Côte",
];

// ~250 entries, the size of the real REST Countries list.
fn records() -> Vec<CountryRecord> {
    (0..250)
        .map(|i| {
            let name = format!("{} {} {i}", WORDS[i % WORDS.len()], WORDS[(i * 7) % WORDS.len()]);
            CountryRecord::new(format!("{i:03}"), name)
        })
        .collect()
}

fn bench_catalog(c: &mut Criterion) {
    let records = records();
    c.bench_function("catalog_load_sort", |b| {
        b.iter(|| Catalog::from_records(black_box(records.clone())))
    });

    let mut catalog = Catalog::from_records(records);
    c.bench_function("catalog_set_filter", |b| {
        b.iter(|| catalog.set_filter(black_box("land")))
    });
}

fn bench_paging(c: &mut Criterion) {
    let mut paginator = Paginator::new(16).unwrap();
    paginator.reset(250);
    paginator.go_to(8, 250).unwrap();
    c.bench_function("page_labels", |b| b.iter(|| black_box(&paginator).page_labels()));

    let mut browser = Browser::new(16).unwrap();
    browser.load(records());
    c.bench_function("browser_search_and_page", |b| {
        b.iter(|| {
            browser.search(black_box("saint"));
            browser.page()
        })
    });
}

criterion_group!(benches, bench_catalog, bench_paging);
criterion_main!(benches);
