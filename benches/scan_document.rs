//! This bench converts a large inbound document holding a mix of GTINs, SSCCs
//! and values that match neither grammar.

#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box};

use criterion::{criterion_group, criterion_main, Criterion};
use gs12urn::{scan, Config};

/// Generates a document with `count` serial number nodes
fn inbound_document(count: usize) -> String {
    let mut document = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<cmn:Shipment xmlns:cmn=\"urn:example\">\n",
    );
    for i in 0..count {
        let value = match i % 3 {
            0 => format!("012033982212012721{i:010}"),
            1 => format!("003033982{i:010}"),
            _ => format!("LOT-{i}"),
        };
        writeln!(
            document,
            "  <cmn:Item><cmn:SerialNumber>{value}</cmn:SerialNumber></cmn:Item>"
        )
        .unwrap();
    }
    document.push_str("</cmn:Shipment>\n");
    document
}

fn scan_document(c: &mut Criterion) {
    let document = inbound_document(10_000);
    let config = Config::default();
    c.bench_function("scan 10k nodes", |b| {
        b.iter(|| scan(black_box(document.as_bytes()), &config).unwrap());
    });
}

criterion_group!(benches, scan_document);
criterion_main!(benches);
