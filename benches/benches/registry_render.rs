//! Compile-and-render throughput over a synthetic catalog roughly the size
//! of the real Linguist one.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use langtab_codegen::{AttrValue, Catalog, CatalogEntry, GoOptions, generate_registry};

fn synthetic_catalog(languages: usize) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..languages {
        catalog.add(
            CatalogEntry::new(format!("Language {}", i))
                .attr("type", AttrValue::str("programming"))
                .attr("color", AttrValue::str("#123456"))
                .attr("aliases", AttrValue::strings(&["alias-a", "alias-b"]))
                .attr("extensions", AttrValue::strings(&[".aaa", ".bbb", ".ccc"]))
                .attr("tm_scope", AttrValue::str("source.synthetic"))
                .attr("language_id", AttrValue::Int(i as i64)),
        );
    }
    catalog
}

fn bench_generate(c: &mut Criterion) {
    let catalog = synthetic_catalog(500);
    let options = GoOptions::default();

    c.bench_function("generate_registry_500", |b| {
        b.iter(|| generate_registry(black_box(&catalog), black_box(&options)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
