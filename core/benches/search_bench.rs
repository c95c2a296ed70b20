use criterion::{criterion_group, criterion_main, Criterion};
use docsearch_core::tokenizer::tokenize;
use docsearch_core::{DocumentStatus, SearchServer};

const WORDS: &[&str] = &[
    "cat", "dog", "fluffy", "tail", "collar", "white", "groomed", "eyes", "starling", "in", "on",
    "the",
];

fn corpus_text(seed: usize) -> String {
    (0..8).map(|i| WORDS[(seed * 7 + i * 5) % WORDS.len()]).collect::<Vec<_>>().join(" ")
}

fn bench_tokenize(c: &mut Criterion) {
    let text = corpus_text(3).repeat(32);
    c.bench_function("tokenize_text", |b| b.iter(|| tokenize(&text)));
}

fn bench_find_top(c: &mut Criterion) {
    let mut server = SearchServer::with_stop_words("in on the");
    for id in 0..5_000 {
        let status = if id % 4 == 0 { DocumentStatus::Banned } else { DocumentStatus::Actual };
        server.add_document(id, &corpus_text(id as usize), status, &[id % 10, 3]);
    }
    c.bench_function("find_top_documents", |b| {
        b.iter(|| server.find_top_documents("fluffy groomed cat -collar"))
    });
}

criterion_group!(benches, bench_tokenize, bench_find_top);
criterion_main!(benches);
