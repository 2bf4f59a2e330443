use bag_of_words::constants::DEMO_DOCUMENTS;
use bag_of_words::{Analyzer, CountVectorizer, Lemmatizer, Lexicon, Tokenizer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_fit_transform(c: &mut Criterion) {
    c.bench_function("fit_transform", |b| {
        b.iter(|| {
            let mut count_vectorizer = CountVectorizer::default();
            count_vectorizer.fit_transform(black_box(DEMO_DOCUMENTS))
        })
    });
}

fn benchmark_lemmatized_fit_transform(c: &mut Criterion) {
    let lexicon = Lexicon::embedded().expect("Failed to load embedded lexicon");
    let lemmatizer = Lemmatizer::new(&lexicon);

    c.bench_function("lemmatized_fit_transform", |b| {
        b.iter(|| {
            let analyzer = Analyzer::new(Tokenizer::stop_word_filtered_parser())
                .with_normalizer(&lemmatizer);
            let mut count_vectorizer = CountVectorizer::new(analyzer);
            count_vectorizer.fit_transform(black_box(DEMO_DOCUMENTS))
        })
    });
}

criterion_group!(
    benches,
    benchmark_fit_transform,
    benchmark_lemmatized_fit_transform
);
criterion_main!(benches);
