//! Benchmarks for candidate generation and full key recovery.

use affine_bigram::{
    analyze, bigram_frequencies, encrypt, generate_candidates, normalize, strip_spaces,
    AffineKey, AnalysisOptions, Context,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PROSE: &str = "Широкая электрификация южных губерний даст мощный толчок подъёму \
сельского хозяйства. Зима была долгой и снежной, но весной река разлилась широко, \
и старый мост снова стоял в воде. Отец говорил, что на этом месте когда-то стояла \
мельница, а теперь только камни на берегу.";

fn ciphertext(context: &Context) -> String {
    let text = strip_spaces(&normalize(PROSE, context.profile().alphabet())).repeat(8);
    encrypt(context.ring(), &text, AffineKey::new(37, 5)).unwrap_or_default()
}

fn bench_generate_candidates(c: &mut Criterion) {
    let context = Context::russian();
    let frequent: Vec<_> = bigram_frequencies(&ciphertext(&context))
        .into_iter()
        .take(5)
        .map(|(bigram, _)| bigram)
        .collect();

    c.bench_function("generate_candidates", |b| {
        b.iter(|| {
            generate_candidates(context.ring(), context.profile().crib(), black_box(&frequent))
                .unwrap()
        });
    });
}

/// Full pipeline, once on the rayon pool and once sequentially.
fn bench_analyze(c: &mut Criterion) {
    let context = Context::russian();
    let ciphertext = ciphertext(&context);

    let mut group = c.benchmark_group("analyze");
    for parallel in [true, false] {
        let options = AnalysisOptions {
            parallel,
            ..AnalysisOptions::default()
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| analyze(&context, black_box(&ciphertext), &options));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_candidates, bench_analyze);
criterion_main!(benches);
