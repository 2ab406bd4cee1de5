use affine_bigram::{
    analyze, bigram_frequencies, encrypt, normalize, strip_spaces, AffineKey, AnalysisError,
    AnalysisOptions, Context, Strictness,
};

const PROSE: &str = "Съешь же ещё этих мягких французских булок да выпей чаю. \
Широкая электрификация южных губерний даст мощный толчок подъёму сельского хозяйства. \
В чащах юга жил бы цитрус да но фальшивый экземпляр. \
Зима была долгой и снежной, но весной река разлилась широко, и старый мост снова стоял в воде. \
Отец говорил, что на этом месте когда-то стояла мельница, а теперь только камни на берегу.";

/// Prose with crib bigrams spliced in after every ten letters, so that the
/// crib becomes the five most frequent bigrams in crib order
fn plaintext(context: &Context) -> String {
    let body: Vec<char> = strip_spaces(&normalize(PROSE, context.profile().alphabet()))
        .chars()
        .collect();
    let inserts: Vec<_> = context
        .profile()
        .crib()
        .iter()
        .zip([8, 7, 6, 5, 4])
        .flat_map(|(bigram, count)| std::iter::repeat(*bigram).take(count))
        .collect();

    let mut text = String::new();
    for (idx, chunk) in body.chunks(10).enumerate() {
        text.extend(chunk);
        if let Some(bigram) = inserts.get(idx) {
            text.extend(bigram);
        }
    }
    for bigram in inserts.iter().skip(body.chunks(10).count()) {
        text.extend(bigram);
    }
    text
}

#[test]
fn crib_dominates_plaintext_bigrams() {
    let context = Context::russian();
    let text = plaintext(&context);

    let top: Vec<_> = bigram_frequencies(&text)
        .into_iter()
        .take(5)
        .map(|(bigram, _)| bigram)
        .collect();
    assert_eq!(top, context.profile().crib());
}

#[test]
fn recovers_key_and_plaintext() {
    let context = Context::russian();
    let text = plaintext(&context);

    for key in [AffineKey::new(37, 5), AffineKey::new(118, 900)] {
        let ciphertext = encrypt(context.ring(), &text, key).unwrap();
        let analysis = analyze(&context, &ciphertext, &AnalysisOptions::default()).unwrap();

        assert!(analysis.candidates.contains(&key));
        let best = analysis.best().unwrap();
        assert_eq!(best.key, key);
        assert_eq!(best.plaintext, text);
        assert!(analysis.ranked.len() <= 5);
    }
}

#[test]
fn recovers_through_noisy_formatting() {
    let context = Context::russian();
    let text = plaintext(&context);
    let key = AffineKey::new(37, 5);
    let ciphertext = encrypt(context.ring(), &text, key).unwrap();

    let noisy: String = ciphertext
        .chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let c = if i % 3 == 0 { c.to_uppercase().next().unwrap_or(c) } else { c };
            if i % 7 == 6 { vec![c, ',', ' ', '7'] } else { vec![c] }
        })
        .collect();

    let analysis = analyze(&context, &noisy, &AnalysisOptions::default()).unwrap();
    assert_eq!(analysis.best().unwrap().plaintext, text);
}

#[test]
fn sequential_run_matches_parallel_run() {
    let context = Context::russian();
    let ciphertext = encrypt(context.ring(), &plaintext(&context), AffineKey::new(118, 900)).unwrap();
    let options = AnalysisOptions {
        top_n: 10,
        strictness: Strictness::Full,
        parallel: true,
    };

    let parallel = analyze(&context, &ciphertext, &options).unwrap();
    let sequential = analyze(
        &context,
        &ciphertext,
        &AnalysisOptions {
            parallel: false,
            ..options
        },
    )
    .unwrap();

    assert_eq!(parallel.ranked, sequential.ranked);
    assert_eq!(parallel.candidates, sequential.candidates);
}

#[test]
fn invalid_candidates_are_counted_not_scored() {
    let context = Context::russian();
    let ciphertext = encrypt(context.ring(), &plaintext(&context), AffineKey::new(37, 5)).unwrap();
    let analysis = analyze(&context, &ciphertext, &AnalysisOptions::default()).unwrap();

    assert!(analysis.invalid_keys > 0);
    assert!(analysis.ranked.iter().all(|c| c.key.a % 31 != 0));
}

#[test]
fn text_without_letters_has_no_candidate() {
    let context = Context::russian();
    let result = analyze(&context, "2024-01-01, 12:00!", &AnalysisOptions::default());
    assert!(matches!(result, Err(AnalysisError::NoValidCandidate)));
}
