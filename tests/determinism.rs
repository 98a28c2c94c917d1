//! Determinism guarantees: repeated, scrubbed, and independently rebuilt
//! evaluations must agree bit-for-bit. These are the properties that make
//! parallel chunked rendering safe with zero coordination.

use frameloom::{
    FrameIndex, ScenarioBuilder, SceneComposer, SeedStream, fingerprint_state,
};

#[test]
fn repeated_queries_are_bit_identical() {
    let scenario = ScenarioBuilder::sample().seed(21).build().unwrap();
    let composer = SceneComposer::new(&scenario).unwrap();

    for f in (0..450).step_by(37) {
        let frame = FrameIndex(f);
        let a = fingerprint_state(frame, &composer.render_state(frame).unwrap());
        let b = fingerprint_state(frame, &composer.render_state(frame).unwrap());
        assert_eq!(a, b, "frame {f}");
    }
}

#[test]
fn scrub_order_does_not_change_results() {
    let scenario = ScenarioBuilder::sample().seed(21).build().unwrap();
    let composer = SceneComposer::new(&scenario).unwrap();

    let forward: Vec<_> = (0..450)
        .step_by(13)
        .map(|f| {
            let frame = FrameIndex(f);
            fingerprint_state(frame, &composer.render_state(frame).unwrap())
        })
        .collect();

    let mut backward: Vec<_> = (0..450)
        .step_by(13)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .map(|f| {
            let frame = FrameIndex(f);
            fingerprint_state(frame, &composer.render_state(frame).unwrap())
        })
        .collect();
    backward.reverse();

    assert_eq!(forward, backward);
}

#[test]
fn independent_composers_agree_like_separate_workers() {
    // Two composers built from independently parsed scenarios stand in for
    // two render workers in different processes.
    let json = serde_json::to_string(&ScenarioBuilder::sample().seed(77).build().unwrap()).unwrap();
    let a = SceneComposer::new(&serde_json::from_str(&json).unwrap()).unwrap();
    let b = SceneComposer::new(&serde_json::from_str(&json).unwrap()).unwrap();

    // Worker A takes the first half, worker B the second; spot-check both
    // halves from both workers.
    for f in [0, 89, 150, 224, 225, 300, 359, 449] {
        let frame = FrameIndex(f);
        assert_eq!(
            fingerprint_state(frame, &a.render_state(frame).unwrap()),
            fingerprint_state(frame, &b.render_state(frame).unwrap()),
            "frame {f}"
        );
    }
}

#[test]
fn seed_changes_move_the_decor_field() {
    let a = ScenarioBuilder::sample().seed(1).build().unwrap();
    let b = ScenarioBuilder::sample().seed(2).build().unwrap();
    let ca = SceneComposer::new(&a).unwrap();
    let cb = SceneComposer::new(&b).unwrap();

    let frame = FrameIndex(30);
    let sa = ca.render_state(frame).unwrap();
    let sb = cb.render_state(frame).unwrap();
    assert_ne!(
        fingerprint_state(frame, &sa),
        fingerprint_state(frame, &sb)
    );
    // Same population size either way; only placement moves.
    assert_eq!(
        sa.keys().filter(|k| k.starts_with("decor.")).count(),
        sb.keys().filter(|k| k.starts_with("decor.")).count()
    );
}

#[test]
fn seed_stream_sequences_are_reproducible() {
    let take10 = |seed: u64| -> Vec<u64> {
        let mut s = SeedStream::new(seed);
        (0..10).map(|_| s.gen_u64()).collect()
    };
    assert_eq!(take10(42), take10(42));
    assert_ne!(take10(42), take10(43));
}
