use criterion::{Criterion, black_box, criterion_group, criterion_main};
use handspell::model::types::SymbolPrediction;
use handspell::stream::debouncer::MajorityDebouncer;
use handspell::{FeatureSchema, Landmark, LandmarkFrame, defaults, map_frame};

/// Build the schema shape real fingerspelling models request: every hand
/// point plus the arm subset of the pose, three axes each.
fn holistic_schema() -> FeatureSchema {
    let mut names = Vec::new();
    for group in ["right_hand", "left_hand"] {
        for i in 0..defaults::HAND_POINTS {
            for axis in ["x", "y", "z"] {
                names.push(format!("{axis}_{group}_{i}"));
            }
        }
    }
    for i in defaults::LEFT_ARM_POSE
        .iter()
        .chain(defaults::RIGHT_ARM_POSE.iter())
    {
        for axis in ["x", "y", "z"] {
            names.push(format!("{axis}_pose_{i}"));
        }
    }
    FeatureSchema::resolve(names).expect("bench schema resolves")
}

fn full_frame() -> LandmarkFrame {
    LandmarkFrame::new()
        .with_pose((0..33).map(|i| Landmark::new(i as f32, 0.5, 0.1)).collect())
        .with_left_hand((0..21).map(|i| Landmark::new(0.2, i as f32, 0.0)).collect())
        .with_right_hand((0..21).map(|i| Landmark::new(0.8, i as f32, 0.0)).collect())
}

fn bench_map_frame(c: &mut Criterion) {
    let schema = holistic_schema();
    let frame = full_frame();
    let missing_hands = LandmarkFrame::new().with_pose(
        (0..33).map(|i| Landmark::new(i as f32, 0.5, 0.1)).collect(),
    );

    c.bench_function("map_frame_full", |b| {
        b.iter(|| map_frame(black_box(&frame), black_box(&schema)))
    });
    c.bench_function("map_frame_zero_fill", |b| {
        b.iter(|| map_frame(black_box(&missing_hands), black_box(&schema)))
    });
}

fn bench_debouncer_step(c: &mut Criterion) {
    c.bench_function("debouncer_step", |b| {
        let mut debouncer = MajorityDebouncer::default();
        let symbols = ['a', 'b', 'a', 'a', 'c'];
        let mut i = 0;
        b.iter(|| {
            let prediction = SymbolPrediction::of(symbols[i % symbols.len()], 0.9);
            i += 1;
            let word_len = debouncer.step(black_box(&prediction)).len();
            black_box(word_len)
        })
    });
}

criterion_group!(benches, bench_map_frame, bench_debouncer_step);
criterion_main!(benches);
