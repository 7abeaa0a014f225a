use criterion::{black_box, criterion_group, criterion_main, Criterion};
use headroom_core::{Headroom, HeadroomOptions, Tolerance};
use headroom_testing::{TestClassList, TestScroller};
use std::rc::Rc;

fn bench_evaluate(c: &mut Criterion) {
    let scroller = Rc::new(TestScroller::new(800, 20_000));
    let target = Rc::new(TestClassList::new());
    let mut headroom = Headroom::new(
        Rc::clone(&target),
        Rc::clone(&scroller),
        HeadroomOptions::default().with_tolerance(Tolerance::new(10, 5)),
    );

    // Saw-tooth scroll: long runs down with short runs back up.
    let offsets: Vec<i32> = (0..2_000)
        .map(|i| {
            let run = i % 40;
            let base = (i / 40) * 300;
            if run < 30 {
                base + run * 12
            } else {
                base + 360 - (run - 30) * 8
            }
        })
        .collect();

    c.bench_function("evaluate_sawtooth_2000", |b| {
        b.iter(|| {
            for &offset in &offsets {
                scroller.set_offset(offset);
                black_box(headroom.evaluate());
            }
        })
    });

    c.bench_function("evaluate_idle", |b| {
        scroller.set_offset(400);
        headroom.evaluate();
        b.iter(|| black_box(headroom.evaluate()))
    });
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
