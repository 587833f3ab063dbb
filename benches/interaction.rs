// SPDX-License-Identifier: MPL-2.0
use compare_lens::compare::{GestureRecognizer, RawInput, ViewState};
use compare_lens::config::SweepBounds;
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size, Vector};
use std::hint::black_box;
use std::time::Instant;

const VIEW: Size = Size::new(1280.0, 720.0);

fn reducer_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducers");

    group.bench_function("sweep_full_cycle", |b| {
        let bounds = SweepBounds::default();
        b.iter(|| {
            let mut view = ViewState::new(true);
            // One round trip between the default bounds takes ~360 ticks.
            for _ in 0..400 {
                view.on_tick(bounds);
            }
            black_box(view.divider_position)
        });
    });

    group.bench_function("pinch_and_pan", |b| {
        b.iter(|| {
            let mut view = ViewState::default();
            for step in 1..=20 {
                view.on_pinch_changed(1.0 + step as f32 * 0.1);
            }
            for step in 0..50 {
                let offset = step as f32 * 10.0;
                view.on_pan_changed(Vector::new(offset, -offset), VIEW, view.zoom_scale);
            }
            view.on_pan_ended();
            view.on_pinch_ended();
            black_box(view.zoom_scale)
        });
    });

    group.finish();
}

fn gesture_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");

    group.bench_function("divider_drag", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut recognizer = GestureRecognizer::default();
            let divider_x = VIEW.width / 2.0;
            let mut count = recognizer
                .feed(RawInput::CursorPressed(Point::new(divider_x, 100.0)), divider_x, now)
                .len();
            for x in (0..1280).step_by(8) {
                count += recognizer
                    .feed(RawInput::CursorMoved(Point::new(x as f32, 100.0)), divider_x, now)
                    .len();
            }
            count += recognizer.feed(RawInput::CursorReleased, divider_x, now).len();
            black_box(count)
        });
    });

    group.finish();
}

criterion_group!(benches, reducer_benchmark, gesture_benchmark);
criterion_main!(benches);
