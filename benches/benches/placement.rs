// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_popover::{
    Host, Options, Overflow, OverflowStyle, Placement, Scene, SceneElement, compute_placement,
};

/// A reference buried `depth` levels inside a scrolling list.
fn nested_scene(depth: usize) -> (Scene, SceneElement, SceneElement) {
    let mut scene = Scene::new(Size::new(1280.0, 800.0));
    let body = scene.body();
    let list = scene.insert(body, Rect::new(100.0, 100.0, 700.0, 700.0));
    scene.set_overflow(list, OverflowStyle::uniform(Overflow::Auto));
    scene.set_scroll_offset(list, Vec2::new(0.0, 480.0));
    scene.set_scroll_size(list, Size::new(600.0, 6_000.0));

    let mut parent = list;
    for _ in 0..depth {
        parent = scene.insert(parent, Rect::new(100.0, 300.0, 700.0, 340.0));
    }
    let reference = scene.insert(parent, Rect::new(120.0, 305.0, 220.0, 335.0));
    let overlay = scene.insert(body, Rect::new(0.0, 0.0, 240.0, 160.0));
    (scene, overlay, reference)
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("popover/compute_placement");

    // Hypothesis: cost is dominated by the O(n^2) tournament for 12
    // candidates, and by the ancestor walks for deep trees.
    for depth in [1_usize, 16, 64] {
        let (scene, overlay, reference) = nested_scene(depth);

        let two = Options::new();
        group.bench_with_input(BenchmarkId::new("default_2", depth), &two, |b, opts| {
            b.iter(|| black_box(compute_placement(&scene, overlay, reference, opts)));
        });

        let all = Options::new().with_placements(Placement::ALL);
        group.bench_with_input(BenchmarkId::new("all_12", depth), &all, |b, opts| {
            b.iter(|| black_box(compute_placement(&scene, overlay, reference, opts)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
