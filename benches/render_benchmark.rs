//! Render benchmark: Measure full-frame repaint cost.
//!
//! Target: a desktop-sized scene well under one 30 FPS frame budget

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tcanvas::{
    paint_frame, wrap, Border, Color, IconVariant, Node, OutputBuffer, Position, Scene, Size, Style,
};

const LOREM: &str = "the quick brown fox jumps over the lazy dog and keeps running \
                     across the field until the sun goes down behind the hills";

fn desktop_scene(items: u16) -> Scene {
    let mut scene = Scene::new();
    scene.push(
        Node::boxed(Position::new(1, 1), Size::new(200, 50))
            .with_style(Style::new().border(Border::solid().with_color(Color::Gray))),
    );

    for i in 0..items {
        let x = 2 + (i % 12) * 16;
        let y = 2 + (i / 12) * 9;
        let icon = IconVariant::ALL[usize::from(i) % IconVariant::ALL.len()];
        scene.push(
            Node::boxed(Position::new(x, y), Size::new(12, 6))
                .with_style(Style::new().border(Border::dotted())),
        );
        scene.push(Node::icon(icon, Position::new(x, y), Size::new(12, 6)));
        scene.push(Node::sized_label(
            Position::new(x, y + 6),
            Size::new(12, 1),
            format!("item {i}"),
        ));
    }

    scene.push(
        Node::sized_label(Position::new(60, 20), Size::new(40, 10), LOREM).with_style(
            Style::new()
                .border(Border::double().with_color(Color::Red))
                .background(Color::Black)
                .color(Color::White),
        ),
    );
    scene
}

fn wrap_paragraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap");

    for width in [10, 40, 120] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| wrap(black_box(LOREM), width));
        });
    }

    group.finish();
}

fn paint_desktop(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_frame");

    for items in [4, 24, 60] {
        let scene = desktop_scene(items);
        group.bench_with_input(BenchmarkId::from_parameter(items), &scene, |b, scene| {
            let mut out = OutputBuffer::new();
            b.iter(|| {
                out.clear();
                paint_frame(black_box(scene), &mut out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, wrap_paragraph, paint_desktop);
criterion_main!(benches);
