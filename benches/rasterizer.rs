use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use texrast::bench::{BarycentricRasterizer, FrameBuffer, SolidShader, TextureShader};
use texrast::colors;
use texrast::math::vec3::Vec3;
use texrast::Texture;

const BUFFER_WIDTH: u32 = 1024;
const BUFFER_HEIGHT: u32 = 1024;

const UVS: [Vec3; 3] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.5, 1.0, 0.0),
];

fn small_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ]
}

fn medium_triangle() -> [Vec3; 3] {
    [
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ]
}

fn large_triangle() -> [Vec3; 3] {
    [
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(950.0, 100.0, 0.0),
        Vec3::new(500.0, 1000.0, 0.0),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let rasterizer = BarycentricRasterizer::new();
    let solid = SolidShader::new(colors::RED);
    let texture = Texture::solid(256, 256, colors::WHITE);
    let textured = TextureShader::new(&texture, UVS);

    for (name, points) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("solid", name), &points, |b, pts| {
            b.iter(|| {
                // fresh depth buffer so every pass does the full amount of work
                let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(black_box(pts), &mut fb, &solid)
            });
        });

        group.bench_with_input(BenchmarkId::new("textured", name), &points, |b, pts| {
            b.iter(|| {
                let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
                rasterizer.fill_triangle(black_box(pts), &mut fb, &textured)
            });
        });
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let rasterizer = BarycentricRasterizer::new();
    let texture = Texture::solid(256, 256, colors::WHITE);
    let shader = TextureShader::new(&texture, UVS);

    // Generate a grid of small triangles
    let triangles: Vec<[Vec3; 3]> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 50.0;
                let y = row as f32 * 50.0;
                [
                    Vec3::new(x, y, 0.0),
                    Vec3::new(x + 45.0, y, 0.0),
                    Vec3::new(x + 22.0, y + 40.0, 0.0),
                ]
            })
        })
        .collect();

    group.bench_function("textured_400_triangles", |b| {
        b.iter(|| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                rasterizer.fill_triangle(black_box(tri), &mut fb, &shader);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
