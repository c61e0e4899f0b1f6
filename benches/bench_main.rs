use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use pbr_texture_synth::generator::{PatternGenerator, TextureType};
use pbr_texture_synth::normal::height_to_normal;
use pbr_texture_synth::{Catalog, NormalEncoding, Rgb, TextureCache, generate_textures};

const BASE: Rgb = Rgb::new(0x8b, 0x6e, 0x4e);

fn bench_albedo(c: &mut Criterion) {
    for kind in TextureType::ALL {
        let generator = kind.generator(1_234_567);
        c.bench_function(&format!("{kind}_albedo_256"), |b| {
            b.iter(|| generator.albedo(black_box(BASE)))
        });
    }
}

fn bench_roughness(c: &mut Criterion) {
    let generator = TextureType::Wood.generator(1_234_567);
    c.bench_function("wood_roughness_256", |b| b.iter(|| generator.roughness()));
}

fn bench_normal(c: &mut Criterion) {
    let albedo = TextureType::Stone.generator(99).albedo(BASE);
    c.bench_function("normal_256", |b| {
        b.iter(|| height_to_normal(black_box(&albedo), 2.0, NormalEncoding::Unnormalized))
    });
}

fn bench_cold_and_warm(c: &mut Criterion) {
    c.bench_function("bundle_cold", |b| {
        b.iter(|| {
            let cache = TextureCache::new();
            generate_textures(&cache, "tile", black_box("#d8c8a8"), "tile-travertine")
        })
    });

    let cache = TextureCache::new();
    c.bench_function("bundle_warm", |b| {
        b.iter(|| generate_textures(&cache, "tile", black_box("#d8c8a8"), "tile-travertine"))
    });
}

fn bench_prewarm(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let mut group = c.benchmark_group("catalog");
    group.sample_size(10);
    group.bench_function("prewarm_builtin", |b| {
        b.iter(|| catalog.prewarm(&TextureCache::new()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_albedo,
    bench_roughness,
    bench_normal,
    bench_cold_and_warm,
    bench_prewarm
);
criterion_main!(benches);
