//! Benchmarks for clip rotation
//!
//! Measures the locked read path and shot filename grouping.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use movie_server_rotation::shots::group_shots;
use movie_server_rotation::{Phase, Rotator, ShotSet, SHOT_SLOTS};
use std::path::PathBuf;
use std::time::Duration;

fn shot_files(count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| {
            let phase = if i % 2 == 0 { "start" } else { "end" };
            PathBuf::from(format!("/media/movies/shots/take{}_{}_{}.mp4", i, i % 5, phase))
        })
        .collect()
}

fn bench_rotator_next(c: &mut Criterion) {
    let files: Vec<PathBuf> = (0..16)
        .map(|i| PathBuf::from(format!("/media/movies/intro/{i}.mp4")))
        .collect();
    let rotator = Rotator::new("intro", files, Duration::ZERO);

    c.bench_function("rotator_next", |b| {
        b.iter(|| black_box(rotator.next().is_ok()))
    });
}

fn bench_group_shots(c: &mut Criterion) {
    let files = shot_files(200);

    c.bench_function("group_shots_200", |b| {
        b.iter(|| group_shots(black_box(files.clone()), SHOT_SLOTS))
    });
}

fn bench_shot_lookup(c: &mut Criterion) {
    let set = ShotSet::from_files(shot_files(40), Duration::ZERO);

    c.bench_function("shot_next", |b| {
        b.iter(|| black_box(set.next(black_box(2), Phase::Start).is_ok()))
    });
}

criterion_group!(benches, bench_rotator_next, bench_group_shots, bench_shot_lookup);
criterion_main!(benches);
