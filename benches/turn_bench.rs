use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};
use rubik::cube::{Layer, RubikCube};
use rubik::Options;

fn quarter_turn_benchmark(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("quarter_turn_90_frames", |b| {
        b.iter(|| {
            let mut cube = RubikCube::new(&options);
            let _ = cube.request_turn(black_box(Layer::Right));
            while cube.is_turning() {
                let _ = cube.step();
            }
            black_box(cube.groups().get(Layer::Top).len())
        });
    });
}

fn scramble_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("scramble");

    for moves in [5, 20, 100] {
        group.bench_function(format!("{moves}_moves_10_frames"), |b| {
            b.iter(|| {
                let mut options = Options::default();
                options.animation.turn_frames = 10;
                let mut cube = RubikCube::new(&options);
                let mut rng = StdRng::seed_from_u64(42);
                cube.scramble(&mut rng, moves);
                while cube.pending_turns() > 0 || cube.is_turning() {
                    let _ = cube.step();
                }
                black_box(cube.atoms()[0].position())
            });
        });
    }

    group.finish();
}

fn view_rotation_benchmark(c: &mut Criterion) {
    let mut cube = RubikCube::new(&Options::default());
    c.bench_function("rotate_view_all_atoms", |b| {
        b.iter(|| cube.rotate_view(black_box(Vec3::Y), black_box(1.0)));
    });
}

criterion_group!(
    benches,
    quarter_turn_benchmark,
    scramble_benchmark,
    view_rotation_benchmark
);
criterion_main!(benches);
