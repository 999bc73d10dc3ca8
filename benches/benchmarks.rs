criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_uniform_move,
        resolving_single_round,
        simulating_robot_session,
}

fn sampling_uniform_move(c: &mut criterion::Criterion) {
    c.bench_function("draw a uniform opponent Move", |b| {
        let mut source = Uniform::seeded(0);
        b.iter(|| source.draw())
    });
}

fn resolving_single_round(c: &mut criterion::Criterion) {
    c.bench_function("resolve and settle one Round", |b| {
        let mut state = GameState::new();
        let mut source = Uniform::seeded(0);
        b.iter(|| {
            let round = state.resolve(Move::random(), &mut source);
            state.settle();
            round
        })
    });
}

fn simulating_robot_session(c: &mut criterion::Criterion) {
    c.bench_function("simulate 1024 rounds with a cycling Robot", |b| {
        b.iter(|| {
            let mut session = Session::new(Uniform::seeded(0), Settings::instant());
            session.run(&mut Robot::new(Strategy::Cycle), Some(1024))
        })
    });
}

use roshambo::Arbitrary;
use roshambo::gameplay::*;
use roshambo::players::*;
use roshambo::session::*;
