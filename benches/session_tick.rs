use criterion::{black_box, criterion_group, criterion_main, Criterion};
use charades_tui::core::{GameSession, SessionSnapshot, WordSelector};
use charades_tui::types::{CategorySet, Language, UiAction};

fn playing_session() -> GameSession {
    let mut session = GameSession::new(12345);
    session.apply(UiAction::Play);
    session.apply(UiAction::StartGame);
    session.apply(UiAction::WordAction);
    // Run the countdown out so the round timer is live.
    session.tick(3000);
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = playing_session();

    c.bench_function("session_tick_50ms", |b| {
        b.iter(|| {
            session.tick(black_box(50));
        })
    });
}

fn bench_next_word(c: &mut Criterion) {
    let mut selector = WordSelector::new(12345, Language::En);

    c.bench_function("next_word", |b| {
        b.iter(|| {
            black_box(selector.next_word());
        })
    });
}

fn bench_selector_rebuild(c: &mut Criterion) {
    let mut selector = WordSelector::new(12345, Language::En);

    c.bench_function("selector_rebuild_all", |b| {
        b.iter(|| {
            selector.rebuild(Language::En, CategorySet::default());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = playing_session();

    c.bench_function("session_snapshot", |b| {
        b.iter(|| {
            black_box(SessionSnapshot::of(&session));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_next_word,
    bench_selector_rebuild,
    bench_snapshot
);
criterion_main!(benches);
