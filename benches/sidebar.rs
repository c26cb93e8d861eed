//! Benchmarks for the sidebar state machine and slide animation.
//!
//! These benchmarks measure the per-event and per-frame costs paid by the
//! render loop.

use coop_tui::sidebar::{
    Easing, ExpansionEvent, ExpansionState, MenuConfig, SidebarController, SidebarHost, Tween,
    VisibilityAnimator,
};
use coop_tui::state::ScreenId;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::{Duration, Instant};

struct NullHost;

impl SidebarHost for NullHost {
    fn active_screen_changed(&mut self, _screen: ScreenId) {}
    fn navigate_to(&mut self, _screen: ScreenId) -> bool {
        false
    }
    fn request_logout(&mut self) {}
}

fn bench_expansion_transition(c: &mut Criterion) {
    let menu = MenuConfig::poultry_farm();
    let events = [
        ExpansionEvent::HeaderPressed(2),
        ExpansionEvent::HeaderPressed(4),
        ExpansionEvent::SubItemPressed,
        ExpansionEvent::ActiveScreenChanged(ScreenId::LedgerScreen),
        ExpansionEvent::HeaderPressed(0),
    ];

    c.bench_function("expansion_transition_5", |b| {
        b.iter(|| {
            events.iter().fold(ExpansionState::collapsed(), |state, event| {
                state.transition(black_box(&menu), black_box(*event))
            })
        })
    });
}

fn bench_controller_rows(c: &mut Criterion) {
    let mut controller = match SidebarController::new(
        MenuConfig::poultry_farm(),
        ScreenId::EggSaleScreen,
    ) {
        Ok(controller) => controller,
        Err(e) => panic!("invalid farm menu: {}", e),
    };
    let mut host = NullHost;

    c.bench_function("controller_visible_rows", |b| {
        b.iter(|| black_box(&controller).visible_rows())
    });

    c.bench_function("controller_header_press", |b| {
        b.iter(|| controller.on_group_header_press(black_box(4), &mut host))
    });
}

fn bench_tween_value(c: &mut Criterion) {
    let start = Instant::now();
    let mut tween = Tween::new(0.0, Easing::EaseInOut);
    tween.start(1.0, Duration::from_millis(300), start);
    let sample = start + Duration::from_millis(120);

    c.bench_function("tween_value_ease_in_out", |b| {
        b.iter(|| tween.value(black_box(sample)))
    });
}

fn bench_visible_width(c: &mut Criterion) {
    let start = Instant::now();
    let mut animator = VisibilityAnimator::new(true, 28, Duration::from_millis(300));
    animator.toggle(start);
    let sample = start + Duration::from_millis(150);

    c.bench_function("animator_visible_width", |b| {
        b.iter(|| animator.visible_width(black_box(sample)))
    });
}

criterion_group!(
    benches,
    bench_expansion_transition,
    bench_controller_rows,
    bench_tween_value,
    bench_visible_width
);
criterion_main!(benches);
