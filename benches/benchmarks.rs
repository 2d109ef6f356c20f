use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use shopping_list::{ItemId, ListState, ListStore};

fn filled_state(len: u32) -> ListState {
    let mut state = ListState::default();
    for i in 0..len {
        state.update_draft_name(format!("item {i}"));
        state.update_draft_quantity("1");
        let _ = state.commit_add();
    }
    state
}

fn add_benchmark(c: &mut Criterion) {
    c.bench_function("store_add", |b| {
        let store = ListStore::new();
        b.iter(|| {
            store.update_draft_name(black_box("Milk"));
            store.update_draft_quantity(black_box("2"));
            black_box(store.commit_add().ok());
        });
    });
}

fn begin_edit_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("begin_edit");

    for len in [10u32, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(len), len, |b, &len| {
            let mut state = filled_state(len);
            let mut target = 0;
            b.iter(|| {
                target = target % len + 1;
                black_box(state.begin_edit(ItemId(target)));
            });
        });
    }

    group.finish();
}

fn commit_edit_benchmark(c: &mut Criterion) {
    let mut state = filled_state(100);

    c.bench_function("commit_edit", |b| {
        let mut quantity = 0;
        b.iter(|| {
            quantity += 1;
            state.begin_edit(ItemId(50));
            black_box(state.commit_edit(ItemId(50), "Milk", quantity));
        });
    });
}

fn notify_benchmark(c: &mut Criterion) {
    let store = ListStore::new();
    let subscriptions: Vec<_> = (0..10)
        .map(|_| {
            store.subscribe(|state| {
                black_box(state.len());
            })
        })
        .collect();

    c.bench_function("toggle_dialog_with_subscribers", |b| {
        b.iter(|| {
            store.open_add_dialog();
            store.cancel_add_dialog();
        });
    });

    drop(subscriptions);
}

criterion_group!(
    benches,
    add_benchmark,
    begin_edit_benchmark,
    commit_edit_benchmark,
    notify_benchmark
);
criterion_main!(benches);
