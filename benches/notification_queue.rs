// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use shelfwise::domain::ui::{ToastCapacity, ToastDuration};
use shelfwise::ui::notifications::{Manager, NotificationMessage};
use shelfwise::ui::sidebar::{all_items, is_active};
use std::hint::black_box;

fn notification_queue_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("enqueue_then_expire_100", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            for i in 0..100 {
                manager.info(format!("toast {i}"), None);
            }
            for expiry in manager.take_scheduled() {
                manager.handle_message(&NotificationMessage::Expired(expiry.id()));
            }
            black_box(manager.len())
        });
    });

    group.bench_function("enqueue_with_capacity_10", |b| {
        b.iter(|| {
            let mut manager =
                Manager::with_settings(ToastDuration::default(), Some(ToastCapacity::new(10)));
            for i in 0..100 {
                manager.warning(format!("toast {i}"), None);
            }
            black_box(manager.take_scheduled().len())
        });
    });

    group.finish();
}

fn active_link_benchmark(c: &mut Criterion) {
    c.bench_function("active_link_lookup", |b| {
        b.iter(|| {
            all_items()
                .filter(|item| is_active(item.path, black_box("/inventory/new")))
                .count()
        });
    });
}

criterion_group!(benches, notification_queue_benchmark, active_link_benchmark);
criterion_main!(benches);
