//! Queue hot-path benchmarks.
//!
//! Measures single-writer publish and reader drain cost for the payload
//! sizes the robot actually moves. Target: well under one microsecond per
//! operation, no allocation.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use apex_common::msgs::shared::{DriverStationStatus, PdpStatus};
use apex_queues::queue::MessageQueue;
use apex_queues::registry::{DriverStationStatusPayload, PdpStatusPayload};

fn bench_write_small(c: &mut Criterion) {
    let queue: MessageQueue<DriverStationStatusPayload, 200> = MessageQueue::new();
    let payload = DriverStationStatusPayload::new(DriverStationStatus::default());

    c.bench_function("queue_write_DriverStationStatus", |b| {
        b.iter(|| {
            queue.write(black_box(payload));
        });
    });
}

fn bench_write_large(c: &mut Criterion) {
    let queue: MessageQueue<PdpStatusPayload, 200> = MessageQueue::new();
    let payload = PdpStatusPayload::new(PdpStatus::default());

    c.bench_function("queue_write_PdpStatus", |b| {
        b.iter(|| {
            queue.write(black_box(payload));
        });
    });
}

fn bench_read_last(c: &mut Criterion) {
    let queue: MessageQueue<PdpStatusPayload, 200> = MessageQueue::new();
    queue.write(PdpStatusPayload::new(PdpStatus::default()));

    c.bench_function("queue_read_last_PdpStatus", |b| {
        b.iter(|| {
            let _ = black_box(queue.read_last());
        });
    });
}

fn bench_read_next(c: &mut Criterion) {
    let queue: MessageQueue<DriverStationStatusPayload, 200> = MessageQueue::new();
    let payload = DriverStationStatusPayload::new(DriverStationStatus::default());

    c.bench_function("queue_read_next_DriverStationStatus", |b| {
        b.iter(|| {
            queue.write(payload);
            let mut reader = queue.make_reader();
            let _ = black_box(reader.read_next());
        });
    });
}

criterion_group!(
    benches,
    bench_write_small,
    bench_write_large,
    bench_read_last,
    bench_read_next
);
criterion_main!(benches);
