use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morse_core::test_utils::VirtualClock;
use morse_core::{encode, letter_code, Duration, Transmitter};

const MESSAGE: &str = "CQ CQ CQ DE K1ABC K1ABC K";

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("letter_code", |b| {
        b.iter(|| {
            for character in MESSAGE.chars() {
                black_box(letter_code(black_box(character)).ok());
            }
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_render", |b| {
        b.iter(|| {
            let encoded = encode(black_box(MESSAGE)).unwrap();
            black_box(encoded.render::<256>().unwrap())
        })
    });
}

fn bench_virtual_send(c: &mut Criterion) {
    c.bench_function("send_virtual_time", |b| {
        b.iter(|| {
            let clock = VirtualClock::new();
            let mut tx = Transmitter::new(Duration::from_millis(60), clock.sink(), clock.delay());
            tx.send(black_box(MESSAGE)).unwrap();
            drop(tx);
            black_box(clock.now())
        })
    });
}

criterion_group!(benches, bench_lookup, bench_encode, bench_virtual_send);
criterion_main!(benches);
