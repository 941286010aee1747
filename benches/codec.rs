use bch255::{bch_255_171_11, AlgebraicDecoder, Decoder, ShiftDecoder};
use bitvec::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Bits = BitVec<u8, Msb0>;

fn random_message(rng: &mut StdRng, k: usize) -> Bits {
    (0..k).map(|_| rng.gen_bool(0.5)).collect()
}

fn flip(word: &mut Bits, index: usize) {
    let value = !word[index];
    word.set(index, value);
}

fn bench_encode(c: &mut Criterion) {
    let code = bch_255_171_11().unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let message = random_message(&mut rng, code.data_length());

    c.bench_function("encode_255_171", |b| {
        b.iter(|| code.encode(black_box(&message)).unwrap())
    });
}

fn bench_algebraic_decode(c: &mut Criterion) {
    let code = bch_255_171_11().unwrap();
    let decoder = AlgebraicDecoder::new(&code);
    let mut rng = StdRng::seed_from_u64(2);

    let message = random_message(&mut rng, code.data_length());
    let mut received = code.encode(&message).unwrap();
    for _ in 0..11 {
        flip(&mut received, rng.gen_range(0..code.code_length()));
    }

    c.bench_function("algebraic_decode_11_errors", |b| {
        b.iter(|| decoder.decode(black_box(&received)).unwrap())
    });
}

fn bench_shift_decode_burst(c: &mut Criterion) {
    let code = bch_255_171_11().unwrap();
    let decoder = ShiftDecoder::new(&code);
    let mut rng = StdRng::seed_from_u64(3);

    let message = random_message(&mut rng, code.data_length());
    let mut received = code.encode(&message).unwrap();
    let start = rng.gen_range(0..code.code_length());
    for offset in 0..11 {
        flip(&mut received, (start + offset) % code.code_length());
    }

    c.bench_function("shift_decode_burst_11", |b| {
        b.iter(|| decoder.decode(black_box(&received)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_algebraic_decode,
    bench_shift_decode_burst
);
criterion_main!(benches);
