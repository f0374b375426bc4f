//! Key encoding and 128-bit codec benchmarks for OpalDB
//!
//! These benchmarks measure the hot paths of index maintenance: encoding
//! column values into byte-comparable keys, comparing encoded keys, and
//! formatting/parsing wide integers for display and literals.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use opaldb::encoding::int128::{
    format_i128_into, parse_i128, Int128Format, MAX_ENCODED_LEN,
};
use opaldb::keys::{
    key_traits, Float8KeyTraits, Int8KeyTraits, KeyBuf, KeyTraits, UInt16KeyTraits,
    VarBytesKeyTraits, INT8_KEY_TRAITS, VAR_BYTES_KEY_TRAITS,
};
use opaldb::types::{DataType, Value};
use std::hint::black_box as hint_black_box;

fn bench_fixed_key_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_key_encode");

    group.bench_function("int8_positive", |b| {
        b.iter(|| hint_black_box(Int8KeyTraits::encode(black_box(12345678i64))));
    });

    group.bench_function("int8_negative", |b| {
        b.iter(|| hint_black_box(Int8KeyTraits::encode(black_box(-12345678i64))));
    });

    group.bench_function("uint16", |b| {
        b.iter(|| {
            hint_black_box(UInt16KeyTraits::encode(black_box(
                0xDEAD_BEEF_DEAD_BEEF_DEAD_BEEF_DEAD_BEEFu128,
            )))
        });
    });

    group.bench_function("float8_positive", |b| {
        b.iter(|| hint_black_box(Float8KeyTraits::encode(black_box(std::f64::consts::PI))));
    });

    group.bench_function("float8_negative", |b| {
        b.iter(|| hint_black_box(Float8KeyTraits::encode(black_box(-std::f64::consts::PI))));
    });

    group.finish();
}

fn bench_var_key_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("var_key_encode");

    let payloads: Vec<(&str, Vec<u8>)> = vec![
        ("text_short", b"hello".to_vec()),
        (
            "text_medium",
            b"The quick brown fox jumps over the lazy dog".to_vec(),
        ),
        ("blob_256", (0..=255u8).collect()),
        ("blob_all_escapes", vec![0x00; 64]),
    ];

    for (name, payload) in payloads {
        group.bench_with_input(BenchmarkId::new("encode", name), &payload, |b, data| {
            b.iter(|| hint_black_box(VarBytesKeyTraits::encode(black_box(data))));
        });
    }

    group.finish();
}

fn bench_encode_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_value");

    let cases: Vec<(&str, DataType, Value<'static>)> = vec![
        ("int8", DataType::Int8, Value::Int8(12345678)),
        ("uint4", DataType::UInt4, Value::UInt4(42)),
        ("float8", DataType::Float8, Value::Float8(99.99)),
        ("bool", DataType::Bool, Value::Bool(true)),
        ("text", DataType::Text, Value::from("hello world")),
    ];

    for (name, data_type, value) in cases {
        let traits = key_traits(data_type).unwrap();
        group.bench_with_input(BenchmarkId::new("dispatch", name), &value, |b, value| {
            let mut key = KeyBuf::new();
            b.iter(|| {
                key.clear();
                traits.encode_value(black_box(value), &mut key).unwrap();
                hint_black_box(key.len())
            });
        });
    }

    group.finish();
}

fn bench_key_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_comparison");

    let key1 = Int8KeyTraits::encode(100);
    let key2 = Int8KeyTraits::encode(-100);
    let key3 = Int8KeyTraits::encode(100);

    group.bench_function("decode_path_different", |b| {
        b.iter(|| hint_black_box(INT8_KEY_TRAITS.compare(black_box(&key1), black_box(&key2))));
    });

    group.bench_function("decode_path_equal", |b| {
        b.iter(|| hint_black_box(INT8_KEY_TRAITS.compare(black_box(&key1), black_box(&key3))));
    });

    group.bench_function("raw_bytes_different", |b| {
        b.iter(|| hint_black_box(black_box(key1.as_slice()).cmp(black_box(key2.as_slice()))));
    });

    let text1 = VarBytesKeyTraits::encode(b"user_123_category_apple");
    let text2 = VarBytesKeyTraits::encode(b"user_123_category_banana");

    group.bench_function("var_bytes_different", |b| {
        b.iter(|| hint_black_box(VAR_BYTES_KEY_TRAITS.compare(black_box(&text1), black_box(&text2))));
    });

    group.finish();
}

fn bench_int128_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("int128_format");

    let test_values: Vec<(i128, &str)> = vec![
        (0, "zero"),
        (127, "small"),
        (-12345678, "negative"),
        (i128::MAX, "max_i128"),
        (i128::MIN, "min_i128"),
    ];

    for (value, name) in test_values {
        group.bench_with_input(BenchmarkId::new("radix_10", name), &value, |b, &value| {
            let mut buf = [0u8; MAX_ENCODED_LEN];
            b.iter(|| {
                let text =
                    format_i128_into(black_box(value), Int128Format::default(), &mut buf).unwrap();
                hint_black_box(text.len())
            });
        });
    }

    group.bench_function("radix_16_max", |b| {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let format = Int128Format::radix(16);
        b.iter(|| {
            let text = format_i128_into(black_box(i128::MAX), format, &mut buf).unwrap();
            hint_black_box(text.len())
        });
    });

    group.bench_function("radix_2_max", |b| {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let format = Int128Format::radix(2);
        b.iter(|| {
            let text = format_i128_into(black_box(i128::MAX), format, &mut buf).unwrap();
            hint_black_box(text.len())
        });
    });

    group.finish();
}

fn bench_int128_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("int128_parse");

    let test_cases: Vec<(&str, String, u32)> = vec![
        ("radix_10_small", "127".to_string(), 10),
        ("radix_10_negative", "-12345678".to_string(), 10),
        ("radix_10_max", i128::MAX.to_string(), 10),
        ("radix_16_max", format!("{:x}", i128::MAX), 16),
    ];

    for (name, text, radix) in test_cases {
        group.bench_with_input(BenchmarkId::new("parse", name), &text, |b, text| {
            b.iter(|| hint_black_box(parse_i128(black_box(text), radix).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fixed_key_encode,
    bench_var_key_encode,
    bench_encode_value,
    bench_key_comparison,
    bench_int128_format,
    bench_int128_parse,
);
criterion_main!(benches);
