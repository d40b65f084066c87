use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mask_core::{Strategy, format_cnpj, format_cpf, only_digits, validate_cnpj, validate_cpf};

const KEYSTROKES: usize = 10_000;

/// Simulate a user typing a document one keystroke at a time: every prefix
/// of the raw digits goes through the formatter, like a live field would.
fn make_keystroke_stream(document: &str, keystrokes: usize) -> Vec<String> {
    (0..keystrokes)
        .map(|i| document[..=(i % document.len())].to_string())
        .collect()
}

fn bench_format_cpf_keystrokes(c: &mut Criterion) {
    let stream = make_keystroke_stream("52998224725", KEYSTROKES);
    c.bench_function("bench_format_cpf_keystrokes", |b| {
        b.iter(|| {
            for raw in &stream {
                black_box(format_cpf(black_box(raw)));
            }
        });
    });
}

fn bench_format_cnpj_keystrokes(c: &mut Criterion) {
    let stream = make_keystroke_stream("11222333000181", KEYSTROKES);
    c.bench_function("bench_format_cnpj_keystrokes", |b| {
        b.iter(|| {
            for raw in &stream {
                black_box(format_cnpj(black_box(raw)));
            }
        });
    });
}

fn bench_validate_documents(c: &mut Criterion) {
    c.bench_function("bench_validate_cpf", |b| {
        b.iter(|| black_box(validate_cpf(black_box("529.982.247-25"))));
    });
    c.bench_function("bench_validate_cnpj", |b| {
        b.iter(|| black_box(validate_cnpj(black_box("11.222.333/0001-81"))));
    });
}

fn bench_only_digits_dirty(c: &mut Criterion) {
    // Worst case for extraction: every other character is punctuation.
    let dirty: String = "1.2-3/4 5".repeat(1_000);
    c.bench_function("bench_only_digits_dirty", |b| {
        b.iter(|| black_box(only_digits(black_box(&dirty)).len()));
    });

    let clean: String = "123456789".repeat(1_000);
    c.bench_function("bench_only_digits_clean", |b| {
        b.iter(|| black_box(only_digits(black_box(&clean)).len()));
    });
}

fn bench_strategy_apply_mixed(c: &mut Criterion) {
    let inputs = [
        (Strategy::Cpf, "52998224725"),
        (Strategy::Cnpj, "11222333000181"),
        (Strategy::CnpjCpf, "1122233300018"),
        (Strategy::Cep, "12345678"),
        (Strategy::Phone, "11987654321"),
        (Strategy::Currency, "123456789"),
    ];
    c.bench_function("bench_strategy_apply_mixed", |b| {
        b.iter(|| {
            for (strategy, raw) in inputs {
                black_box(strategy.apply(black_box(raw)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_format_cpf_keystrokes,
    bench_format_cnpj_keystrokes,
    bench_validate_documents,
    bench_only_digits_dirty,
    bench_strategy_apply_mixed
);
criterion_main!(benches);
