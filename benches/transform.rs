use std::env;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use jester_legacy_sha1::sha1::{BLOCK_LENGTH_BYTES, SCHEDULE_LENGTH};
use jester_legacy_sha1::{Backend, INITIAL};

/// Backends named in `JESTER_SHA1_BACKENDS` (comma separated), or every supported one.
fn selected_backends() -> Vec<Backend> {
    match env::var("JESTER_SHA1_BACKENDS") {
        Ok(names) => names
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.parse::<Backend>().unwrap_or_else(|err| panic!("{}", err)))
            .filter(|backend| backend.is_supported())
            .collect(),
        Err(_) => Backend::supported().collect(),
    }
}

pub fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha1 transform");
    group.throughput(Throughput::Bytes(BLOCK_LENGTH_BYTES as u64));

    let block = [0x5Au8; BLOCK_LENGTH_BYTES];

    for backend in selected_backends() {
        let mut state = INITIAL;
        let mut workspace = [0u32; SCHEDULE_LENGTH];

        group.bench_function(backend.name(), |b| {
            b.iter(|| backend.transform(black_box(&mut state), black_box(&block), &mut workspace))
        });
    }

    group.finish();
}

pub fn bench_sha1_crate(c: &mut Criterion) {
    use sha1::{Digest, Sha1};

    c.bench_function("sha-1 crate 64 bytes", |b| {
        b.iter(|| {
            let mut hasher = Sha1::new();
            hasher.update(black_box(&[0x5Au8; BLOCK_LENGTH_BYTES]));
            let _ = hasher.finalize();
        })
    });
}

criterion_group!(benches, bench_transform, bench_sha1_crate);
criterion_main!(benches);
