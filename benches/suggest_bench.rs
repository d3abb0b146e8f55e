use std::hint::black_box;

use cepmatch::{AddressRecord, AddressRepository, suggest, suggest_local};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

const STREETS: [&str; 4] = [
    "Rua Professor Doutor Edmundo Juarez",
    "Avenida Bento de Abreu",
    "Avenida São Carlos",
    "Rua Voluntários da Pátria",
];

/// Repository with `count` records spread over a handful of streets.
fn repository_with(count: usize) -> AddressRepository {
    let mut repo = AddressRepository::new();
    for i in 0..count {
        let id = repo.next_id();
        repo.insert(AddressRecord {
            id,
            cep: if i % 10 == 9 {
                String::new()
            } else {
                format!("{:05}-{:03}", 14800 + i / 1000, i % 1000)
            },
            street: STREETS[i % STREETS.len()].to_string(),
            street_order: (i % 250) as i64,
            ..Default::default()
        });
    }
    repo
}

fn bench_suggest(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggest");

    for &count in &[100usize, 1_000, 10_000] {
        let repo = repository_with(count);
        let target = repo.fetch_all()[0].clone();
        let available = repo.available();

        group.throughput(Throughput::Elements(available.len() as u64));
        group.bench_function(format!("filter_score_{count}"), |b| {
            b.iter(|| suggest(black_box(&target), black_box(&available)))
        });
        group.bench_function(format!("local_{count}"), |b| {
            b.iter(|| suggest_local(black_box(&repo), black_box(&target)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_suggest);
criterion_main!(benches);
