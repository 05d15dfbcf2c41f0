use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmerset::graph::assembler::{Assembler, AssemblerConfig};
use kmerset::io::fasta::SequenceRecord;
use kmerset::kmer::scan::scan_sequence;
use kmerset::kmer::set_ops::{intersect, subtract};
use kmerset::kmer::KmerSet;
use rand::Rng;

/// Generate random DNA sequences for benchmarking
fn generate_sequences(num_seqs: usize, seq_len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let bases = ['A', 'C', 'G', 'T'];

    (0..num_seqs)
        .map(|_| {
            (0..seq_len)
                .map(|_| bases[rng.gen_range(0..4)])
                .collect()
        })
        .collect()
}

fn kmer_set(sequences: &[String], k: usize) -> KmerSet {
    let mut set = KmerSet::new(k);
    for seq in sequences {
        scan_sequence(&mut set, seq.as_bytes());
    }
    set
}

/// Benchmark canonical k-mer scanning
fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    for num_seqs in [100, 1000, 10000] {
        let sequences = generate_sequences(num_seqs, 150); // 150bp reads
        let total_bases: usize = sequences.iter().map(|s| s.len()).sum();
        group.throughput(Throughput::Bytes(total_bases as u64));

        group.bench_with_input(BenchmarkId::new("k31", num_seqs), &sequences, |b, seqs| {
            b.iter(|| black_box(kmer_set(seqs, 31).len()));
        });
    }

    group.finish();
}

/// Benchmark intersection and difference of two overlapping sets
fn bench_set_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_ops");

    let shared = generate_sequences(500, 150);
    let mut a_seqs = generate_sequences(500, 150);
    let mut b_seqs = generate_sequences(500, 150);
    a_seqs.extend(shared.iter().cloned());
    b_seqs.extend(shared);
    let sets = vec![kmer_set(&a_seqs, 31), kmer_set(&b_seqs, 31)];

    group.bench_function("intersect_subtract", |b| {
        b.iter(|| {
            let mut sets = sets.clone();
            let inter = intersect(&sets).unwrap();
            black_box(subtract(&mut sets, &inter).unwrap())
        });
    });

    group.finish();
}

/// Benchmark draining a k-mer set into simplitigs
fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    for genome_len in [10_000, 100_000] {
        let genome = generate_sequences(1, genome_len);
        let set = kmer_set(&genome, 31);
        group.throughput(Throughput::Elements(set.len() as u64));

        group.bench_with_input(BenchmarkId::new("simplitigs", genome_len), &set, |b, set| {
            let assembler = Assembler::new(31, AssemblerConfig::default()).unwrap();
            b.iter(|| {
                let mut out: Vec<SequenceRecord> = Vec::new();
                black_box(assembler.assemble(set.clone(), &mut out).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scanning, bench_set_ops, bench_assembly);
criterion_main!(benches);
