use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use keypunt::config::Config;
use keypunt::pipeline::segment_merger::SegmentMerger;
use keypunt::pipeline::similarity::similarity;
use keypunt::pipeline::types::Segment;
use keypunt::pipeline::Consolidator;

/// Build a synthetic hour of news radio: a handful of items, each
/// recognized several times with slight rewording, the way overlapping
/// transcription windows produce them.
fn synthetic_broadcast(items: usize) -> Vec<Segment> {
    let topics = [
        "het kabinet kondigt nieuwe maatregelen aan voor de woningmarkt",
        "stakingen bij het spoor raken duizenden reizigers",
        "de rente op spaargeld stijgt volgens de grote banken",
        "het weerbericht belooft zonnige dagen aan de kust",
        "de verkiezingen naderen en de campagnes draaien op volle toeren",
    ];
    let mut segments = Vec::with_capacity(items * 3);
    for i in 0..items {
        let topic = topics[i % topics.len()];
        let start = i as f64 * 30.0;
        segments.push(Segment::new(start, start + 8.0, topic));
        segments.push(Segment::new(
            start + 8.0,
            start + 16.0,
            format!("{} zo meldt de redactie", topic),
        ));
        segments.push(Segment::new(
            start + 16.0,
            start + 24.0,
            format!("nogmaals {}", topic),
        ));
    }
    segments
}

fn bench_similarity(c: &mut Criterion) {
    let a = "het kabinet kondigt nieuwe maatregelen aan voor de woningmarkt";
    let b = "nieuwe maatregelen voor de woningmarkt werden vandaag besproken";

    c.bench_function("similarity", |bencher| {
        bencher.iter(|| similarity(black_box(a), black_box(b)))
    });
}

fn bench_segment_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_merge");
    for size in [30usize, 120, 480] {
        let segments = synthetic_broadcast(size / 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), &segments, |bencher, segments| {
            let merger = SegmentMerger::default();
            bencher.iter(|| merger.merge(black_box(segments)))
        });
    }
    group.finish();
}

fn bench_full_consolidation(c: &mut Criterion) {
    let segments = synthetic_broadcast(40);
    let consolidator = Consolidator::new(Config::default());

    c.bench_function("consolidate_frequency_fallback", |bencher| {
        bencher.iter(|| consolidator.consolidate(black_box(&segments), None))
    });
}

criterion_group!(
    benches,
    bench_similarity,
    bench_segment_merge,
    bench_full_consolidation
);
criterion_main!(benches);
