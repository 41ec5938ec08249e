use criterion::{Criterion, criterion_group, criterion_main};
use logshim::{Level, LineWriter, Logger, Message, SourceLocation, StdLogger};
use std::hint::black_box;
use std::io;
use std::time::Duration;

fn make_logger(level: Level) -> StdLogger {
    let sink = LineWriter::new(io::sink()).source(SourceLocation::Short);
    StdLogger::new(sink, level)
}

fn build_and_commit(log: &StdLogger) {
    log.info()
        .str("path", black_box("/api/v1/items"))
        .uint64("status", black_box(200))
        .dur("took", black_box(Duration::from_micros(1830)))
        .bool("cached", black_box(false))
        .msg("request served");
}

fn bench_suppressed(c: &mut Criterion) {
    let log = make_logger(Level::Error);

    c.bench_function("StdMessage suppressed", |b| {
        b.iter(|| build_and_commit(&log));
    });
}

fn bench_emitted(c: &mut Criterion) {
    let log = make_logger(Level::Debug);

    c.bench_function("StdMessage emitted", |b| {
        b.iter(|| build_and_commit(&log));
    });
}

fn bench_msgf(c: &mut Criterion) {
    let log = make_logger(Level::Debug);

    c.bench_function("StdMessage msgf", |b| {
        b.iter(|| {
            log.warn()
                .msgf(format_args!("{} of {} workers idle", black_box(3), black_box(8)));
        });
    });
}

criterion_group!(benches, bench_suppressed, bench_emitted, bench_msgf);
criterion_main!(benches);
