use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use meetingtime_core::models::{Schedule, ScheduleKind};
use meetingtime_core::slice::ScheduleSlice;
use meetingtime_core::weekday::ordinal_weekday;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 9, 14, 18, 0, 0).unwrap()
}

fn create_test_schedule(kind: ScheduleKind) -> Schedule {
    Schedule::new(kind, anchor(), 1).unwrap()
}

fn bench_next_by_kind(c: &mut Criterion) {
    let query = anchor() + Duration::days(365 * 5);

    let mut group = c.benchmark_group("next_by_kind");
    for kind in ScheduleKind::ALL {
        let schedule = create_test_schedule(kind);
        group.bench_with_input(BenchmarkId::new("kind", kind), &schedule, |b, schedule| {
            b.iter(|| schedule.next(black_box(query)).unwrap())
        });
    }
    group.finish();
}

fn bench_next_by_horizon(c: &mut Criterion) {
    let schedule = Schedule::daily(anchor(), 1).unwrap();

    let mut group = c.benchmark_group("next_by_horizon");
    for years in [1i64, 10, 50].iter() {
        let query = anchor() + Duration::days(365 * years);
        group.bench_with_input(BenchmarkId::new("years", years), years, |b, _| {
            b.iter(|| schedule.next(black_box(query)).unwrap())
        });
    }
    group.finish();
}

fn bench_previous_in_timezone(c: &mut Criterion) {
    let schedule = Schedule::weekly(anchor(), 1)
        .unwrap()
        .in_timezone(Tz::America__New_York);
    let query = anchor() + Duration::days(365 * 5);

    c.bench_function("previous_weekly_new_york", |b| {
        b.iter(|| schedule.previous(black_box(query)).unwrap())
    });
}

fn bench_combined_schedules(c: &mut Criterion) {
    let schedules: ScheduleSlice = ScheduleKind::ALL
        .into_iter()
        .map(create_test_schedule)
        .collect();
    let query = anchor() + Duration::days(365 * 5);

    c.bench_function("combined_next", |b| {
        b.iter(|| schedules.next(black_box(query)).unwrap())
    });
    c.bench_function("combined_upcoming_20", |b| {
        b.iter(|| schedules.upcoming(black_box(query), 20).unwrap())
    });
}

fn bench_ordinal_weekday(c: &mut Criterion) {
    let date = anchor();
    c.bench_function("ordinal_weekday", |b| b.iter(|| ordinal_weekday(black_box(&date))));
}

criterion_group!(
    benches,
    bench_next_by_kind,
    bench_next_by_horizon,
    bench_previous_in_timezone,
    bench_combined_schedules,
    bench_ordinal_weekday
);
criterion_main!(benches);
