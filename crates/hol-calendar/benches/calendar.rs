//! Criterion benchmarks for the computus and the calendar cache.
//!
//! Separates the cold path (first query of a year resolves the whole
//! rule table) from the warm path (every later query is a map lookup).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hol_calendar::{Country, HolidayCalendar};
use hol_time::{easter, Date};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn bench_easter(c: &mut Criterion) {
    c.bench_function("easter_single_year", |b| {
        b.iter(|| easter::western(black_box(2024)).unwrap())
    });

    c.bench_function("easter_full_century", |b| {
        b.iter(|| {
            for year in 2000..2100 {
                black_box(easter::western(black_box(year)).unwrap());
            }
        })
    });
}

fn bench_population(c: &mut Criterion) {
    c.bench_function("populate_one_year_cold", |b| {
        b.iter(|| {
            let mut cal = HolidayCalendar::for_country(Country::Liechtenstein);
            cal.ensure_year(black_box(2024)).unwrap();
            cal.len()
        })
    });

    c.bench_function("populate_decade_cold", |b| {
        b.iter(|| {
            let mut cal = HolidayCalendar::for_country(Country::Liechtenstein);
            for year in 2020..2030 {
                cal.ensure_year(black_box(year)).unwrap();
            }
            cal.len()
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    c.bench_function("contains_warm", |b| {
        let mut cal = HolidayCalendar::for_country(Country::Liechtenstein);
        cal.ensure_year(2024).unwrap();
        let holiday = date(2024, 4, 1);
        let ordinary = date(2024, 4, 2);
        b.iter(|| cal.contains(black_box(holiday)) ^ cal.contains(black_box(ordinary)))
    });

    c.bench_function("between_one_year_warm", |b| {
        let mut cal = HolidayCalendar::for_country(Country::Liechtenstein);
        cal.ensure_year(2024).unwrap();
        let first = date(2024, 1, 1);
        let last = date(2024, 12, 31);
        b.iter(|| cal.between(black_box(first), black_box(last)).count())
    });
}

criterion_group!(benches, bench_easter, bench_population, bench_queries);
criterion_main!(benches);
