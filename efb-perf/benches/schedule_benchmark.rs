use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use efb_perf::measurements::{Duration, Mass, Speed};
use efb_perf::prelude::*;

fn aircraft() -> Aircraft {
    Aircraft::new(Speed::kt(120.0), FuelFlow::lb_per_h(800.0))
        .with_useful_load(Mass::lb(3000.0))
        .with_max_passengers(12)
}

fn policy() -> FuelPolicy {
    FuelPolicy {
        taxi: Mass::lb(50.0),
        contingency_percent: 10.0,
        reserve: Reserve::Fixed(Mass::lb(400.0)),
        deck_time: Duration::min(5.0),
        deck_fuel_flow: FuelFlow::lb_per_h(300.0),
        passenger_weight: Mass::lb(200.0),
        contingency_allocation: ContingencyAllocation::ProRata,
    }
}

/// Waypoints zig-zagging east with a navigation point between each stop.
fn waypoints(stops: usize) -> Vec<Waypoint> {
    (0..stops)
        .flat_map(|i| {
            let lon = i as f64 * 0.3;
            let stop = Waypoint::landing_stop(format!("S{i}"), Coordinate::new(53.0, lon));
            let nav = Waypoint::navigation(format!("N{i}"), Coordinate::new(53.1, lon + 0.15));
            [stop, nav]
        })
        .collect()
}

/// Benchmark the wind triangle of a single leg
fn bench_wind_triangle(c: &mut Criterion) {
    let wind = Wind::new(250.0, Speed::kt(25.0));

    c.bench_function("wind triangle", |b| {
        b.iter(|| efb_perf::fc::wind_triangle(black_box(Speed::kt(120.0)), black_box(95.0), &wind))
    });
}

/// Benchmark route and schedule computation by number of stops
fn bench_schedule(c: &mut Criterion) {
    let aircraft = aircraft();
    let policy = policy();
    let perf = aircraft.performance().expect("aircraft should have performance");
    let weather = Weather::new(Wind::new(250.0, Speed::kt(25.0)));

    let mut group = c.benchmark_group("schedule");

    for stops in [3, 10, 50] {
        let waypoints = waypoints(stops);

        group.bench_with_input(BenchmarkId::new("route", stops), &waypoints, |b, wps| {
            b.iter(|| Route::build(black_box(wps.clone()), &perf, &weather))
        });

        let route = Route::build(waypoints, &perf, &weather);
        group.bench_with_input(BenchmarkId::new("fuel", stops), &route, |b, route| {
            b.iter(|| FuelSchedule::new(black_box(route), &policy, &aircraft, Mass::lb(0.0)))
        });
    }

    group.finish();
}

/// Benchmark the full recomputation after an edit
fn bench_fms(c: &mut Criterion) {
    let mut builder = FlightPlanningBuilder::new();
    builder.aircraft(aircraft()).policy(policy());

    let mut fms = FMS::new();
    fms.set_flight_planning(builder)
        .expect("flight planning should be set");

    c.bench_function("fms modify waypoints", |b| {
        b.iter(|| {
            fms.modify_waypoints(|wps| *wps = waypoints(black_box(10)))
                .expect("waypoints should be modified")
        })
    });
}

criterion_group!(benches, bench_wind_triangle, bench_schedule, bench_fms);
criterion_main!(benches);
