use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use courier_route::{GreedyRouteBuilder, Location, RouteRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn benchmark_greedy_route(c: &mut Criterion) {
    let builder = GreedyRouteBuilder::default();

    let mut group = c.benchmark_group("greedy_build");
    for restaurants in [5, 25, 100] {
        let (start, stops) = create_benchmark_data(restaurants, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(stops.len()),
            &stops,
            |b, stops| b.iter(|| builder.build(black_box(&start), black_box(stops))),
        );
    }
    group.finish();

    // Many couriers at once
    let requests: Vec<RouteRequest> = (0..64)
        .map(|seed| {
            let (start, stops) = create_benchmark_data(20, seed);
            RouteRequest::new(start, stops)
        })
        .collect();
    c.bench_function("greedy_build_many", |b| {
        b.iter(|| builder.build_many(black_box(&requests)))
    });
}

// Restaurants around Philadelphia, each with two customers
fn create_benchmark_data(restaurants: usize, seed: u64) -> (Location, Vec<Location>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Location::new("courier", 39.9526, -75.1652);

    let mut stops = Vec::with_capacity(restaurants * 3);
    for r in 0..restaurants {
        let restaurant_id = format!("R{}", r);
        stops.push(Location::restaurant(
            restaurant_id.clone(),
            rng.gen_range(39.8..40.1),
            rng.gen_range(-75.3..-75.0),
            rng.gen_range(0.0..45.0),
        ));
        for c in 0..2 {
            stops.push(Location::customer(
                format!("C{}_{}", r, c),
                rng.gen_range(39.8..40.1),
                rng.gen_range(-75.3..-75.0),
                restaurant_id.clone(),
            ));
        }
    }

    (start, stops)
}

criterion_group!(benches, benchmark_greedy_route);
criterion_main!(benches);
