use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use stadiumgraph_lib::{
    breadth_first, depth_first, minimum_spanning_tree, plan_trip, shortest_path,
    shortest_path_a_star, StadiumGraph,
};
use std::hint::black_box;

const GRID: usize = 12;

fn cell(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

/// Square grid with deterministic, uneven weights.
static GRID_GRAPH: Lazy<StadiumGraph> = Lazy::new(|| {
    let mut graph = StadiumGraph::new();
    for row in 0..GRID {
        for col in 0..GRID {
            let weight = ((row * 7 + col * 13) % 17 + 1) as f64;
            if col + 1 < GRID {
                graph.add_edge(&cell(row, col), &cell(row, col + 1), weight);
            }
            if row + 1 < GRID {
                graph.add_edge(&cell(row, col), &cell(row + 1, col), weight + 0.5);
            }
        }
    }
    graph
});

static START: Lazy<String> = Lazy::new(|| cell(0, 0));
static GOAL: Lazy<String> = Lazy::new(|| cell(GRID - 1, GRID - 1));

fn benchmark_algorithms(c: &mut Criterion) {
    let graph = &*GRID_GRAPH;

    c.bench_function("dijkstra_grid_corner_to_corner", |b| {
        b.iter(|| {
            let route = shortest_path(graph, &START, &GOAL).expect("route exists");
            black_box(route.distance)
        });
    });

    c.bench_function("a_star_grid_corner_to_corner", |b| {
        b.iter(|| {
            let route = shortest_path_a_star(graph, &START, &GOAL).expect("route exists");
            black_box(route.distance)
        });
    });

    c.bench_function("prim_grid", |b| {
        b.iter(|| {
            let tree = minimum_spanning_tree(graph).expect("grid is connected");
            black_box(tree.total_weight)
        });
    });

    c.bench_function("dfs_bfs_grid", |b| {
        b.iter(|| {
            let dfs = depth_first(graph, &START).expect("start exists");
            let bfs = breadth_first(graph, &START).expect("start exists");
            black_box((dfs.distance, bfs.distance))
        });
    });

    c.bench_function("greedy_trip_grid_row", |b| {
        let stops: Vec<String> = (1..GRID).map(|col| cell(0, col)).collect();
        b.iter(|| {
            let route = plan_trip(graph, &START, stops.as_slice()).expect("row is a chain");
            black_box(route.distance)
        });
    });
}

criterion_group!(benches, benchmark_algorithms);
criterion_main!(benches);
