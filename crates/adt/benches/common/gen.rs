use graph_adt::Weight;
use rand::prelude::*;

pub fn uniform_edge_list(vertex_count: u32, edge_count: usize) -> Vec<(u32, u32, Weight)> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..vertex_count);
            let target = rng.gen_range(0..vertex_count);
            let weight = rng.gen_range(1..100);

            (source, target, weight)
        })
        .collect::<Vec<_>>()
}

pub fn sample_vertices(vertex_count: u32, count: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(1337);

    (0..count)
        .map(|_| rng.gen_range(0..vertex_count))
        .collect::<Vec<_>>()
}
