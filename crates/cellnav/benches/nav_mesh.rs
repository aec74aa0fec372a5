use cellnav::{
    find_path, walls_from_points, ConvexContainment, Graph, NavMeshBuilder, NodeId, Vec2, Wall,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Block with `teeth` notches cut into its top edge.
fn comb(teeth: usize) -> Vec<Wall> {
    let width = (teeth * 2 + 1) as f32;
    let mut points = vec![Vec2::new(0.0, 0.0), Vec2::new(width, 0.0)];
    for t in (0..teeth).rev() {
        let right = (t * 2 + 2) as f32;
        let left = right - 1.0;
        points.push(Vec2::new(right + 1.0, 3.0));
        points.push(Vec2::new(right, 3.0));
        points.push(Vec2::new(right, 1.0));
        points.push(Vec2::new(left, 1.0));
    }
    points.push(Vec2::new(1.0, 3.0));
    points.push(Vec2::new(0.0, 3.0));
    walls_from_points(&points)
}

fn locate(graph: &Graph, p: Vec2) -> NodeId {
    graph
        .locate(p, &ConvexContainment::default())
        .expect("point inside mesh")
}

fn bench_nav_mesh(c: &mut Criterion) {
    let boundary = comb(32);
    let builder = NavMeshBuilder::default();
    let graph = builder.build(&boundary).expect("navmesh").graph;

    let goal = Vec2::new(64.5, 2.5);
    let start_node = locate(&graph, Vec2::new(0.5, 2.5));
    let goal_node = locate(&graph, goal);

    let mut group = c.benchmark_group("cellnav/navmesh");

    group.bench_function("build_comb_32", |b| {
        b.iter(|| {
            let build = builder.build(black_box(&boundary)).expect("navmesh");
            black_box(build.graph.len());
        })
    });

    group.bench_function("find_path_comb_32", |b| {
        b.iter(|| {
            let result = find_path(&graph, start_node, goal_node, goal);
            black_box(result.waypoints.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_nav_mesh);
criterion_main!(benches);
