use cellnav::{
    build_nav_mesh, find_path, walls_from_points, ConvexContainment, Graph, NodeId, RouteError,
    Vec2, Wall,
};

fn l_shape() -> Vec<Wall> {
    walls_from_points(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(2.0, 0.0),
        Vec2::new(2.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(1.0, 2.0),
        Vec2::new(0.0, 2.0),
    ])
}

fn unit_cell(x: f32, y: f32) -> Vec<Wall> {
    walls_from_points(&[
        Vec2::new(x, y),
        Vec2::new(x + 1.0, y),
        Vec2::new(x + 1.0, y + 1.0),
        Vec2::new(x, y + 1.0),
    ])
}

/// 2x2 block of unit cells: ids 0 (0,0), 1 (1,0), 2 (0,1), 3 (1,1).
fn two_by_two() -> Graph {
    Graph::from_cells(
        vec![
            unit_cell(0.0, 0.0),
            unit_cell(1.0, 0.0),
            unit_cell(0.0, 1.0),
            unit_cell(1.0, 1.0),
        ],
        1e-4,
    )
}

#[test]
fn l_shape_route_crosses_the_shared_wall_midpoint() {
    let graph = build_nav_mesh(&l_shape()).expect("navmesh");
    let start = Vec2::new(1.5, 0.5);
    let goal = Vec2::new(0.5, 1.5);

    let route = graph
        .route(start, goal, &ConvexContainment::default())
        .expect("route");
    assert_ne!(route.start, route.destination);
    assert_eq!(route.waypoints, vec![Vec2::new(0.5, 0.5), goal]);
    assert_eq!(route.nodes_expanded, 2);
}

#[test]
fn same_cell_returns_only_the_destination() {
    let square = walls_from_points(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 0.0),
        Vec2::new(4.0, 4.0),
        Vec2::new(0.0, 4.0),
    ]);
    let graph = build_nav_mesh(&square).expect("navmesh");
    let goal = Vec2::new(3.0, 1.0);

    let result = find_path(&graph, NodeId(0), NodeId(0), goal);
    assert!(result.reached);
    assert_eq!(result.waypoints, vec![goal]);
    assert_eq!(result.nodes_expanded, 1);

    let route = graph
        .route(Vec2::new(0.5, 3.5), goal, &ConvexContainment::default())
        .expect("route");
    assert_eq!(route.waypoints, vec![goal]);
}

#[test]
fn first_waypoint_is_the_doorway_out_of_the_start_cell() {
    let graph = Graph::from_cells(
        vec![
            unit_cell(0.0, 0.0),
            unit_cell(1.0, 0.0),
            unit_cell(2.0, 0.0),
            unit_cell(3.0, 0.0),
        ],
        1e-4,
    );
    let goal = Vec2::new(3.75, 0.25);

    let result = find_path(&graph, NodeId(0), NodeId(3), goal);
    assert!(result.reached);
    assert_eq!(
        result.waypoints,
        vec![
            Vec2::new(1.0, 0.5),
            Vec2::new(2.0, 0.5),
            Vec2::new(3.0, 0.5),
            goal,
        ]
    );
    assert_eq!(result.waypoints.last().copied(), Some(goal));
}

#[test]
fn equal_cost_routes_break_ties_by_insertion_order() {
    let graph = two_by_two();
    graph.check_adjacency().expect("symmetric");
    let goal = Vec2::new(1.5, 1.5);

    // Cells 1 and 2 tie on f; cell 1 was discovered first, so the route goes through it.
    let result = find_path(&graph, NodeId(0), NodeId(3), goal);
    assert!(result.reached);
    assert_eq!(
        result.waypoints,
        vec![Vec2::new(1.0, 0.5), Vec2::new(1.5, 1.0), goal]
    );
    assert_eq!(result.nodes_expanded, 4);

    let again = find_path(&graph, NodeId(0), NodeId(3), goal);
    assert_eq!(again, result);
}

#[test]
fn doorway_midpoint_comes_from_the_cell_being_left() {
    let graph = two_by_two();
    let goal = Vec2::new(0.5, 0.5);

    let result = find_path(&graph, NodeId(3), NodeId(0), goal);
    let first = &graph.nodes()[3];
    let link = first.neighbors()[0];
    let expected = first.wall_of(&link).expect("wall").midpoint();
    assert_eq!(result.waypoints.first().copied(), Some(expected));
    assert_eq!(result.waypoints.len(), 3);
}

#[test]
fn unreachable_destination_exhausts_only_the_start_component() {
    let graph = Graph::from_cells(
        vec![
            unit_cell(0.0, 0.0),
            unit_cell(1.0, 0.0),
            unit_cell(2.0, 0.0),
            // Detached island.
            unit_cell(10.0, 10.0),
        ],
        1e-4,
    );
    let goal = Vec2::new(10.5, 10.5);

    let result = find_path(&graph, NodeId(0), NodeId(3), goal);
    assert!(!result.reached);
    assert_eq!(result.waypoints, vec![goal]);
    assert_eq!(result.nodes_expanded, 3);

    let err = graph
        .route(Vec2::new(0.5, 0.5), goal, &ConvexContainment::default())
        .unwrap_err();
    assert_eq!(err, RouteError::Unreachable { nodes_expanded: 3 });
}

#[test]
fn points_outside_the_mesh_are_reported() {
    let graph = build_nav_mesh(&l_shape()).expect("navmesh");
    let inside = Vec2::new(0.5, 0.5);
    let outside = Vec2::new(1.5, 1.5);
    let containment = ConvexContainment::default();

    assert_eq!(
        graph.route(outside, inside, &containment).unwrap_err(),
        RouteError::StartOutsideMesh
    );
    assert_eq!(
        graph.route(inside, outside, &containment).unwrap_err(),
        RouteError::DestinationOutsideMesh
    );
}

#[test]
fn custom_containment_can_be_supplied_as_a_closure() {
    let graph = two_by_two();
    // Resolve everything to the last cell.
    let always_last = |_: Vec2, node: &cellnav::GraphNode| node.id() == NodeId(3);

    assert_eq!(graph.locate(Vec2::new(0.1, 0.1), &always_last), Some(NodeId(3)));
    let route = graph
        .route(Vec2::new(0.1, 0.1), Vec2::new(0.2, 0.2), &always_last)
        .expect("route");
    assert_eq!(route.waypoints, vec![Vec2::new(0.2, 0.2)]);
}

#[test]
fn unknown_start_node_is_unreachable_not_a_panic() {
    let graph = two_by_two();
    let result = find_path(&graph, NodeId(42), NodeId(0), Vec2::new(0.5, 0.5));
    assert!(!result.reached);
    assert_eq!(result.nodes_expanded, 0);
}
