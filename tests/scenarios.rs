use dijkstra_sweep::dimacs::{read_graph, read_graph_from_path, LoadedGraph};
use dijkstra_sweep::{dijkstra, dijkstra_with, FrontierKind, GraphError, Sweep};
use std::path::Path;

fn load(name: &str) -> LoadedGraph {
    read_graph_from_path(Path::new("tests/data").join(name)).unwrap()
}

#[test]
fn two_hop_path_beats_direct_arc() {
    let loaded = load("chain.gr");
    let paths = dijkstra(&loaded.graph, 1).unwrap();
    assert_eq!(
        paths.distances.finite().collect::<Vec<_>>(),
        vec![(1, 0), (2, 5), (3, 10)]
    );
    assert_eq!(paths.total_cost, 15);
}

#[test]
fn sink_vertex_reaches_nothing() {
    let loaded = load("sink.gr");
    let from_one = dijkstra(&loaded.graph, 1).unwrap();
    assert_eq!(
        from_one.distances.iter().collect::<Vec<_>>(),
        vec![(1, Some(0)), (2, Some(1))]
    );

    let from_two = dijkstra(&loaded.graph, 2).unwrap();
    assert_eq!(
        from_two.distances.iter().collect::<Vec<_>>(),
        vec![(1, None), (2, Some(0))]
    );
    assert_eq!(from_two.total_cost, 0);
}

#[test]
fn lighter_parallel_arc_wins() {
    let loaded = load("parallel.gr");
    assert_eq!(loaded.edge_count, 2);
    let paths = dijkstra(&loaded.graph, 1).unwrap();
    assert_eq!(paths.distances.get(2), Some(3));
}

#[test]
fn empty_input_sweeps_nothing() {
    let loaded = load("empty.gr");
    let summary = Sweep::default()
        .run(&loaded.graph, loaded.edge_count, |_| panic!("no sources expected"))
        .unwrap();
    assert_eq!(summary.vertex_count, 0);
    assert_eq!(summary.edge_count, 0);
    assert_eq!(summary.grand_total, 0);
}

#[test]
fn sweep_over_chain() {
    let loaded = load("chain.gr");
    let mut totals = Vec::new();
    let summary = Sweep::default()
        .run(&loaded.graph, loaded.edge_count, |run| {
            totals.push((run.source, run.paths.total_cost))
        })
        .unwrap();
    assert_eq!(totals, vec![(1, 15), (2, 5), (3, 0)]);
    // Last finite per source: 10 from 1, 5 from 2, 0 from 3.
    assert_eq!(summary.grand_total, 15);
    assert_eq!(summary.vertex_count, 3);
    assert_eq!(summary.edge_count, 3);
    assert_eq!(summary.sources, 3);
    assert_eq!(summary.reached, 3);
}

#[test]
fn sweep_result_does_not_depend_on_frontier() {
    let loaded = load("chain.gr");
    let lazy = Sweep::new(FrontierKind::Lazy)
        .run(&loaded.graph, loaded.edge_count, |_| {})
        .unwrap();
    let keyed = Sweep::new(FrontierKind::DecreaseKey)
        .run(&loaded.graph, loaded.edge_count, |_| {})
        .unwrap();
    assert_eq!(lazy.grand_total, keyed.grand_total);
    assert_eq!(lazy.reached, keyed.reached);
}

#[test]
fn missing_source_is_invalid() {
    let loaded = read_graph("a 1 2 1\n".as_bytes()).unwrap();
    assert_eq!(
        dijkstra_with(&loaded.graph, 3, FrontierKind::DecreaseKey).err(),
        Some(GraphError::InvalidSource(3))
    );
}

#[test]
fn missing_file_is_io_error() {
    assert!(matches!(
        read_graph_from_path("tests/data/does-not-exist.gr"),
        Err(dijkstra_sweep::LoadError::Io(_))
    ));
}
