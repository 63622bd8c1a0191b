use nuh_core::errors::NuhError;
use nuh_core::{EdgeId, HypergraphView, NodeId};
use nuh_graph::Hypergraph;
use nuh_linalg::{incidence_matrix, incidence_matrix_weighted, IncidenceMatrix, IncidenceOptions};
use proptest::prelude::*;

fn mixed_graph() -> Hypergraph {
    // Node 5 is isolated; edge sizes 2, 3, 2 and 1.
    let mut graph = Hypergraph::from_edges(vec![vec![0, 1], vec![1, 2, 3], vec![3, 4], vec![4]])
        .unwrap();
    graph.add_node_with_id(NodeId::from_raw(5)).unwrap();
    graph
}

#[test]
fn unfiltered_sparse_and_dense_agree() {
    let graph = mixed_graph();
    let sparse = incidence_matrix(&graph, &IncidenceOptions::default()).unwrap();
    let dense = incidence_matrix(
        &graph,
        &IncidenceOptions {
            sparse: false,
            ..IncidenceOptions::default()
        },
    )
    .unwrap();

    assert!(matches!(sparse.matrix, IncidenceMatrix::Sparse(_)));
    assert!(matches!(dense.matrix, IncidenceMatrix::Dense(_)));
    assert_eq!(sparse.matrix.shape(), (6, 4));
    assert_eq!(dense.matrix.shape(), (6, 4));
    assert_eq!(sparse.matrix.to_dense(), dense.matrix.to_dense());
    assert!(sparse.index.is_none());

    let m = dense.matrix.to_dense();
    assert_eq!(m[(1, 0)], 1.0);
    assert_eq!(m[(1, 1)], 1.0);
    assert_eq!(m[(2, 0)], 0.0);
    assert_eq!(m.row(5).sum(), 0.0);
    assert_eq!(m.sum(), 8.0);
}

#[test]
fn order_filter_keeps_matching_edges_only() {
    let graph = mixed_graph();
    let incidence = incidence_matrix(
        &graph,
        &IncidenceOptions {
            order: Some(1),
            index: true,
            ..IncidenceOptions::default()
        },
    )
    .unwrap();

    assert_eq!(incidence.matrix.shape(), (6, 2));
    let index = incidence.index.unwrap();
    assert_eq!(index.cols.len(), 2);
    assert_eq!(index.cols[&0], EdgeId::from_raw(0));
    assert_eq!(index.cols[&1], EdgeId::from_raw(2));
    assert_eq!(index.rows.len(), 6);
    assert_eq!(index.rows[&5], NodeId::from_raw(5));

    let m = incidence.matrix.to_dense();
    for col in 0..2 {
        assert_eq!(m.column(col).sum(), 2.0);
    }
}

#[test]
fn empty_filter_yields_zero_size_matrix() {
    let graph = mixed_graph();
    let incidence = incidence_matrix(
        &graph,
        &IncidenceOptions {
            order: Some(7),
            index: true,
            ..IncidenceOptions::default()
        },
    )
    .unwrap();

    assert_eq!(incidence.matrix.shape(), (6, 0));
    assert!(incidence.matrix.is_empty());
    let index = incidence.index.unwrap();
    assert!(index.rows.is_empty());
    assert!(index.cols.is_empty());
}

#[test]
fn empty_hypergraph_is_not_an_error() {
    let graph = Hypergraph::new();
    for sparse in [true, false] {
        let incidence = incidence_matrix(
            &graph,
            &IncidenceOptions {
                sparse,
                ..IncidenceOptions::default()
            },
        )
        .unwrap();
        assert_eq!(incidence.matrix.shape(), (0, 0));
        assert!(incidence.matrix.is_empty());
    }
}

#[test]
fn zero_order_is_rejected() {
    let graph = mixed_graph();
    let err = incidence_matrix(
        &graph,
        &IncidenceOptions {
            order: Some(0),
            ..IncidenceOptions::default()
        },
    )
    .unwrap_err();
    match err {
        NuhError::InvalidArgument(info) => {
            assert_eq!(info.code, "invalid-order");
            assert!(info.hint.is_some());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn weight_function_sets_entries() {
    let graph = mixed_graph();
    let weight = |node: NodeId, edge: EdgeId, view: &Hypergraph| {
        let size = view.members(edge).unwrap().len() as f64;
        (node.as_raw() + 1) as f64 / size
    };
    for sparse in [true, false] {
        let incidence = incidence_matrix_weighted(
            &graph,
            &IncidenceOptions {
                sparse,
                ..IncidenceOptions::default()
            },
            weight,
        )
        .unwrap();
        let m = incidence.matrix.to_dense();
        assert_eq!(m[(0, 0)], 0.5);
        assert!((m[(3, 1)] - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(m[(4, 3)], 5.0);
        assert_eq!(m[(0, 1)], 0.0);
    }
}

fn build(edges: &[Vec<u64>], extra_nodes: u64) -> Hypergraph {
    let mut graph = Hypergraph::from_edges(edges.iter().map(|e| e.as_slice())).unwrap();
    for _ in 0..extra_nodes {
        graph.add_node();
    }
    graph
}

proptest! {
    #[test]
    fn shape_is_nodes_by_filtered_edges(
        edges in prop::collection::vec(prop::collection::btree_set(0u64..12, 1..5), 0..10),
        extra in 0u64..3,
        order in prop::option::of(1usize..4),
        sparse in any::<bool>(),
    ) {
        let edges: Vec<Vec<u64>> = edges.into_iter().map(|s| s.into_iter().collect()).collect();
        let graph = build(&edges, extra);
        let expected_cols = match order {
            Some(order) => edges.iter().filter(|e| e.len() == order + 1).count(),
            None => edges.len(),
        };
        let incidence = incidence_matrix(
            &graph,
            &IncidenceOptions { order, sparse, index: false },
        )
        .unwrap();
        prop_assert_eq!(incidence.matrix.shape(), (graph.num_nodes(), expected_cols));
    }
}
