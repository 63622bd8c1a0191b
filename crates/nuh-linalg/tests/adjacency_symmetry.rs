use nuh_core::errors::NuhError;
use nuh_core::NodeId;
use nuh_graph::Hypergraph;
use nuh_linalg::{adjacency_matrix, to_dense, AdjacencyOptions};
use proptest::prelude::*;

fn overlapping() -> Hypergraph {
    Hypergraph::from_edges(vec![vec![0, 1, 2], vec![0, 1], vec![1, 2, 3], vec![4, 5]]).unwrap()
}

#[test]
fn unweighted_pattern() {
    let graph = overlapping();
    let adjacency = adjacency_matrix(&graph, &AdjacencyOptions::default()).unwrap();
    let a = to_dense(&adjacency.matrix);

    assert_eq!(a.shape(), (6, 6));
    assert_eq!(a[(0, 1)], 1.0);
    assert_eq!(a[(1, 3)], 1.0);
    assert_eq!(a[(0, 3)], 0.0);
    assert_eq!(a[(4, 5)], 1.0);
    assert_eq!(a.diagonal().sum(), 0.0);
    assert!(adjacency.index.is_none());
}

#[test]
fn weighted_counts_and_threshold() {
    let graph = overlapping();
    let weighted = adjacency_matrix(
        &graph,
        &AdjacencyOptions {
            weighted: true,
            ..AdjacencyOptions::default()
        },
    )
    .unwrap();
    let a = to_dense(&weighted.matrix);
    assert_eq!(a[(0, 1)], 2.0);
    assert_eq!(a[(1, 2)], 2.0);
    assert_eq!(a[(2, 3)], 1.0);

    let strict = adjacency_matrix(
        &graph,
        &AdjacencyOptions {
            s: 2,
            weighted: true,
            index: true,
            ..AdjacencyOptions::default()
        },
    )
    .unwrap();
    let a = to_dense(&strict.matrix);
    assert_eq!(a[(0, 1)], 2.0);
    assert_eq!(a[(1, 2)], 2.0);
    assert_eq!(a[(2, 3)], 0.0);
    assert_eq!(a[(4, 5)], 0.0);
    assert_eq!(strict.matrix.nnz(), 4);
    let index = strict.index.unwrap();
    assert_eq!(index.len(), 6);
    assert_eq!(index[&3], NodeId::from_raw(3));

    let strict_pattern = adjacency_matrix(
        &graph,
        &AdjacencyOptions {
            s: 2,
            ..AdjacencyOptions::default()
        },
    )
    .unwrap();
    assert!(strict_pattern.matrix.values().iter().all(|v| *v == 1.0));
    assert_eq!(strict_pattern.matrix.nnz(), 4);
}

#[test]
fn order_filter_restricts_shared_edges() {
    let graph = overlapping();
    let pairs = adjacency_matrix(
        &graph,
        &AdjacencyOptions {
            order: Some(1),
            weighted: true,
            ..AdjacencyOptions::default()
        },
    )
    .unwrap();
    let a = to_dense(&pairs.matrix);
    assert_eq!(a[(0, 1)], 1.0);
    assert_eq!(a[(1, 2)], 0.0);
    assert_eq!(a[(4, 5)], 1.0);
    assert_eq!(pairs.matrix.nnz(), 4);
}

#[test]
fn no_matching_edges_gives_zero_matrix() {
    let graph = overlapping();
    let adjacency = adjacency_matrix(
        &graph,
        &AdjacencyOptions {
            order: Some(5),
            ..AdjacencyOptions::default()
        },
    )
    .unwrap();
    assert_eq!(adjacency.matrix.nrows(), 6);
    assert_eq!(adjacency.matrix.ncols(), 6);
    assert_eq!(adjacency.matrix.nnz(), 0);

    let empty = adjacency_matrix(&Hypergraph::new(), &AdjacencyOptions::default()).unwrap();
    assert_eq!(empty.matrix.nrows(), 0);
    assert_eq!(empty.matrix.ncols(), 0);
}

#[test]
fn zero_threshold_is_rejected() {
    let err = adjacency_matrix(
        &overlapping(),
        &AdjacencyOptions {
            s: 0,
            ..AdjacencyOptions::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, NuhError::InvalidArgument(info) if info.code == "invalid-threshold"));
}

proptest! {
    #[test]
    fn adjacency_is_symmetric_with_zero_diagonal(
        edges in prop::collection::vec(prop::collection::btree_set(0u64..10, 1..5), 0..12),
        s in 1usize..3,
        weighted in any::<bool>(),
        order in prop::option::of(1usize..4),
    ) {
        let graph = Hypergraph::from_edges(
            edges.iter().map(|set| set.iter().copied().collect::<Vec<u64>>()),
        )
        .unwrap();
        let adjacency = adjacency_matrix(
            &graph,
            &AdjacencyOptions { order, s, weighted, index: false },
        )
        .unwrap();
        let a = to_dense(&adjacency.matrix);
        prop_assert_eq!(a.nrows(), a.ncols());
        prop_assert_eq!(&a, &a.transpose());
        prop_assert!(a.diagonal().iter().all(|v| *v == 0.0));
    }
}
