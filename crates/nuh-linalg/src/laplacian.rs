use log::debug;
use nalgebra::DMatrix;
use nuh_core::{HypergraphView, NodeId, NuhError};

use crate::adjacency::adjacency_matrix;
use crate::options::{AdjacencyOptions, LaplacianOptions, MatrixOptions};
use crate::profile::degree_vector;
use crate::sparse::to_dense;
use crate::IndexedMatrix;

/// Order-`d` Laplacian `L = d · diag(K) − A`, where `K` counts the order-`d`
/// hyperedges of each node and `A` is the weighted order-`d` adjacency.
///
/// With `order = 1` this is the graph Laplacian `D − A` of the pairwise edges.
/// See Lucas, Cencetti and Battiston, "Multiorder Laplacian for synchronization
/// in higher-order networks", Phys. Rev. Research 2, 033410 (2020).
pub fn laplacian<V>(
    view: &V,
    opts: &LaplacianOptions,
) -> Result<IndexedMatrix<DMatrix<f64>, NodeId>, NuhError>
where
    V: HypergraphView + ?Sized,
{
    if opts.order == 0 {
        return Err(NuhError::invalid_argument(
            "invalid-order",
            "laplacian order must be at least 1",
        )
        .with_context("order", 0));
    }
    let adjacency = adjacency_matrix(
        view,
        &AdjacencyOptions {
            order: Some(opts.order),
            s: 1,
            weighted: true,
            index: true,
        },
    )?;
    let degrees = degree_vector(
        view,
        &MatrixOptions {
            order: Some(opts.order),
            index: false,
        },
    )?;

    let order = opts.order as f64;
    let mut matrix = DMatrix::from_diagonal(&degrees.matrix) * order - to_dense(&adjacency.matrix);
    if opts.rescale_per_node {
        matrix /= order;
    }
    debug!(
        "laplacian: order={}, {}x{}, rescaled={}",
        opts.order,
        matrix.nrows(),
        matrix.ncols(),
        opts.rescale_per_node
    );
    Ok(IndexedMatrix {
        matrix,
        index: if opts.index { adjacency.index } else { None },
    })
}
