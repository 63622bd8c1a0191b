use log::debug;
use nalgebra_sparse::CsrMatrix;
use nuh_core::{HypergraphView, NodeId, NuhError};

use crate::incidence::unit_incidence;
use crate::options::AdjacencyOptions;
use crate::sparse::{node_gram, retain_off_diagonal};
use crate::IndexedMatrix;

/// Node by node adjacency matrix `I · Iᵗ` with the diagonal removed.
///
/// Two nodes are adjacent when they share at least `s` hyperedges of the
/// selected order. Unweighted matrices store `1` for every adjacent pair;
/// weighted ones keep the shared-edge count.
pub fn adjacency_matrix<V>(
    view: &V,
    opts: &AdjacencyOptions,
) -> Result<IndexedMatrix<CsrMatrix<f64>, NodeId>, NuhError>
where
    V: HypergraphView + ?Sized,
{
    if opts.s == 0 {
        return Err(NuhError::invalid_argument(
            "invalid-threshold",
            "adjacency threshold s must be at least 1",
        )
        .with_context("s", 0));
    }
    let (incidence, index) = unit_incidence(view, opts.order)?;
    let threshold = opts.s as f64;
    let weighted = opts.weighted;
    let matrix = retain_off_diagonal(&node_gram(&incidence), |shared| {
        if shared < threshold {
            None
        } else if weighted {
            Some(shared)
        } else {
            Some(1.0)
        }
    });
    debug!(
        "adjacency: {}x{}, nnz={}, s={}, weighted={}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz(),
        opts.s,
        opts.weighted
    );
    Ok(IndexedMatrix {
        matrix,
        index: opts.index.then_some(index.rows),
    })
}

/// Clique motif matrix: every hyperedge, of any order, becomes a clique and
/// entry `(i, j)` counts the hyperedges containing both `i` and `j`.
///
/// The diagonal is zero and no zero entry is stored.
pub fn clique_motif_matrix<V>(
    view: &V,
    index: bool,
) -> Result<IndexedMatrix<CsrMatrix<f64>, NodeId>, NuhError>
where
    V: HypergraphView + ?Sized,
{
    let (incidence, positions) = unit_incidence(view, None)?;
    let matrix = retain_off_diagonal(&node_gram(&incidence), |value| {
        (value != 0.0).then_some(value)
    });
    debug!(
        "clique motif: {}x{}, nnz={}",
        matrix.nrows(),
        matrix.ncols(),
        matrix.nnz()
    );
    Ok(IndexedMatrix {
        matrix,
        index: index.then_some(positions.rows),
    })
}
