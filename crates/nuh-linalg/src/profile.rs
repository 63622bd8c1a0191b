use nalgebra::DVector;
use nalgebra_sparse::CsrMatrix;
use nuh_core::{EdgeId, HypergraphView, NodeId, NuhError};

use crate::incidence::unit_incidence;
use crate::options::MatrixOptions;
use crate::sparse::edge_gram;
use crate::IndexedMatrix;

/// Edge by edge matrix `Iᵗ · I`: entry `(i, j)` counts the nodes shared by
/// edges `i` and `j`, the diagonal holds edge sizes.
pub fn intersection_profile<V>(
    view: &V,
    opts: &MatrixOptions,
) -> Result<IndexedMatrix<CsrMatrix<f64>, EdgeId>, NuhError>
where
    V: HypergraphView + ?Sized,
{
    let (incidence, index) = unit_incidence(view, opts.order)?;
    Ok(IndexedMatrix {
        matrix: edge_gram(&incidence),
        index: opts.index.then_some(index.cols),
    })
}

/// Number of hyperedges of the selected order each node belongs to.
pub fn degree_vector<V>(
    view: &V,
    opts: &MatrixOptions,
) -> Result<IndexedMatrix<DVector<f64>, NodeId>, NuhError>
where
    V: HypergraphView + ?Sized,
{
    let (incidence, index) = unit_incidence(view, opts.order)?;
    let mut degrees = DVector::zeros(incidence.nrows());
    for (row, _, value) in incidence.triplet_iter() {
        degrees[row] += *value;
    }
    Ok(IndexedMatrix {
        matrix: degrees,
        index: opts.index.then_some(index.rows),
    })
}
