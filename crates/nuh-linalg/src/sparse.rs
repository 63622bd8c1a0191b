use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};

/// Expands a CSR matrix into a dense one, summing any duplicate entries.
pub fn to_dense(matrix: &CsrMatrix<f64>) -> DMatrix<f64> {
    let mut dense = DMatrix::zeros(matrix.nrows(), matrix.ncols());
    for (row, col, value) in matrix.triplet_iter() {
        dense[(row, col)] += *value;
    }
    dense
}

/// `I · Iᵗ`, square over the rows of `incidence`.
pub(crate) fn node_gram(incidence: &CsrMatrix<f64>) -> CsrMatrix<f64> {
    let n = incidence.nrows();
    if incidence.ncols() == 0 {
        return CsrMatrix::zeros(n, n);
    }
    incidence * &incidence.transpose()
}

/// `Iᵗ · I`, square over the columns of `incidence`.
pub(crate) fn edge_gram(incidence: &CsrMatrix<f64>) -> CsrMatrix<f64> {
    let e = incidence.ncols();
    if e == 0 || incidence.nrows() == 0 {
        return CsrMatrix::zeros(e, e);
    }
    &incidence.transpose() * incidence
}

/// Rebuilds `matrix` without its diagonal, keeping the values `keep` maps to
/// `Some`. Entries mapped to `None` are not stored.
pub(crate) fn retain_off_diagonal<F>(matrix: &CsrMatrix<f64>, keep: F) -> CsrMatrix<f64>
where
    F: Fn(f64) -> Option<f64>,
{
    let mut coo = CooMatrix::new(matrix.nrows(), matrix.ncols());
    for (row, col, value) in matrix.triplet_iter() {
        if row == col {
            continue;
        }
        if let Some(kept) = keep(*value) {
            coo.push(row, col, kept);
        }
    }
    CsrMatrix::from(&coo)
}
