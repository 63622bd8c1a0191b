use std::collections::BTreeMap;

use log::debug;
use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};
use nuh_core::{EdgeId, HypergraphView, NodeId, NuhError};

use crate::options::{validate_order, IncidenceOptions};
use crate::sparse::to_dense;

/// Node by edge incidence matrix in the requested representation.
#[derive(Debug, Clone, PartialEq)]
pub enum IncidenceMatrix {
    /// Compressed sparse row storage.
    Sparse(CsrMatrix<f64>),
    /// Dense column-major storage.
    Dense(DMatrix<f64>),
}

impl IncidenceMatrix {
    /// Returns `(num_nodes, num_edges)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            IncidenceMatrix::Sparse(m) => (m.nrows(), m.ncols()),
            IncidenceMatrix::Dense(m) => m.shape(),
        }
    }

    /// Whether the matrix holds no cells at all.
    pub fn is_empty(&self) -> bool {
        let (rows, cols) = self.shape();
        rows == 0 || cols == 0
    }

    /// Dense copy of the matrix.
    pub fn to_dense(&self) -> DMatrix<f64> {
        match self {
            IncidenceMatrix::Sparse(m) => to_dense(m),
            IncidenceMatrix::Dense(m) => m.clone(),
        }
    }
}

/// Maps from matrix positions back to identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IncidenceIndex {
    /// Row position to node identifier.
    pub rows: BTreeMap<usize, NodeId>,
    /// Column position to edge identifier.
    pub cols: BTreeMap<usize, EdgeId>,
}

/// Incidence matrix with its optional index maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Incidence {
    /// The matrix itself.
    pub matrix: IncidenceMatrix,
    /// Present when [`IncidenceOptions::index`] was set.
    pub index: Option<IncidenceIndex>,
}

/// Builds the unit-weight incidence matrix of `view`.
pub fn incidence_matrix<V>(view: &V, opts: &IncidenceOptions) -> Result<Incidence, NuhError>
where
    V: HypergraphView + ?Sized,
{
    incidence_matrix_weighted(view, opts, |_, _, _| 1.0)
}

/// Builds the incidence matrix of `view` with entry `(i, j)` set to
/// `weight(node_i, edge_j, view)` for every member `node_i` of `edge_j`.
///
/// Rows follow `view.nodes()`, columns follow the order-filtered
/// `view.edges()`. When no edge survives the filter the matrix has shape
/// `(num_nodes, 0)` and both index maps are empty.
pub fn incidence_matrix_weighted<V, F>(
    view: &V,
    opts: &IncidenceOptions,
    weight: F,
) -> Result<Incidence, NuhError>
where
    V: HypergraphView + ?Sized,
    F: Fn(NodeId, EdgeId, &V) -> f64,
{
    let layout = Layout::read(view, opts.order)?;
    let matrix = if opts.sparse {
        IncidenceMatrix::Sparse(layout.sparse(view, &weight)?)
    } else {
        IncidenceMatrix::Dense(layout.dense(view, &weight)?)
    };
    let (rows, cols) = matrix.shape();
    debug!(
        "incidence: {rows}x{cols}, order={:?}, sparse={}",
        opts.order, opts.sparse
    );
    let index = opts.index.then(|| layout.index());
    Ok(Incidence { matrix, index })
}

/// Unit-weight sparse incidence plus index maps, the input of every derivation.
pub(crate) fn unit_incidence<V>(
    view: &V,
    order: Option<usize>,
) -> Result<(CsrMatrix<f64>, IncidenceIndex), NuhError>
where
    V: HypergraphView + ?Sized,
{
    let layout = Layout::read(view, order)?;
    let matrix = layout.sparse(view, &|_, _, _| 1.0)?;
    Ok((matrix, layout.index()))
}

/// Row and column enumeration for one snapshot and order filter.
struct Layout {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    edge_positions: BTreeMap<EdgeId, usize>,
}

impl Layout {
    fn read<V>(view: &V, order: Option<usize>) -> Result<Self, NuhError>
    where
        V: HypergraphView + ?Sized,
    {
        validate_order(order)?;
        let mut edges = Vec::with_capacity(view.num_edges());
        for edge in view.edges() {
            if let Some(order) = order {
                if view.members(edge)?.len() != order + 1 {
                    continue;
                }
            }
            edges.push(edge);
        }
        let nodes: Vec<NodeId> = view.nodes().collect();
        let edge_positions = edges
            .iter()
            .enumerate()
            .map(|(position, edge)| (*edge, position))
            .collect();
        Ok(Self {
            nodes,
            edges,
            edge_positions,
        })
    }

    fn sparse<V, F>(&self, view: &V, weight: &F) -> Result<CsrMatrix<f64>, NuhError>
    where
        V: HypergraphView + ?Sized,
        F: Fn(NodeId, EdgeId, &V) -> f64,
    {
        // The explicit shape keeps nodes without filtered memberships as empty rows.
        let mut coo = CooMatrix::new(self.nodes.len(), self.edges.len());
        if self.edges.is_empty() {
            return Ok(CsrMatrix::from(&coo));
        }
        for (row, node) in self.nodes.iter().enumerate() {
            for edge in view.memberships(*node)? {
                if let Some(&col) = self.edge_positions.get(&edge) {
                    coo.push(row, col, weight(*node, edge, view));
                }
            }
        }
        Ok(CsrMatrix::from(&coo))
    }

    fn dense<V, F>(&self, view: &V, weight: &F) -> Result<DMatrix<f64>, NuhError>
    where
        V: HypergraphView + ?Sized,
        F: Fn(NodeId, EdgeId, &V) -> f64,
    {
        let mut dense = DMatrix::zeros(self.nodes.len(), self.edges.len());
        if self.edges.is_empty() {
            return Ok(dense);
        }
        let node_positions: BTreeMap<NodeId, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (*node, position))
            .collect();
        for (col, edge) in self.edges.iter().enumerate() {
            for node in view.members(*edge)? {
                let row = node_positions.get(node).copied().ok_or_else(|| {
                    NuhError::graph("unknown-node", "edge member is not a node of the view")
                        .with_context("node", node)
                        .with_context("edge", edge)
                })?;
                dense[(row, col)] = weight(*node, *edge, view);
            }
        }
        Ok(dense)
    }

    fn index(&self) -> IncidenceIndex {
        if self.edges.is_empty() {
            return IncidenceIndex::default();
        }
        IncidenceIndex {
            rows: self.nodes.iter().copied().enumerate().collect(),
            cols: self.edges.iter().copied().enumerate().collect(),
        }
    }
}
