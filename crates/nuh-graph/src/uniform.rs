use std::collections::BTreeSet;
use std::iter;

use itertools::Itertools;
use log::{debug, trace};
use nuh_core::{HypergraphView, NodeId, NuhError};

use crate::combinatorics::{binomial, factorial, factorial_ratio};
use crate::degree::DegreeSequence;

/// Summary of one uniformization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformizeReport {
    /// Arity every tuple has after the pass.
    pub arity: usize,
    /// Synthetic node reserved for padding, if one was reserved.
    pub padding_node: Option<NodeId>,
    /// Number of tuples that were extended with the padding node.
    pub padded_edges: usize,
    /// Number of tuples that were split into `arity`-subsets.
    pub split_edges: usize,
}

/// Node set, node count and degree sequence of a non-uniform hypergraph.
///
/// The snapshot is detached from the hypergraph it was read from, so
/// uniformizing it never touches the source container.
#[derive(Debug, Clone, PartialEq)]
pub struct NuHypergraph {
    num_nodes: usize,
    nodes: BTreeSet<NodeId>,
    sequence: DegreeSequence,
}

impl NuHypergraph {
    /// Reads the node set and degree sequence of `view`.
    pub fn from_view<V>(view: &V) -> Result<Self, NuhError>
    where
        V: HypergraphView + ?Sized,
    {
        let nodes: BTreeSet<NodeId> = view.nodes().collect();
        let sequence = DegreeSequence::from_view(view)?;
        Ok(Self {
            num_nodes: nodes.len(),
            nodes,
            sequence,
        })
    }

    /// Assembles a snapshot from an explicit node set and sequence.
    pub fn from_parts(nodes: BTreeSet<NodeId>, sequence: DegreeSequence) -> Self {
        Self {
            num_nodes: nodes.len(),
            nodes,
            sequence,
        }
    }

    /// Node count, including a reserved padding node that was never used.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Nodes present in the snapshot.
    pub fn nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }

    /// Current degree sequence.
    pub fn degree_sequence(&self) -> &DegreeSequence {
        &self.sequence
    }

    /// Rewrites the degree sequence so every tuple has exactly `m` members,
    /// where `m` is `target` or, when absent, the largest tuple size.
    ///
    /// Smaller tuples are padded with one synthetic node and weighted by
    /// `k!/m!`. Larger tuples are replaced by all their `m`-subsets, each
    /// weighted by `1/(m! C(k, m))`. Existing multiplicities scale these weights.
    ///
    /// The sequence, node set and node count are updated in place. A padding
    /// node is reserved (the node count grows by one) whenever the sequence
    /// mixes sizes or `m` exceeds the largest size, even if no tuple ends up
    /// padded. The padding node takes the first unused identifier starting at
    /// `num_nodes - 1`. Use [`NuHypergraph::uniformized`] to keep the receiver
    /// intact.
    pub fn uniformize(&mut self, target: Option<usize>) -> Result<UniformizeReport, NuhError> {
        if target == Some(0) {
            return Err(NuhError::invalid_argument(
                "invalid-arity",
                "target arity must be a positive integer",
            )
            .with_context("m", 0));
        }
        if self.sequence.is_empty() {
            debug!("uniformize: empty degree sequence, nothing to do");
            return Ok(UniformizeReport {
                arity: target.unwrap_or(0),
                padding_node: None,
                padded_edges: 0,
                split_edges: 0,
            });
        }

        let max_size = self.sequence.max_edge_size().unwrap_or(0);
        let arity = target.unwrap_or(max_size);
        let reserve = !self.sequence.is_uniform() || arity > max_size;
        if reserve {
            self.num_nodes += 1;
        }
        let pad = self.padding_id();

        let mut output = DegreeSequence::new();
        let mut report = UniformizeReport {
            arity,
            padding_node: reserve.then_some(pad),
            padded_edges: 0,
            split_edges: 0,
        };
        for (tuple, &multiplicity) in &self.sequence {
            let size = tuple.len();
            if size <= arity {
                let mut extended = tuple.clone();
                if size < arity {
                    if self.nodes.insert(pad) {
                        trace!("uniformize: padding node {pad} introduced");
                    }
                    extended.extend(iter::repeat(pad).take(arity - size));
                    report.padded_edges += 1;
                }
                output.accumulate(extended, multiplicity * factorial_ratio(size, arity));
            } else {
                let share = multiplicity / (factorial(arity) * binomial(size, arity));
                for subset in tuple.iter().copied().combinations(arity) {
                    output.accumulate(subset, share);
                }
                report.split_edges += 1;
            }
        }

        debug!(
            "uniformize: m={arity}, {} -> {} tuples, padded={}, split={}, num_nodes={}",
            self.sequence.len(),
            output.len(),
            report.padded_edges,
            report.split_edges,
            self.num_nodes
        );
        self.sequence = output;
        Ok(report)
    }

    /// First identifier at or above `num_nodes - 1` that no node uses yet.
    ///
    /// Node identifiers need not be contiguous, so `num_nodes - 1` may already
    /// name a real node.
    fn padding_id(&self) -> NodeId {
        let mut raw = self.num_nodes.saturating_sub(1) as u64;
        while self.nodes.contains(&NodeId::from_raw(raw)) {
            raw += 1;
        }
        NodeId::from_raw(raw)
    }

    /// Non-mutating counterpart of [`NuHypergraph::uniformize`].
    pub fn uniformized(
        &self,
        target: Option<usize>,
    ) -> Result<(NuHypergraph, UniformizeReport), NuhError> {
        let mut next = self.clone();
        let report = next.uniformize(target)?;
        Ok((next, report))
    }
}
