use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use nuh_core::{HypergraphView, NodeId, NuhError};

use crate::ids::canonical_tuple;

/// Multiset of hyperedges keyed by member tuple.
///
/// Each key is a member tuple and each value a non-negative multiplicity. Tuples
/// read from a hypergraph are sorted; tuples produced by uniformization keep the
/// order in which they were built (padding appended last).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeSequence {
    entries: BTreeMap<Vec<NodeId>, f64>,
}

impl DegreeSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans every hyperedge of `view` once, giving each distinct member set
    /// multiplicity one.
    pub fn from_view<V>(view: &V) -> Result<Self, NuhError>
    where
        V: HypergraphView + ?Sized,
    {
        let mut sequence = Self::new();
        for edge in view.edges() {
            let members = view.members(edge)?;
            sequence.entries.insert(canonical_tuple(members), 1.0);
        }
        Ok(sequence)
    }

    /// Adds `multiplicity` to the entry for `tuple`, creating it if needed.
    pub fn accumulate(&mut self, tuple: Vec<NodeId>, multiplicity: f64) {
        *self.entries.entry(tuple).or_insert(0.0) += multiplicity;
    }

    /// Returns the multiplicity recorded for `tuple`.
    pub fn get(&self, tuple: &[NodeId]) -> Option<f64> {
        self.entries.get(tuple).copied()
    }

    /// Number of distinct tuples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(tuple, multiplicity)` pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Vec<NodeId>, f64> {
        self.entries.iter()
    }

    /// Distinct tuple sizes present in the sequence.
    pub fn edge_sizes(&self) -> BTreeSet<usize> {
        self.entries.keys().map(Vec::len).collect()
    }

    /// Largest tuple size, `None` for an empty sequence.
    pub fn max_edge_size(&self) -> Option<usize> {
        self.entries.keys().map(Vec::len).max()
    }

    /// Whether every tuple has the same size. Empty sequences are uniform.
    pub fn is_uniform(&self) -> bool {
        self.edge_sizes().len() <= 1
    }

    /// Sum of all multiplicities.
    pub fn total_mass(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl<'a> IntoIterator for &'a DegreeSequence {
    type Item = (&'a Vec<NodeId>, &'a f64);
    type IntoIter = btree_map::Iter<'a, Vec<NodeId>, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Vec<NodeId>, f64)> for DegreeSequence {
    /// Collects pairs, summing multiplicities of repeated tuples.
    fn from_iter<T: IntoIterator<Item = (Vec<NodeId>, f64)>>(iter: T) -> Self {
        let mut sequence = Self::new();
        for (tuple, multiplicity) in iter {
            sequence.accumulate(tuple, multiplicity);
        }
        sequence
    }
}
