use std::collections::BTreeSet;

use nuh_core::NodeId;

/// Drops repeated members while keeping the first-seen order.
pub(crate) fn dedup_members(nodes: &[NodeId]) -> Vec<NodeId> {
    let mut seen = BTreeSet::new();
    nodes.iter().copied().filter(|node| seen.insert(*node)).collect()
}

/// Sorted copy of a member list, used as the degree-sequence key.
pub(crate) fn canonical_tuple(nodes: &[NodeId]) -> Vec<NodeId> {
    let mut tuple = nodes.to_vec();
    tuple.sort_unstable();
    tuple
}
