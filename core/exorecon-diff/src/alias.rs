//! Name and alias matching between remote rows and local nodes.
//!
//! Matching is exact string equality; no case folding or whitespace
//! normalisation is applied to names.

use exorecon_types::CatalogNode;

/// Returns true if any of the node's names equals any candidate.
pub fn has_matching_name<N: CatalogNode + ?Sized>(node: &N, candidates: &[String]) -> bool {
    candidates
        .iter()
        .any(|candidate| node.names().contains(candidate))
}

/// Candidates the node does not know yet, in input order.
///
/// An empty result means there is nothing new to report.
pub fn new_aliases<N: CatalogNode + ?Sized>(node: &N, candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .filter(|candidate| !node.names().contains(candidate))
        .cloned()
        .collect()
}
