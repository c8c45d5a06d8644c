//! Overlap graph construction
//!
//! Builds the directed graph O_k over a collection of sequences: an edge
//! `s -> t` exists when the suffix of `s` of length k equals the prefix of
//! `t` of length k. Every ordered pair of distinct entries is compared, so
//! the cost is O(N²·k).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sequence::BioSequence;

/// An edge from the sequence whose suffix matches to the sequence whose prefix matches
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    pub tail: String,
    pub head: String,
}

impl DirectedEdge {
    pub fn new<T: Into<String>, H: Into<String>>(tail: T, head: H) -> Self {
        Self {
            tail: tail.into(),
            head: head.into(),
        }
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tail, self.head)
    }
}

/// Edge list of an overlap graph, in input order (outer sequence first)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    overlap_length: usize,
    edges: Vec<DirectedEdge>,
}

impl AdjacencyList {
    /// Build the overlap graph for `sequences` with suffix/prefix length `overlap_length`.
    ///
    /// Sequences no longer than `overlap_length` take part in no edges. Self
    /// pairs are skipped by index, so two entries with identical content are
    /// still compared with each other.
    pub fn build<S: BioSequence>(sequences: &[S], overlap_length: usize) -> Self {
        let mut edges = Vec::new();

        for (i, outer) in sequences.iter().enumerate() {
            if outer.len() <= overlap_length {
                continue;
            }
            let outer_bytes = outer.as_bytes();
            let suffix = &outer_bytes[outer_bytes.len() - overlap_length..];

            for (j, inner) in sequences.iter().enumerate() {
                if i == j || inner.len() <= overlap_length {
                    continue;
                }
                let prefix = &inner.as_bytes()[..overlap_length];

                if suffix == prefix {
                    log::trace!("Overlap edge {} -> {}", outer.header(), inner.header());
                    edges.push(DirectedEdge::new(outer.header(), inner.header()));
                }
            }
        }

        log::debug!(
            "Built overlap graph with k={} over {} sequences: {} edges",
            overlap_length,
            sequences.len(),
            edges.len()
        );

        Self {
            overlap_length,
            edges,
        }
    }

    pub fn overlap_length(&self) -> usize {
        self.overlap_length
    }

    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<DirectedEdge> {
        self.edges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DirectedEdge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a DirectedEdge;
    type IntoIter = std::slice::Iter<'a, DirectedEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// One `tail head` pair per line, without a trailing newline
impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", edge)?;
        }
        Ok(())
    }
}
