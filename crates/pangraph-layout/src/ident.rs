// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifier types for segments and genomes.
use std::fmt;
use std::sync::Arc;

/// Strongly typed identifier for a segment node.
///
/// Ids are assigned by the graph builder and are unique within one
/// [`SegmentGraph`](crate::SegmentGraph). Adjacency lists store `NodeId`s
/// rather than references, so a node never owns its neighbours.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the raw integer value of this id.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque identifier for one aligned genome (sample).
///
/// The layout core only compares and hashes genome ids; it never interprets
/// the label. Cloning is cheap (shared string).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GenomeId(Arc<str>);

impl GenomeId {
    /// Creates a genome id from its label.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Returns the label this id was created from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenomeId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
