// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Segment nodes: the vertices of the alignment graph.
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;
use thiserror::Error;

use crate::ident::{GenomeId, NodeId};

/// Error returned by [`SegmentNode::new`] for malformed segments.
///
/// Malformed input is rejected at construction so layout never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNodeError {
    /// The reference span ends before it starts.
    #[error("inverted reference span [{start}, {end})")]
    InvertedSpan {
        /// Declared span start.
        start: u64,
        /// Declared span end.
        end: u64,
    },
    /// The segment carries no sequence content.
    #[error("segment content is empty")]
    EmptyContent,
    /// The same genome is listed twice in the source set.
    #[error("genome {0} listed twice in source set")]
    DuplicateGenome(GenomeId),
}

/// A contiguous piece of sequence shared by one or more genomes.
///
/// Invariants
/// - `ref_start <= ref_end`; the span is half-open `[ref_start, ref_end)` and
///   is never used arithmetically by layout.
/// - `content` is non-empty; its length is the node's width.
/// - `incoming`/`outgoing` hold ids into the owning graph and are only
///   meaningful on the unfiltered graph.
/// - `x_start` is written at most once per layout pass.
///
/// Equality compares id, span, sources, content and the adjacency lists.
/// Layout state (`x_start`, `y_order`) does not participate.
#[derive(Clone, Debug)]
pub struct SegmentNode {
    id: NodeId,
    sources: Option<Vec<GenomeId>>,
    ref_start: u64,
    ref_end: u64,
    content: Bytes,
    pub(crate) incoming: Vec<NodeId>,
    pub(crate) outgoing: Vec<NodeId>,
    pub(crate) x_start: Option<u64>,
    pub(crate) y_order: u32,
}

impl SegmentNode {
    /// Creates an unwired, unpositioned segment.
    ///
    /// `sources` of `None` marks a segment with no known source genome.
    pub fn new(
        id: NodeId,
        sources: Option<Vec<GenomeId>>,
        ref_start: u64,
        ref_end: u64,
        content: impl Into<Bytes>,
    ) -> Result<Self, InvalidNodeError> {
        if ref_end < ref_start {
            return Err(InvalidNodeError::InvertedSpan {
                start: ref_start,
                end: ref_end,
            });
        }
        let content = content.into();
        if content.is_empty() {
            return Err(InvalidNodeError::EmptyContent);
        }
        if let Some(genomes) = &sources {
            for (i, genome) in genomes.iter().enumerate() {
                if genomes[..i].contains(genome) {
                    return Err(InvalidNodeError::DuplicateGenome(genome.clone()));
                }
            }
        }
        Ok(Self {
            id,
            sources,
            ref_start,
            ref_end,
            content,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            x_start: None,
            y_order: 0,
        })
    }

    /// Returns the node id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the genomes this segment occurs in, or `None` when unknown.
    #[must_use]
    pub fn sources(&self) -> Option<&[GenomeId]> {
        self.sources.as_deref()
    }

    /// Returns `true` if `genome` is listed in the source set.
    #[must_use]
    pub fn occurs_in(&self, genome: &GenomeId) -> bool {
        self.sources.as_ref().is_some_and(|s| s.contains(genome))
    }

    /// Inclusive start of the reference span.
    #[must_use]
    pub fn ref_start(&self) -> u64 {
        self.ref_start
    }

    /// Exclusive end of the reference span.
    #[must_use]
    pub fn ref_end(&self) -> u64 {
        self.ref_end
    }

    /// Returns the raw sequence content.
    #[must_use]
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Horizontal extent of the segment (content length).
    #[must_use]
    pub fn width(&self) -> u64 {
        self.content.len() as u64
    }

    /// Cached horizontal start, `None` until layout has positioned the node.
    #[must_use]
    pub fn x_start(&self) -> Option<u64> {
        self.x_start
    }

    /// `x_start + width`; `None` until positioned or when the sum does not
    /// fit in `u64`.
    #[must_use]
    pub fn x_end(&self) -> Option<u64> {
        self.x_start.and_then(|x| x.checked_add(self.width()))
    }

    /// Vertical lane of the segment.
    #[must_use]
    pub fn y_order(&self) -> u32 {
        self.y_order
    }

    /// Predecessor ids (edges into this node).
    ///
    /// Only valid on the unfiltered graph; filtered views do not expose it.
    #[must_use]
    pub fn incoming(&self) -> &[NodeId] {
        &self.incoming
    }

    /// Successor ids (edges out of this node).
    ///
    /// Only valid on the unfiltered graph; filtered views do not expose it.
    #[must_use]
    pub fn outgoing(&self) -> &[NodeId] {
        &self.outgoing
    }
}

impl PartialEq for SegmentNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.ref_start == other.ref_start
            && self.ref_end == other.ref_end
            && self.sources == other.sources
            && self.content == other.content
            && self.incoming == other.incoming
            && self.outgoing == other.outgoing
    }
}

impl Eq for SegmentNode {}

// Hashes a subset of the equality fields; adjacency is left out so a node's
// hash is stable while the builder is still wiring edges.
impl Hash for SegmentNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.ref_start.hash(state);
        self.ref_end.hash(state);
        self.sources.hash(state);
        self.content.hash(state);
    }
}

impl fmt::Display for SegmentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment {} [{}, {}) width={}",
            self.id,
            self.ref_start,
            self.ref_end,
            self.width()
        )?;
        match &self.sources {
            Some(genomes) => {
                f.write_str(" sources=[")?;
                for (i, g) in genomes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{g}")?;
                }
                f.write_str("]")?;
            }
            None => f.write_str(" sources=none")?,
        }
        write!(f, " in={} out={}", self.incoming.len(), self.outgoing.len())
    }
}
