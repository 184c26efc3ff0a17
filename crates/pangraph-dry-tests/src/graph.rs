// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Segment graph builder utilities for tests.

use bytes::Bytes;
use pangraph_layout::{GenomeId, NodeId, SegmentGraph, SegmentNode};

/// Builder for small segment graphs.
///
/// Segments get synthetic content (`'A'` repeated `width` times) and a
/// reference span equal to their width, so tests only have to state the
/// shape they care about.
///
/// # Example
///
/// ```
/// use pangraph_dry_tests::GraphFixture;
/// use pangraph_layout::NodeId;
///
/// let mut graph = GraphFixture::new()
///     .segment(1, 4)
///     .segment(2, 3)
///     .edge(1, 2)
///     .build();
/// assert_eq!(graph.start_x(NodeId(2)).unwrap(), 5);
/// ```
#[derive(Default)]
pub struct GraphFixture {
    segments: Vec<(u32, usize, Option<Vec<GenomeId>>)>,
    edges: Vec<(u32, u32)>,
}

impl GraphFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment of the given width with no source genomes.
    pub fn segment(mut self, id: u32, width: usize) -> Self {
        self.segments.push((id, width, None));
        self
    }

    /// Add a segment that occurs in `genomes`.
    pub fn segment_in(mut self, id: u32, width: usize, genomes: &[&str]) -> Self {
        let sources = genomes.iter().map(|g| GenomeId::new(g)).collect();
        self.segments.push((id, width, Some(sources)));
        self
    }

    /// Add a directed edge.
    pub fn edge(mut self, from: u32, to: u32) -> Self {
        self.edges.push((from, to));
        self
    }

    /// Add a chain of edges through `ids` in order.
    pub fn path(mut self, ids: &[u32]) -> Self {
        self.edges.extend(ids.windows(2).map(|w| (w[0], w[1])));
        self
    }

    /// Build the wired, unpositioned graph.
    ///
    /// # Panics
    /// Panics if a segment is malformed or an edge names an unknown segment;
    /// fixtures are expected to be well-formed.
    #[allow(clippy::expect_used)]
    pub fn build(self) -> SegmentGraph {
        let mut graph = SegmentGraph::new();
        let mut offset = 0_u64;
        for (id, width, sources) in self.segments {
            let content = Bytes::from(vec![b'A'; width]);
            let end = offset + width as u64;
            let node = SegmentNode::new(NodeId(id), sources, offset, end, content)
                .expect("fixture segment");
            graph.insert_node(node).expect("fixture segment id");
            offset = end;
        }
        for (from, to) in self.edges {
            graph
                .connect(NodeId(from), NodeId(to))
                .expect("fixture edge endpoints");
        }
        graph
    }
}

/// Builds a single chain `0 -> 1 -> ... -> len-1` of segments of `width`.
pub fn chain(len: u32, width: usize) -> SegmentGraph {
    let ids: Vec<u32> = (0..len).collect();
    ids.iter()
        .fold(GraphFixture::new(), |f, &id| f.segment(id, width))
        .path(&ids)
        .build()
}
