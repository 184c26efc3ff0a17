// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use std::collections::HashSet;

use pangraph_dry_tests::GraphFixture;
use pangraph_layout::{NodeId, SegmentNode};

fn fixture() -> GraphFixture {
    GraphFixture::new()
        .segment_in(1, 4, &["ref", "alt"])
        .segment_in(2, 3, &["ref"])
        .segment_in(3, 2, &["alt"])
}

#[test]
fn separately_built_graphs_have_equal_nodes() {
    let left = fixture().path(&[1, 2, 3]).build();
    let right = fixture().path(&[1, 2, 3]).build();
    for id in [1, 2, 3].map(NodeId) {
        assert_eq!(left.node(id), right.node(id), "{id}");
    }
}

#[test]
fn differing_outgoing_breaks_equality() {
    let left = fixture().edge(1, 2).build();
    let right = fixture().edge(1, 3).build();
    assert_ne!(left.node(NodeId(1)), right.node(NodeId(1)));
    // Nothing else about node 1 differs.
    let (l, r) = (left.node(NodeId(1)).unwrap(), right.node(NodeId(1)).unwrap());
    assert_eq!(l.content(), r.content());
    assert_eq!(l.sources(), r.sources());
}

#[test]
fn differing_incoming_breaks_equality() {
    let left = fixture().edge(1, 3).build();
    let right = fixture().edge(2, 3).build();
    assert_ne!(left.node(NodeId(3)), right.node(NodeId(3)));
}

#[test]
fn layout_state_is_not_part_of_equality() {
    let mut positioned = fixture().path(&[1, 2, 3]).build();
    let pristine = fixture().path(&[1, 2, 3]).build();
    positioned.layout_all().unwrap();
    positioned.set_y_order(NodeId(2), 7).unwrap();
    assert_eq!(positioned.node(NodeId(2)), pristine.node(NodeId(2)));
}

#[test]
fn value_fields_participate() {
    let a = SegmentNode::new(NodeId(1), None, 0, 4, &b"ACGT"[..]).unwrap();
    let same = SegmentNode::new(NodeId(1), None, 0, 4, &b"ACGT"[..]).unwrap();
    let other_content = SegmentNode::new(NodeId(1), None, 0, 4, &b"ACGA"[..]).unwrap();
    let other_span = SegmentNode::new(NodeId(1), None, 1, 5, &b"ACGT"[..]).unwrap();
    let other_id = SegmentNode::new(NodeId(2), None, 0, 4, &b"ACGT"[..]).unwrap();
    let with_sources =
        SegmentNode::new(NodeId(1), Some(vec!["ref".into()]), 0, 4, &b"ACGT"[..]).unwrap();

    assert_eq!(a, same);
    for different in [&other_content, &other_span, &other_id, &with_sources] {
        assert_ne!(&a, different);
    }
}

#[test]
fn equal_nodes_collapse_in_a_hash_set() {
    let left = fixture().path(&[1, 2]).build();
    let right = fixture().path(&[1, 2]).build();
    let set: HashSet<&SegmentNode> = left.iter_nodes().chain(right.iter_nodes()).collect();
    assert_eq!(set.len(), 3);
}
