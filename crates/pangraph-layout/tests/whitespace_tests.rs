// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use pangraph_dry_tests::GraphFixture;
use pangraph_layout::{LayoutError, NodeId, Whitespace};

#[test]
fn gap_to_single_successor() {
    let mut g = GraphFixture::new().segment(1, 4).segment(2, 3).edge(1, 2).build();
    g.layout_all().unwrap();
    assert_eq!(g.start_x(NodeId(2)).unwrap(), 5);
    assert_eq!(g.x_end(NodeId(1)).unwrap(), 4);
    assert_eq!(g.right_whitespace(NodeId(1)).unwrap().get(), 1);
}

#[test]
fn sink_is_unbounded() {
    let mut g = GraphFixture::new().segment(1, 4).segment(2, 3).edge(1, 2).build();
    g.layout_all().unwrap();
    let ws = g.right_whitespace(NodeId(2)).unwrap();
    assert!(ws.is_unbounded());
    assert!(!ws.fits_within(i64::MAX - 1));
}

#[test]
fn nearest_successor_defines_the_gap() {
    // 1(2) -> 3, 1 -> 4; 2(10) -> 4 pushes 4 to x=11 while 3 sits at x=3.
    let mut g = GraphFixture::new()
        .segment(1, 2)
        .segment(2, 10)
        .segment(3, 1)
        .segment(4, 1)
        .edge(1, 3)
        .edge(1, 4)
        .edge(2, 4)
        .build();
    g.layout_all().unwrap();
    assert_eq!(g.right_whitespace(NodeId(1)).unwrap().get(), 1);
    assert_eq!(g.right_whitespace(NodeId(2)).unwrap().get(), 1);
}

#[test]
fn slack_shows_up_as_extra_whitespace() {
    // 1(1) -> 3, 2(6) -> 3: segment 1 ends at 1, segment 3 starts at 7.
    let mut g = GraphFixture::new()
        .segment(1, 1)
        .segment(2, 6)
        .segment(3, 1)
        .edge(1, 3)
        .edge(2, 3)
        .build();
    g.layout_all().unwrap();
    let ws = g.right_whitespace(NodeId(1)).unwrap();
    assert_eq!(ws.get(), 6);
    assert!(ws.fits_within(6));
    assert!(!ws.fits_within(5));
}

#[test]
fn whitespace_is_a_pure_query() {
    let g = GraphFixture::new().segment(1, 4).segment(2, 3).edge(1, 2).build();
    assert_eq!(
        g.right_whitespace(NodeId(1)),
        Err(LayoutError::Unpositioned { node: NodeId(1) })
    );
    // Sinks need no positions at all.
    assert_eq!(g.right_whitespace(NodeId(2)), Ok(Whitespace::UNBOUNDED));
}
