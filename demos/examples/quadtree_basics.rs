// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a tree over a fixed boundary, query a few rectangles, and inspect
//! the node layout.
//!
//! Run:
//! - `cargo run -p bramble_demos --example quadtree_basics`

use bramble_quadtree::{Point, QuadTree, Rect};

fn main() {
    let points = [
        Point::new(5.0, 5.0),
        Point::new(6.0, 6.0),
        Point::new(7.0, 7.0),
        Point::new(8.0, 8.0),
        Point::new(60.0, 5.0),
        Point::new(65.0, 5.0),
        Point::new(70.0, 5.0),
        Point::new(75.0, 5.0),
        Point::new(90.0, 90.0),
        Point::new(95.0, 95.0),
    ];
    let tree = QuadTree::with_objects(Rect::new(0.0, 0.0, 100.0, 100.0), &points, 4, 3);
    println!("{tree:?}");

    let mut hits = Vec::new();

    tree.query_range(Rect::new(0.0, 0.0, 10.0, 10.0), &mut hits);
    println!("near the origin: {hits:?}");
    assert_eq!(hits.len(), 4, "the origin cluster has four points");

    // Query rects can come straight from kurbo geometry.
    hits.clear();
    let band: Rect = kurbo::Rect::new(50.0, 0.0, 100.0, 20.0).into();
    tree.query_range(band, &mut hits);
    println!("top band: {hits:?}");
    assert_eq!(hits.len(), 4, "the top band holds the second cluster");

    // The collector is append-only, so consecutive queries accumulate.
    tree.query_range(Rect::new(80.0, 80.0, 100.0, 100.0), &mut hits);
    println!("top band + far corner: {hits:?}");
    assert_eq!(hits.len(), 6);

    println!("node boundaries:");
    for rect in tree.node_boundaries() {
        println!(
            "  ({:>5.1}, {:>5.1}) {}x{}",
            rect.min_x,
            rect.min_y,
            rect.width(),
            rect.height()
        );
    }
}
