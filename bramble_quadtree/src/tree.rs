// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The linear quadtree: arena storage, partition-based build, range queries.

use alloc::vec::Vec;

use crate::partition::partition_in_place;
use crate::simd;
use crate::types::{Point, Position, Quadrant, Rect};

/// Margin added on every side when fitting the boundary to a point set, so no
/// object sits exactly on the boundary edge.
pub const BOUNDS_PADDING: f32 = 1.0;

/// Handle to a node in the arena. Index 0 is the root of a non-empty tree;
/// children are always created strictly after their parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(u32);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn get(self) -> usize {
        self.0 as usize
    }
}

/// One quadrant of space at one level of the tree.
///
/// A node is a leaf iff all four child slots are `None`. Only leaves own a
/// `[data_begin, data_begin + data_count)` range of the entry array; internal
/// nodes keep `data_count == 0`. A node's boundary is always the exact
/// geometric quadrant implied by its position and depth, never shrunk to fit
/// sparse content.
#[derive(Clone, Debug)]
struct Node {
    boundary: Rect,
    data_begin: u32,
    data_count: u32,
    children: [Option<NodeIdx>; 4],
}

impl Node {
    fn new(boundary: Rect, data_begin: u32) -> Self {
        Self {
            boundary,
            data_begin,
            data_count: 0,
            children: [None; 4],
        }
    }

    fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}

/// An indexed object: its slot in the caller's collection plus a copy of the
/// position the tree was built from.
#[derive(Copy, Clone, Debug)]
struct Entry {
    slot: u32,
    pos: Point,
}

/// Linear (array-backed) quadtree over 2D point-like objects.
///
/// The tree is built by recursive four-way spatial partitioning done in place
/// on a flat entry array, so all entries belonging to one leaf are adjacent.
/// It is designed for full-rebuild-per-frame usage: [`rebuild`](Self::rebuild)
/// clears and regrows both the node arena and the entry array, and every slot
/// index emitted by earlier queries is invalidated wholesale.
///
/// Queries never mutate the tree, so a frozen tree may be shared read-only
/// across threads between rebuilds; rebuilds need exclusive access.
pub struct QuadTree {
    nodes: Vec<Node>,
    entries: Vec<Entry>,
    boundary: Rect,
    capacity: u32,
    max_depth: u32,
}

impl core::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("nodes", &self.nodes.len())
            .field("entries", &self.entries.len())
            .field("boundary", &self.boundary)
            .field("capacity", &self.capacity)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl QuadTree {
    /// Create an empty tree over a fixed boundary.
    ///
    /// `capacity` is the number of entries a leaf holds before subdividing;
    /// `max_depth` is a hard recursion ceiling that wins over `capacity`, so
    /// adversarial clustering (many coincident positions) cannot recurse into
    /// ever-halving rectangles.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` or `max_depth` is zero. Both are call-site
    /// configuration, not runtime conditions.
    pub fn new(boundary: Rect, capacity: u32, max_depth: u32) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        assert!(max_depth >= 1, "max_depth must be at least 1");
        Self {
            nodes: Vec::new(),
            entries: Vec::new(),
            boundary,
            capacity,
            max_depth,
        }
    }

    /// Create a tree over a fixed boundary and build it from `objects`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` or `max_depth` is zero.
    pub fn with_objects<T: Position>(
        boundary: Rect,
        objects: &[T],
        capacity: u32,
        max_depth: u32,
    ) -> Self {
        let mut tree = Self::new(boundary, capacity, max_depth);
        tree.rebuild(objects);
        tree
    }

    /// Create a tree whose boundary is fitted to `objects`, then build it.
    ///
    /// # Panics
    ///
    /// Panics if `objects` is empty (no boundary can be derived) or if
    /// `capacity`/`max_depth` is zero.
    pub fn fitted_to<T: Position>(objects: &[T], capacity: u32, max_depth: u32) -> Self {
        let mut tree = Self::new(Rect::default(), capacity, max_depth);
        tree.rebuild_and_fit_to(objects);
        tree
    }

    /// The root boundary rectangle.
    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    /// Entries per leaf before subdividing.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Hard recursion ceiling.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Number of indexed objects (after boundary filtering).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree indexes no objects.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of materialized nodes. Zero for an empty tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Boundaries of every materialized node, in creation order.
    ///
    /// Handy for drawing the tree or inspecting occupancy.
    pub fn node_boundaries(&self) -> impl Iterator<Item = Rect> + '_ {
        self.nodes.iter().map(|n| n.boundary)
    }

    /// Drop all nodes and entries, then re-index `objects` against the
    /// current boundary.
    ///
    /// Objects whose position lies outside the boundary are silently skipped;
    /// callers may pass an approximate boundary. Nothing left after filtering
    /// is a valid terminal state, not an error: the tree has no nodes and
    /// every query returns nothing (the common first-frame case).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "entry slots are 32-bit indices by design"
    )]
    pub fn rebuild<T: Position>(&mut self, objects: &[T]) {
        self.nodes.clear();
        self.entries.clear();
        if objects.is_empty() {
            return;
        }
        self.entries.reserve(objects.len());
        for (i, obj) in objects.iter().enumerate() {
            let pos = obj.position();
            if simd::point_in_rect(pos, &self.boundary) {
                self.entries.push(Entry { slot: i as u32, pos });
            }
        }
        if self.entries.is_empty() {
            return;
        }
        let end = self.entries.len();
        let boundary = self.boundary;
        let _root = self.build_range(0, end, boundary, 0);
        debug_assert_eq!(_root, NodeIdx::ROOT, "first allocated node is the root");
    }

    /// Refit the boundary to the tight bounding box of `objects`, expanded by
    /// [`BOUNDS_PADDING`] on every side, then rebuild.
    ///
    /// The padding guarantees no object sits exactly on the boundary edge.
    /// Use this when the working set's spatial extent is not fixed a priori.
    ///
    /// # Panics
    ///
    /// Panics if `objects` is empty: a boundary cannot be derived from
    /// nothing, and that is a call-site error rather than a runtime state.
    pub fn rebuild_and_fit_to<T: Position>(&mut self, objects: &[T]) {
        assert!(
            !objects.is_empty(),
            "cannot fit a boundary to an empty collection"
        );
        let positions: Vec<Point> = objects.iter().map(Position::position).collect();
        let tight = simd::bounds_of(&positions).expect("positions is non-empty");
        self.boundary = tight.inflate(BOUNDS_PADDING);
        self.rebuild(objects);
    }

    /// Append the slots of all objects whose position lies inside `range`.
    ///
    /// Results are appended so the collector can be reused across frames; no
    /// ordering is guaranteed. Emitted slots index the collection passed to
    /// the most recent rebuild and are valid only until the next rebuild.
    pub fn query_range(&self, range: Rect, out: &mut Vec<u32>) {
        if self.nodes.is_empty() {
            return;
        }
        self.query_node(NodeIdx::ROOT, &range, out);
    }

    /// Recursively build the node for `[start, end)` of the entry array at
    /// `depth`, returning its arena index. The node is allocated before any
    /// child so children always carry larger indices than their parent.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "node and entry indices are 32-bit by design"
    )]
    fn build_range(&mut self, start: usize, end: usize, boundary: Rect, depth: u32) -> NodeIdx {
        debug_assert!(start < end, "empty ranges never materialize a node");
        let idx = NodeIdx(self.nodes.len() as u32);
        self.nodes.push(Node::new(boundary, start as u32));

        let count = end - start;
        if count <= self.capacity as usize || depth >= self.max_depth {
            self.nodes[idx.get()].data_count = count as u32;
            return idx;
        }

        // The entries go to the children. Three in-place splits sharing one
        // center arrange the subrange into quadrant order: top half first,
        // then each half by its horizontal side.
        let center = boundary.center();
        let split_y =
            start + partition_in_place(&mut self.entries[start..end], |e| e.pos.y < center.y);
        let split_x_top =
            start + partition_in_place(&mut self.entries[start..split_y], |e| e.pos.x < center.x);
        let split_x_bottom =
            split_y + partition_in_place(&mut self.entries[split_y..end], |e| e.pos.x < center.x);

        let ranges = [
            (start, split_x_top),
            (split_x_top, split_y),
            (split_y, split_x_bottom),
            (split_x_bottom, end),
        ];
        for (q, (lo, hi)) in Quadrant::ALL.into_iter().zip(ranges) {
            if lo < hi {
                let child = self.build_range(lo, hi, boundary.quadrant(q), depth + 1);
                self.nodes[idx.get()].children[q.idx()] = Some(child);
            }
        }
        idx
    }

    fn query_node(&self, idx: NodeIdx, range: &Rect, out: &mut Vec<u32>) {
        let node = &self.nodes[idx.get()];
        if !simd::rects_intersect(&node.boundary, range) {
            return;
        }
        if node.is_leaf() {
            // The node test was a coarse accept; the per-entry position test
            // is the precise filter.
            let begin = node.data_begin as usize;
            for entry in &self.entries[begin..begin + node.data_count as usize] {
                if simd::point_in_rect(entry.pos, range) {
                    out.push(entry.slot);
                }
            }
            return;
        }
        for child in node.children.into_iter().flatten() {
            self.query_node(child, range, out);
        }
    }
}
