// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble Quadtree: a linear (array-backed) quadtree for 2D range queries.
//!
//! The tree answers "which objects lie inside this rectangle?" over a dynamic
//! set of point-like objects, rebuilt every simulation step. It replaces an
//! O(n²) all-pairs neighbor scan with an O(n log n) build plus O(log n + k)
//! query, which is what makes many-agent simulations (flocking, steering,
//! crowd logic) tractable.
//!
//! - Nodes live in one contiguous arena addressed by integer handles; leaf
//!   data is a contiguous subrange of one flat entry array, reordered in
//!   place during construction by three partitions per subdivision.
//! - [`QuadTree::rebuild`] re-indexes a borrowed collection against the
//!   current boundary; [`QuadTree::rebuild_and_fit_to`] refits the boundary
//!   to the collection first. Queries emit `u32` slot indices into that
//!   collection and stay valid until the next rebuild.
//! - The rectangle/point kernels have a behavior-preserving SSE2 fast path
//!   on x86_64 (default-on `simd` feature); see the [`simd`] module.
//!
//! # Example
//!
//! ```rust
//! use bramble_quadtree::{Point, QuadTree, Rect};
//!
//! let points = [
//!     Point::new(5.0, 5.0),
//!     Point::new(8.0, 7.0),
//!     Point::new(90.0, 90.0),
//! ];
//! let tree = QuadTree::with_objects(Rect::new(0.0, 0.0, 100.0, 100.0), &points, 4, 5);
//!
//! // Collector is caller-owned and append-only, so it can be reused.
//! let mut hits = Vec::new();
//! tree.query_range(Rect::new(0.0, 0.0, 10.0, 10.0), &mut hits);
//! hits.sort_unstable();
//! assert_eq!(hits, vec![0, 1]);
//! ```
//!
//! Objects are anything exposing a position:
//!
//! ```rust
//! use bramble_quadtree::{Point, Position, QuadTree};
//!
//! struct Agent {
//!     pos: Point,
//!     heading: f32,
//! }
//!
//! impl Position for Agent {
//!     fn position(&self) -> Point {
//!         self.pos
//!     }
//! }
//!
//! let agents = [
//!     Agent { pos: Point::new(1.0, 1.0), heading: 0.0 },
//!     Agent { pos: Point::new(2.0, 2.0), heading: 1.5 },
//! ];
//! // Fit the boundary to the agents (tight bounds + 1.0 padding per side).
//! let tree = QuadTree::fitted_to(&agents, 4, 5);
//! assert_eq!(tree.len(), 2);
//! # let _ = agents[0].heading;
//! ```
//!
//! ## Lifecycle
//!
//! Build and query are synchronous, CPU-bound, and always terminate; there is
//! no partial failure, nothing to retry. The expected pattern is "rebuild once
//! per tick, then issue many read-only queries against the frozen structure."
//! A frozen tree is safe to share read-only across threads; rebuilds need
//! exclusive access because they destructively reorder the entry array.
//!
//! ### Float semantics
//!
//! This crate assumes no NaN coordinates. Containment and intersection are
//! closed on rectangle boundaries.

#![no_std]

extern crate alloc;

pub mod partition;
pub mod simd;
pub mod tree;
pub mod types;

pub use partition::partition_in_place;
pub use tree::{BOUNDS_PADDING, QuadTree};
pub use types::{Point, Position, Quadrant, Rect};
