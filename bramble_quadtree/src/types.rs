// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: points, rectangles, quadrants.

/// A 2D position in `f32` coordinates.
///
/// `repr(C)` so a slice of points can be reinterpreted as interleaved f32
/// lanes by the [`simd`](crate::simd) bounds kernel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate. Grows downward (screen convention).
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle stored as min/max corners.
///
/// The four fields are laid out and aligned so a whole rectangle loads with a
/// single 128-bit vector instruction; see the [`simd`](crate::simd) kernels.
///
/// All containment and intersection tests are closed on the boundary: a point
/// on an edge is inside, and rectangles sharing only an edge intersect.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Rect {
    /// Minimum x (left).
    pub min_x: f32,
    /// Minimum y (top).
    pub min_y: f32,
    /// Maximum x (right).
    pub max_x: f32,
    /// Maximum y (bottom).
    pub max_y: f32,
}

impl Rect {
    /// Create a rectangle from min/max corners.
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// The center of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Whether the point lies inside the rectangle (boundary inclusive).
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Whether two rectangles overlap. Sharing only an edge counts as overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Expand the rectangle by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Self {
        Self::new(
            self.min_x - margin,
            self.min_y - margin,
            self.max_x + margin,
            self.max_y + margin,
        )
    }

    /// The exact geometric quadrant of this rectangle.
    ///
    /// Both splits share one center, so the four quadrants never overlap
    /// beyond their common edges and their union reconstructs the rectangle.
    pub fn quadrant(&self, q: Quadrant) -> Self {
        let c = self.center();
        match q {
            Quadrant::TopLeft => Self::new(self.min_x, self.min_y, c.x, c.y),
            Quadrant::TopRight => Self::new(c.x, self.min_y, self.max_x, c.y),
            Quadrant::BottomLeft => Self::new(self.min_x, c.y, c.x, self.max_y),
            Quadrant::BottomRight => Self::new(c.x, c.y, self.max_x, self.max_y),
        }
    }
}

/// One quadrant of a rectangle, in child-slot order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `x < center.x`, `y < center.y`.
    TopLeft = 0,
    /// `x >= center.x`, `y < center.y`.
    TopRight = 1,
    /// `x < center.x`, `y >= center.y`.
    BottomLeft = 2,
    /// `x >= center.x`, `y >= center.y`.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child-slot order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    pub(crate) const fn idx(self) -> usize {
        self as usize
    }
}

/// Exposes the 2D position the quadtree indexes on.
///
/// Implemented by the object type in the collection handed to
/// [`QuadTree::rebuild`](crate::QuadTree::rebuild). The tree copies the
/// position at rebuild time and never touches the object again.
pub trait Position {
    /// The object's position.
    fn position(&self) -> Point;
}

impl Position for Point {
    fn position(&self) -> Self {
        *self
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::{Point, Rect};

    #[allow(
        clippy::cast_possible_truncation,
        reason = "kurbo geometry is f64; this crate's coordinates are deliberately f32"
    )]
    impl From<kurbo::Point> for Point {
        fn from(p: kurbo::Point) -> Self {
            Self::new(p.x as f32, p.y as f32)
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "kurbo geometry is f64; this crate's coordinates are deliberately f32"
    )]
    impl From<kurbo::Rect> for Rect {
        fn from(r: kurbo::Rect) -> Self {
            Self::new(r.x0 as f32, r.y0 as f32, r.x1 as f32, r.y1 as f32)
        }
    }
}
