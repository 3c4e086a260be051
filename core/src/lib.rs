#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Planar Route workspace.
//!
//! This crate defines the value types that travel between the generation and
//! search systems and the presentation adapters: immutable [`Point`] sets,
//! [`NodeId`] indices into them, the [`Bounds`] rectangle that frames a
//! problem, and the [`Route`] / [`SearchOutcome`] values produced by the
//! search. The pure geometry helpers used by the search's pruning step also
//! live here so every consumer agrees on what counts as a crossing.

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Magnitude below which the segment-intersection denominator counts as zero.
///
/// Segment pairs whose denominator falls inside this band are parallel or
/// collinear and are never reported as crossing. Collinear overlap therefore
/// passes the crossing check; only proper interior intersections are
/// rejected.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Immutable 2D coordinate identified by its position within a point set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point from explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the point.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate of the point.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Computes the Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Index of a point within a point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new node identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index usable with point-set slices.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Axis-aligned rectangle that frames a point set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates bounds from two opposite corners, normalising their order.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates bounds anchored at the origin with the provided extent.
    #[must_use]
    pub fn from_extent(width: f64, height: f64) -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(width, height))
    }

    /// Computes the smallest bounds enclosing every provided point, if any.
    #[must_use]
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for point in rest {
            min = Point::new(min.x.min(point.x), min.y.min(point.y));
            max = Point::new(max.x.max(point.x), max.y.max(point.y));
        }
        Some(Self { min, max })
    }

    /// Corner with the smallest coordinates.
    #[must_use]
    pub const fn min(&self) -> Point {
        self.min
    }

    /// Corner with the largest coordinates.
    #[must_use]
    pub const fn max(&self) -> Point {
        self.max
    }

    /// Width of the rectangle in world units.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle in world units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The four corner points ordered bottom-left, bottom-right, top-left,
    /// top-right.
    ///
    /// Start selection scans corners in exactly this order, so the ordering
    /// participates in its tie-break contract.
    #[must_use]
    pub const fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.min.x, self.max.y),
            Point::new(self.max.x, self.max.y),
        ]
    }

    /// Reports whether the point lies inside the rectangle or on its edge.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns bounds shrunk by the given fraction of each axis on all sides.
    ///
    /// The fraction is clamped to `0.0..=0.5`; a fraction of 0.5 collapses
    /// the rectangle to its centre point.
    #[must_use]
    pub fn inset(&self, fraction: f64) -> Self {
        let fraction = fraction.clamp(0.0, 0.5);
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Self::new(
            Point::new(self.min.x + dx, self.min.y + dy),
            Point::new(self.max.x - dx, self.max.y - dy),
        )
    }
}

/// Ordered sequence of distinct node indices describing a visiting order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<NodeId>,
}

impl Route {
    /// Creates a route from an explicit visiting order.
    #[must_use]
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Nodes in visiting order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes visited by the route.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Reports whether the route visits no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the route, if any.
    #[must_use]
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Final node of the route, if any.
    #[must_use]
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Total Euclidean length of the route through the provided point set.
    ///
    /// Returns `None` when any node does not index into `points`.
    #[must_use]
    pub fn length(&self, points: &[Point]) -> Option<f64> {
        if self.nodes.iter().any(|node| node.index() >= points.len()) {
            return None;
        }

        let mut total = 0.0;
        for edge in self.nodes.windows(2) {
            total += points[edge[0].index()].distance_to(points[edge[1].index()]);
        }
        Some(total)
    }
}

/// Result of a completed search over a point set.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// A complete non-crossing route was found.
    Solved {
        /// Visiting order covering every node exactly once.
        route: Route,
        /// Total Euclidean length of the route.
        length: f64,
    },
    /// Every branch was exhausted without completing a route.
    NoSolution,
    /// The configured deadline expired before the search completed.
    DeadlineExpired,
}

/// Errors raised when a search request is rejected before any work is done.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The requested start node does not index into the point set.
    StartOutOfRange {
        /// Start node provided by the caller.
        start: NodeId,
        /// Number of points in the set being searched.
        node_count: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfRange { start, node_count } => {
                write!(
                    f,
                    "start node {} is out of range for a set of {node_count} points",
                    start.get()
                )
            }
        }
    }
}

impl Error for SearchError {}

/// Reports whether two line segments properly cross.
///
/// Uses the parametric cross-product formulation. A denominator within
/// [`PARALLEL_EPSILON`] of zero marks the segments as parallel or collinear
/// and yields `false`. A crossing requires both parameters strictly inside
/// the open interval `(0, 1)`, so endpoint contact never counts; callers that
/// walk chains of edges must exclude the edge sharing an endpoint with the
/// candidate themselves.
#[must_use]
pub fn segments_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d = (a2.x - a1.x) * (b2.y - b1.y) - (a2.y - a1.y) * (b2.x - b1.x);
    if d.abs() < PARALLEL_EPSILON {
        return false;
    }

    let u = ((b1.x - a1.x) * (b2.y - b1.y) - (b1.y - a1.y) * (b2.x - b1.x)) / d;
    let v = ((b1.x - a1.x) * (a2.y - a1.y) - (b1.y - a1.y) * (a2.x - a1.x)) / d;

    u > 0.0 && u < 1.0 && v > 0.0 && v < 1.0
}
