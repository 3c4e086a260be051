#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for Planar Route adapters.
//!
//! A [`RouteScene`] is a declarative description of a point set and the
//! outcome of a search over it, so concrete adapters only have to serialise
//! or draw plain data. The search stays entirely presentation-agnostic;
//! composing a scene is the only place where outcomes gain colours and
//! stroke widths.

use anyhow::Result as AnyResult;
use glam::Vec2;
use planar_route_core::{Bounds, NodeId, Point, Route, SearchOutcome};
use std::{error::Error, fmt};

/// Stroke width of route segments expressed in world units.
pub const ROUTE_STROKE_WIDTH: f32 = 0.05;

/// RGBA color used when presenting scenes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Role of a node within a presented route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// First node of the route.
    Start,
    /// Node visited between the start and the terminus.
    Interior,
    /// Final node of the route.
    Terminus,
}

impl NodeRole {
    /// Fill color associated with the role.
    ///
    /// Green start, yellow interior, red terminus, matching the visualiser
    /// this tool was ported from.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Start => Color::from_rgb_u8(0, 255, 0),
            Self::Interior => Color::from_rgb_u8(255, 235, 4),
            Self::Terminus => Color::from_rgb_u8(255, 0, 0),
        }
    }
}

/// Node prepared for presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneNode {
    /// Identifier of the node within the point set.
    pub id: NodeId,
    /// Position of the node in scene space.
    pub position: Vec2,
    /// Role within the presented route, absent when no route is shown.
    pub role: Option<NodeRole>,
}

/// Route edge prepared for presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSegment {
    /// Scene-space start of the edge.
    pub from: Vec2,
    /// Scene-space end of the edge.
    pub to: Vec2,
}

/// Declarative description of a route presentation.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteScene {
    nodes: Vec<SceneNode>,
    segments: Vec<SceneSegment>,
    bounds: Bounds,
}

impl RouteScene {
    /// Composes a scene from a point set and the outcome of a search.
    ///
    /// Solved outcomes classify every node by its position in the route and
    /// produce one segment per route edge; unsolved outcomes produce bare
    /// role-less nodes so adapters can still show the configuration.
    pub fn compose(
        points: &[Point],
        bounds: Bounds,
        outcome: &SearchOutcome,
    ) -> Result<Self, SceneError> {
        let mut nodes: Vec<SceneNode> = points
            .iter()
            .enumerate()
            .map(|(index, point)| SceneNode {
                id: NodeId::new(index as u32),
                position: to_scene(*point),
                role: None,
            })
            .collect();

        let mut segments = Vec::new();
        if let SearchOutcome::Solved { route, .. } = outcome {
            assign_roles(&mut nodes, route)?;
            segments = route_segments(points, route)?;
        }

        Ok(Self {
            nodes,
            segments,
            bounds,
        })
    }

    /// Nodes in point-set index order.
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Route segments in visiting order.
    #[must_use]
    pub fn segments(&self) -> &[SceneSegment] {
        &self.segments
    }

    /// Bounds framing the scene.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// Adapter capable of presenting composed route scenes.
pub trait RoutePresenter {
    /// Presents the provided scene on the adapter's output.
    fn present(&mut self, scene: &RouteScene) -> AnyResult<()>;
}

fn to_scene(point: Point) -> Vec2 {
    Vec2::new(point.x() as f32, point.y() as f32)
}

fn assign_roles(nodes: &mut [SceneNode], route: &Route) -> Result<(), SceneError> {
    let count = route.len();
    for (position, id) in route.nodes().iter().enumerate() {
        let node_count = nodes.len();
        let node = nodes
            .get_mut(id.index())
            .ok_or(SceneError::NodeOutOfRange {
                node: *id,
                node_count,
            })?;
        node.role = Some(if position == 0 {
            NodeRole::Start
        } else if position + 1 == count {
            NodeRole::Terminus
        } else {
            NodeRole::Interior
        });
    }
    Ok(())
}

fn route_segments(points: &[Point], route: &Route) -> Result<Vec<SceneSegment>, SceneError> {
    let mut segments = Vec::with_capacity(route.len().saturating_sub(1));
    for edge in route.nodes().windows(2) {
        let from = resolve(points, edge[0])?;
        let to = resolve(points, edge[1])?;
        segments.push(SceneSegment {
            from: to_scene(from),
            to: to_scene(to),
        });
    }
    Ok(segments)
}

fn resolve(points: &[Point], node: NodeId) -> Result<Point, SceneError> {
    points
        .get(node.index())
        .copied()
        .ok_or(SceneError::NodeOutOfRange {
            node,
            node_count: points.len(),
        })
}

/// Errors that can occur when composing presentation descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum SceneError {
    /// A route node does not index into the presented point set.
    NodeOutOfRange {
        /// Node that failed to resolve.
        node: NodeId,
        /// Number of points available to the scene.
        node_count: usize,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOutOfRange { node, node_count } => {
                write!(
                    f,
                    "route node {} does not index into a scene of {node_count} points",
                    node.get()
                )
            }
        }
    }
}

impl Error for SceneError {}
