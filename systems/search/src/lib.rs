#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Exhaustive backtracking search for the shortest non-crossing route.
//!
//! The search enumerates every visiting order of the point set that starts
//! at the requested node, abandoning any branch whose newest edge would
//! properly cross an earlier edge, and keeps the shortest completed route.
//! The enumeration is exact and `O((N-1)!)` in the worst case, so it is only
//! tractable for small sets; [`SearchConfig::deadline`] bounds the
//! wall-clock cost and [`SearchConfig::prune_above_best`] enables an
//! optional branch-and-bound cutoff.

use std::time::{Duration, Instant};

use planar_route_core::{segments_cross, NodeId, Point, Route, SearchError, SearchOutcome};

/// Options controlling a single search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget for the search, checked on every branch entry.
    ///
    /// `None` runs the search to exhaustion.
    pub deadline: Option<Duration>,
    /// Abandons branches whose accumulated length already matches or
    /// exceeds the best completed route.
    ///
    /// Disabled by default to preserve the exhaustive visit order of the
    /// original search; enabling it never changes the returned optimum,
    /// only the number of branches visited.
    pub prune_above_best: bool,
}

/// System that finds shortest non-crossing routes, reusing its scratch
/// buffers across calls.
#[derive(Debug, Default)]
pub struct ShortestRouteSearch {
    visited: Vec<bool>,
    path: Vec<NodeId>,
}

impl ShortestRouteSearch {
    /// Creates a search system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the shortest route through `points` that starts at `start` and
    /// never crosses itself.
    ///
    /// An empty point set yields an empty solved route without consulting
    /// `start`. For a non-empty set a start outside `[0, N)` is rejected
    /// with [`SearchError::StartOutOfRange`]. When every branch is
    /// exhausted without completing a route the outcome is
    /// [`SearchOutcome::NoSolution`]; an expired deadline surfaces as
    /// [`SearchOutcome::DeadlineExpired`] rather than a partial answer.
    pub fn search(
        &mut self,
        points: &[Point],
        start: NodeId,
        config: &SearchConfig,
    ) -> Result<SearchOutcome, SearchError> {
        if points.is_empty() {
            return Ok(SearchOutcome::Solved {
                route: Route::default(),
                length: 0.0,
            });
        }
        if start.index() >= points.len() {
            return Err(SearchError::StartOutOfRange {
                start,
                node_count: points.len(),
            });
        }

        self.visited.clear();
        self.visited.resize(points.len(), false);
        self.path.clear();
        self.path.reserve(points.len());
        self.visited[start.index()] = true;
        self.path.push(start);

        let deadline = config.deadline.map(|budget| Instant::now() + budget);
        let mut best: Option<BestRoute> = None;

        let expired = descend(
            points,
            &mut self.visited,
            &mut self.path,
            0.0,
            &mut best,
            deadline,
            config.prune_above_best,
        );

        if expired {
            return Ok(SearchOutcome::DeadlineExpired);
        }

        Ok(match best {
            Some(found) => SearchOutcome::Solved {
                route: Route::from_nodes(found.nodes),
                length: found.length,
            },
            None => SearchOutcome::NoSolution,
        })
    }
}

#[derive(Clone, Debug)]
struct BestRoute {
    nodes: Vec<NodeId>,
    length: f64,
}

/// Depth-first extension of the partial route held in `path`.
///
/// Returns `true` when the deadline expired and the whole search must abort.
fn descend(
    points: &[Point],
    visited: &mut [bool],
    path: &mut Vec<NodeId>,
    travelled: f64,
    best: &mut Option<BestRoute>,
    deadline: Option<Instant>,
    prune_above_best: bool,
) -> bool {
    if let Some(limit) = deadline {
        if Instant::now() >= limit {
            return true;
        }
    }

    if prune_above_best {
        if let Some(current) = best.as_ref() {
            if travelled >= current.length {
                return false;
            }
        }
    }

    if path.len() == points.len() {
        let improved = best
            .as_ref()
            .map_or(true, |current| travelled < current.length);
        if improved {
            *best = Some(BestRoute {
                nodes: path.clone(),
                length: travelled,
            });
        }
        return false;
    }

    let Some(&last) = path.last() else {
        return false;
    };

    for candidate in 0..points.len() {
        if visited[candidate] {
            continue;
        }
        if crosses_existing(points, path, candidate) {
            continue;
        }

        let leg = points[last.index()].distance_to(points[candidate]);
        visited[candidate] = true;
        path.push(NodeId::new(candidate as u32));

        let expired = descend(
            points,
            visited,
            path,
            travelled + leg,
            best,
            deadline,
            prune_above_best,
        );

        let _ = path.pop();
        visited[candidate] = false;

        if expired {
            return true;
        }
    }

    false
}

/// Reports whether the edge from the path's last node to `candidate` would
/// properly cross any earlier path edge.
///
/// The most recent edge shares an endpoint with the candidate edge and is
/// skipped; [`segments_cross`] already treats endpoint contact as
/// non-crossing, but adjacency must still be excluded here rather than
/// trusted to the boundary behaviour alone.
fn crosses_existing(points: &[Point], path: &[NodeId], candidate: usize) -> bool {
    if path.len() < 2 {
        return false;
    }

    let Some(&last) = path.last() else {
        return false;
    };
    let new_a = points[last.index()];
    let new_b = points[candidate];

    for edge in path.windows(2).take(path.len() - 2) {
        let a = points[edge[0].index()];
        let b = points[edge[1].index()];
        if segments_cross(a, b, new_a, new_b) {
            return true;
        }
    }

    false
}
