#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that produces random point sets and corner-derived start nodes.
//!
//! Generation owns no randomness of its own: callers inject an [`rand::Rng`]
//! implementation, so reproducible runs simply pass a seeded generator while
//! interactive runs pass an entropy-backed one.

use planar_route_core::{Bounds, NodeId, Point};
use rand::Rng;

/// Fraction of each bounds axis kept clear on every side when sampling.
///
/// The visualiser this tool was ported from samples the inner 10%–90% band
/// of the viewport so generated nodes never hug the frame.
pub const DEFAULT_EDGE_INSET: f64 = 0.1;

/// Pure system that samples point sets inside a rectangular region.
#[derive(Clone, Copy, Debug)]
pub struct PointGeneration {
    edge_inset: f64,
}

impl Default for PointGeneration {
    fn default() -> Self {
        Self {
            edge_inset: DEFAULT_EDGE_INSET,
        }
    }
}

impl PointGeneration {
    /// Creates a generator using [`DEFAULT_EDGE_INSET`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with an explicit edge inset fraction.
    ///
    /// The fraction is clamped to `0.0..=0.5`; 0.5 collapses the sampling
    /// band to the centre of the bounds.
    #[must_use]
    pub fn with_edge_inset(edge_inset: f64) -> Self {
        Self {
            edge_inset: edge_inset.clamp(0.0, 0.5),
        }
    }

    /// Fraction of each axis excluded on every side while sampling.
    #[must_use]
    pub const fn edge_inset(&self) -> f64 {
        self.edge_inset
    }

    /// Samples `count` points uniformly inside the inset band of `bounds`.
    ///
    /// Coordinates carry no uniqueness constraint: duplicate points are
    /// permitted and downstream consumers must tolerate the zero-length
    /// edges they produce.
    #[must_use]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        bounds: Bounds,
        rng: &mut R,
    ) -> Vec<Point> {
        let band = bounds.inset(self.edge_inset);
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let x = sample_axis(rng, band.min().x(), band.max().x());
            let y = sample_axis(rng, band.min().y(), band.max().y());
            points.push(Point::new(x, y));
        }
        points
    }
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

/// Selects the node closest to any corner of `bounds` as the route start.
///
/// Every (corner, node) pair is measured; corners are scanned in the order
/// reported by [`Bounds::corners`] with nodes in index order inside each
/// corner, and only a strictly smaller distance replaces the running best,
/// so ties resolve to the earliest pair encountered. Returns `None` for an
/// empty point set.
#[must_use]
pub fn corner_nearest_node(points: &[Point], bounds: Bounds) -> Option<NodeId> {
    let mut best: Option<(f64, NodeId)> = None;

    for corner in bounds.corners() {
        for (index, point) in points.iter().enumerate() {
            let distance = corner.distance_to(*point);
            let closer = match best {
                Some((best_distance, _)) => distance < best_distance,
                None => true,
            };
            if closer {
                best = Some((distance, NodeId::new(index as u32)));
            }
        }
    }

    best.map(|(_, node)| node)
}

#[cfg(test)]
mod tests {
    use super::{corner_nearest_node, PointGeneration, DEFAULT_EDGE_INSET};
    use planar_route_core::{Bounds, NodeId, Point};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generated_points_stay_inside_the_inset_band() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let band = bounds.inset(DEFAULT_EDGE_INSET);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let points = PointGeneration::new().generate(100, bounds, &mut rng);

        assert_eq!(points.len(), 100);
        for point in points {
            assert!(band.contains(point), "point {point:?} escaped the band");
        }
    }

    #[test]
    fn identical_seeds_reproduce_the_same_set() {
        let bounds = Bounds::from_extent(25.0, 15.0);
        let generator = PointGeneration::new();

        let mut first_rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let mut second_rng = ChaCha8Rng::seed_from_u64(0x5eed);
        let first = generator.generate(12, bounds, &mut first_rng);
        let second = generator.generate(12, bounds, &mut second_rng);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let bounds = Bounds::from_extent(25.0, 15.0);
        let generator = PointGeneration::new();

        let mut first_rng = ChaCha8Rng::seed_from_u64(1);
        let mut second_rng = ChaCha8Rng::seed_from_u64(2);
        let first = generator.generate(12, bounds, &mut first_rng);
        let second = generator.generate(12, bounds, &mut second_rng);

        assert_ne!(first, second);
    }

    #[test]
    fn zero_count_produces_an_empty_set() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(PointGeneration::new().generate(0, bounds, &mut rng).is_empty());
    }

    #[test]
    fn collapsed_band_degenerates_to_the_centre() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let points = PointGeneration::with_edge_inset(0.5).generate(5, bounds, &mut rng);

        for point in points {
            assert_eq!(point, Point::new(5.0, 5.0));
        }
    }

    #[test]
    fn inset_fraction_is_clamped() {
        assert_eq!(PointGeneration::with_edge_inset(3.0).edge_inset(), 0.5);
        assert_eq!(PointGeneration::with_edge_inset(-1.0).edge_inset(), 0.0);
    }

    #[test]
    fn corner_nearest_node_picks_the_globally_closest_point() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let points = vec![
            Point::new(5.0, 5.0),
            Point::new(9.5, 9.5),
            Point::new(4.0, 4.0),
        ];

        assert_eq!(corner_nearest_node(&points, bounds), Some(NodeId::new(1)));
    }

    #[test]
    fn earlier_corner_wins_distance_ties() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        // Node 1 sits as close to the top-left corner as node 0 sits to the
        // bottom-right one; the bottom-right corner is scanned first.
        let points = vec![Point::new(9.0, 1.0), Point::new(1.0, 9.0)];

        assert_eq!(corner_nearest_node(&points, bounds), Some(NodeId::new(0)));
    }

    #[test]
    fn earlier_node_wins_ties_within_a_corner() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        let points = vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)];

        assert_eq!(corner_nearest_node(&points, bounds), Some(NodeId::new(0)));
    }

    #[test]
    fn empty_point_set_has_no_start() {
        let bounds = Bounds::from_extent(10.0, 10.0);
        assert_eq!(corner_nearest_node(&[], bounds), None);
    }
}
