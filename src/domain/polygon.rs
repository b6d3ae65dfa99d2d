/// A simple (non-self-intersecting) closed polygon ring.
///
/// Vertices are stored in ring order; the closing edge from the last vertex
/// back to the first is implicit. Instances are produced by
/// `geometry::PolygonGenerator`, which only accepts rings that pass the
/// simplicity predicate, and are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePolygon {
    points: Vec<(f64, f64)>,
}

impl SimplePolygon {
    /// Wrap an already-validated ring. Validation happens at the production
    /// site (`geometry::is_simple_ring`), mirroring how the corpus files are
    /// later consumed as plain vertex lists without a re-check.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Vertices in ring order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of vertices in the ring.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let poly = SimplePolygon::new(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(poly.vertex_count(), 3);
        assert_eq!(poly.points()[1], (1.0, 0.0));
    }
}
