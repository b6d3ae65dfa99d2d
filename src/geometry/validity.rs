use geo::{Area, LineString, Polygon, Validation};

/// Rings whose unsigned area is at or below this are treated as degenerate
/// even when no two edges properly cross.
const MIN_RING_AREA: f64 = 1e-12;

/// Check that an open ring of vertices forms a simple, non-degenerate
/// polygon: at least three finite vertices, no self intersections, and
/// strictly positive enclosed area.
pub fn is_simple_ring(points: &[(f64, f64)]) -> bool {
    if points.len() < 3 {
        return false;
    }
    if points.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
        return false;
    }
    let ring: LineString<f64> = points
        .iter()
        .map(|&(x, y)| geo::coord! { x: x, y: y })
        .collect();
    let polygon = Polygon::new(ring, vec![]);
    polygon.is_valid() && polygon.unsigned_area() > MIN_RING_AREA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_is_simple() {
        let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        assert!(is_simple_ring(&square));
    }

    #[test]
    fn test_triangle_is_simple() {
        let triangle = [(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)];
        assert!(is_simple_ring(&triangle));
    }

    #[test]
    fn test_bowtie_is_rejected() {
        // Edges (0,0)-(1,1) and (1,0)-(0,1) cross at (0.5, 0.5).
        let bowtie = [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
        assert!(!is_simple_ring(&bowtie));
    }

    #[test]
    fn test_collinear_ring_is_rejected() {
        let flat = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
        assert!(!is_simple_ring(&flat));
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        assert!(!is_simple_ring(&[]));
        assert!(!is_simple_ring(&[(0.0, 0.0), (1.0, 1.0)]));
    }

    #[test]
    fn test_non_finite_vertex_rejected() {
        let ring = [(0.0, 0.0), (1.0, 0.0), (f64::NAN, 1.0)];
        assert!(!is_simple_ring(&ring));
    }
}
