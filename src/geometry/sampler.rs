use rand::Rng;

/// Draw one candidate ring: `vertex_count` points sampled uniformly from the
/// unit square, ordered counter-clockwise by angle around their centroid.
///
/// The result is not guaranteed simple: angular ties and near-collinear
/// clusters can still produce a degenerate or self-touching ring. Callers
/// run the result through `is_simple_ring` before accepting it.
pub fn sample_ring<R: Rng + ?Sized>(vertex_count: usize, rng: &mut R) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = (0..vertex_count)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();
    let center = centroid(&points);
    points.sort_by(|a, b| angle_around(center, *a).total_cmp(&angle_around(center, *b)));
    points
}

fn centroid(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
    (sum_x / n, sum_y / n)
}

fn angle_around(center: (f64, f64), point: (f64, f64)) -> f64 {
    (point.1 - center.1).atan2(point.0 - center.0)
}
