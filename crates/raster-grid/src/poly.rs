//! Point-in-polygon testing.

/// Test whether a point lies inside a polygon.
///
/// Ray-casting over the polygon edges, with the closing edge implied
/// (the last vertex connects back to the first). Degenerate polygons with
/// fewer than three vertices contain nothing.
pub fn point_in_polygon(point: (f64, f64), polygon: &[(f64, f64)]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (x, y) = point;
    let n = polygon.len();
    let mut inside = false;

    let (mut p1x, mut p1y) = polygon[0];
    for i in 0..=n {
        let (p2x, p2y) = polygon[i % n];
        // The y-range check excludes horizontal edges, so the intercept
        // division is always defined.
        if y > p1y.min(p2y) && y <= p1y.max(p2y) && x <= p1x.max(p2x) {
            let x_intercept = (y - p1y) * (p2x - p1x) / (p2y - p1y) + p1x;
            if p1x == p2x || x <= x_intercept {
                inside = !inside;
            }
        }
        p1x = p2x;
        p1y = p2y;
    }

    inside
}
