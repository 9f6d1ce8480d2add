use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Fewer than
/// three vertices yield zero.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of two points.
#[must_use]
pub fn midpoint_2d(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Rotates a point about a pivot by an angle in radians.
///
/// Positive angles rotate counter-clockwise.
#[must_use]
pub fn rotate_point_2d(point: &Point2, pivot: &Point2, radians: f64) -> Point2 {
    let (sin, cos) = radians.sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point2::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}

/// Checks whether a point lies on a segment, endpoints included.
#[must_use]
pub fn point_on_segment_2d(point: &Point2, a: &Point2, b: &Point2) -> bool {
    let ab = b - a;
    let len = ab.norm();
    if len < TOLERANCE {
        return (point - a).norm() < TOLERANCE;
    }
    let ap = point - a;
    // Perpendicular distance from the carrier line.
    let cross = ab.x * ap.y - ab.y * ap.x;
    if (cross / len).abs() > TOLERANCE {
        return false;
    }
    let t = ap.dot(&ab) / (len * len);
    t >= -TOLERANCE && t <= 1.0 + TOLERANCE
}

/// Boundary-inclusive point-in-polygon test (even-odd ray cast).
///
/// Points on an edge or vertex count as inside. Fewer than three
/// polygon vertices always yield `false`.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        if point_on_segment_2d(point, &polygon[i], &polygon[(i + 1) % n]) {
            return true;
        }
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = &polygon[i];
        let pj = &polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pj.x + (point.y - pj.y) * (pi.x - pj.x) / (pi.y - pj.y);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Convex hull via Andrew's monotone chain, counter-clockwise output.
///
/// Collinear points along hull edges are dropped. Inputs with fewer than
/// three distinct points are returned as-is after deduplication.
#[must_use]
pub fn convex_hull_2d(points: &[Point2]) -> Vec<Point2> {
    let mut pts: Vec<Point2> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE);
    if pts.len() < 3 {
        return pts;
    }

    let turn = |o: &Point2, a: &Point2, b: &Point2| -> f64 {
        (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
    };

    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(&lower[lower.len() - 2], &lower[lower.len() - 1], p) <= TOLERANCE {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(&upper[upper.len() - 2], &upper[upper.len() - 1], p) <= TOLERANCE {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
