use super::{Point2, TOLERANCE};

/// Length of the collinear overlap between two segments.
///
/// Returns `None` unless both endpoints of the second segment lie on the
/// carrier line of the first and the projected ranges overlap by more
/// than the tolerance. Contact at a single shared point is not overlap.
#[must_use]
pub fn collinear_overlap_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<f64> {
    let da = a1 - a0;
    let len_a = da.norm();
    if len_a < TOLERANCE {
        return None;
    }
    let dir = da / len_a;

    let offset = |p: &Point2| -> f64 {
        let ap = p - a0;
        dir.x * ap.y - dir.y * ap.x
    };
    if offset(b0).abs() > TOLERANCE || offset(b1).abs() > TOLERANCE {
        return None;
    }

    let t0 = (b0 - a0).dot(&dir);
    let t1 = (b1 - a0).dot(&dir);
    let (b_min, b_max) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    let overlap = b_max.min(len_a) - b_min.max(0.0);
    if overlap > TOLERANCE {
        Some(overlap)
    } else {
        None
    }
}

/// Edge-adjacency test for two polygons.
///
/// True iff some edge of one polygon overlaps an edge of the other
/// collinearly with positive length. Sharing a single vertex or merely
/// overlapping interiors does not qualify.
#[must_use]
pub fn polygons_adjacent_2d(a: &[Point2], b: &[Point2]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    for i in 0..a.len() {
        let a0 = &a[i];
        let a1 = &a[(i + 1) % a.len()];
        for j in 0..b.len() {
            let b0 = &b[j];
            let b1 = &b[(j + 1) % b.len()];
            if collinear_overlap_2d(a0, a1, b0, b1).is_some() {
                return true;
            }
        }
    }
    false
}
