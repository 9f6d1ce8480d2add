//! Best-effort union of two simple polygon boundaries.
//!
//! Strategy: orient both inputs counter-clockwise, split every edge at
//! the other polygon's vertices and edge crossings, discard sub-edges
//! that fall inside the other polygon or duplicate its boundary, then
//! stitch the survivors back into one closed loop. Inputs whose union is
//! not a single simple outline (disjoint polygons, point contact,
//! pathological overlap) fall back to the convex hull of both vertex
//! sets so a single closed outline is always produced.

use super::intersect_2d::segment_segment_intersect_2d;
use super::polygon_2d::{
    convex_hull_2d, midpoint_2d, point_in_polygon_2d, point_on_segment_2d, signed_area_2d,
};
use super::{Point2, TOLERANCE};

/// Endpoint matching tolerance when stitching split edges back together.
const STITCH_TOLERANCE: f64 = 1e-6;

/// Merges two simple polygon boundaries into a single closed outline.
///
/// Edge-adjacent and overlapping inputs produce the true union outline;
/// anything the stitcher cannot close as one loop degrades to the convex
/// hull of both vertex sets. An input with fewer than three vertices is
/// ignored in favor of the other.
#[must_use]
pub fn boundary_union_2d(a: &[Point2], b: &[Point2]) -> Vec<Point2> {
    if a.len() < 3 {
        return b.to_vec();
    }
    if b.len() < 3 {
        return a.to_vec();
    }
    let a = oriented_ccw(a);
    let b = oriented_ccw(b);

    let mut kept: Vec<(Point2, Point2)> = Vec::new();
    for (start, end) in split_edges(&a, &b) {
        let mid = midpoint_2d(&start, &end);
        if strictly_inside(&mid, &b) {
            continue;
        }
        // A shared boundary run traversed in the opposite direction is
        // interior seam, not outline; a same-direction run survives so
        // one of the two duplicates remains.
        if on_boundary(&mid, &b) && traverses_opposite(&start, &end, &b) {
            continue;
        }
        kept.push((start, end));
    }
    for (start, end) in split_edges(&b, &a) {
        let mid = midpoint_2d(&start, &end);
        if strictly_inside(&mid, &a) || on_boundary(&mid, &a) {
            continue;
        }
        kept.push((start, end));
    }

    match stitch_loop(&kept) {
        Some(outline) if outline.len() >= 3 && signed_area_2d(&outline).abs() > TOLERANCE => {
            outline
        }
        _ => {
            let mut all = a;
            all.extend_from_slice(&b);
            convex_hull_2d(&all)
        }
    }
}

/// Returns the polygon in counter-clockwise winding.
fn oriented_ccw(points: &[Point2]) -> Vec<Point2> {
    if signed_area_2d(points) < 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() < STITCH_TOLERANCE
}

fn on_boundary(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    (0..n).any(|i| point_on_segment_2d(point, &polygon[i], &polygon[(i + 1) % n]))
}

fn strictly_inside(point: &Point2, polygon: &[Point2]) -> bool {
    point_in_polygon_2d(point, polygon) && !on_boundary(point, polygon)
}

/// True when the other polygon traverses the shared run containing `mid`
/// in the opposite direction.
fn traverses_opposite(start: &Point2, end: &Point2, other: &[Point2]) -> bool {
    let mid = midpoint_2d(start, end);
    let dir = end - start;
    let n = other.len();
    for i in 0..n {
        let o0 = &other[i];
        let o1 = &other[(i + 1) % n];
        if point_on_segment_2d(&mid, o0, o1) {
            return dir.dot(&(o1 - o0)) < 0.0;
        }
    }
    false
}

/// Splits every edge of `polygon` at the vertices and edge crossings of
/// `other`, returning directed sub-edges of positive length.
fn split_edges(polygon: &[Point2], other: &[Point2]) -> Vec<(Point2, Point2)> {
    let n = polygon.len();
    let m = other.len();
    let mut result = Vec::with_capacity(n + m);
    for i in 0..n {
        let start = polygon[i];
        let end = polygon[(i + 1) % n];
        let edge = end - start;
        let len_sq = edge.norm_squared();
        if len_sq < TOLERANCE * TOLERANCE {
            continue;
        }

        let mut params = vec![0.0, 1.0];
        for vertex in other {
            if point_on_segment_2d(vertex, &start, &end) {
                params.push((vertex - start).dot(&edge) / len_sq);
            }
        }
        for j in 0..m {
            if let Some((_, t, _)) =
                segment_segment_intersect_2d(&start, &end, &other[j], &other[(j + 1) % m])
            {
                params.push(t);
            }
        }
        params.sort_by(f64::total_cmp);

        let mut previous = 0.0;
        for t in params {
            let t = t.clamp(0.0, 1.0);
            if (t - previous) * edge.norm() < STITCH_TOLERANCE {
                continue;
            }
            result.push((
                Point2::new(start.x + edge.x * previous, start.y + edge.y * previous),
                Point2::new(start.x + edge.x * t, start.y + edge.y * t),
            ));
            previous = t;
        }
    }
    result
}

/// Chains directed edges end-to-start into a single closed loop.
///
/// Greedy endpoint matching in the manner of offset-slice stitching.
/// Returns `None` unless every edge is consumed and the chain closes.
fn stitch_loop(edges: &[(Point2, Point2)]) -> Option<Vec<Point2>> {
    let n = edges.len();
    if n < 3 {
        return None;
    }
    let mut used = vec![false; n];
    used[0] = true;
    let mut used_count = 1;
    let mut chain: Vec<Point2> = vec![edges[0].0, edges[0].1];

    while used_count < n {
        let tail = chain[chain.len() - 1];
        let next = (0..n).find(|&i| !used[i] && points_coincide(&tail, &edges[i].0))?;
        used[next] = true;
        used_count += 1;
        chain.push(edges[next].1);
    }

    if !points_coincide(&chain[0], &chain[chain.len() - 1]) {
        return None;
    }
    chain.pop();
    Some(simplify_collinear(&chain))
}

/// Drops coincident and collinear intermediate vertices introduced by
/// edge splitting; area is unchanged.
fn simplify_collinear(points: &[Point2]) -> Vec<Point2> {
    let mut distinct: Vec<Point2> = Vec::with_capacity(points.len());
    for point in points {
        if distinct
            .last()
            .is_none_or(|last| !points_coincide(last, point))
        {
            distinct.push(*point);
        }
    }
    if distinct.len() > 1 {
        let first = distinct[0];
        if let Some(last) = distinct.last() {
            if points_coincide(&first, last) {
                distinct.pop();
            }
        }
    }

    let n = distinct.len();
    if n < 3 {
        return distinct;
    }
    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let prev = distinct[(i + n - 1) % n];
        let cur = distinct[i];
        let next = distinct[(i + 1) % n];
        let cross = (cur.x - prev.x) * (next.y - prev.y) - (cur.y - prev.y) * (next.x - prev.x);
        if cross.abs() > STITCH_TOLERANCE {
            result.push(cur);
        }
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point2> {
        vec![p(x, y), p(x + w, y), p(x + w, y + h), p(x, y + h)]
    }

    #[test]
    fn side_by_side_rectangles_fuse_into_one() {
        let merged = boundary_union_2d(&rect(0.0, 0.0, 4.0, 2.0), &rect(4.0, 0.0, 4.0, 2.0));
        assert_eq!(merged.len(), 4);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 16.0, epsilon = 1e-6);
    }

    #[test]
    fn partial_edge_share_produces_l_outline() {
        // Tall strip against the left end of a wide base, sharing part of
        // the base's top edge.
        let base = rect(0.0, 0.0, 10.0, 2.0);
        let strip = rect(0.0, 2.0, 3.0, 5.0);
        let merged = boundary_union_2d(&base, &strip);
        assert_eq!(merged.len(), 6);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 20.0 + 15.0, epsilon = 1e-6);
    }

    #[test]
    fn stacked_strips_conserve_area() {
        let lower = rect(0.0, 0.0, 1.0, 3.0);
        let upper = rect(0.0, 3.0, 1.0, 3.0);
        let merged = boundary_union_2d(&lower, &upper);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 6.0, epsilon = 1e-6);
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn contained_polygon_is_absorbed() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inner = rect(2.0, 2.0, 3.0, 3.0);
        let merged = boundary_union_2d(&outer, &inner);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn contained_polygon_sharing_an_edge_is_absorbed() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inner = rect(0.0, 4.0, 3.0, 3.0);
        let merged = boundary_union_2d(&outer, &inner);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn identical_polygons_union_to_themselves() {
        let square = rect(0.0, 0.0, 5.0, 5.0);
        let merged = boundary_union_2d(&square, &square);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 25.0, epsilon = 1e-6);
    }

    #[test]
    fn overlapping_rectangles_union_outline() {
        let first = rect(0.0, 0.0, 6.0, 4.0);
        let second = rect(4.0, 2.0, 6.0, 4.0);
        let merged = boundary_union_2d(&first, &second);
        // 24 + 24 minus the 2x2 overlap.
        assert_relative_eq!(signed_area_2d(&merged).abs(), 44.0, epsilon = 1e-6);
        assert_eq!(merged.len(), 8);
    }

    #[test]
    fn disjoint_rectangles_fall_back_to_hull() {
        let west = rect(0.0, 0.0, 2.0, 2.0);
        let east = rect(6.0, 0.0, 2.0, 2.0);
        let merged = boundary_union_2d(&west, &east);
        assert_eq!(merged.len(), 4);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 16.0, epsilon = 1e-6);
    }

    #[test]
    fn clockwise_input_is_reoriented() {
        let ccw = rect(0.0, 0.0, 4.0, 2.0);
        let cw: Vec<Point2> = rect(4.0, 0.0, 4.0, 2.0).into_iter().rev().collect();
        let merged = boundary_union_2d(&ccw, &cw);
        assert_relative_eq!(signed_area_2d(&merged).abs(), 16.0, epsilon = 1e-6);
    }

    #[test]
    fn degenerate_input_returns_the_other() {
        let square = rect(0.0, 0.0, 5.0, 5.0);
        assert_eq!(boundary_union_2d(&[], &square).len(), 4);
        assert_eq!(boundary_union_2d(&square, &[p(1.0, 1.0)]).len(), 4);
    }
}
