// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotone-in-x cubic interpolation.
//!
//! Band edges use a monotone cubic through the sample points: the curve
//! passes through every point and never overshoots between neighbors, so
//! stacked bands cannot visually cross. Tangents follow the
//! Fritsch–Carlson construction.

use kurbo::{BezPath, Point};

/// Appends a monotone-x curve through `pts` to `path`.
///
/// With `move_first` the curve starts a new subpath at the first point;
/// otherwise it connects from the current position with a line. Fewer than
/// three points degenerate to straight lines.
pub fn append_monotone_x(path: &mut BezPath, pts: &[Point], move_first: bool) {
    let Some(&first) = pts.first() else {
        return;
    };
    if move_first {
        path.move_to(first);
    } else {
        path.line_to(first);
    }
    match pts.len() {
        1 => return,
        2 => {
            path.line_to(pts[1]);
            return;
        }
        _ => {}
    }

    let tangents = monotone_tangents(pts);
    for i in 0..pts.len() - 1 {
        let (p0, p1) = (pts[i], pts[i + 1]);
        let dx = (p1.x - p0.x) / 3.0;
        path.curve_to(
            Point::new(p0.x + dx, p0.y + dx * tangents[i]),
            Point::new(p1.x - dx, p1.y - dx * tangents[i + 1]),
            p1,
        );
    }
}

fn monotone_tangents(pts: &[Point]) -> Vec<f64> {
    let n = pts.len();
    let mut out = vec![0.0; n];

    let slope = |a: Point, b: Point| {
        let h = b.x - a.x;
        if h == 0.0 { 0.0 } else { (b.y - a.y) / h }
    };

    for i in 1..n - 1 {
        let h0 = pts[i].x - pts[i - 1].x;
        let h1 = pts[i + 1].x - pts[i].x;
        let s0 = slope(pts[i - 1], pts[i]);
        let s1 = slope(pts[i], pts[i + 1]);
        let denom = h0 + h1;
        let p = if denom == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / denom
        };
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        out[i] = if t.is_finite() { t } else { 0.0 };
    }

    let s_first = slope(pts[0], pts[1]);
    let s_last = slope(pts[n - 2], pts[n - 1]);
    out[0] = end_tangent(s_first, out[1], pts[1].x - pts[0].x);
    out[n - 1] = end_tangent(s_last, out[n - 2], pts[n - 1].x - pts[n - 2].x);

    out
}

fn end_tangent(s: f64, neighbor: f64, h: f64) -> f64 {
    if h == 0.0 {
        neighbor
    } else {
        (3.0 * s - neighbor) / 2.0
    }
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}
