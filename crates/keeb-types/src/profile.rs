use serde::{Deserialize, Serialize};

use crate::point::Point2;

/// An open sequence of points, e.g. the keyboard reference line.
pub type Polyline = Vec<Point2>;

/// A closed 2D polygon: the last point connects back to the first.
/// Self-intersection is not checked here; callers construct profiles
/// from monotone curves and axis-aligned edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub points: Vec<Point2>,
}

impl Profile {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area via the shoelace formula. Positive for counter-clockwise
    /// winding, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let pts = &self.points;
        let n = pts.len();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += pts[i].x * pts[j].y;
            area -= pts[j].x * pts[i].y;
        }
        area / 2.0
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Return the profile with counter-clockwise winding, reversing the
    /// point order if necessary.
    pub fn oriented_ccw(mut self) -> Self {
        if !self.is_ccw() {
            self.points.reverse();
        }
        self
    }

    /// Drop consecutive points closer than `eps`, including the wrap-around
    /// pair (last vs. first). Profile assembly can produce a closing point
    /// coinciding with the final curve sample up to round-off.
    pub fn dedup_consecutive(mut self, eps: f64) -> Self {
        self.points.dedup_by(|a, b| a.almost_eq(b, eps));
        if self.points.len() > 1 {
            let first = self.points[0];
            if self.points.last().unwrap().almost_eq(&first, eps) {
                self.points.pop();
            }
        }
        self
    }
}
