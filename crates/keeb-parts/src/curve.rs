use serde::{Deserialize, Serialize};

use keeb_types::Point2;

/// The handrest's top-edge slope, as a normalized descending factor:
/// 1 at t=0 (the tall end), 0 at t=1. Keeping the formula behind this one
/// evaluation point lets profile assembly and extrusion stay untouched when
/// a different curve shape is swapped in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SlopeCurve {
    /// cos(t·π/2) — a quarter cosine wave descending monotonically.
    QuarterCosine,
    /// (1 + cos(π·t^strength)) / 2 — eased ramp; `strength` biases the bend
    /// toward either end and is clamped to [0.01, 10].
    Eased { strength: f64 },
}

impl Default for SlopeCurve {
    fn default() -> Self {
        SlopeCurve::QuarterCosine
    }
}

impl SlopeCurve {
    /// Height factor at `t` in [0, 1].
    pub fn factor(&self, t: f64) -> f64 {
        match self {
            SlopeCurve::QuarterCosine => (t * std::f64::consts::FRAC_PI_2).cos(),
            SlopeCurve::Eased { strength } => {
                let s = strength.clamp(0.01, 10.0);
                (1.0 + (std::f64::consts::PI * t.powf(s)).cos()) / 2.0
            }
        }
    }

    /// Curve point for a handrest of the given width and height:
    /// x runs from 0 to width, y from height down to 0.
    pub fn point_at(&self, t: f64, width: f64, height: f64) -> Point2 {
        Point2::new(t * width, height * self.factor(t))
    }
}

/// Sample `segments + 1` uniformly spaced points over t in [0, 1] inclusive.
/// Sampling density changes faceting only, never the endpoints.
pub fn sample_curve(curve: &SlopeCurve, segments: u32, width: f64, height: f64) -> Vec<Point2> {
    (0..=segments)
        .map(|i| curve.point_at(f64::from(i) / f64::from(segments), width, height))
        .collect()
}
