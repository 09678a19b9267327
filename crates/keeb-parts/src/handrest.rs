//! Handrest: a wrist-support block with a flat bottom and a curved top
//! edge, extruded from a single closed profile.

use serde::{Deserialize, Serialize};

use keeb_kernel::Kernel;
use keeb_types::{Point2, Profile};

use crate::curve::{sample_curve, SlopeCurve};
use crate::types::{Diagnostics, GenError, PartOutput};

/// Tolerance for spotting the final curve sample that lands on the
/// `(width, 0)` close up to round-off; that sample is replaced by the
/// exact corner.
const PROFILE_EPS: f64 = 1e-9;

/// Final placement of the extruded block: rotation about X, then a
/// translation into assembly position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub rotate_x_deg: f64,
    pub translate: [f64; 3],
}

impl Placement {
    /// Stand the block up for printing: 90° about X, no offset.
    pub fn upright() -> Self {
        Self {
            rotate_x_deg: 90.0,
            translate: [0.0, 0.0, 0.0],
        }
    }
}

/// Parameters for the handrest. Defaults reproduce the print variant
/// (depth 80, stood upright); `preview_slice()` is the thin unoriented
/// visualization cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandrestParams {
    pub width: f64,
    /// Height at the tallest point (the left edge).
    pub height: f64,
    /// Extrusion depth (3D thickness).
    pub depth: f64,
    /// Curve sampling density; changes faceting only, never the shape's
    /// endpoints.
    pub curve_segments: u32,
    pub curve: SlopeCurve,
    pub placement: Option<Placement>,
}

impl Default for HandrestParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 30.0,
            depth: 80.0,
            curve_segments: 30,
            curve: SlopeCurve::QuarterCosine,
            placement: Some(Placement::upright()),
        }
    }
}

impl HandrestParams {
    /// Thin flat slice for visual checks (depth 10, no placement).
    pub fn preview_slice() -> Self {
        Self {
            depth: 10.0,
            placement: None,
            ..Self::default()
        }
    }
}

fn validate(params: &HandrestParams) -> Result<(), GenError> {
    let reject = |reason: String| Err(GenError::InvalidParameter { reason });

    if !(params.width > 0.0) {
        return reject(format!("width must be positive, got {}", params.width));
    }
    if !(params.height > 0.0) {
        return reject(format!(
            "height must be positive, got {} (a zero or negative height collapses the profile)",
            params.height
        ));
    }
    if !(params.depth > 0.0) {
        return reject(format!("depth must be positive, got {}", params.depth));
    }
    if params.curve_segments < 1 {
        return reject("curve_segments must be at least 1".to_string());
    }
    Ok(())
}

/// Assemble the closed handrest profile: origin, curve samples from the
/// tall end down to the far corner, then the explicit bottom-right close.
/// Pure math; fails fast on degenerate parameters.
pub fn handrest_profile(params: &HandrestParams) -> Result<Profile, GenError> {
    validate(params)?;

    let samples = sample_curve(
        &params.curve,
        params.curve_segments,
        params.width,
        params.height,
    );

    let mut points = Vec::with_capacity(samples.len() + 2);
    points.push(Point2::new(0.0, 0.0));
    points.extend(samples);

    // The final sample lands on (width, 0) up to round-off; replace it with
    // the exact corner so the bottom edge is exactly flat.
    let close = Point2::new(params.width, 0.0);
    if points.last().is_some_and(|p| p.almost_eq(&close, PROFILE_EPS)) {
        points.pop();
    }
    points.push(close);

    Ok(Profile::new(points))
}

/// Generate the handrest solid: extrude the profile by `depth`, then apply
/// the placement transform if one is configured.
pub fn generate_handrest(
    kernel: &mut dyn Kernel,
    params: &HandrestParams,
) -> Result<PartOutput, GenError> {
    let profile = handrest_profile(params)?;

    let face = kernel.make_profile_face(&profile)?;
    let block = kernel.linear_extrude(face, params.depth)?;

    let handle = match params.placement {
        Some(placement) => {
            let rotated = kernel.rotate_x(&block, placement.rotate_x_deg)?;
            kernel.translate(&rotated, placement.translate)?
        }
        None => block,
    };

    Ok(PartOutput {
        handle,
        diagnostics: Diagnostics::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_scenario_two_segments() {
        // width=100, height=30, curveSegments=2: t = 0, 0.5, 1.
        let samples = sample_curve(&SlopeCurve::QuarterCosine, 2, 100.0, 30.0);
        assert_eq!(samples.len(), 3);

        assert_eq!(samples[0], Point2::new(0.0, 30.0));
        assert!((samples[1].x - 50.0).abs() < 1e-12);
        assert!((samples[1].y - 30.0 * std::f64::consts::FRAC_PI_4.cos()).abs() < 1e-12);
        assert!((samples[1].y - 21.213).abs() < 0.001);
        assert!((samples[2].x - 100.0).abs() < 1e-12);
        assert!(samples[2].y.abs() < 1e-12);
    }

    #[test]
    fn curve_endpoints_for_any_segment_count() {
        for segments in [1, 2, 3, 10, 30, 100] {
            let samples = sample_curve(&SlopeCurve::QuarterCosine, segments, 100.0, 30.0);
            let first = samples.first().unwrap();
            let last = samples.last().unwrap();
            assert!(first.almost_eq(&Point2::new(0.0, 30.0), 1e-9));
            assert!(last.almost_eq(&Point2::new(100.0, 0.0), 1e-9));
        }
    }

    #[test]
    fn doubling_segments_keeps_endpoints() {
        for n in [1, 5, 15, 30] {
            let coarse = sample_curve(&SlopeCurve::QuarterCosine, n, 100.0, 30.0);
            let fine = sample_curve(&SlopeCurve::QuarterCosine, 2 * n, 100.0, 30.0);
            assert_eq!(coarse.first(), fine.first());
            assert!(coarse
                .last()
                .unwrap()
                .almost_eq(fine.last().unwrap(), 1e-9));
        }
    }

    #[test]
    fn profile_shape_and_closing_point() {
        let params = HandrestParams::default();
        let profile = handrest_profile(&params).unwrap();

        // (0,0), segments+1 samples, explicit close — minus the one
        // near-duplicate the close collapses into.
        assert_eq!(profile.len() as u32, params.curve_segments + 2);

        assert_eq!(profile.points[0], Point2::new(0.0, 0.0));
        assert_eq!(profile.points[1], Point2::new(0.0, 30.0));
        let last = profile.points.last().unwrap();
        assert_eq!(*last, Point2::new(100.0, 0.0));
    }

    #[test]
    fn profile_top_descends_monotonically() {
        let profile = handrest_profile(&HandrestParams::default()).unwrap();
        // Skip the origin; the curve run must descend.
        for pair in profile.points[1..].windows(2) {
            assert!(pair[1].y < pair[0].y);
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn profile_is_idempotent() {
        let params = HandrestParams::default();
        assert_eq!(
            handrest_profile(&params).unwrap(),
            handrest_profile(&params).unwrap()
        );
    }

    #[test]
    fn eased_curve_produces_valid_profile() {
        let params = HandrestParams {
            curve: SlopeCurve::Eased { strength: 2.0 },
            ..HandrestParams::default()
        };
        let profile = handrest_profile(&params).unwrap();
        assert_eq!(profile.points[1], Point2::new(0.0, 30.0));
        assert!(profile
            .points
            .last()
            .unwrap()
            .almost_eq(&Point2::new(100.0, 0.0), 1e-9));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let base = HandrestParams::default();

        let bad_width = HandrestParams {
            width: 0.0,
            ..base.clone()
        };
        let bad_height = HandrestParams {
            height: -1.0,
            ..base.clone()
        };
        let flat = HandrestParams {
            height: 0.0,
            ..base.clone()
        };
        let bad_depth = HandrestParams {
            depth: 0.0,
            ..base.clone()
        };
        let no_segments = HandrestParams {
            curve_segments: 0,
            ..base
        };

        for params in [bad_width, bad_height, flat, bad_depth, no_segments] {
            assert!(matches!(
                handrest_profile(&params),
                Err(GenError::InvalidParameter { .. })
            ));
        }
    }
}
