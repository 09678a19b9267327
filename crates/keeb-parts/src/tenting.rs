//! Tenting column: a trapezoidal riser that props one half of a split
//! keyboard at the tenting angle, plus a thin strip visualizing the tilted
//! keyboard plane.

use serde::{Deserialize, Serialize};

use keeb_kernel::Kernel;
use keeb_types::{Point2, Profile};

use crate::types::{Diagnostics, GenError, PartOutput};

/// Parameters for the tenting column. The depth and strip fields carry the
/// print-setup constants; defaults reproduce the original deployment values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentingColumnParams {
    pub keyboard_length: f64,
    /// Tenting angle in degrees, strictly inside (−90, 90).
    pub tenting_angle_deg: f64,
    /// Column position relative to the keyboard end. Typically negative,
    /// placing the column under the far end of the keyboard.
    pub column_offset: f64,
    pub column_width: f64,
    /// Vertical clearance between the keyboard plane and the column top.
    pub column_y_offset: f64,
    /// Extrusion height of the wedge.
    pub column_depth: f64,
    /// Cross-section width of the keyboard reference strip.
    pub strip_width: f64,
    /// Extrusion thickness of the reference strip.
    pub strip_thickness: f64,
}

impl Default for TentingColumnParams {
    fn default() -> Self {
        Self {
            keyboard_length: 50.0,
            tenting_angle_deg: 15.0,
            column_offset: -10.0,
            column_width: 10.0,
            column_y_offset: -1.0,
            column_depth: 10.0,
            strip_width: 0.5,
            strip_thickness: 1.0,
        }
    }
}

/// The column's computed 2D geometry, before any kernel call.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProfile {
    /// Keyboard plane reference line, pivot to tilted end.
    pub slope_line: [Point2; 2],
    pub x_start: f64,
    pub x_end: f64,
    pub top_start_y: f64,
    pub top_end_y: f64,
    /// Trapezoid outline: top-left, top-right, bottom-right, bottom-left.
    /// The bottom edge rests on the build plate at y=0.
    pub outline: Profile,
}

fn validate(params: &TentingColumnParams) -> Result<(), GenError> {
    let reject = |reason: String| Err(GenError::InvalidParameter { reason });

    if !(params.keyboard_length > 0.0) {
        return reject(format!(
            "keyboard_length must be positive, got {}",
            params.keyboard_length
        ));
    }
    if !(params.column_width > 0.0) {
        return reject(format!(
            "column_width must be positive, got {}",
            params.column_width
        ));
    }
    if !(params.column_depth > 0.0) {
        return reject(format!(
            "column_depth must be positive, got {}",
            params.column_depth
        ));
    }
    if !(params.strip_width > 0.0) || !(params.strip_thickness > 0.0) {
        return reject("strip_width and strip_thickness must be positive".to_string());
    }
    if !(params.tenting_angle_deg > -90.0 && params.tenting_angle_deg < 90.0) {
        return reject(format!(
            "tenting_angle_deg must lie strictly inside (-90, 90), got {}",
            params.tenting_angle_deg
        ));
    }
    Ok(())
}

/// Compute the slope line and trapezoid outline for a tenting column.
/// Pure math; fails fast on parameters that would produce a degenerate or
/// inverted profile.
pub fn column_profile(params: &TentingColumnParams) -> Result<ColumnProfile, GenError> {
    validate(params)?;

    let slope = params.tenting_angle_deg.to_radians().tan();
    let keyboard_end_y = slope * params.keyboard_length;

    let x_start = params.keyboard_length + params.column_offset;
    let x_end = x_start + params.column_width;

    // Top edge: the keyboard plane evaluated at the column's extent,
    // shifted by the clearance offset. Bottom edge: flat on the plate.
    let top_start_y = slope * x_start + params.column_y_offset;
    let top_end_y = slope * x_end + params.column_y_offset;

    if top_start_y <= 0.0 || top_end_y <= 0.0 {
        return Err(GenError::InvalidParameter {
            reason: format!(
                "column top edge must sit above the build plate (top heights {:.3}, {:.3})",
                top_start_y, top_end_y
            ),
        });
    }

    let outline = Profile::new(vec![
        Point2::new(x_start, top_start_y),
        Point2::new(x_end, top_end_y),
        Point2::new(x_end, 0.0),
        Point2::new(x_start, 0.0),
    ]);

    Ok(ColumnProfile {
        slope_line: [
            Point2::new(0.0, 0.0),
            Point2::new(params.keyboard_length, keyboard_end_y),
        ],
        x_start,
        x_end,
        top_start_y,
        top_end_y,
        outline,
    })
}

/// Generate the tenting column solid: the reference strip swept along the
/// keyboard plane, unioned with the extruded support wedge.
pub fn generate_tenting_column(
    kernel: &mut dyn Kernel,
    params: &TentingColumnParams,
) -> Result<PartOutput, GenError> {
    let geom = column_profile(params)?;

    let mut diagnostics = Diagnostics::default();
    if params.tenting_angle_deg == 0.0 {
        diagnostics
            .warnings
            .push("tenting angle is 0; column degenerates to a flat rectangle".to_string());
    }

    let strip = kernel.path_extrude(&geom.slope_line, params.strip_width, params.strip_thickness)?;
    let face = kernel.make_profile_face(&geom.outline)?;
    let wedge = kernel.linear_extrude(face, params.column_depth)?;
    let handle = kernel.boolean_union(&strip, &wedge)?;

    Ok(PartOutput {
        handle,
        diagnostics,
    })
}
