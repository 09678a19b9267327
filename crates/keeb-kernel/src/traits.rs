use keeb_types::{Point2, Profile};

use crate::types::{KernelError, KernelId, KernelSolidHandle};

/// Geometry kernel seam. Provides the 2D-profile-to-3D-solid operations the
/// part generators need. Implemented by TruckKernel (real B-rep geometry)
/// and MockKernel (deterministic test double).
///
/// Solids are immutable: no operation mutates an input handle, every
/// operation yields a new one.
pub trait Kernel {
    /// Build a planar face in the z=0 plane from a closed profile.
    /// Winding is normalized to counter-clockwise so that a +z extrusion
    /// has outward-facing normals. The face is consumed by the next
    /// `linear_extrude` call.
    fn make_profile_face(&mut self, profile: &Profile) -> Result<KernelId, KernelError>;

    /// Extrude a previously created face along +z by `height`.
    fn linear_extrude(
        &mut self,
        face: KernelId,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Sweep a rectangular cross-section along an open polyline: the path
    /// is offset by `width / 2` on each side (miter joins at interior
    /// vertices) and the resulting strip extruded `thickness` along +z.
    fn path_extrude(
        &mut self,
        path: &[Point2],
        width: f64,
        thickness: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean union of two solids. Both inputs remain valid.
    fn boolean_union(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Rotate a solid about the X axis through the origin.
    fn rotate_x(
        &mut self,
        solid: &KernelSolidHandle,
        degrees: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Translate a solid by an (x, y, z) offset.
    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError>;
}
