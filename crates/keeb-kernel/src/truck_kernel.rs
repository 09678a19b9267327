//! TruckKernel — real geometry kernel wrapping truck's API.

use std::collections::HashMap;

use keeb_types::{Point2, Profile};

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Solid, Wire};
use truck_modeling::{EuclideanSpace, Point3, Rad, Vector3};

use crate::traits::Kernel;
use crate::types::{KernelError, KernelId, KernelSolidHandle};

/// Tolerance for truck's shape operations.
const SHAPEOPS_TOLERANCE: f64 = 0.05;

/// Points closer than this are treated as coincident.
const COINCIDENCE_EPS: f64 = 1e-9;

/// Real geometry kernel backed by the truck B-rep library.
pub struct TruckKernel {
    next_handle: u64,
    next_id: u64,
    solids: HashMap<u64, Solid>,
    /// Faces created by make_profile_face, awaiting linear_extrude.
    standalone_faces: HashMap<u64, Face>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_id: 1,
            solids: HashMap::new(),
            standalone_faces: HashMap::new(),
        }
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    fn store_solid(&mut self, solid: Solid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get_solid(&self, handle: &KernelSolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::EntityNotFound {
                id: KernelId(handle.id()),
            })
    }

    #[cfg(test)]
    pub(crate) fn solid_for_test(&self, handle: &KernelSolidHandle) -> &Solid {
        self.solids.get(&handle.id()).expect("solid exists")
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a planar truck face in the z=0 plane from a closed profile.
/// The profile is deduplicated and normalized to counter-clockwise winding
/// before the wire is assembled.
fn attach_profile_face(profile: &Profile) -> Result<Face, KernelError> {
    let clean = profile
        .clone()
        .dedup_consecutive(COINCIDENCE_EPS)
        .oriented_ccw();

    if clean.len() < 3 {
        return Err(KernelError::FaceCreationFailed {
            reason: format!("profile has {} distinct points, need at least 3", clean.len()),
        });
    }

    let pts_3d: Vec<Point3> = clean
        .points
        .iter()
        .map(|p| Point3::new(p.x, p.y, 0.0))
        .collect();

    // Build wire from consecutive point pairs with shared vertices.
    let n = pts_3d.len();
    let vertices: Vec<_> = pts_3d.iter().map(|&p| builder::vertex(p)).collect();
    let mut wire_edges: Vec<Edge> = Vec::new();
    for i in 0..n {
        let j = (i + 1) % n;
        let edge = Edge::new(
            &vertices[i],
            &vertices[j],
            truck_modeling::geometry::Curve::Line(truck_modeling::geometry::Line(
                pts_3d[i], pts_3d[j],
            )),
        );
        wire_edges.push(edge);
    }
    let wire = Wire::from_iter(wire_edges);

    builder::try_attach_plane(&[wire]).map_err(|e| KernelError::FaceCreationFailed {
        reason: format!("failed to attach plane: {}", e),
    })
}

/// Offset vector at each path vertex: unit segment normal at the endpoints,
/// miter-scaled averaged normal at interior joins.
fn vertex_offsets(path: &[Point2]) -> Result<Vec<(f64, f64)>, KernelError> {
    let n = path.len();
    let mut seg_normals: Vec<(f64, f64)> = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let dx = path[i + 1].x - path[i].x;
        let dy = path[i + 1].y - path[i].y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= COINCIDENCE_EPS {
            return Err(KernelError::DegeneratePath {
                reason: format!("segment {} has zero length", i),
            });
        }
        seg_normals.push((-dy / len, dx / len));
    }

    let mut offsets = Vec::with_capacity(n);
    for i in 0..n {
        let offset = if i == 0 {
            seg_normals[0]
        } else if i == n - 1 {
            seg_normals[n - 2]
        } else {
            let (ax, ay) = seg_normals[i - 1];
            let (bx, by) = seg_normals[i];
            let (mx, my) = (ax + bx, ay + by);
            let mlen = (mx * mx + my * my).sqrt();
            if mlen <= COINCIDENCE_EPS {
                return Err(KernelError::DegeneratePath {
                    reason: format!("path reverses direction at vertex {}", i),
                });
            }
            let (ux, uy) = (mx / mlen, my / mlen);
            // Miter scale restores the full half-width at the join.
            let dot = ux * ax + uy * ay;
            (ux / dot, uy / dot)
        };
        offsets.push(offset);
    }
    Ok(offsets)
}

impl Kernel for TruckKernel {
    fn make_profile_face(&mut self, profile: &Profile) -> Result<KernelId, KernelError> {
        let face = attach_profile_face(profile)?;
        let face_id = self.alloc_id();
        self.standalone_faces.insert(face_id.0, face);
        Ok(face_id)
    }

    fn linear_extrude(
        &mut self,
        face: KernelId,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let truck_face = self
            .standalone_faces
            .remove(&face.0)
            .ok_or(KernelError::EntityNotFound { id: face })?;

        if !(height > 0.0) {
            return Err(KernelError::Other {
                message: format!("extrude height must be positive, got {}", height),
            });
        }

        let solid = builder::tsweep(&truck_face, Vector3::new(0.0, 0.0, height));
        Ok(self.store_solid(solid))
    }

    fn path_extrude(
        &mut self,
        path: &[Point2],
        width: f64,
        thickness: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        if path.len() < 2 {
            return Err(KernelError::DegeneratePath {
                reason: format!("path has {} points, need at least 2", path.len()),
            });
        }
        if !(width > 0.0) || !(thickness > 0.0) {
            return Err(KernelError::Other {
                message: "strip width and thickness must be positive".to_string(),
            });
        }

        let offsets = vertex_offsets(path)?;
        let half = width / 2.0;

        // Strip outline: left side forward, right side back.
        let mut outline: Vec<Point2> = Vec::with_capacity(path.len() * 2);
        for (p, (ox, oy)) in path.iter().zip(&offsets) {
            outline.push(Point2::new(p.x + ox * half, p.y + oy * half));
        }
        for (p, (ox, oy)) in path.iter().zip(&offsets).rev() {
            outline.push(Point2::new(p.x - ox * half, p.y - oy * half));
        }

        let face = attach_profile_face(&Profile::new(outline))?;
        let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, thickness));
        Ok(self.store_solid(solid))
    }

    fn boolean_union(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();

        let result = truck_shapeops::or(&solid_a, &solid_b, SHAPEOPS_TOLERANCE).ok_or_else(
            || KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            },
        )?;
        Ok(self.store_solid(result))
    }

    fn rotate_x(
        &mut self,
        solid: &KernelSolidHandle,
        degrees: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let source = self.get_solid(solid)?;
        let rotated = builder::rotated(
            source,
            Point3::origin(),
            Vector3::unit_x(),
            Rad(degrees.to_radians()),
        );
        Ok(self.store_solid(rotated))
    }

    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        let source = self.get_solid(solid)?;
        let moved = builder::translated(source, Vector3::new(offset[0], offset[1], offset[2]));
        Ok(self.store_solid(moved))
    }
}
