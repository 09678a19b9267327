//! MockKernel — deterministic test double implementing Kernel.
//!
//! Records every operation as a MockSolid tree with predictable handle
//! allocation, so generator tests can assert the exact profiles, extrusion
//! heights, and composition order without real geometry.

use std::collections::HashMap;

use keeb_types::{Point2, Polyline, Profile};

use crate::traits::Kernel;
use crate::types::{KernelError, KernelId, KernelSolidHandle};

/// The operation tree recorded by the mock. Profiles are stored exactly as
/// the caller passed them, winding and duplicates included.
#[derive(Debug, Clone, PartialEq)]
pub enum MockSolid {
    Extrusion {
        profile: Profile,
        height: f64,
    },
    Strip {
        path: Polyline,
        width: f64,
        thickness: f64,
    },
    Union {
        a: Box<MockSolid>,
        b: Box<MockSolid>,
    },
    RotatedX {
        solid: Box<MockSolid>,
        degrees: f64,
    },
    Translated {
        solid: Box<MockSolid>,
        offset: [f64; 3],
    },
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    next_id: u64,
    solids: HashMap<u64, MockSolid>,
    /// Faces created by make_profile_face, awaiting linear_extrude.
    standalone_faces: HashMap<u64, Profile>,
}

impl MockKernel {
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

    fn store(&mut self, solid: MockSolid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &KernelSolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::EntityNotFound {
                id: KernelId(handle.id()),
            })
    }

    /// Introspect a recorded solid.
    pub fn solid(&self, handle: &KernelSolidHandle) -> Option<&MockSolid> {
        self.solids.get(&handle.id())
    }

    /// Introspect a pending face.
    pub fn face(&self, id: KernelId) -> Option<&Profile> {
        self.standalone_faces.get(&id.0)
    }

    /// Number of solids recorded so far.
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    /// Number of faces awaiting extrusion.
    pub fn pending_face_count(&self) -> usize {
        self.standalone_faces.len()
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn make_profile_face(&mut self, profile: &Profile) -> Result<KernelId, KernelError> {
        if profile.len() < 3 {
            return Err(KernelError::FaceCreationFailed {
                reason: format!("profile has {} points, need at least 3", profile.len()),
            });
        }
        let face_id = self.alloc_id();
        self.standalone_faces.insert(face_id.0, profile.clone());
        Ok(face_id)
    }

    fn linear_extrude(
        &mut self,
        face: KernelId,
        height: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let profile = self
            .standalone_faces
            .remove(&face.0)
            .ok_or(KernelError::EntityNotFound { id: face })?;
        if !(height > 0.0) {
            return Err(KernelError::Other {
                message: format!("extrude height must be positive, got {}", height),
            });
        }
        Ok(self.store(MockSolid::Extrusion { profile, height }))
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
        Ok(self.store(MockSolid::Strip {
            path: path.to_vec(),
            width,
            thickness,
        }))
    }

    fn boolean_union(
        &mut self,
        a: &KernelSolidHandle,
        b: &KernelSolidHandle,
    ) -> Result<KernelSolidHandle, KernelError> {
        let solid_a = self.get(a)?.clone();
        let solid_b = self.get(b)?.clone();
        Ok(self.store(MockSolid::Union {
            a: Box::new(solid_a),
            b: Box::new(solid_b),
        }))
    }

    fn rotate_x(
        &mut self,
        solid: &KernelSolidHandle,
        degrees: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        let inner = self.get(solid)?.clone();
        Ok(self.store(MockSolid::RotatedX {
            solid: Box::new(inner),
            degrees,
        }))
    }

    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        let inner = self.get(solid)?.clone();
        Ok(self.store(MockSolid::Translated {
            solid: Box::new(inner),
            offset,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Profile {
        Profile::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn deterministic_handles() {
        let mut k1 = MockKernel::new();
        let mut k2 = MockKernel::new();

        let f1 = k1.make_profile_face(&triangle()).unwrap();
        let f2 = k2.make_profile_face(&triangle()).unwrap();
        assert_eq!(f1, f2);

        let h1 = k1.linear_extrude(f1, 2.0).unwrap();
        let h2 = k2.linear_extrude(f2, 2.0).unwrap();
        assert_eq!(h1.id(), h2.id());
    }

    #[test]
    fn extrusion_records_profile_verbatim() {
        let mut kernel = MockKernel::new();
        let face = kernel.make_profile_face(&triangle()).unwrap();
        let handle = kernel.linear_extrude(face, 10.0).unwrap();

        match kernel.solid(&handle) {
            Some(MockSolid::Extrusion { profile, height }) => {
                assert_eq!(profile, &triangle());
                assert_eq!(*height, 10.0);
            }
            other => panic!("expected extrusion, got {:?}", other),
        }
    }

    #[test]
    fn extrude_consumes_the_face() {
        let mut kernel = MockKernel::new();
        let face = kernel.make_profile_face(&triangle()).unwrap();
        kernel.linear_extrude(face, 1.0).unwrap();
        assert!(kernel.face(face).is_none());
        assert!(matches!(
            kernel.linear_extrude(face, 1.0),
            Err(KernelError::EntityNotFound { .. })
        ));
    }

    #[test]
    fn union_records_both_operands_and_keeps_inputs() {
        let mut kernel = MockKernel::new();
        let fa = kernel.make_profile_face(&triangle()).unwrap();
        let a = kernel.linear_extrude(fa, 1.0).unwrap();
        let b = kernel
            .path_extrude(&[Point2::new(0.0, 0.0), Point2::new(5.0, 0.0)], 0.5, 1.0)
            .unwrap();

        let merged = kernel.boolean_union(&a, &b).unwrap();
        match kernel.solid(&merged) {
            Some(MockSolid::Union { a: left, b: right }) => {
                assert!(matches!(**left, MockSolid::Extrusion { .. }));
                assert!(matches!(**right, MockSolid::Strip { .. }));
            }
            other => panic!("expected union, got {:?}", other),
        }
        // Inputs are not consumed by the union.
        assert!(kernel.solid(&a).is_some());
        assert!(kernel.solid(&b).is_some());
    }

    #[test]
    fn transforms_nest() {
        let mut kernel = MockKernel::new();
        let fa = kernel.make_profile_face(&triangle()).unwrap();
        let block = kernel.linear_extrude(fa, 80.0).unwrap();
        let rotated = kernel.rotate_x(&block, 90.0).unwrap();
        let placed = kernel.translate(&rotated, [0.0, 0.0, 0.0]).unwrap();

        match kernel.solid(&placed) {
            Some(MockSolid::Translated { solid, offset }) => {
                assert_eq!(*offset, [0.0, 0.0, 0.0]);
                match &**solid {
                    MockSolid::RotatedX { degrees, .. } => assert_eq!(*degrees, 90.0),
                    other => panic!("expected rotation under the translation, got {:?}", other),
                }
            }
            other => panic!("expected translated solid, got {:?}", other),
        }
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let mut kernel = MockKernel::new();
        let two_points = Profile::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert!(matches!(
            kernel.make_profile_face(&two_points),
            Err(KernelError::FaceCreationFailed { .. })
        ));
        assert!(matches!(
            kernel.path_extrude(&[Point2::new(0.0, 0.0)], 0.5, 1.0),
            Err(KernelError::DegeneratePath { .. })
        ));
    }
}
