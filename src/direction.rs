// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Guessing a construction direction from pick geometry.
//!
//! Oriented objects (loads, revolute joints, gliders) need a direction
//! in addition to a position. Rather than asking for one up front, the
//! editor infers a starting direction from whatever was picked and
//! lets the user refine it afterwards.

use ultraviolet::Vec3;

use crate::scene::PickCandidate;

/// An inferred direction, in world coordinates, normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferredDirection {
    pub direction: Vec3,
    /// True when the direction came from CAD metadata (a modelled
    /// axis) rather than a guess off the hit geometry. Defined
    /// directions are not subject to flip toggling and are passed
    /// through to factories that accept an explicit axis.
    pub defined: bool,
}

/// Infers a direction from `candidate`, strongest hint first:
///
/// 1. A valid CAD axis is authoritative.
/// 2. An edge hit yields the edge tangent, oriented from the second
///    vertex towards the first.
/// 3. Otherwise the negated surface normal is used, with its sign
///    alternating on successive calls via `toggle` so that repeated
///    clicks flip an unwanted guess.
pub fn infer(candidate: &PickCandidate, toggle: &mut bool) -> InferredDirection {
    if let Some(cad) = &candidate.cad {
        if cad.axis_valid {
            return InferredDirection {
                direction: candidate.frame.transform_vector(cad.axis).normalized(),
                defined: true,
            };
        }
    }

    if let Some(edge) = &candidate.edge {
        let tangent = edge.p0 - edge.p1;
        let direction = if tangent.mag_sq() <= f32::EPSILON {
            Vec3::unit_x()
        } else {
            candidate.frame.transform_vector(tangent).normalized()
        };
        return InferredDirection {
            direction,
            defined: false,
        };
    }

    let mut direction = -candidate.normal;
    if *toggle {
        direction = -direction;
    }
    *toggle = !*toggle;
    InferredDirection {
        direction: direction.normalized(),
        defined: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::scene::{CadEntityInfo, EdgeHit, SceneHandle, SceneObjectKind};
    use ultraviolet::Mat3;

    fn candidate() -> PickCandidate {
        PickCandidate {
            object: SceneHandle(1),
            kind: SceneObjectKind::Part,
            world_point: Vec3::zero(),
            normal: Vec3::unit_z(),
            frame: Frame::identity(),
            edge: None,
            cad: None,
        }
    }

    #[test]
    fn surface_normal_is_negated_and_toggles() {
        let c = candidate();
        let mut toggle = false;
        assert_eq!(infer(&c, &mut toggle).direction, -Vec3::unit_z());
        assert_eq!(infer(&c, &mut toggle).direction, Vec3::unit_z());
        assert_eq!(infer(&c, &mut toggle).direction, -Vec3::unit_z());
    }

    #[test]
    fn edge_tangent_runs_second_vertex_to_first() {
        let mut c = candidate();
        c.edge = Some(EdgeHit {
            p0: Vec3::new(3.0, 0.0, 0.0),
            p1: Vec3::new(1.0, 0.0, 0.0),
        });
        let mut toggle = false;
        let inferred = infer(&c, &mut toggle);
        assert_eq!(inferred.direction, Vec3::unit_x());
        assert!(!inferred.defined);
        // Edge hits do not consume the toggle.
        assert!(!toggle);
    }

    #[test]
    fn degenerate_edge_falls_back_to_x() {
        let mut c = candidate();
        c.edge = Some(EdgeHit {
            p0: Vec3::new(1.0, 1.0, 1.0),
            p1: Vec3::new(1.0, 1.0, 1.0),
        });
        let mut toggle = false;
        assert_eq!(infer(&c, &mut toggle).direction, Vec3::unit_x());
    }

    #[test]
    fn edge_tangent_is_taken_to_world_space() {
        let mut c = candidate();
        // Frame rotates object X onto world Y.
        c.frame = Frame::new(
            Mat3::new(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ),
            Vec3::zero(),
        );
        c.edge = Some(EdgeHit {
            p0: Vec3::new(1.0, 0.0, 0.0),
            p1: Vec3::zero(),
        });
        let mut toggle = false;
        let d = infer(&c, &mut toggle).direction;
        assert!((d - Vec3::unit_y()).mag() < 1.0e-6);
    }

    #[test]
    fn cad_axis_beats_edges_and_normals() {
        let mut c = candidate();
        c.edge = Some(EdgeHit {
            p0: Vec3::unit_x(),
            p1: Vec3::zero(),
        });
        c.cad = Some(CadEntityInfo {
            on_edge: true,
            axis: Vec3::new(0.0, 2.0, 0.0),
            axis_valid: true,
            origin: Vec3::zero(),
            origin_valid: false,
        });
        let mut toggle = false;
        let inferred = infer(&c, &mut toggle);
        assert_eq!(inferred.direction, Vec3::unit_y());
        assert!(inferred.defined);
    }

    #[test]
    fn invalid_cad_axis_is_ignored() {
        let mut c = candidate();
        c.cad = Some(CadEntityInfo {
            on_edge: false,
            axis: Vec3::unit_y(),
            axis_valid: false,
            origin: Vec3::zero(),
            origin_valid: false,
        });
        let mut toggle = false;
        assert_eq!(infer(&c, &mut toggle).direction, -Vec3::unit_z());
    }
}

// End of File
