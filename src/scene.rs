// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::Vec3;

use crate::frame::Frame;

/// Opaque identifier of an object in the scene. Handed out by the
/// embedding editor; the interaction layer never dereferences it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SceneHandle(pub u64);

/// What a scene object is, as far as the interaction layer cares.
/// Construction modes filter and branch on this instead of downcasting
/// scene nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SceneObjectKind {
    Part,
    RefPlane,
    Triad,
    RevJoint,
    BallJoint,
    RigidJoint,
    FreeJoint,
    CylJoint,
    PrismJoint,
    CamJoint,
    Spring,
    Damper,
    Gear,
    RackPinion,
    Sensor,
    Tire,
    Sticker,
    Load,
}

/// Groupings of [`SceneObjectKind`] that pick filters are written in
/// terms of. A class either names a single kind or a family of kinds
/// (e.g. every point-to-point joint).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KindClass {
    Part,
    RefPlane,
    Triad,
    /// Ball, rigid, revolute and free joints between two triads.
    SimpleJoint,
    /// Cylindric and prismatic (glider) joints.
    LinearJoint,
    RevJoint,
    PrismJoint,
    CamJoint,
    SpringDamper,
    /// Gears and rack-and-pinion transmissions.
    HigherPair,
    Sensor,
    Tire,
    Sticker,
    Load,
}

impl SceneObjectKind {
    /// Whether this kind belongs to the given class.
    pub fn is(self, class: KindClass) -> bool {
        use SceneObjectKind::*;
        match class {
            KindClass::Part => self == Part,
            KindClass::RefPlane => self == RefPlane,
            KindClass::Triad => self == Triad,
            KindClass::SimpleJoint => {
                matches!(self, RevJoint | BallJoint | RigidJoint | FreeJoint)
            }
            KindClass::LinearJoint => matches!(self, CylJoint | PrismJoint),
            KindClass::RevJoint => self == RevJoint,
            KindClass::PrismJoint => self == PrismJoint,
            KindClass::CamJoint => self == CamJoint,
            KindClass::SpringDamper => matches!(self, Spring | Damper),
            KindClass::HigherPair => matches!(self, Gear | RackPinion),
            KindClass::Sensor => self == Sensor,
            KindClass::Tire => self == Tire,
            KindClass::Sticker => self == Sticker,
            KindClass::Load => self == Load,
        }
    }
}

/// An edge segment under the pick ray, in object coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeHit {
    pub p0: Vec3,
    pub p1: Vec3,
}

/// Geometry metadata attached to a hit on imported CAD shape data.
/// Vectors and points are in the coordinates of the candidate's frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CadEntityInfo {
    /// Hit landed on an edge curve rather than a face.
    pub on_edge: bool,
    /// Symmetry or rotation axis of the underlying surface/curve.
    pub axis: Vec3,
    pub axis_valid: bool,
    /// Characteristic point (circle center, cylinder base, ...).
    pub origin: Vec3,
    pub origin_valid: bool,
}

/// One entry of the depth-sorted hit list produced by a pick ray,
/// nearest first. The renderer resolves each hit to its owning scene
/// object and tags it with the object's kind.
#[derive(Clone, Debug)]
pub struct PickCandidate {
    pub object: SceneHandle,
    pub kind: SceneObjectKind,
    /// Hit position in world coordinates.
    pub world_point: Vec3,
    /// World-space surface normal at the hit.
    pub normal: Vec3,
    /// Frame of the geometry that was hit.
    pub frame: Frame,
    /// Present when the pick ray grazed an edge.
    pub edge: Option<EdgeHit>,
    /// Present when the hit geometry carries CAD metadata.
    pub cad: Option<CadEntityInfo>,
}

/// Everything the point-refinement overlay needs to draw snap markers
/// for the most recent pick. World coordinates throughout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapAssist {
    /// Which construction point (0-based) the overlay refines.
    pub slot: usize,
    pub on_edge: bool,
    pub hit_point: Vec3,
    pub snap_point: Vec3,
    pub normal: Vec3,
    pub axis: Vec3,
    pub axis_valid: bool,
    pub origin: Vec3,
    pub origin_valid: bool,
}

/// A pick gesture as reported by the viewport: the hit list under the
/// cursor plus modifier state. An empty candidate list is a click on
/// empty space.
#[derive(Clone, Debug, Default)]
pub struct PickEvent {
    pub candidates: Vec<PickCandidate>,
    /// Ctrl (or platform equivalent) was held; accumulating modes add
    /// to the selection instead of replacing it.
    pub ctrl: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classes_cover_joint_families() {
        assert!(SceneObjectKind::BallJoint.is(KindClass::SimpleJoint));
        assert!(SceneObjectKind::RevJoint.is(KindClass::SimpleJoint));
        assert!(SceneObjectKind::CylJoint.is(KindClass::LinearJoint));
        assert!(!SceneObjectKind::CamJoint.is(KindClass::SimpleJoint));
        assert!(SceneObjectKind::RevJoint.is(KindClass::RevJoint));
        assert!(!SceneObjectKind::BallJoint.is(KindClass::RevJoint));
        assert!(SceneObjectKind::Damper.is(KindClass::SpringDamper));
        assert!(SceneObjectKind::RackPinion.is(KindClass::HigherPair));
    }
}

// End of File
