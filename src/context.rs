// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::Vec3;

use crate::dof::{Dof, DofKind};
use crate::scene::{PickCandidate, SceneHandle, SceneObjectKind, SnapAssist};

/// Which load a one-click construction mode places.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadKind {
    Force,
    Torque,
}

/// Which point joint a one-click construction mode places.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointJointKind {
    Ball,
    Rigid,
    Revolute,
}

/// Which glider (line) joint a two-click mode builds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GliderKind {
    Cylindric,
    Prismatic,
}

/// Which transmission a master/slave pair mode builds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HigherPairKind {
    Gear,
    RackPinion,
}

#[derive(Debug)]
pub enum FactoryError {
    /// The target object cannot take part in this construction.
    IncompatibleTarget,
    /// The object is already constrained in a way the construction
    /// would conflict with (e.g. a triad that is already a slave).
    AlreadyConstrained,
    /// The model rejected the operation for some other reason.
    Rejected,
}

/// A proxy trait that lets the interaction layer drive selection,
/// on-screen feedback and model edits without knowing the model's
/// implementation. Construction modes only touch the model through
/// this trait.
///
/// Feedback methods default to no-ops so that headless embedders (and
/// tests) implement only what they observe.
pub trait EditorContext {
    // ---- Selection -----------------------------------------------------

    /// Makes `handle` the selection's entry at `slot` (0-based),
    /// replacing that slot and everything after it.
    fn select(&mut self, handle: SceneHandle, slot: usize);

    /// Appends `handle` to the selection without touching earlier
    /// entries.
    fn add_select(&mut self, handle: SceneHandle);

    fn unselect_all(&mut self);

    fn unselect_last(&mut self);

    /// The current selection, in selection order.
    fn selection(&self) -> Vec<SceneHandle>;

    // ---- On-screen feedback --------------------------------------------

    /// Shows (or moves) the direction arrow used while placing
    /// oriented objects.
    fn show_direction(&mut self, _origin: Vec3, _direction: Vec3) {}

    fn hide_direction(&mut self) {}

    /// Shows the point-refinement overlay for the latest pick.
    fn show_snap_assist(&mut self, _assist: &SnapAssist) {}

    fn hide_snap_assist(&mut self) {}

    /// Visualizes the net freedom a smart-move would respect.
    fn show_dof_preview(&mut self, _kind: DofKind, _center: Vec3, _direction: Vec3) {}

    fn hide_dof_preview(&mut self) {}

    // ---- Model queries -------------------------------------------------

    fn kind_of(&self, handle: SceneHandle) -> SceneObjectKind;

    /// World position of an object's reference point.
    fn position_of(&self, handle: SceneHandle) -> Vec3;

    /// The joint in which `triad` is the dependent (slave) triad, if
    /// any.
    fn joint_where_slave(&self, triad: SceneHandle) -> Option<SceneHandle>;

    fn is_attached_to_ground(&self, handle: SceneHandle) -> bool;

    /// The freedoms left to `handle` by the joints and stickers
    /// anchoring it to objects outside the current selection.
    fn anchor_dofs(&self, handle: SceneHandle) -> Vec<Dof>;

    /// Snaps a hit to nearby characteristic geometry (vertices, CAD
    /// origins). Defaults to the raw hit point.
    fn snap_point(&self, candidate: &PickCandidate) -> Vec3 {
        candidate.world_point
    }

    /// An existing triad of `owner` at `point`, if there is one within
    /// position tolerance.
    fn triad_at_point(&self, owner: SceneHandle, point: Vec3) -> Option<SceneHandle>;

    /// The end triad of a spring or damper closest to `point`. Used
    /// when a pick on the spring itself has to resolve to one of its
    /// attachment points.
    fn closest_triad(&self, spring_or_damper: SceneHandle, point: Vec3) -> Option<SceneHandle>;

    // ---- Object factories ----------------------------------------------

    /// Creates a triad at `point`, owned by `owner` when given (else
    /// attached to whatever the model resolves at that position).
    fn create_triad(
        &mut self,
        point: Vec3,
        owner: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    fn create_load(
        &mut self,
        kind: LoadKind,
        point: Vec3,
        direction: Vec3,
        owner: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a ball, rigid or revolute joint grounded at `point`.
    fn create_point_joint(
        &mut self,
        kind: PointJointKind,
        point: Vec3,
        direction: Vec3,
        owner: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    fn create_sticker(
        &mut self,
        point: Vec3,
        owner: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a free joint spanning `from` -> `to`. `direction` is
    /// given when the first pick carried a modelled axis.
    fn create_free_joint(
        &mut self,
        from: Vec3,
        to: Vec3,
        direction: Option<Vec3>,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a cylindric or prismatic joint along `from` -> `to`.
    fn create_glider_joint(
        &mut self,
        kind: GliderKind,
        from: Vec3,
        to: Vec3,
        direction: Vec3,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a free joint connecting two existing objects at `at`.
    /// An unpicked side is `None`; the model creates what is missing
    /// at the construction point.
    fn create_free_joint_between(
        &mut self,
        master: Option<SceneHandle>,
        slave: Option<SceneHandle>,
        at: Vec3,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a glider joint whose line runs between two existing
    /// triads. Unpicked triads are `None` and are created at the
    /// confirmed construction points.
    fn create_glider_joint_between(
        &mut self,
        kind: GliderKind,
        first: Option<SceneHandle>,
        second: Option<SceneHandle>,
        direction: Vec3,
        slave: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a cam joint with `follower` as its dependent triad. The
    /// master curve is added afterwards, one surface at a time.
    fn create_cam_joint(&mut self, follower: SceneHandle) -> Result<SceneHandle, FactoryError>;

    /// Adds `master` to a cam joint's master curve.
    fn add_cam_master(
        &mut self,
        cam: SceneHandle,
        master: SceneHandle,
    ) -> Result<(), FactoryError>;

    /// Copies curve properties (arc radius, thickness, width,
    /// friction) from an existing cam joint onto a new one.
    fn adopt_cam_curve(&mut self, cam: SceneHandle, donor: SceneHandle)
        -> Result<(), FactoryError>;

    fn create_spring(
        &mut self,
        from: Vec3,
        to: Vec3,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    fn create_damper(
        &mut self,
        from: Vec3,
        to: Vec3,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a gear or rack-and-pinion between an input and an
    /// output joint.
    fn create_higher_pair(
        &mut self,
        kind: HigherPairKind,
        input: SceneHandle,
        output: SceneHandle,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a sensor on `first`, or a relative sensor between two
    /// objects when `second` is given.
    fn create_sensor(
        &mut self,
        first: SceneHandle,
        second: Option<SceneHandle>,
    ) -> Result<SceneHandle, FactoryError>;

    /// Creates a tire on a revolute joint.
    fn create_tire(&mut self, joint: SceneHandle) -> Result<SceneHandle, FactoryError>;

    // ---- Model edits ---------------------------------------------------

    /// Moves `objects` so that the point `from` lands on `to`, within
    /// the freedom described by `dof`.
    fn smart_move(&mut self, objects: &[SceneHandle], from: Vec3, to: Vec3, dof: &Dof);

    /// Attaches `object` to a part or reference plane.
    fn attach(&mut self, object: SceneHandle, target: SceneHandle) -> Result<(), FactoryError>;

    /// Detaches `object` from whatever it is attached to.
    fn detach(&mut self, object: SceneHandle) -> Result<(), FactoryError>;

    /// Erases `objects` from the model.
    fn erase(&mut self, objects: &[SceneHandle]);
}

// End of File
