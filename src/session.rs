// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The construction session: which mode the editor is in and how far
//! through that mode's click sequence the user has come.
//!
//! Each mode family gets its own closed state enum, and [`Session`]
//! tags the family with the data that only exists while that family is
//! active. Illegal combinations (a cam-joint state while gluing a
//! spring, say) are unrepresentable.

use crate::context::{GliderKind, HigherPairKind};
use crate::dof::Dof;
use crate::scene::SceneHandle;

/// Every interaction mode the controller can be put in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Plain examine/selection; no construction in progress.
    Examine,
    CreateTriad,
    CreateForce,
    CreateTorque,
    CreateRevJoint,
    CreateBallJoint,
    CreateRigidJoint,
    CreateSticker,
    CreateSpring,
    CreateDamper,
    CreateFreeJoint,
    CreateCylJoint,
    CreatePrismJoint,
    CreateFreeJointBetweenTriads,
    CreateCylJointBetweenTriads,
    CreatePrismJointBetweenTriads,
    CreateCamJoint,
    CreateGear,
    CreateRackPinion,
    CreateSimpleSensor,
    CreateRelativeSensor,
    CreateTire,
    SmartMove,
    Attach,
    Detach,
    Erase,
    MeasureDistance,
    MeasureAngle,
}

/// What a single-click mode creates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OnePickKind {
    Triad,
    Force,
    Torque,
    RevJoint,
    BallJoint,
    RigidJoint,
    Sticker,
}

impl OnePickKind {
    /// Whether the created object carries a direction, in which case
    /// the direction arrow is shown while placing it.
    pub fn oriented(self) -> bool {
        matches!(self, OnePickKind::Force | OnePickKind::Torque | OnePickKind::RevJoint)
    }
}

/// What a two-click (point-to-point) mode creates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TwoPickKind {
    Spring,
    Damper,
    FreeJoint,
    CylJoint,
    PrismJoint,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MeasureKind {
    Distance,
    Angle,
}

/// Single-click sequence: pick a spot, confirm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OnePickState {
    Idle,
    Picked,
}

/// Two-click sequence: first point, confirm, second point, confirm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TwoPickState {
    FirstIdle,
    FirstPicked,
    SecondIdle,
    SecondPicked,
}

/// Free joint between existing objects: pick the independent (master)
/// side, confirm, pick the dependent (slave) side, confirm.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FreeTriadsState {
    PickMaster,
    MasterTriad,
    MasterRefPlane,
    MasterOther,
    PickSlave,
    SlaveTriad,
    /// Picked triad already depends on another joint; cannot commit.
    SlaveDependent,
    SlaveNotTriad,
    /// Picked triad is attached to ground; cannot commit.
    SlaveGrounded,
}

/// Glider joint between triads: two master triads span the line, an
/// optional third pick names the dependent triad.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GliderTriadsState {
    PickFirst,
    FirstTriad,
    /// First pick was a triad that already depends on another joint.
    FirstDependent,
    PickSecond,
    SecondTriad,
    SecondDependent,
    PickSlave,
    SlaveTriad,
    SlaveDependent,
    /// Third triad lies on the line spanned by the first two; cannot
    /// commit.
    SlaveCollinear,
}

/// Cam joint: pick the follower, confirm, then grow the master curve
/// one surface at a time. Picking an existing cam joint instead copies
/// its curve properties.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CamState {
    PickFollower,
    FollowerPicked,
    PickMaster,
    MasterPicked,
    CamPicked,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SmartMoveState {
    Idle,
    Selected,
    PickTarget,
    TargetPicked,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttachState {
    PickObject,
    ObjectPicked,
    PickTarget,
    TargetPicked,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MeasureState {
    NoPoints,
    OnePoint,
    TwoPoints,
}

/// The active mode family with its progress and per-mode data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Session {
    Examine,
    OnePick {
        kind: OnePickKind,
        state: OnePickState,
    },
    TwoPick {
        kind: TwoPickKind,
        state: TwoPickState,
    },
    FreeJointBetweenTriads {
        state: FreeTriadsState,
    },
    GliderBetweenTriads {
        kind: GliderKind,
        state: GliderTriadsState,
    },
    CamJoint {
        state: CamState,
        /// The joint being grown; lives until the sequence finishes.
        temp_joint: Option<SceneHandle>,
        /// Picking an existing cam joint copies its curve properties.
        /// Only allowed until the first master surface is added.
        allow_cam_pick: bool,
    },
    HigherPair {
        kind: HigherPairKind,
        state: TwoPickState,
    },
    SimpleSensor {
        state: OnePickState,
    },
    RelativeSensor {
        state: TwoPickState,
    },
    Tire {
        state: OnePickState,
    },
    SmartMove {
        state: SmartMoveState,
        /// Net freedom of the current selection.
        dof: Dof,
    },
    Attach {
        state: AttachState,
    },
    Detach {
        state: OnePickState,
    },
    Erase {
        state: OnePickState,
    },
    Measure {
        kind: MeasureKind,
        state: MeasureState,
    },
}

impl Default for Session {
    fn default() -> Self {
        Session::Examine
    }
}

impl Session {
    /// The fresh session a mode starts in.
    pub fn for_mode(mode: Mode) -> Session {
        use Session::*;
        match mode {
            Mode::Examine => Examine,
            Mode::CreateTriad => Session::one_pick(OnePickKind::Triad),
            Mode::CreateForce => Session::one_pick(OnePickKind::Force),
            Mode::CreateTorque => Session::one_pick(OnePickKind::Torque),
            Mode::CreateRevJoint => Session::one_pick(OnePickKind::RevJoint),
            Mode::CreateBallJoint => Session::one_pick(OnePickKind::BallJoint),
            Mode::CreateRigidJoint => Session::one_pick(OnePickKind::RigidJoint),
            Mode::CreateSticker => Session::one_pick(OnePickKind::Sticker),
            Mode::CreateSpring => Session::two_pick(TwoPickKind::Spring),
            Mode::CreateDamper => Session::two_pick(TwoPickKind::Damper),
            Mode::CreateFreeJoint => Session::two_pick(TwoPickKind::FreeJoint),
            Mode::CreateCylJoint => Session::two_pick(TwoPickKind::CylJoint),
            Mode::CreatePrismJoint => Session::two_pick(TwoPickKind::PrismJoint),
            Mode::CreateFreeJointBetweenTriads => FreeJointBetweenTriads {
                state: FreeTriadsState::PickMaster,
            },
            Mode::CreateCylJointBetweenTriads => GliderBetweenTriads {
                kind: GliderKind::Cylindric,
                state: GliderTriadsState::PickFirst,
            },
            Mode::CreatePrismJointBetweenTriads => GliderBetweenTriads {
                kind: GliderKind::Prismatic,
                state: GliderTriadsState::PickFirst,
            },
            Mode::CreateCamJoint => CamJoint {
                state: CamState::PickFollower,
                temp_joint: None,
                allow_cam_pick: true,
            },
            Mode::CreateGear => HigherPair {
                kind: HigherPairKind::Gear,
                state: TwoPickState::FirstIdle,
            },
            Mode::CreateRackPinion => HigherPair {
                kind: HigherPairKind::RackPinion,
                state: TwoPickState::FirstIdle,
            },
            Mode::CreateSimpleSensor => SimpleSensor {
                state: OnePickState::Idle,
            },
            Mode::CreateRelativeSensor => RelativeSensor {
                state: TwoPickState::FirstIdle,
            },
            Mode::CreateTire => Tire {
                state: OnePickState::Idle,
            },
            Mode::SmartMove => SmartMove {
                state: SmartMoveState::Idle,
                dof: Dof::default(),
            },
            Mode::Attach => Attach {
                state: AttachState::PickObject,
            },
            Mode::Detach => Detach {
                state: OnePickState::Idle,
            },
            Mode::Erase => Erase {
                state: OnePickState::Idle,
            },
            Mode::MeasureDistance => Measure {
                kind: MeasureKind::Distance,
                state: MeasureState::NoPoints,
            },
            Mode::MeasureAngle => Measure {
                kind: MeasureKind::Angle,
                state: MeasureState::NoPoints,
            },
        }
    }

    fn one_pick(kind: OnePickKind) -> Session {
        Session::OnePick {
            kind,
            state: OnePickState::Idle,
        }
    }

    fn two_pick(kind: TwoPickKind) -> Session {
        Session::TwoPick {
            kind,
            state: TwoPickState::FirstIdle,
        }
    }

    /// The mode this session belongs to.
    pub fn mode(&self) -> Mode {
        match *self {
            Session::Examine => Mode::Examine,
            Session::OnePick { kind, .. } => match kind {
                OnePickKind::Triad => Mode::CreateTriad,
                OnePickKind::Force => Mode::CreateForce,
                OnePickKind::Torque => Mode::CreateTorque,
                OnePickKind::RevJoint => Mode::CreateRevJoint,
                OnePickKind::BallJoint => Mode::CreateBallJoint,
                OnePickKind::RigidJoint => Mode::CreateRigidJoint,
                OnePickKind::Sticker => Mode::CreateSticker,
            },
            Session::TwoPick { kind, .. } => match kind {
                TwoPickKind::Spring => Mode::CreateSpring,
                TwoPickKind::Damper => Mode::CreateDamper,
                TwoPickKind::FreeJoint => Mode::CreateFreeJoint,
                TwoPickKind::CylJoint => Mode::CreateCylJoint,
                TwoPickKind::PrismJoint => Mode::CreatePrismJoint,
            },
            Session::FreeJointBetweenTriads { .. } => Mode::CreateFreeJointBetweenTriads,
            Session::GliderBetweenTriads { kind, .. } => match kind {
                GliderKind::Cylindric => Mode::CreateCylJointBetweenTriads,
                GliderKind::Prismatic => Mode::CreatePrismJointBetweenTriads,
            },
            Session::CamJoint { .. } => Mode::CreateCamJoint,
            Session::HigherPair { kind, .. } => match kind {
                HigherPairKind::Gear => Mode::CreateGear,
                HigherPairKind::RackPinion => Mode::CreateRackPinion,
            },
            Session::SimpleSensor { .. } => Mode::CreateSimpleSensor,
            Session::RelativeSensor { .. } => Mode::CreateRelativeSensor,
            Session::Tire { .. } => Mode::CreateTire,
            Session::SmartMove { .. } => Mode::SmartMove,
            Session::Attach { .. } => Mode::Attach,
            Session::Detach { .. } => Mode::Detach,
            Session::Erase { .. } => Mode::Erase,
            Session::Measure { kind, .. } => match kind {
                MeasureKind::Distance => Mode::MeasureDistance,
                MeasureKind::Angle => Mode::MeasureAngle,
            },
        }
    }

    /// Integer checkpoint code of the current state within the mode's
    /// click sequence. Stable across releases; used for status
    /// reporting and in tests.
    pub fn state_code(&self) -> u8 {
        match *self {
            Session::Examine => 0,
            Session::OnePick { state, .. }
            | Session::SimpleSensor { state }
            | Session::Tire { state }
            | Session::Detach { state }
            | Session::Erase { state } => state as u8,
            Session::TwoPick { state, .. }
            | Session::HigherPair { state, .. }
            | Session::RelativeSensor { state } => state as u8,
            Session::FreeJointBetweenTriads { state } => state as u8,
            Session::GliderBetweenTriads { state, .. } => state as u8,
            Session::CamJoint { state, .. } => match state {
                CamState::PickFollower => 0,
                CamState::FollowerPicked => 1,
                CamState::PickMaster => 2,
                CamState::MasterPicked => 3,
                CamState::CamPicked => 5,
            },
            Session::SmartMove { state, .. } => state as u8,
            Session::Attach { state } => state as u8,
            Session::Measure { state, .. } => state as u8,
        }
    }

    /// One-line prompt describing what the editor expects next, shown
    /// in the status bar.
    pub fn status_tip(&self) -> &'static str {
        match *self {
            Session::Examine => "",
            Session::OnePick { kind, state } => one_pick_tip(kind, state),
            Session::TwoPick { state, .. } => match state {
                TwoPickState::FirstIdle => {
                    "Pick first point, or edit it in the field view. Press Done to accept"
                }
                TwoPickState::FirstPicked => "Press Done to accept the first point",
                TwoPickState::SecondIdle => {
                    "Pick second point, or edit it in the field view. Press Done to create"
                }
                TwoPickState::SecondPicked => "Press Done to create",
            },
            Session::FreeJointBetweenTriads { state } => match state {
                FreeTriadsState::PickMaster => "Pick the independent triad or reference plane",
                FreeTriadsState::MasterTriad => "Triad picked. Press Done to accept",
                FreeTriadsState::MasterRefPlane => "Reference plane picked. Press Done to accept",
                FreeTriadsState::MasterOther => "Press Done to create the joint here",
                FreeTriadsState::PickSlave => "Pick the dependent triad, or press Done",
                FreeTriadsState::SlaveTriad => "Press Done to create the joint",
                FreeTriadsState::SlaveDependent => {
                    "That triad already depends on a joint. Pick another"
                }
                FreeTriadsState::SlaveNotTriad => "The dependent object must be a triad",
                FreeTriadsState::SlaveGrounded => {
                    "That triad is attached to ground. Pick another"
                }
            },
            Session::GliderBetweenTriads { state, .. } => match state {
                GliderTriadsState::PickFirst => "Pick the first triad on the glider line",
                GliderTriadsState::FirstTriad => "Press Done to accept",
                GliderTriadsState::FirstDependent => {
                    "That triad already depends on a joint. Pick another"
                }
                GliderTriadsState::PickSecond => "Pick the second triad on the glider line",
                GliderTriadsState::SecondTriad => "Press Done to accept",
                GliderTriadsState::SecondDependent => {
                    "That triad already depends on a joint. Pick another"
                }
                GliderTriadsState::PickSlave => {
                    "Pick the dependent triad, or press Done to create one on the line"
                }
                GliderTriadsState::SlaveTriad => "Press Done to create the joint",
                GliderTriadsState::SlaveDependent => {
                    "That triad already depends on a joint. Pick another"
                }
                GliderTriadsState::SlaveCollinear => {
                    "That triad lies on the glider line already. Pick another"
                }
            },
            Session::CamJoint { state, .. } => match state {
                CamState::PickFollower => "Pick the follower triad or a point on a part",
                CamState::FollowerPicked => "Press Done to accept the follower",
                CamState::PickMaster => {
                    "Pick a point on the cam surface, or press Done to finish"
                }
                CamState::MasterPicked => "Press Done to add the surface to the cam curve",
                CamState::CamPicked => "Press Done to copy the picked cam's curve properties",
            },
            Session::HigherPair { kind, state } => higher_pair_tip(kind, state),
            Session::SimpleSensor { state } => match state {
                OnePickState::Idle => "Pick the object to measure",
                OnePickState::Picked => "Press Done to create the sensor",
            },
            Session::RelativeSensor { state } => match state {
                TwoPickState::FirstIdle => "Pick the first triad",
                TwoPickState::FirstPicked => "Press Done to accept",
                TwoPickState::SecondIdle => "Pick the second triad",
                TwoPickState::SecondPicked => "Press Done to create the sensor",
            },
            Session::Tire { state } => match state {
                OnePickState::Idle => "Pick the revolute joint to put the tire on",
                OnePickState::Picked => "Press Done to create the tire",
            },
            Session::SmartMove { state, .. } => match state {
                SmartMoveState::Idle => "Pick the objects to move (Ctrl adds)",
                SmartMoveState::Selected => "Press Done, or pick more objects",
                SmartMoveState::PickTarget => "Pick the point to move from",
                SmartMoveState::TargetPicked => "Pick the point to move to, then press Done",
            },
            Session::Attach { state } => match state {
                AttachState::PickObject => "Pick the object to attach",
                AttachState::ObjectPicked => "Press Done to accept",
                AttachState::PickTarget => "Pick the part or reference plane to attach to",
                AttachState::TargetPicked => "Press Done to attach",
            },
            Session::Detach { state } => match state {
                OnePickState::Idle => "Pick the object to detach",
                OnePickState::Picked => "Press Done to detach",
            },
            Session::Erase { state } => match state {
                OnePickState::Idle => "Pick the objects to erase (Ctrl adds)",
                OnePickState::Picked => "Press Done to erase the selection",
            },
            Session::Measure { kind: MeasureKind::Distance, state } => match state {
                MeasureState::NoPoints => "Pick the first point to measure from",
                _ => "Pick the second point to measure to",
            },
            Session::Measure { kind: MeasureKind::Angle, state } => match state {
                MeasureState::NoPoints => "Pick the first leg of the angle",
                MeasureState::OnePoint => "Pick the second leg of the angle",
                MeasureState::TwoPoints => "Pick the vertex of the angle",
            },
        }
    }
}

fn one_pick_tip(kind: OnePickKind, state: OnePickState) -> &'static str {
    match (kind, state) {
        (OnePickKind::Triad, OnePickState::Idle) => {
            "Pick where to put the triad, or edit the position. Press Done to create"
        }
        (OnePickKind::Triad, OnePickState::Picked) => "Press Done to create the triad",
        (OnePickKind::Force, OnePickState::Idle) | (OnePickKind::Torque, OnePickState::Idle) => {
            "Pick where to put the load, or edit the position. Press Done to create"
        }
        (OnePickKind::Force, OnePickState::Picked)
        | (OnePickKind::Torque, OnePickState::Picked) => "Press Done to create the load",
        (OnePickKind::Sticker, OnePickState::Idle) => "Pick where to put the sticker",
        (OnePickKind::Sticker, OnePickState::Picked) => "Press Done to create the sticker",
        (_, OnePickState::Idle) => {
            "Pick where to put the joint, or edit the position. Press Done to create"
        }
        (_, OnePickState::Picked) => "Press Done to create the joint",
    }
}

fn higher_pair_tip(kind: HigherPairKind, state: TwoPickState) -> &'static str {
    match (kind, state) {
        (HigherPairKind::Gear, TwoPickState::FirstIdle) => "Pick the input revolute joint",
        (HigherPairKind::RackPinion, TwoPickState::FirstIdle) => {
            "Pick the input revolute joint (the pinion)"
        }
        (_, TwoPickState::FirstPicked) => "Press Done to accept",
        (HigherPairKind::Gear, TwoPickState::SecondIdle) => "Pick the output revolute joint",
        (HigherPairKind::RackPinion, TwoPickState::SecondIdle) => {
            "Pick the output prismatic joint (the rack)"
        }
        (_, TwoPickState::SecondPicked) => "Press Done to create",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_sessions_start_at_code_zero() {
        for mode in [
            Mode::CreateTriad,
            Mode::CreateSpring,
            Mode::CreateFreeJointBetweenTriads,
            Mode::CreateCylJointBetweenTriads,
            Mode::CreateCamJoint,
            Mode::CreateGear,
            Mode::SmartMove,
            Mode::Attach,
            Mode::MeasureAngle,
        ] {
            let session = Session::for_mode(mode);
            assert_eq!(session.mode(), mode);
            assert_eq!(session.state_code(), 0, "{mode:?}");
        }
    }

    #[test]
    fn cam_picked_keeps_its_historic_code() {
        let session = Session::CamJoint {
            state: CamState::CamPicked,
            temp_joint: None,
            allow_cam_pick: true,
        };
        assert_eq!(session.state_code(), 5);
    }

    #[test]
    fn every_active_state_has_a_tip() {
        let session = Session::for_mode(Mode::CreateDamper);
        assert!(!session.status_tip().is_empty());
        let session = Session::GliderBetweenTriads {
            kind: GliderKind::Prismatic,
            state: GliderTriadsState::SlaveCollinear,
        };
        assert!(!session.status_tip().is_empty());
    }
}

// End of File
