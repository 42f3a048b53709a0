// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::Vec3;

use crate::context::{EditorContext, GliderKind, HigherPairKind, LoadKind, PointJointKind};
use crate::scene::SceneHandle;

/// A fully specified construction: the points, directions and objects
/// a mode accumulated, ready to be handed to one model factory. Built
/// by the mode's commit step and executed by [`create`].
#[derive(Clone, Debug)]
pub enum Construction {
    Triad {
        point: Vec3,
        owner: Option<SceneHandle>,
    },
    Load {
        kind: LoadKind,
        point: Vec3,
        direction: Vec3,
        owner: Option<SceneHandle>,
    },
    PointJoint {
        kind: PointJointKind,
        point: Vec3,
        direction: Vec3,
        owner: Option<SceneHandle>,
    },
    Sticker {
        point: Vec3,
        owner: Option<SceneHandle>,
    },
    Spring {
        from: Vec3,
        to: Vec3,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    },
    Damper {
        from: Vec3,
        to: Vec3,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    },
    FreeJoint {
        from: Vec3,
        to: Vec3,
        direction: Option<Vec3>,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    },
    GliderJoint {
        kind: GliderKind,
        from: Vec3,
        to: Vec3,
        direction: Vec3,
        owner_a: Option<SceneHandle>,
        owner_b: Option<SceneHandle>,
    },
    FreeJointBetween {
        master: Option<SceneHandle>,
        slave: Option<SceneHandle>,
        at: Vec3,
    },
    GliderJointBetween {
        kind: GliderKind,
        first: Option<SceneHandle>,
        second: Option<SceneHandle>,
        direction: Vec3,
        slave: Option<SceneHandle>,
    },
    HigherPair {
        kind: HigherPairKind,
        input: SceneHandle,
        output: SceneHandle,
    },
    Sensor {
        first: SceneHandle,
        second: Option<SceneHandle>,
    },
    Tire {
        joint: SceneHandle,
    },
}

/// Executes one construction against the model and clears the
/// selection, successful or not. Returns the created object, or `None`
/// when the model rejected it (the rejection is logged, not surfaced;
/// the mode restarts either way).
pub fn create(construction: Construction, env: &mut dyn EditorContext) -> Option<SceneHandle> {
    let result = match construction {
        Construction::Triad { point, owner } => env.create_triad(point, owner),
        Construction::Load {
            kind,
            point,
            direction,
            owner,
        } => env.create_load(kind, point, direction, owner),
        Construction::PointJoint {
            kind,
            point,
            direction,
            owner,
        } => env.create_point_joint(kind, point, direction, owner),
        Construction::Sticker { point, owner } => env.create_sticker(point, owner),
        Construction::Spring {
            from,
            to,
            owner_a,
            owner_b,
        } => env.create_spring(from, to, owner_a, owner_b),
        Construction::Damper {
            from,
            to,
            owner_a,
            owner_b,
        } => env.create_damper(from, to, owner_a, owner_b),
        Construction::FreeJoint {
            from,
            to,
            direction,
            owner_a,
            owner_b,
        } => env.create_free_joint(from, to, direction, owner_a, owner_b),
        Construction::GliderJoint {
            kind,
            from,
            to,
            direction,
            owner_a,
            owner_b,
        } => env.create_glider_joint(kind, from, to, direction, owner_a, owner_b),
        Construction::FreeJointBetween { master, slave, at } => {
            env.create_free_joint_between(master, slave, at)
        }
        Construction::GliderJointBetween {
            kind,
            first,
            second,
            direction,
            slave,
        } => env.create_glider_joint_between(kind, first, second, direction, slave),
        Construction::HigherPair {
            kind,
            input,
            output,
        } => env.create_higher_pair(kind, input, output),
        Construction::Sensor { first, second } => env.create_sensor(first, second),
        Construction::Tire { joint } => env.create_tire(joint),
    };

    env.unselect_all();

    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            log::warn!("construction rejected by the model: {:?}", err);
            None
        }
    }
}

// End of File
