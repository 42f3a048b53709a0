// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cam joint construction. The first confirmation creates the joint
//! with its follower triad; every later confirmation adds one master
//! surface to the cam curve. Picking an existing cam joint (before any
//! surface has been added) copies its curve properties instead.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::EditorContext;
use crate::pick_filter::{classify, TypeFilter};
use crate::scene::{PickEvent, SceneHandle, SceneObjectKind};
use crate::session::{CamState, Session};

impl InteractionController {
    pub(super) fn pick_cam(
        &mut self,
        env: &mut dyn EditorContext,
        state: CamState,
        temp_joint: Option<SceneHandle>,
        allow_cam_pick: bool,
        event: &PickEvent,
    ) {
        let follower_phase = matches!(state, CamState::PickFollower | CamState::FollowerPicked);
        let selected = env.selection();
        match classify(&event.candidates, &selected, TypeFilter::ANY) {
            None => {
                if follower_phase {
                    self.restart_cam(env);
                } else {
                    self.set_session(Session::CamJoint {
                        state: CamState::PickMaster,
                        temp_joint,
                        allow_cam_pick,
                    });
                }
            }
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                env.unselect_all();
                env.select(hit.object, 0);
                if !follower_phase
                    && allow_cam_pick
                    && candidate.kind == SceneObjectKind::CamJoint
                {
                    // Donor cam picked: its curve properties will be
                    // copied on the next confirmation.
                    self.points.reset();
                    env.hide_direction();
                    env.hide_snap_assist();
                    self.set_session(Session::CamJoint {
                        state: CamState::CamPicked,
                        temp_joint,
                        allow_cam_pick,
                    });
                } else {
                    self.record_point(env, 0, candidate);
                    self.show_first_direction(env);
                    let state = if follower_phase {
                        CamState::FollowerPicked
                    } else {
                        CamState::MasterPicked
                    };
                    self.set_session(Session::CamJoint {
                        state,
                        temp_joint,
                        allow_cam_pick,
                    });
                }
            }
        }
    }

    pub(super) fn done_cam(
        &mut self,
        env: &mut dyn EditorContext,
        state: CamState,
        temp_joint: Option<SceneHandle>,
        allow_cam_pick: bool,
    ) {
        match state {
            CamState::PickFollower if !self.position_edited => self.cancel(env),
            CamState::PickFollower | CamState::FollowerPicked => {
                match self.cam_create_joint(env) {
                    Some(cam) => {
                        env.unselect_all();
                        env.hide_snap_assist();
                        self.set_session(Session::CamJoint {
                            state: CamState::PickMaster,
                            temp_joint: Some(cam),
                            allow_cam_pick: true,
                        });
                    }
                    None => self.cancel(env),
                }
            }
            CamState::PickMaster => {
                if self.position_edited {
                    // A typed position still adds a master surface.
                    self.cam_add_master(env, temp_joint, allow_cam_pick);
                } else {
                    log::debug!("cam joint finished");
                    self.restart_cam(env);
                }
            }
            CamState::MasterPicked => self.cam_add_master(env, temp_joint, allow_cam_pick),
            CamState::CamPicked => {
                if let Some(cam) = temp_joint {
                    let donor = env
                        .selection()
                        .first()
                        .copied()
                        .filter(|h| env.kind_of(*h) == SceneObjectKind::CamJoint);
                    if let Some(donor) = donor {
                        if let Err(err) = env.adopt_cam_curve(cam, donor) {
                            log::warn!("could not copy cam curve properties: {:?}", err);
                        }
                    }
                }
                self.restart_cam(env);
            }
        }
    }

    /// Resolves the follower pick to a triad (reusing or creating one
    /// on a picked part) and creates the cam joint around it.
    fn cam_create_joint(&mut self, env: &mut dyn EditorContext) -> Option<SceneHandle> {
        let at = self.points.first();
        let picked = env.selection().first().copied();
        let follower = resolve_to_triad(env, picked, at, false)?;
        match env.create_cam_joint(follower) {
            Ok(cam) => Some(cam),
            Err(err) => {
                log::warn!("cam joint rejected by the model: {:?}", err);
                None
            }
        }
    }

    /// Adds one master surface to the cam curve, creating a support
    /// triad if the pick did not land on one.
    fn cam_add_master(
        &mut self,
        env: &mut dyn EditorContext,
        temp_joint: Option<SceneHandle>,
        _allow_cam_pick: bool,
    ) {
        let at = self.points.first();
        let picked = env.selection().first().copied();
        if let Some(cam) = temp_joint {
            match resolve_to_triad(env, picked, at, true) {
                Some(master) => {
                    if let Err(err) = env.add_cam_master(cam, master) {
                        log::warn!("cam master rejected by the model: {:?}", err);
                    }
                }
                None => log::warn!("no master triad at the picked point"),
            }
        }
        env.unselect_all();
        env.hide_snap_assist();
        // Adding a real surface rules out copying from a donor cam.
        self.set_session(Session::CamJoint {
            state: CamState::PickMaster,
            temp_joint,
            allow_cam_pick: false,
        });
    }

    fn restart_cam(&mut self, env: &mut dyn EditorContext) {
        env.unselect_all();
        env.hide_snap_assist();
        self.points.reset();
        self.slots = Default::default();
        self.reseed_point(0, Vec3::zero());
        self.show_first_direction(env);
        self.set_session(Session::CamJoint {
            state: CamState::PickFollower,
            temp_joint: None,
            allow_cam_pick: true,
        });
    }
}

/// Turns whatever was picked into a triad at `at`: triads pass
/// through, parts reuse or grow a triad at the point, anything else
/// gets a fresh triad (pinned with a sticker when it will carry a cam
/// master surface).
fn resolve_to_triad(
    env: &mut dyn EditorContext,
    picked: Option<SceneHandle>,
    at: Vec3,
    pin_with_sticker: bool,
) -> Option<SceneHandle> {
    let created = match picked {
        Some(h) if env.kind_of(h) == SceneObjectKind::Triad => return Some(h),
        Some(h) if env.kind_of(h) == SceneObjectKind::Part => {
            if let Some(existing) = env.triad_at_point(h, at) {
                return Some(existing);
            }
            env.create_triad(at, Some(h))
        }
        _ => env.create_triad(at, None),
    };
    match created {
        Ok(triad) => {
            if pin_with_sticker {
                if let Err(err) = env.create_sticker(at, picked) {
                    log::warn!("support sticker rejected by the model: {:?}", err);
                }
            }
            Some(triad)
        }
        Err(err) => {
            log::warn!("triad rejected by the model: {:?}", err);
            None
        }
    }
}

// End of File
