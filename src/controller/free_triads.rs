// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Free joint between existing objects. The first pick names the
//! independent (master) side - ideally a triad or reference plane -
//! and the second names the dependent triad. Either side may be left
//! unpicked, in which case the model creates what is missing at the
//! construction point.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::EditorContext;
use crate::creator::{self, Construction};
use crate::pick_filter::{classify_cycled, TypeFilter};
use crate::scene::{PickEvent, SceneObjectKind};
use crate::session::{FreeTriadsState, Session};

fn master_phase(state: FreeTriadsState) -> bool {
    matches!(
        state,
        FreeTriadsState::PickMaster
            | FreeTriadsState::MasterTriad
            | FreeTriadsState::MasterRefPlane
            | FreeTriadsState::MasterOther
    )
}

impl InteractionController {
    pub(super) fn pick_free_triads(
        &mut self,
        env: &mut dyn EditorContext,
        state: FreeTriadsState,
        event: &PickEvent,
    ) {
        match classify_cycled(&event.candidates, TypeFilter::ANY, &mut self.cycle) {
            None => {
                if master_phase(state) {
                    self.restart_free_triads(env);
                } else {
                    self.free_triads_to_slave(env);
                }
            }
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                if master_phase(state) {
                    env.select(hit.object, 0);
                    self.record_point(env, 0, candidate);
                    let state = match candidate.kind {
                        SceneObjectKind::Triad => FreeTriadsState::MasterTriad,
                        SceneObjectKind::RefPlane => FreeTriadsState::MasterRefPlane,
                        _ => FreeTriadsState::MasterOther,
                    };
                    self.set_session(Session::FreeJointBetweenTriads { state });
                } else {
                    env.select(hit.object, 1);
                    self.record_point(env, 1, candidate);
                    let state = if candidate.kind != SceneObjectKind::Triad {
                        FreeTriadsState::SlaveNotTriad
                    } else if env.joint_where_slave(hit.object).is_some() {
                        FreeTriadsState::SlaveDependent
                    } else if env.is_attached_to_ground(hit.object) {
                        FreeTriadsState::SlaveGrounded
                    } else {
                        FreeTriadsState::SlaveTriad
                    };
                    self.set_session(Session::FreeJointBetweenTriads { state });
                }
            }
        }
    }

    pub(super) fn done_free_triads(
        &mut self,
        env: &mut dyn EditorContext,
        state: FreeTriadsState,
    ) {
        match state {
            FreeTriadsState::PickMaster => {
                if self.position_edited {
                    self.free_triads_to_slave(env);
                } else {
                    self.cancel(env);
                }
            }
            FreeTriadsState::MasterTriad | FreeTriadsState::MasterRefPlane => {
                self.free_triads_to_slave(env);
            }
            FreeTriadsState::MasterOther
            | FreeTriadsState::PickSlave
            | FreeTriadsState::SlaveTriad => {
                let slave = match state {
                    FreeTriadsState::SlaveTriad => self.slots.get(1).object,
                    _ => None,
                };
                creator::create(
                    Construction::FreeJointBetween {
                        master: self.slots.get(0).object,
                        slave,
                        at: self.points.first(),
                    },
                    env,
                );
                self.restart_free_triads(env);
            }
            // Invalid dependent picks hold until a better pick comes.
            FreeTriadsState::SlaveDependent
            | FreeTriadsState::SlaveNotTriad
            | FreeTriadsState::SlaveGrounded => (),
        }
    }

    fn free_triads_to_slave(&mut self, env: &mut dyn EditorContext) {
        env.hide_snap_assist();
        let seed = self.points.first();
        self.reseed_point(1, seed);
        self.set_session(Session::FreeJointBetweenTriads {
            state: FreeTriadsState::PickSlave,
        });
    }

    fn restart_free_triads(&mut self, env: &mut dyn EditorContext) {
        env.unselect_all();
        env.hide_snap_assist();
        self.points.reset();
        self.slots = Default::default();
        self.reseed_point(0, Vec3::zero());
        self.set_session(Session::FreeJointBetweenTriads {
            state: FreeTriadsState::PickMaster,
        });
    }
}

// End of File
