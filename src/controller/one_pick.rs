// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-click construction: triads, loads, grounded point joints and
//! stickers. One pick places the object, Done creates it, and the mode
//! restarts so several objects can be placed in a row.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::{EditorContext, LoadKind, PointJointKind};
use crate::creator::{self, Construction};
use crate::pick_filter::{classify, TypeFilter};
use crate::scene::{PickEvent, SceneObjectKind};
use crate::session::{OnePickKind, OnePickState, Session};

impl InteractionController {
    pub(super) fn pick_one_pick(
        &mut self,
        env: &mut dyn EditorContext,
        kind: OnePickKind,
        state: OnePickState,
        event: &PickEvent,
    ) {
        let selected = env.selection();
        match classify(&event.candidates, &selected, TypeFilter::ANY) {
            None => {
                if state == OnePickState::Picked {
                    self.restart_one_pick(env, kind);
                } else {
                    self.set_session(Session::OnePick {
                        kind,
                        state: OnePickState::Idle,
                    });
                }
            }
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                env.unselect_all();
                env.select(hit.object, 0);
                self.record_point(env, 0, candidate);
                // Loads dropped on a triad act at the triad itself.
                if matches!(kind, OnePickKind::Force | OnePickKind::Torque)
                    && candidate.kind == SceneObjectKind::Triad
                {
                    let at = env.position_of(hit.object);
                    self.points.set(0, at, candidate.frame);
                }
                if kind.oriented() {
                    self.show_first_direction(env);
                }
                self.set_session(Session::OnePick {
                    kind,
                    state: OnePickState::Picked,
                });
            }
        }
    }

    pub(super) fn done_one_pick(
        &mut self,
        env: &mut dyn EditorContext,
        kind: OnePickKind,
        state: OnePickState,
    ) {
        // Done with nothing picked and nothing typed leaves the mode.
        if state == OnePickState::Idle && !self.position_edited {
            self.cancel(env);
            return;
        }

        let owner = match state {
            OnePickState::Picked => self.slots.get(0).object,
            OnePickState::Idle => None,
        };
        let point = self.points.first();
        let direction = self.slots.get(0).direction;
        let construction = match kind {
            OnePickKind::Triad => Construction::Triad { point, owner },
            OnePickKind::Force => Construction::Load {
                kind: LoadKind::Force,
                point,
                direction,
                owner,
            },
            OnePickKind::Torque => Construction::Load {
                kind: LoadKind::Torque,
                point,
                direction,
                owner,
            },
            OnePickKind::RevJoint => Construction::PointJoint {
                kind: PointJointKind::Revolute,
                point,
                direction,
                owner,
            },
            OnePickKind::BallJoint => Construction::PointJoint {
                kind: PointJointKind::Ball,
                point,
                direction,
                owner,
            },
            OnePickKind::RigidJoint => Construction::PointJoint {
                kind: PointJointKind::Rigid,
                point,
                direction,
                owner,
            },
            OnePickKind::Sticker => Construction::Sticker { point, owner },
        };
        creator::create(construction, env);
        self.restart_one_pick(env, kind);
    }

    /// Back to a fresh first state so the next object can be placed.
    fn restart_one_pick(&mut self, env: &mut dyn EditorContext, kind: OnePickKind) {
        env.unselect_all();
        env.hide_snap_assist();
        self.reseed_point(0, Vec3::zero());
        if kind.oriented() {
            self.show_first_direction(env);
        }
        self.set_session(Session::OnePick {
            kind,
            state: OnePickState::Idle,
        });
    }
}

// End of File
