// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Point-to-point construction: springs, dampers and the joints whose
//! geometry is two picked points (free, cylindric, prismatic). Repeated
//! clicks in the same spot cycle through the objects under the cursor.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::{EditorContext, GliderKind};
use crate::creator::{self, Construction};
use crate::pick_filter::{classify_cycled, TypeFilter};
use crate::scene::PickEvent;
use crate::session::{Session, TwoPickKind, TwoPickState};

/// Seed position of the first construction point, so that a default
/// object created without any picks has nonzero extent.
pub(super) fn first_seed_x(kind: TwoPickKind) -> f32 {
    match kind {
        TwoPickKind::FreeJoint => 0.0,
        _ => -0.2,
    }
}

/// Offset from the first point used to seed the second.
fn second_seed_dx(kind: TwoPickKind) -> f32 {
    match kind {
        TwoPickKind::FreeJoint => 0.0,
        _ => 0.4,
    }
}

impl InteractionController {
    pub(super) fn pick_two_pick(
        &mut self,
        env: &mut dyn EditorContext,
        kind: TwoPickKind,
        state: TwoPickState,
        event: &PickEvent,
    ) {
        let first_phase = matches!(state, TwoPickState::FirstIdle | TwoPickState::FirstPicked);
        match classify_cycled(&event.candidates, TypeFilter::ANY, &mut self.cycle) {
            None => {
                if first_phase {
                    self.restart_two_pick(env, kind);
                } else {
                    self.advance_to_second(env, kind);
                }
            }
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                if first_phase {
                    env.select(hit.object, 0);
                    self.record_point(env, 0, candidate);
                    self.set_session(Session::TwoPick {
                        kind,
                        state: TwoPickState::FirstPicked,
                    });
                } else {
                    env.select(hit.object, 1);
                    self.record_point(env, 1, candidate);
                    self.set_session(Session::TwoPick {
                        kind,
                        state: TwoPickState::SecondPicked,
                    });
                }
            }
        }
    }

    pub(super) fn done_two_pick(
        &mut self,
        env: &mut dyn EditorContext,
        kind: TwoPickKind,
        state: TwoPickState,
    ) {
        match state {
            TwoPickState::FirstIdle => {
                if self.position_edited {
                    self.advance_to_second(env, kind);
                } else {
                    self.cancel(env);
                }
            }
            TwoPickState::FirstPicked => self.advance_to_second(env, kind),
            TwoPickState::SecondIdle | TwoPickState::SecondPicked => {
                self.commit_two_pick(env, kind);
                self.restart_two_pick(env, kind);
            }
        }
    }

    fn advance_to_second(&mut self, env: &mut dyn EditorContext, kind: TwoPickKind) {
        env.hide_snap_assist();
        let seed = self.points.first() + Vec3::new(second_seed_dx(kind), 0.0, 0.0);
        self.reseed_point(1, seed);
        self.set_session(Session::TwoPick {
            kind,
            state: TwoPickState::SecondIdle,
        });
    }

    fn restart_two_pick(&mut self, env: &mut dyn EditorContext, kind: TwoPickKind) {
        env.unselect_all();
        env.hide_snap_assist();
        self.points.reset();
        self.slots = Default::default();
        self.reseed_point(0, Vec3::new(first_seed_x(kind), 0.0, 0.0));
        self.set_session(Session::TwoPick {
            kind,
            state: TwoPickState::FirstIdle,
        });
    }

    fn commit_two_pick(&mut self, env: &mut dyn EditorContext, kind: TwoPickKind) {
        let from = self.points.first();
        let to = self.points.second();
        let owner_a = self.slots.get(0).object;
        let owner_b = self.slots.get(1).object;
        let first = *self.slots.get(0);
        let construction = match kind {
            TwoPickKind::Spring => Construction::Spring {
                from,
                to,
                owner_a,
                owner_b,
            },
            TwoPickKind::Damper => Construction::Damper {
                from,
                to,
                owner_a,
                owner_b,
            },
            TwoPickKind::FreeJoint => Construction::FreeJoint {
                from,
                to,
                direction: first.direction_defined.then(|| first.direction),
                owner_a,
                owner_b,
            },
            TwoPickKind::CylJoint => Construction::GliderJoint {
                kind: GliderKind::Cylindric,
                from,
                to,
                direction: first.direction,
                owner_a,
                owner_b,
            },
            TwoPickKind::PrismJoint => Construction::GliderJoint {
                kind: GliderKind::Prismatic,
                from,
                to,
                direction: first.direction,
                owner_a,
                owner_b,
            },
        };
        creator::create(construction, env);
    }
}

// End of File
