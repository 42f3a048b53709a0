// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Glider joints (cylindric or prismatic) spanned between two existing
//! triads, with an optional third pick naming the dependent triad. A
//! dependent triad coinciding with the glider line is rejected; the
//! model would not be able to orient it.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::{EditorContext, GliderKind};
use crate::creator::{self, Construction};
use crate::pick_filter::{classify_cycled, TypeFilter};
use crate::scene::{KindClass, PickEvent, SceneHandle};
use crate::session::{GliderTriadsState, Session};

const TRIADS: TypeFilter<'static> = TypeFilter::only(&[KindClass::Triad]);

#[derive(Clone, Copy, Eq, PartialEq)]
enum Phase {
    First,
    Second,
    Slave,
}

fn phase(state: GliderTriadsState) -> Phase {
    use GliderTriadsState::*;
    match state {
        PickFirst | FirstTriad | FirstDependent => Phase::First,
        PickSecond | SecondTriad | SecondDependent => Phase::Second,
        PickSlave | SlaveTriad | SlaveDependent | SlaveCollinear => Phase::Slave,
    }
}

impl InteractionController {
    pub(super) fn pick_glider_triads(
        &mut self,
        env: &mut dyn EditorContext,
        kind: GliderKind,
        state: GliderTriadsState,
        event: &PickEvent,
    ) {
        let set = |this: &mut Self, state| {
            this.set_session(Session::GliderBetweenTriads { kind, state });
        };
        match classify_cycled(&event.candidates, TRIADS, &mut self.cycle) {
            None => match phase(state) {
                Phase::First => self.restart_glider_triads(env, kind),
                Phase::Second => self.glider_to_second(env, kind),
                Phase::Slave => self.glider_to_slave(env, kind),
            },
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                let dependent = env.joint_where_slave(hit.object).is_some();
                match phase(state) {
                    Phase::First => {
                        env.select(hit.object, 0);
                        self.record_point(env, 0, candidate);
                        set(
                            self,
                            if dependent {
                                GliderTriadsState::FirstDependent
                            } else {
                                GliderTriadsState::FirstTriad
                            },
                        );
                    }
                    Phase::Second => {
                        env.select(hit.object, 1);
                        self.record_point(env, 1, candidate);
                        set(
                            self,
                            if dependent {
                                GliderTriadsState::SecondDependent
                            } else {
                                GliderTriadsState::SecondTriad
                            },
                        );
                    }
                    Phase::Slave => {
                        env.select(hit.object, 2);
                        self.record_point(env, 2, candidate);
                        let state = if dependent {
                            GliderTriadsState::SlaveDependent
                        } else if self.on_glider_line(env, hit.object) {
                            GliderTriadsState::SlaveCollinear
                        } else {
                            GliderTriadsState::SlaveTriad
                        };
                        set(self, state);
                    }
                }
            }
        }
    }

    pub(super) fn done_glider_triads(
        &mut self,
        env: &mut dyn EditorContext,
        kind: GliderKind,
        state: GliderTriadsState,
    ) {
        match state {
            GliderTriadsState::PickFirst => {
                if self.position_edited {
                    self.glider_to_second(env, kind);
                } else {
                    self.cancel(env);
                }
            }
            GliderTriadsState::FirstTriad => self.glider_to_second(env, kind),
            // Confirming an unpicked second endpoint just waits for
            // the next confirmation, like the classic editor did.
            GliderTriadsState::PickSecond => {
                self.set_session(Session::GliderBetweenTriads {
                    kind,
                    state: GliderTriadsState::SecondTriad,
                });
            }
            GliderTriadsState::SecondTriad => self.glider_to_slave(env, kind),
            GliderTriadsState::PickSlave | GliderTriadsState::SlaveTriad => {
                let slave = match state {
                    GliderTriadsState::SlaveTriad => self.slots.get(2).object,
                    _ => None,
                };
                creator::create(
                    Construction::GliderJointBetween {
                        kind,
                        first: self.slots.get(0).object,
                        second: self.slots.get(1).object,
                        direction: self.slots.get(0).direction,
                        slave,
                    },
                    env,
                );
                self.restart_glider_triads(env, kind);
            }
            GliderTriadsState::FirstDependent
            | GliderTriadsState::SecondDependent
            | GliderTriadsState::SlaveDependent
            | GliderTriadsState::SlaveCollinear => (),
        }
    }

    /// Whether `triad` lies on the line spanned by the two picked
    /// master triads, within parallelism tolerance.
    fn on_glider_line(&self, env: &dyn EditorContext, triad: SceneHandle) -> bool {
        let (first, second) = match (self.slots.get(0).object, self.slots.get(1).object) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        let a = env.position_of(first);
        let b = env.position_of(second);
        let c = env.position_of(triad);
        let line = b - a;
        let offset = c - a;
        line.cross(offset).mag_sq() <= self.tolerances.parallel * line.mag_sq() * offset.mag_sq()
    }

    fn glider_to_second(&mut self, env: &mut dyn EditorContext, kind: GliderKind) {
        env.hide_snap_assist();
        let seed = self.points.first();
        self.reseed_point(1, seed);
        self.set_session(Session::GliderBetweenTriads {
            kind,
            state: GliderTriadsState::PickSecond,
        });
    }

    fn glider_to_slave(&mut self, env: &mut dyn EditorContext, kind: GliderKind) {
        env.hide_snap_assist();
        let seed = self.points.second();
        self.reseed_point(2, seed);
        self.set_session(Session::GliderBetweenTriads {
            kind,
            state: GliderTriadsState::PickSlave,
        });
    }

    fn restart_glider_triads(&mut self, env: &mut dyn EditorContext, kind: GliderKind) {
        env.unselect_all();
        env.hide_snap_assist();
        self.points.reset();
        self.slots = Default::default();
        self.reseed_point(0, Vec3::zero());
        self.set_session(Session::GliderBetweenTriads {
            kind,
            state: GliderTriadsState::PickFirst,
        });
    }
}

// End of File
