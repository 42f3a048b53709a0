// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Modes that connect existing objects without placing new geometry:
//! gears and rack-and-pinions between joints, sensors on objects or
//! between triads, and tires on revolute joints.

use super::InteractionController;
use crate::context::{EditorContext, HigherPairKind};
use crate::creator::{self, Construction};
use crate::pick_filter::{classify, TypeFilter};
use crate::scene::{KindClass, PickEvent};
use crate::session::{OnePickState, Session, TwoPickState};

const REV_JOINTS: TypeFilter<'static> = TypeFilter::only(&[KindClass::RevJoint]);
const PRISM_JOINTS: TypeFilter<'static> = TypeFilter::only(&[KindClass::PrismJoint]);
const TRIADS: TypeFilter<'static> = TypeFilter::only(&[KindClass::Triad]);
const MEASURABLE: TypeFilter<'static> = TypeFilter::only(&[
    KindClass::Triad,
    KindClass::SimpleJoint,
    KindClass::LinearJoint,
    KindClass::CamJoint,
    KindClass::SpringDamper,
]);

impl InteractionController {
    // ---- Gears and rack-and-pinions ------------------------------------

    pub(super) fn pick_higher_pair(
        &mut self,
        env: &mut dyn EditorContext,
        kind: HigherPairKind,
        state: TwoPickState,
        event: &PickEvent,
    ) {
        let first_phase = matches!(state, TwoPickState::FirstIdle | TwoPickState::FirstPicked);
        // The rack of a rack-and-pinion is a prismatic joint; every
        // other endpoint is a revolute joint.
        let filter = match (kind, first_phase) {
            (HigherPairKind::RackPinion, false) => PRISM_JOINTS,
            _ => REV_JOINTS,
        };
        let selected = env.selection();
        let state = match classify(&event.candidates, &selected, filter) {
            None => {
                if first_phase {
                    env.unselect_all();
                    self.slots = Default::default();
                    TwoPickState::FirstIdle
                } else {
                    TwoPickState::SecondIdle
                }
            }
            Some(hit) => {
                if first_phase {
                    env.select(hit.object, 0);
                    self.slots.get_mut(0).object = Some(hit.object);
                    TwoPickState::FirstPicked
                } else {
                    env.select(hit.object, 1);
                    self.slots.get_mut(1).object = Some(hit.object);
                    TwoPickState::SecondPicked
                }
            }
        };
        self.set_session(Session::HigherPair { kind, state });
    }

    pub(super) fn done_higher_pair(
        &mut self,
        env: &mut dyn EditorContext,
        kind: HigherPairKind,
        state: TwoPickState,
    ) {
        match state {
            TwoPickState::FirstIdle => self.cancel(env),
            TwoPickState::FirstPicked => self.set_session(Session::HigherPair {
                kind,
                state: TwoPickState::SecondIdle,
            }),
            TwoPickState::SecondIdle => (),
            TwoPickState::SecondPicked => {
                if let (Some(input), Some(output)) =
                    (self.slots.get(0).object, self.slots.get(1).object)
                {
                    creator::create(
                        Construction::HigherPair {
                            kind,
                            input,
                            output,
                        },
                        env,
                    );
                }
                self.restart_pair(env);
                self.set_session(Session::HigherPair {
                    kind,
                    state: TwoPickState::FirstIdle,
                });
            }
        }
    }

    // ---- Sensors -------------------------------------------------------

    pub(super) fn pick_simple_sensor(
        &mut self,
        env: &mut dyn EditorContext,
        _state: OnePickState,
        event: &PickEvent,
    ) {
        let selected = env.selection();
        let state = match classify(&event.candidates, &selected, MEASURABLE) {
            None => {
                env.unselect_all();
                self.slots = Default::default();
                OnePickState::Idle
            }
            Some(hit) => {
                env.select(hit.object, 0);
                self.slots.get_mut(0).object = Some(hit.object);
                OnePickState::Picked
            }
        };
        self.set_session(Session::SimpleSensor { state });
    }

    pub(super) fn done_simple_sensor(&mut self, env: &mut dyn EditorContext, state: OnePickState) {
        match state {
            OnePickState::Idle => self.cancel(env),
            OnePickState::Picked => {
                if let Some(first) = self.slots.get(0).object {
                    creator::create(
                        Construction::Sensor {
                            first,
                            second: None,
                        },
                        env,
                    );
                }
                self.restart_pair(env);
                self.set_session(Session::SimpleSensor {
                    state: OnePickState::Idle,
                });
            }
        }
    }

    pub(super) fn pick_relative_sensor(
        &mut self,
        env: &mut dyn EditorContext,
        state: TwoPickState,
        event: &PickEvent,
    ) {
        let first_phase = matches!(state, TwoPickState::FirstIdle | TwoPickState::FirstPicked);
        let selected = env.selection();
        let state = match classify(&event.candidates, &selected, TRIADS) {
            None => {
                if first_phase {
                    env.unselect_all();
                    self.slots = Default::default();
                    TwoPickState::FirstIdle
                } else {
                    TwoPickState::SecondIdle
                }
            }
            Some(hit) => {
                if first_phase {
                    env.select(hit.object, 0);
                    self.slots.get_mut(0).object = Some(hit.object);
                    TwoPickState::FirstPicked
                } else {
                    env.select(hit.object, 1);
                    self.slots.get_mut(1).object = Some(hit.object);
                    TwoPickState::SecondPicked
                }
            }
        };
        self.set_session(Session::RelativeSensor { state });
    }

    pub(super) fn done_relative_sensor(
        &mut self,
        env: &mut dyn EditorContext,
        state: TwoPickState,
    ) {
        match state {
            TwoPickState::FirstIdle => self.cancel(env),
            TwoPickState::FirstPicked => self.set_session(Session::RelativeSensor {
                state: TwoPickState::SecondIdle,
            }),
            TwoPickState::SecondIdle => (),
            TwoPickState::SecondPicked => {
                if let (Some(first), Some(second)) =
                    (self.slots.get(0).object, self.slots.get(1).object)
                {
                    creator::create(
                        Construction::Sensor {
                            first,
                            second: Some(second),
                        },
                        env,
                    );
                }
                self.restart_pair(env);
                self.set_session(Session::RelativeSensor {
                    state: TwoPickState::FirstIdle,
                });
            }
        }
    }

    // ---- Tires ---------------------------------------------------------

    pub(super) fn pick_tire(
        &mut self,
        env: &mut dyn EditorContext,
        _state: OnePickState,
        event: &PickEvent,
    ) {
        let selected = env.selection();
        let state = match classify(&event.candidates, &selected, REV_JOINTS) {
            None => {
                env.unselect_all();
                self.slots = Default::default();
                OnePickState::Idle
            }
            Some(hit) => {
                env.select(hit.object, 0);
                self.slots.get_mut(0).object = Some(hit.object);
                OnePickState::Picked
            }
        };
        self.set_session(Session::Tire { state });
    }

    pub(super) fn done_tire(&mut self, env: &mut dyn EditorContext, state: OnePickState) {
        match state {
            OnePickState::Idle => self.cancel(env),
            OnePickState::Picked => {
                if let Some(joint) = self.slots.get(0).object {
                    creator::create(Construction::Tire { joint }, env);
                }
                self.restart_pair(env);
                self.set_session(Session::Tire {
                    state: OnePickState::Idle,
                });
            }
        }
    }

    fn restart_pair(&mut self, env: &mut dyn EditorContext) {
        env.unselect_all();
        self.slots = Default::default();
        self.cycle.reset();
    }
}

// End of File
