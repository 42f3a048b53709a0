// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Attach, detach and erase. These modes edit existing objects instead
//! of creating new ones. A pick on a spring or damper resolves to its
//! end triad closest to the hit, since that is what actually gets
//! attached or detached.

use super::InteractionController;
use crate::context::EditorContext;
use crate::pick_filter::{classify, classify_cycled, TypeFilter};
use crate::scene::{KindClass, PickCandidate, PickEvent, SceneHandle, SceneObjectKind};
use crate::session::{AttachState, OnePickState, Session};

/// Objects that can be attached to (and detached from) a part or
/// reference plane.
const ATTACHABLE: TypeFilter<'static> = TypeFilter::only(&[
    KindClass::Triad,
    KindClass::SimpleJoint,
    KindClass::LinearJoint,
    KindClass::CamJoint,
    KindClass::SpringDamper,
    KindClass::Load,
]);

const ATTACH_TARGETS: TypeFilter<'static> =
    TypeFilter::only(&[KindClass::Part, KindClass::RefPlane]);

impl InteractionController {
    // ---- Attach --------------------------------------------------------

    pub(super) fn pick_attach(
        &mut self,
        env: &mut dyn EditorContext,
        state: AttachState,
        event: &PickEvent,
    ) {
        let object_phase = matches!(state, AttachState::PickObject | AttachState::ObjectPicked);
        let filter = if object_phase {
            ATTACHABLE
        } else {
            ATTACH_TARGETS
        };
        let state = match classify_cycled(&event.candidates, filter, &mut self.cycle) {
            None => {
                if object_phase {
                    env.unselect_all();
                    self.slots = Default::default();
                    AttachState::PickObject
                } else {
                    AttachState::PickTarget
                }
            }
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                if object_phase {
                    match resolve_attachable(env, hit.object, candidate) {
                        Some(object) => {
                            env.select(object, 0);
                            self.slots.get_mut(0).object = Some(object);
                            AttachState::ObjectPicked
                        }
                        None => AttachState::PickObject,
                    }
                } else {
                    env.select(hit.object, 1);
                    self.slots.get_mut(1).object = Some(hit.object);
                    AttachState::TargetPicked
                }
            }
        };
        self.set_session(Session::Attach { state });
    }

    pub(super) fn done_attach(&mut self, env: &mut dyn EditorContext, state: AttachState) {
        match state {
            AttachState::PickObject => self.cancel(env),
            AttachState::ObjectPicked => self.set_session(Session::Attach {
                state: AttachState::PickTarget,
            }),
            AttachState::PickTarget => {
                // Confirming without a target starts the mode over.
                env.unselect_all();
                self.slots = Default::default();
                self.set_session(Session::Attach {
                    state: AttachState::PickObject,
                });
            }
            AttachState::TargetPicked => {
                if let (Some(object), Some(target)) =
                    (self.slots.get(0).object, self.slots.get(1).object)
                {
                    match env.attach(object, target) {
                        Ok(()) => log::info!("attached {:?} to {:?}", object, target),
                        Err(err) => log::warn!("attach rejected by the model: {:?}", err),
                    }
                }
                env.unselect_all();
                self.slots = Default::default();
                self.cycle.reset();
                self.set_session(Session::Attach {
                    state: AttachState::PickObject,
                });
            }
        }
    }

    // ---- Detach --------------------------------------------------------

    pub(super) fn pick_detach(
        &mut self,
        env: &mut dyn EditorContext,
        _state: OnePickState,
        event: &PickEvent,
    ) {
        let selected = env.selection();
        let state = match classify(&event.candidates, &selected, ATTACHABLE) {
            None => {
                env.unselect_all();
                self.slots = Default::default();
                OnePickState::Idle
            }
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                match resolve_attachable(env, hit.object, candidate) {
                    Some(object) => {
                        env.unselect_all();
                        env.select(object, 0);
                        self.slots.get_mut(0).object = Some(object);
                        OnePickState::Picked
                    }
                    None => OnePickState::Idle,
                }
            }
        };
        self.set_session(Session::Detach { state });
    }

    pub(super) fn done_detach(&mut self, env: &mut dyn EditorContext, state: OnePickState) {
        match state {
            OnePickState::Idle => self.cancel(env),
            OnePickState::Picked => {
                if let Some(object) = self.slots.get(0).object {
                    match env.detach(object) {
                        Ok(()) => log::info!("detached {:?}", object),
                        Err(err) => log::warn!("detach rejected by the model: {:?}", err),
                    }
                }
                env.unselect_all();
                self.slots = Default::default();
                self.set_session(Session::Detach {
                    state: OnePickState::Idle,
                });
            }
        }
    }

    // ---- Erase ---------------------------------------------------------

    pub(super) fn pick_erase(
        &mut self,
        env: &mut dyn EditorContext,
        state: OnePickState,
        event: &PickEvent,
    ) {
        let selected = env.selection();
        match classify(&event.candidates, &selected, TypeFilter::ANY) {
            // Empty-space clicks keep the doomed selection; erase only
            // happens on an explicit confirmation.
            None => self.set_session(Session::Erase { state }),
            Some(hit) => {
                if !event.ctrl && !selected.contains(&hit.object) {
                    env.unselect_all();
                }
                env.add_select(hit.object);
                self.set_session(Session::Erase {
                    state: OnePickState::Picked,
                });
            }
        }
    }

    pub(super) fn done_erase(&mut self, env: &mut dyn EditorContext, state: OnePickState) {
        match state {
            OnePickState::Idle => self.cancel(env),
            OnePickState::Picked => {
                let objects = env.selection();
                if !objects.is_empty() {
                    log::info!("erasing {} object(s)", objects.len());
                    env.erase(&objects);
                }
                env.unselect_all();
                self.set_session(Session::Erase {
                    state: OnePickState::Idle,
                });
            }
        }
    }
}

/// Springs and dampers are attached via their end triads; resolve a
/// pick on one to the end closest to the hit. Everything else passes
/// through.
fn resolve_attachable(
    env: &dyn EditorContext,
    object: SceneHandle,
    candidate: &PickCandidate,
) -> Option<SceneHandle> {
    match candidate.kind {
        SceneObjectKind::Spring | SceneObjectKind::Damper => {
            env.closest_triad(object, candidate.world_point)
        }
        _ => Some(object),
    }
}

// End of File
