// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Smart move: pick up a group of connected objects and move it within
//! whatever freedom its joints and stickers leave. The net freedom is
//! recomputed and previewed after every selection change.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::EditorContext;
use crate::dof::{Dof, DofKind};
use crate::pick_filter::{classify_cycled, TypeFilter};
use crate::scene::{KindClass, PickEvent};
use crate::session::{Session, SmartMoveState};

/// Kinds that make no sense to grab: they either follow the objects
/// they are mounted on or have no position of their own.
const UNMOVABLE: TypeFilter<'static> = TypeFilter::except(&[
    KindClass::RefPlane,
    KindClass::Tire,
    KindClass::SpringDamper,
    KindClass::HigherPair,
    KindClass::Sensor,
    KindClass::Load,
    KindClass::Sticker,
]);

impl InteractionController {
    pub(super) fn pick_smart_move(
        &mut self,
        env: &mut dyn EditorContext,
        state: SmartMoveState,
        dof: Dof,
        event: &PickEvent,
    ) {
        match state {
            SmartMoveState::Idle | SmartMoveState::Selected => {
                if let Some(hit) =
                    classify_cycled(&event.candidates, UNMOVABLE, &mut self.cycle)
                {
                    let candidate = &event.candidates[hit.index];
                    let selected = env.selection();
                    if !event.ctrl && !selected.contains(&hit.object) {
                        env.unselect_all();
                    }
                    env.add_select(hit.object);
                    self.record_point(env, 0, candidate);
                }
                // An empty-space click keeps the selection; only a
                // pick on another object replaces it.
                let dof = self.refresh_move_dof(env);
                let state = if env.selection().is_empty() {
                    SmartMoveState::Idle
                } else {
                    SmartMoveState::Selected
                };
                self.set_session(Session::SmartMove { state, dof });
            }
            SmartMoveState::PickTarget | SmartMoveState::TargetPicked => {
                match classify_cycled(&event.candidates, TypeFilter::ANY, &mut self.cycle) {
                    Some(hit) => {
                        let candidate = &event.candidates[hit.index];
                        if state == SmartMoveState::TargetPicked {
                            // Replace the previous target pick.
                            env.unselect_last();
                        }
                        env.add_select(hit.object);
                        self.record_point(env, 1, candidate);
                        self.set_session(Session::SmartMove {
                            state: SmartMoveState::TargetPicked,
                            dof,
                        });
                    }
                    None => {
                        if state == SmartMoveState::TargetPicked {
                            env.unselect_last();
                        }
                        self.points.remove(1);
                        self.set_session(Session::SmartMove {
                            state: SmartMoveState::PickTarget,
                            dof,
                        });
                    }
                }
            }
        }
    }

    pub(super) fn done_smart_move(
        &mut self,
        env: &mut dyn EditorContext,
        state: SmartMoveState,
        dof: Dof,
    ) {
        match state {
            SmartMoveState::Idle => self.cancel(env),
            SmartMoveState::Selected => {
                env.hide_snap_assist();
                self.set_session(Session::SmartMove {
                    state: SmartMoveState::PickTarget,
                    dof,
                });
            }
            SmartMoveState::PickTarget | SmartMoveState::TargetPicked => {
                if state == SmartMoveState::TargetPicked {
                    // The target pick is not part of the moved group.
                    env.unselect_last();
                }
                let objects = env.selection();
                if !objects.is_empty() {
                    env.smart_move(&objects, self.points.first(), self.points.second(), &dof);
                }
                env.unselect_all();
                env.hide_dof_preview();
                env.hide_snap_assist();
                self.points.reset();
                self.slots = Default::default();
                self.set_session(Session::SmartMove {
                    state: SmartMoveState::Idle,
                    dof: Dof::default(),
                });
            }
        }
    }

    /// Recomputes the net freedom of the current selection and updates
    /// the preview. The compounded axis is anchored at the grab point
    /// for kinds that have no axis of their own.
    fn refresh_move_dof(&mut self, env: &mut dyn EditorContext) -> Dof {
        let selection = env.selection();
        if selection.is_empty() {
            env.hide_dof_preview();
            return Dof::default();
        }

        let mut dof = Dof::default();
        for handle in &selection {
            for anchor in env.anchor_dofs(*handle) {
                dof.compound(&anchor, self.tolerances.parallel);
            }
        }
        if matches!(dof.kind, DofKind::Rigid | DofKind::Free) {
            dof.direction = Vec3::unit_x();
        }
        if matches!(dof.kind, DofKind::Rigid | DofKind::Free | DofKind::Prism) {
            dof.center = self.points.first();
        }
        env.show_dof_preview(dof.kind, dof.center, dof.direction);
        dof
    }
}

// End of File
