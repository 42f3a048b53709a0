// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The interaction controller: one per viewport, owning the active
//! construction session and routing pick gestures, Done presses and
//! cancellations through it.

use ultraviolet::Vec3;

use crate::config::Tolerances;
use crate::context::EditorContext;
use crate::direction;
use crate::frame::Frame;
use crate::pick_filter::CycleState;
use crate::picked_points::PickedPointBuffer;
use crate::scene::{PickCandidate, PickEvent, SceneHandle, SnapAssist};
use crate::session::{Mode, Session};

mod attach;
mod cam;
mod free_triads;
mod glider_triads;
mod measure;
mod one_pick;
mod pairs;
mod smart_move;
mod two_pick;

/// Default direction for oriented objects placed without a pick.
fn default_direction() -> Vec3 {
    -Vec3::unit_z()
}

/// Per-pick bookkeeping for one construction point: the object it was
/// picked on and the direction inferred from the pick.
#[derive(Clone, Copy, Debug)]
pub struct PickSlot {
    pub object: Option<SceneHandle>,
    pub direction: Vec3,
    /// The direction came from modelled CAD metadata.
    pub direction_defined: bool,
    /// Sign bias for normal-derived directions; flips on every guess.
    toggle: bool,
}

impl Default for PickSlot {
    fn default() -> Self {
        PickSlot {
            object: None,
            direction: default_direction(),
            direction_defined: false,
            toggle: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PickSlots {
    slots: [PickSlot; crate::picked_points::MAX_PICKED_POINTS],
}

impl PickSlots {
    fn get(&self, idx: usize) -> &PickSlot {
        &self.slots[idx]
    }

    fn get_mut(&mut self, idx: usize) -> &mut PickSlot {
        &mut self.slots[idx]
    }
}

/// Drives all construction modes for one viewport. The embedding
/// editor forwards mode changes, pick gestures and the Done/Cancel
/// buttons here; the controller talks back through [`EditorContext`].
#[derive(Debug, Default)]
pub struct InteractionController {
    session: Session,
    slots: PickSlots,
    points: PickedPointBuffer,
    cycle: CycleState,
    tolerances: Tolerances,
    /// A construction point was edited numerically (or freshly
    /// seeded) since the last state change. Allows Done to commit at
    /// the pick state without any pick.
    position_edited: bool,
}

impl InteractionController {
    pub fn new() -> Self {
        InteractionController::default()
    }

    pub fn with_tolerances(tolerances: Tolerances) -> Self {
        InteractionController {
            tolerances,
            ..InteractionController::default()
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Integer checkpoint code of the current state; see
    /// [`Session::state_code`].
    pub fn state_code(&self) -> u8 {
        self.session.state_code()
    }

    pub fn status_tip(&self) -> &'static str {
        self.session.status_tip()
    }

    /// The construction points gathered so far, for display in the
    /// point refinement UI.
    pub fn points(&self) -> &PickedPointBuffer {
        &self.points
    }

    /// The slot bookkeeping for the `idx`-th construction point.
    pub fn slot(&self, idx: usize) -> Option<&PickSlot> {
        self.slots.slots.get(idx)
    }

    /// Leaves the current mode (tearing its feedback and selection
    /// down) and starts `mode` from its first state. Entering the mode
    /// that is already active restarts it.
    pub fn set_mode(&mut self, mode: Mode, env: &mut dyn EditorContext) {
        self.cancel(env);
        log::debug!("entering mode {:?}", mode);
        self.session = Session::for_mode(mode);
        self.enter(env);
        self.position_edited = true;
    }

    /// Aborts the current construction, removes its feedback and
    /// returns to examine mode. Safe to call repeatedly.
    pub fn cancel(&mut self, env: &mut dyn EditorContext) {
        if self.session != Session::Examine {
            log::debug!("cancelling mode {:?}", self.mode());
        }
        env.unselect_all();
        env.hide_direction();
        env.hide_snap_assist();
        env.hide_dof_preview();
        self.points.reset();
        self.slots = PickSlots::default();
        self.cycle.reset();
        self.session = Session::Examine;
        self.position_edited = false;
    }

    /// The Done button: advances the sequence one confirmation step,
    /// committing to the model when the sequence is complete.
    pub fn done(&mut self, env: &mut dyn EditorContext) {
        match self.session {
            Session::Examine => (),
            Session::OnePick { kind, state } => self.done_one_pick(env, kind, state),
            Session::TwoPick { kind, state } => self.done_two_pick(env, kind, state),
            Session::FreeJointBetweenTriads { state } => self.done_free_triads(env, state),
            Session::GliderBetweenTriads { kind, state } => {
                self.done_glider_triads(env, kind, state)
            }
            Session::CamJoint {
                state,
                temp_joint,
                allow_cam_pick,
            } => self.done_cam(env, state, temp_joint, allow_cam_pick),
            Session::HigherPair { kind, state } => self.done_higher_pair(env, kind, state),
            Session::SimpleSensor { state } => self.done_simple_sensor(env, state),
            Session::RelativeSensor { state } => self.done_relative_sensor(env, state),
            Session::Tire { state } => self.done_tire(env, state),
            Session::SmartMove { state, dof } => self.done_smart_move(env, state, dof),
            Session::Attach { state } => self.done_attach(env, state),
            Session::Detach { state } => self.done_detach(env, state),
            Session::Erase { state } => self.done_erase(env, state),
            Session::Measure { .. } => self.cancel(env),
        }
    }

    /// A pick gesture in the viewport. Routed to the active mode;
    /// ignored in examine mode, where the viewport handles selection
    /// itself.
    pub fn handle_pick(&mut self, env: &mut dyn EditorContext, event: &PickEvent) {
        match self.session {
            Session::Examine => (),
            Session::OnePick { kind, state } => self.pick_one_pick(env, kind, state, event),
            Session::TwoPick { kind, state } => self.pick_two_pick(env, kind, state, event),
            Session::FreeJointBetweenTriads { state } => self.pick_free_triads(env, state, event),
            Session::GliderBetweenTriads { kind, state } => {
                self.pick_glider_triads(env, kind, state, event)
            }
            Session::CamJoint {
                state,
                temp_joint,
                allow_cam_pick,
            } => self.pick_cam(env, state, temp_joint, allow_cam_pick, event),
            Session::HigherPair { kind, state } => self.pick_higher_pair(env, kind, state, event),
            Session::SimpleSensor { state } => self.pick_simple_sensor(env, state, event),
            Session::RelativeSensor { state } => self.pick_relative_sensor(env, state, event),
            Session::Tire { state } => self.pick_tire(env, state, event),
            Session::SmartMove { state, dof } => self.pick_smart_move(env, state, dof, event),
            Session::Attach { state } => self.pick_attach(env, state, event),
            Session::Detach { state } => self.pick_detach(env, state, event),
            Session::Erase { state } => self.pick_erase(env, state, event),
            Session::Measure { kind, state } => self.pick_measure(env, kind, state, event),
        }
    }

    /// Numeric edit of the `idx`-th construction point from the point
    /// refinement UI. `global` selects world or object coordinates.
    /// Returns false when the point is unset or the edit is within
    /// position tolerance of the current value.
    pub fn set_picked_point(
        &mut self,
        env: &mut dyn EditorContext,
        idx: usize,
        global: bool,
        value: Vec3,
    ) -> bool {
        if !self.points.is_set(idx) {
            return false;
        }
        let current = self.points.get(idx, global);
        if (value - current).mag() <= self.tolerances.position {
            return false;
        }
        if !self.points.update(idx, global, value) {
            return false;
        }
        self.position_edited = true;
        if idx == 0 && self.arrow_shown() {
            self.show_first_direction(env);
        }
        true
    }

    // ---- Shared internals ----------------------------------------------

    /// Replaces the session state. Every state change consumes the
    /// "position edited" flag.
    fn set_session(&mut self, session: Session) {
        self.session = session;
        self.position_edited = false;
    }

    fn arrow_shown(&self) -> bool {
        match self.session {
            Session::OnePick { kind, .. } => kind.oriented(),
            Session::CamJoint { .. } => true,
            _ => false,
        }
    }

    fn show_first_direction(&self, env: &mut dyn EditorContext) {
        env.show_direction(self.points.first(), self.slots.get(0).direction);
    }

    /// Records the pick that landed on `candidate` as construction
    /// point `slot`: snaps the position, infers a direction and
    /// updates the refinement overlay. Returns the recorded position.
    fn record_point(
        &mut self,
        env: &mut dyn EditorContext,
        slot: usize,
        candidate: &PickCandidate,
    ) -> Vec3 {
        // A modelled characteristic point beats snapping to the mesh.
        let point = match &candidate.cad {
            Some(cad) if cad.origin_valid => candidate.frame.transform_point(cad.origin),
            _ => env.snap_point(candidate),
        };
        self.points.set(slot, point, candidate.frame);

        let inferred = direction::infer(candidate, &mut self.slots.get_mut(slot).toggle);
        let s = self.slots.get_mut(slot);
        s.object = Some(candidate.object);
        s.direction = inferred.direction;
        s.direction_defined = inferred.defined;

        match &candidate.cad {
            Some(cad) => env.show_snap_assist(&SnapAssist {
                slot,
                on_edge: cad.on_edge,
                hit_point: candidate.world_point,
                snap_point: point,
                normal: candidate.normal,
                axis: candidate.frame.transform_vector(cad.axis),
                axis_valid: cad.axis_valid,
                origin: candidate.frame.transform_point(cad.origin),
                origin_valid: cad.origin_valid,
            }),
            None => env.hide_snap_assist(),
        }
        point
    }

    /// Drops the bookkeeping of construction point `slot` and seeds
    /// its position anew.
    fn reseed_point(&mut self, slot: usize, seed: Vec3) {
        *self.slots.get_mut(slot) = PickSlot::default();
        self.points.set(slot, seed, Frame::identity());
    }

    fn enter(&mut self, env: &mut dyn EditorContext) {
        env.unselect_all();
        match self.session {
            Session::OnePick { kind, .. } => {
                self.reseed_point(0, Vec3::zero());
                if kind.oriented() {
                    self.show_first_direction(env);
                }
            }
            Session::TwoPick { kind, .. } => {
                self.reseed_point(0, Vec3::new(two_pick::first_seed_x(kind), 0.0, 0.0));
            }
            Session::FreeJointBetweenTriads { .. } | Session::GliderBetweenTriads { .. } => {
                self.reseed_point(0, Vec3::zero());
            }
            Session::CamJoint { .. } => {
                self.reseed_point(0, Vec3::zero());
                self.show_first_direction(env);
            }
            _ => (),
        }
    }
}

// End of File
