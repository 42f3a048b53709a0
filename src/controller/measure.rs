// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Distance and angle measurement. Measurements leave no objects
//! behind; the result is reported through the log and the mode wraps
//! around for the next measurement.

use ultraviolet::Vec3;

use super::InteractionController;
use crate::context::EditorContext;
use crate::pick_filter::{classify, TypeFilter};
use crate::scene::PickEvent;
use crate::session::{MeasureKind, MeasureState, Session};

impl InteractionController {
    pub(super) fn pick_measure(
        &mut self,
        env: &mut dyn EditorContext,
        kind: MeasureKind,
        state: MeasureState,
        event: &PickEvent,
    ) {
        env.unselect_all();
        let state = match classify(&event.candidates, &[], TypeFilter::ANY) {
            None => MeasureState::NoPoints,
            Some(hit) => {
                let candidate = &event.candidates[hit.index];
                let point = env.snap_point(candidate);
                match (state, kind) {
                    (MeasureState::NoPoints, _) => {
                        self.points.reset();
                        self.points.set(0, point, candidate.frame);
                        MeasureState::OnePoint
                    }
                    (MeasureState::OnePoint, MeasureKind::Distance) => {
                        self.points.set(1, point, candidate.frame);
                        self.report_distance();
                        MeasureState::NoPoints
                    }
                    (MeasureState::OnePoint, MeasureKind::Angle) => {
                        self.points.set(1, point, candidate.frame);
                        MeasureState::TwoPoints
                    }
                    (MeasureState::TwoPoints, _) => {
                        self.points.set(2, point, candidate.frame);
                        self.report_angle();
                        MeasureState::NoPoints
                    }
                }
            }
        };
        self.set_session(Session::Measure { kind, state });
    }

    fn report_distance(&self) {
        let from = self.points.first();
        let to = self.points.second();
        let delta = to - from;
        log::info!(
            "distance from [{:.4}, {:.4}, {:.4}] to [{:.4}, {:.4}, {:.4}]: {:.6} (dx {:.6}, dy {:.6}, dz {:.6})",
            from.x,
            from.y,
            from.z,
            to.x,
            to.y,
            to.z,
            delta.mag(),
            delta.x,
            delta.y,
            delta.z,
        );
    }

    /// Angle at the third picked point (the vertex), between the legs
    /// towards the first and second points.
    fn report_angle(&self) {
        let vertex = self.points.third();
        let v1 = self.points.first() - vertex;
        let v2 = self.points.second() - vertex;
        let angle = angle_between(v1, v2);
        log::info!(
            "angle at [{:.4}, {:.4}, {:.4}]: {:.4} degrees",
            vertex.x,
            vertex.y,
            vertex.z,
            angle.to_degrees(),
        );
    }
}

/// Angle between two vectors in radians; zero when either is
/// degenerate.
fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = a.mag() * b.mag();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle() {
        let angle = angle_between(Vec3::unit_x(), Vec3::unit_y());
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1.0e-6);
    }

    #[test]
    fn degenerate_legs_measure_zero() {
        assert_eq!(angle_between(Vec3::zero(), Vec3::unit_x()), 0.0);
    }
}

// End of File
