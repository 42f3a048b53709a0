// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rigid-body freedom left to a group of connected objects.
//!
//! When the user smart-moves a selection, every joint and sticker
//! anchoring the selection to the rest of the model constrains how the
//! selection may move. Each anchor contributes a [`Dof`]; compounding
//! them pairwise yields the net freedom the move command must respect.

use ultraviolet::Vec3;

/// The kind of motion a constraint still permits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DofKind {
    /// Unconstrained.
    Free,
    /// No motion possible.
    Rigid,
    /// Rotation about an axis through a fixed point.
    Rev,
    /// Rotation about a fixed point.
    Ball,
    /// Translation along an axis.
    Prism,
    /// Rotation about and translation along an axis.
    Cyl,
}

/// A degree of freedom: a kind plus the axis (`center`, `direction`)
/// it is expressed relative to. `direction` is kept normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dof {
    pub kind: DofKind,
    pub center: Vec3,
    pub direction: Vec3,
}

impl Default for Dof {
    fn default() -> Self {
        Dof {
            kind: DofKind::Free,
            center: Vec3::zero(),
            direction: Vec3::zero(),
        }
    }
}

/// True when `a` and `b` span (nearly) no area, i.e. are parallel,
/// antiparallel, or either is zero.
fn is_parallel(a: Vec3, b: Vec3, tol: f32) -> bool {
    a.cross(b).mag_sq() <= tol * a.mag_sq() * b.mag_sq()
}

impl Dof {
    pub fn new(kind: DofKind, center: Vec3, direction: Vec3) -> Self {
        let mag = direction.mag();
        let direction = if mag > f32::EPSILON {
            direction / mag
        } else {
            direction
        };
        Dof {
            kind,
            center,
            direction,
        }
    }

    fn become_other(&mut self, other: &Dof, kind: DofKind) {
        self.center = other.center;
        self.direction = other.direction;
        self.kind = kind;
    }

    /// Intersects this freedom with `other`, in place. The result is
    /// the motion permitted by both constraints at once; incompatible
    /// axes collapse to [`DofKind::Rigid`].
    pub fn compound(&mut self, other: &Dof, tol: f32) {
        use DofKind::*;
        match self.kind {
            Free => self.become_other(other, other.kind),
            Rigid => (),
            Rev => match other.kind {
                Free => (),
                Rev | Cyl => {
                    if !is_parallel(other.direction, self.direction, tol)
                        || !is_parallel(other.direction, self.center - other.center, tol)
                    {
                        self.become_other(other, Rigid);
                    }
                }
                Ball => {
                    if !is_parallel(self.direction, self.center - other.center, tol) {
                        self.become_other(other, Rigid);
                    }
                }
                _ => self.kind = Rigid,
            },
            Ball => match other.kind {
                Free => (),
                Ball => {
                    if (other.center - self.center).mag() > tol {
                        // Two ball points pin down a rotation axis.
                        self.direction = (self.center - other.center).normalized();
                        self.kind = Rev;
                    }
                }
                Rev | Cyl => {
                    if is_parallel(other.direction, self.center - other.center, tol) {
                        self.become_other(other, Rev);
                    } else {
                        self.become_other(other, Rigid);
                    }
                }
                _ => self.kind = Rigid,
            },
            Prism => match other.kind {
                Free => (),
                Rigid | Ball | Rev => self.become_other(other, Rigid),
                Cyl | Prism => {
                    if !is_parallel(other.direction, self.direction, tol) {
                        self.become_other(other, Rigid);
                    }
                }
            },
            Cyl => match other.kind {
                Free => (),
                Ball => {
                    if is_parallel(self.direction, self.center - other.center, tol) {
                        self.kind = Rev;
                    } else {
                        self.become_other(other, Rigid);
                    }
                }
                Rev => {
                    if !is_parallel(other.direction, self.direction, tol)
                        || !is_parallel(other.direction, self.center - other.center, tol)
                    {
                        self.become_other(other, Rigid);
                    }
                }
                Cyl => {
                    if is_parallel(self.direction, other.direction, tol) {
                        if !is_parallel(self.direction, self.center - other.center, tol) {
                            // Parallel but offset axes: only the common
                            // translation survives.
                            self.kind = Prism;
                        } else {
                            self.become_other(other, Rigid);
                        }
                    }
                }
                Prism => {
                    if is_parallel(self.direction, other.direction, tol) {
                        self.kind = Prism;
                    } else {
                        self.become_other(other, Rigid);
                    }
                }
                Rigid => self.kind = Rigid,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1.0e-7;

    fn dof(kind: DofKind, center: [f32; 3], direction: [f32; 3]) -> Dof {
        Dof::new(
            kind,
            Vec3::new(center[0], center[1], center[2]),
            Vec3::new(direction[0], direction[1], direction[2]),
        )
    }

    #[test]
    fn free_adopts_other() {
        let mut a = Dof::default();
        let b = dof(DofKind::Rev, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        a.compound(&b, TOL);
        assert_eq!(a, b);
    }

    #[test]
    fn rigid_absorbs_everything() {
        let mut a = dof(DofKind::Rigid, [0.0; 3], [1.0, 0.0, 0.0]);
        let b = dof(DofKind::Cyl, [0.0; 3], [1.0, 0.0, 0.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rigid);
    }

    #[test]
    fn two_distinct_ball_points_make_a_hinge() {
        let mut a = dof(DofKind::Ball, [0.0, 0.0, 0.0], [0.0; 3]);
        let b = dof(DofKind::Ball, [0.0, 0.0, 2.0], [0.0; 3]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rev);
        // Axis runs through both centers.
        assert!(a.direction.cross(Vec3::new(0.0, 0.0, 1.0)).mag() < 1.0e-6);
        assert_eq!(a.center, Vec3::zero());
    }

    #[test]
    fn coincident_ball_points_stay_ball() {
        let mut a = dof(DofKind::Ball, [1.0, 2.0, 3.0], [0.0; 3]);
        let b = dof(DofKind::Ball, [1.0, 2.0, 3.0], [0.0; 3]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Ball);
    }

    #[test]
    fn collinear_revolutes_stay_revolute() {
        let mut a = dof(DofKind::Rev, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let b = dof(DofKind::Rev, [0.0, 0.0, 5.0], [0.0, 0.0, 1.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rev);
    }

    #[test]
    fn offset_parallel_revolutes_lock_up() {
        let mut a = dof(DofKind::Rev, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let b = dof(DofKind::Rev, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rigid);
    }

    #[test]
    fn ball_on_revolute_axis_becomes_revolute() {
        let mut a = dof(DofKind::Ball, [0.0, 0.0, 4.0], [0.0; 3]);
        let b = dof(DofKind::Rev, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rev);
        assert_eq!(a.center, b.center);
    }

    #[test]
    fn ball_off_revolute_axis_locks_up() {
        let mut a = dof(DofKind::Ball, [2.0, 0.0, 0.0], [0.0; 3]);
        let b = dof(DofKind::Rev, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rigid);
    }

    #[test]
    fn parallel_offset_cylinders_leave_translation() {
        let mut a = dof(DofKind::Cyl, [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let b = dof(DofKind::Cyl, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Prism);
    }

    #[test]
    fn skew_prisms_lock_up() {
        let mut a = dof(DofKind::Prism, [0.0; 3], [0.0, 0.0, 1.0]);
        let b = dof(DofKind::Prism, [0.0; 3], [0.0, 1.0, 0.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Rigid);
    }

    #[test]
    fn parallel_prisms_stay_prism() {
        let mut a = dof(DofKind::Prism, [0.0; 3], [0.0, 0.0, 1.0]);
        let b = dof(DofKind::Prism, [5.0, 0.0, 0.0], [0.0, 0.0, -1.0]);
        a.compound(&b, TOL);
        assert_eq!(a.kind, DofKind::Prism);
    }
}

// End of File
