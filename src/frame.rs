// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::{Mat3, Vec3};

/// A local coordinate frame: a rotation (possibly with scale removed)
/// plus a world-space origin. Pick results carry the frame of the
/// surface that was hit so picked points can be reported in either
/// world or object coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub rotation: Mat3,
    pub origin: Vec3,
}

impl Frame {
    pub fn identity() -> Self {
        Frame {
            rotation: Mat3::identity(),
            origin: Vec3::zero(),
        }
    }

    /// Builds a frame from a rotation and an origin. The rotation's
    /// columns are normalized so that the frame carries no scale; a
    /// degenerate (zero) column is left untouched.
    pub fn new(rotation: Mat3, origin: Vec3) -> Self {
        let mut rotation = rotation;
        for col in rotation.cols.iter_mut() {
            let mag = col.mag();
            if mag > f32::EPSILON {
                *col = *col / mag;
            }
        }
        Frame { rotation, origin }
    }

    /// Object space to world space, for points.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * p + self.origin
    }

    /// Object space to world space, for directions.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        self.rotation * v
    }

    /// World space to object space, for points.
    pub fn inverse_point(&self, p: Vec3) -> Vec3 {
        self.rotation.inversed() * (p - self.origin)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_scaled_axes() {
        let scaled = Mat3::new(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 0.5),
        );
        let frame = Frame::new(scaled, Vec3::zero());
        assert_eq!(frame.rotation, Mat3::identity());
    }

    #[test]
    fn point_round_trip() {
        // 90 degree rotation about Z, translated.
        let rot = Mat3::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let frame = Frame::new(rot, Vec3::new(1.0, 2.0, 3.0));
        let p = Vec3::new(0.5, -0.25, 4.0);
        let back = frame.inverse_point(frame.transform_point(p));
        assert!((back - p).mag() < 1.0e-5);
    }
}

// End of File
