// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::Vec3;

use crate::frame::Frame;

/// Upper bound on construction points a single mode accumulates.
pub const MAX_PICKED_POINTS: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
struct PickedPoint {
    world: Vec3,
    frame: Frame,
    valid: bool,
}

/// The construction points gathered during a multi-click mode, indexed
/// by pick order. Each point remembers the frame of the geometry it
/// was picked on so the refinement UI can edit it in either world or
/// object coordinates.
#[derive(Clone, Debug, Default)]
pub struct PickedPointBuffer {
    points: [PickedPoint; MAX_PICKED_POINTS],
}

impl PickedPointBuffer {
    pub fn new() -> Self {
        PickedPointBuffer::default()
    }

    /// Stores the `idx`-th construction point. `world` is the position
    /// in world coordinates, `frame` the frame of the picked geometry
    /// (its axes are normalized on the way in). Out-of-range indices
    /// are ignored.
    pub fn set(&mut self, idx: usize, world: Vec3, frame: Frame) {
        if let Some(p) = self.points.get_mut(idx) {
            p.world = world;
            p.frame = Frame::new(frame.rotation, frame.origin);
            p.valid = true;
        }
    }

    /// Overwrites the position of an already indexed point, keeping
    /// its frame. `global` selects whether `value` is in world or
    /// object coordinates. Returns false if the slot is unset.
    pub fn update(&mut self, idx: usize, global: bool, value: Vec3) -> bool {
        match self.points.get_mut(idx) {
            Some(p) if p.valid => {
                p.world = if global {
                    value
                } else {
                    p.frame.transform_point(value)
                };
                true
            }
            _ => false,
        }
    }

    /// The `idx`-th point in world (`global`) or object coordinates.
    /// Unset or out-of-range slots read as the zero vector.
    pub fn get(&self, idx: usize, global: bool) -> Vec3 {
        match self.points.get(idx) {
            Some(p) if p.valid => {
                if global {
                    p.world
                } else {
                    p.frame.inverse_point(p.world)
                }
            }
            _ => Vec3::zero(),
        }
    }

    pub fn is_set(&self, idx: usize) -> bool {
        self.points.get(idx).map_or(false, |p| p.valid)
    }

    /// World position of the first point; zero when unset.
    pub fn first(&self) -> Vec3 {
        self.get(0, true)
    }

    /// World position of the second point; zero when unset.
    pub fn second(&self) -> Vec3 {
        self.get(1, true)
    }

    /// World position of the third point; zero when unset.
    pub fn third(&self) -> Vec3 {
        self.get(2, true)
    }

    pub fn remove(&mut self, idx: usize) {
        if let Some(p) = self.points.get_mut(idx) {
            *p = PickedPoint::default();
        }
    }

    pub fn reset(&mut self) {
        self.points = Default::default();
    }

    /// World positions of the currently set points, in pick order.
    pub fn all_global(&self) -> Vec<Vec3> {
        self.points
            .iter()
            .filter(|p| p.valid)
            .map(|p| p.world)
            .collect()
    }

    /// Number of set points.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.valid).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}


// End of File
