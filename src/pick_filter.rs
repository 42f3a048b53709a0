// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resolving a depth-sorted hit list to the one object a construction
//! mode should act on.

use crate::scene::{KindClass, PickCandidate, SceneHandle, SceneObjectKind};

/// Kind filter for pick classification. `classes` lists kind classes;
/// `inclusive` decides whether listed kinds are the accepted ones or
/// the rejected ones. The empty exclusive filter accepts everything.
#[derive(Clone, Copy, Debug)]
pub struct TypeFilter<'a> {
    pub classes: &'a [KindClass],
    pub inclusive: bool,
}

impl TypeFilter<'_> {
    /// Accepts every kind.
    pub const ANY: TypeFilter<'static> = TypeFilter {
        classes: &[],
        inclusive: false,
    };

    /// Accepts only kinds in `classes`.
    pub const fn only(classes: &[KindClass]) -> TypeFilter<'_> {
        TypeFilter {
            classes,
            inclusive: true,
        }
    }

    /// Accepts everything except kinds in `classes`.
    pub const fn except(classes: &[KindClass]) -> TypeFilter<'_> {
        TypeFilter {
            classes,
            inclusive: false,
        }
    }

    pub fn accepts(&self, kind: SceneObjectKind) -> bool {
        let listed = self.classes.iter().any(|class| kind.is(*class));
        if self.inclusive {
            listed
        } else {
            !listed
        }
    }
}

/// A classified pick: the chosen object and the index of its hit in
/// the candidate list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Classification {
    pub object: SceneHandle,
    pub index: usize,
}

/// Picks the object a mode should act on from a depth-sorted hit list.
///
/// The front-most object passing `filter` wins, with one exception:
/// objects in `selected` are looked through, so that clicking a stack
/// whose front object is already selected reaches the first acceptable
/// unselected object behind it. A selected object is still returned
/// when nothing acceptable lies behind it. Returns `None` when no
/// candidate passes the filter.
pub fn classify(
    candidates: &[PickCandidate],
    selected: &[SceneHandle],
    filter: TypeFilter,
) -> Option<Classification> {
    let mut chosen: Option<Classification> = None;
    let mut first_stop = true;
    let mut seen_selected = false;
    let mut seen_interesting = false;
    let mut last_object: Option<SceneHandle> = None;
    let mut i = 0;

    while i < candidates.len() {
        // Advance to the next distinct owner; consecutive hits on the
        // same object (front and back face, say) count once.
        let mut stop: Option<(usize, bool, bool)> = None;
        while i < candidates.len() && stop.is_none() {
            let c = &candidates[i];
            if last_object != Some(c.object) {
                last_object = Some(c.object);
                let is_selected = selected.contains(&c.object);
                let is_interesting = filter.accepts(c.kind);
                if is_selected || is_interesting {
                    stop = Some((i, is_selected, is_interesting));
                }
            }
            i += 1;
        }
        let (idx, is_selected, is_interesting) = match stop {
            Some(s) => s,
            None => break,
        };

        if first_stop {
            if is_interesting {
                chosen = Some(Classification {
                    object: candidates[idx].object,
                    index: idx,
                });
            }
            first_stop = false;
        } else if is_interesting && (!seen_interesting || (!is_selected && seen_selected)) {
            chosen = Some(Classification {
                object: candidates[idx].object,
                index: idx,
            });
            if !is_selected {
                break;
            }
        }

        seen_selected |= is_selected;
        seen_interesting |= is_interesting;
    }

    chosen
}

/// Cycling state for repeated clicks in the same spot. Owned by the
/// controller; reset whenever a pick lands somewhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct CycleState {
    cycle: usize,
    last_returned: Option<SceneHandle>,
    previous_len: usize,
}

impl CycleState {
    pub fn reset(&mut self) {
        *self = CycleState::default();
    }
}

/// Like [`classify`], but successive calls with an unchanged hit list
/// walk through the acceptable candidates front to back, wrapping
/// around. A changed hit list (different length, or the previously
/// returned object no longer present) restarts from the front.
pub fn classify_cycled(
    candidates: &[PickCandidate],
    filter: TypeFilter,
    state: &mut CycleState,
) -> Option<Classification> {
    let mut passing: Vec<Classification> = Vec::new();
    let mut last_object: Option<SceneHandle> = None;
    let mut last_still_present = false;

    for (i, c) in candidates.iter().enumerate() {
        if last_object == Some(c.object) {
            continue;
        }
        last_object = Some(c.object);
        if filter.accepts(c.kind) {
            if state.last_returned == Some(c.object) {
                last_still_present = true;
            }
            passing.push(Classification {
                object: c.object,
                index: i,
            });
        }
    }

    if !last_still_present || state.cycle >= passing.len() || candidates.len() != state.previous_len
    {
        state.cycle = 0;
    }
    state.previous_len = candidates.len();

    match passing.get(state.cycle) {
        Some(&hit) => {
            state.last_returned = Some(hit.object);
            state.cycle += 1;
            Some(hit)
        }
        None => {
            state.last_returned = None;
            state.cycle = 0;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::scene::SceneObjectKind::*;
    use ultraviolet::Vec3;

    fn hit(id: u64, kind: SceneObjectKind) -> PickCandidate {
        PickCandidate {
            object: SceneHandle(id),
            kind,
            world_point: Vec3::zero(),
            normal: Vec3::unit_z(),
            frame: Frame::identity(),
            edge: None,
            cad: None,
        }
    }

    #[test]
    fn empty_hit_list_classifies_to_none() {
        assert_eq!(classify(&[], &[], TypeFilter::ANY), None);
    }

    #[test]
    fn front_most_acceptable_object_wins() {
        let hits = [hit(1, Part), hit(2, Triad)];
        let c = classify(&hits, &[], TypeFilter::ANY).unwrap();
        assert_eq!(c.object, SceneHandle(1));
        assert_eq!(c.index, 0);
    }

    #[test]
    fn filter_skips_unacceptable_front_objects() {
        let filter = TypeFilter::only(&[KindClass::Triad]);
        let hits = [hit(1, Part), hit(2, Triad)];
        let c = classify(&hits, &[], filter).unwrap();
        assert_eq!(c.object, SceneHandle(2));

        let only_parts = [hit(1, Part), hit(3, Part)];
        assert_eq!(classify(&only_parts, &[], filter), None);
    }

    #[test]
    fn exclusive_filter_rejects_listed_kinds() {
        let filter = TypeFilter::except(&[KindClass::RefPlane]);
        let hits = [hit(1, RefPlane), hit(2, Part)];
        let c = classify(&hits, &[], filter).unwrap();
        assert_eq!(c.object, SceneHandle(2));
    }

    #[test]
    fn selected_objects_are_looked_through() {
        let hits = [hit(1, Part), hit(2, Part)];
        let c = classify(&hits, &[SceneHandle(1)], TypeFilter::ANY).unwrap();
        assert_eq!(c.object, SceneHandle(2));
    }

    #[test]
    fn lone_selected_object_is_still_returned() {
        let hits = [hit(1, Part)];
        let c = classify(&hits, &[SceneHandle(1)], TypeFilter::ANY).unwrap();
        assert_eq!(c.object, SceneHandle(1));
    }

    #[test]
    fn consecutive_hits_on_one_object_count_once() {
        // Front and back face of object 1, then object 2 behind it.
        let hits = [hit(1, Part), hit(1, Part), hit(2, Part)];
        let c = classify(&hits, &[SceneHandle(1)], TypeFilter::ANY).unwrap();
        assert_eq!(c.object, SceneHandle(2));
        assert_eq!(c.index, 2);
    }

    #[test]
    fn cycling_walks_the_stack_and_wraps() {
        let hits = [hit(1, Triad), hit(2, Part), hit(3, Triad)];
        let filter = TypeFilter::only(&[KindClass::Triad]);
        let mut state = CycleState::default();

        let first = classify_cycled(&hits, filter, &mut state).unwrap();
        assert_eq!(first.object, SceneHandle(1));
        let second = classify_cycled(&hits, filter, &mut state).unwrap();
        assert_eq!(second.object, SceneHandle(3));
        // Wraps around.
        let third = classify_cycled(&hits, filter, &mut state).unwrap();
        assert_eq!(third.object, SceneHandle(1));
    }

    #[test]
    fn cycling_restarts_when_the_stack_changes() {
        let hits = [hit(1, Triad), hit(2, Triad)];
        let filter = TypeFilter::only(&[KindClass::Triad]);
        let mut state = CycleState::default();

        assert_eq!(
            classify_cycled(&hits, filter, &mut state).unwrap().object,
            SceneHandle(1)
        );
        // A different spot was clicked: new hit list, cycle restarts.
        let elsewhere = [hit(3, Triad), hit(1, Triad), hit(2, Triad)];
        assert_eq!(
            classify_cycled(&elsewhere, filter, &mut state)
                .unwrap()
                .object,
            SceneHandle(3)
        );
    }

    #[test]
    fn cycling_over_nothing_returns_none_and_resets() {
        let mut state = CycleState::default();
        let filter = TypeFilter::only(&[KindClass::Triad]);
        let hits = [hit(1, Triad)];
        assert!(classify_cycled(&hits, filter, &mut state).is_some());
        assert_eq!(classify_cycled(&[], filter, &mut state), None);
        // After a miss the next pick starts from the front again.
        assert_eq!(
            classify_cycled(&hits, filter, &mut state).unwrap().object,
            SceneHandle(1)
        );
    }
}

// End of File
