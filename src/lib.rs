// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Interactive construction for a mechanical model editor.
//!
//! A mechanism model is built by clicking in a 3D viewport: pick a
//! spot (or an object), confirm, pick the next, confirm again, until
//! the joint, spring, load or sensor under construction has everything
//! it needs. This crate owns that interaction: the per-viewport
//! [`InteractionController`] runs one construction [`Session`] at a
//! time, classifies raw pick hits ([`pick_filter`]), accumulates
//! construction points ([`PickedPointBuffer`]), infers directions for
//! oriented objects ([`direction`]) and finally drives the embedding
//! editor's object factories through the [`EditorContext`] proxy
//! trait.
//!
//! The crate renders nothing and owns no model data; everything it
//! does to the outside world goes through [`EditorContext`].

pub mod config;
pub mod context;
pub mod controller;
pub mod creator;
pub mod direction;
pub mod dof;
pub mod frame;
pub mod pick_filter;
pub mod picked_points;
pub mod scene;
pub mod selection;
pub mod session;

pub use config::Tolerances;
pub use context::{
    EditorContext, FactoryError, GliderKind, HigherPairKind, LoadKind, PointJointKind,
};
pub use controller::{InteractionController, PickSlot};
pub use creator::Construction;
pub use direction::InferredDirection;
pub use dof::{Dof, DofKind};
pub use frame::Frame;
pub use pick_filter::{classify, classify_cycled, Classification, CycleState, TypeFilter};
pub use picked_points::{PickedPointBuffer, MAX_PICKED_POINTS};
pub use scene::{
    CadEntityInfo, EdgeHit, KindClass, PickCandidate, PickEvent, SceneHandle, SceneObjectKind,
    SnapAssist,
};
pub use selection::SelectionList;
pub use session::{Mode, Session};

// End of File
