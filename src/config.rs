// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Numeric tolerances used by the interaction layer.
///
/// All values are in model units (or dimensionless where noted). The
/// defaults match what the editor ships with; embedders with unusually
/// small or large models can scale them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// Two points closer than this are treated as coincident.
    pub position: f32,
    /// Dimensionless parallelism tolerance used when compounding
    /// degrees of freedom and when testing collinearity.
    pub parallel: f32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            position: 1.0e-4,
            parallel: 1.0e-7,
        }
    }
}

// End of File
