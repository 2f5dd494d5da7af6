// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::BoundsMode;

/// Runtime configuration of a [`DragCoordinator`](crate::DragCoordinator).
///
/// All fields may be changed between ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragConfig {
    /// Region that dragged items must stay inside.
    pub bounds: BoundsMode,
    /// Periodically re-check every item dragged so far, not only the active one.
    pub sweep_bounds: bool,
    /// Number of [`sweep`](crate::DragCoordinator::sweep) calls between two sweeps.
    pub sweep_interval: u32,
}

impl DragConfig {
    /// Default number of late ticks between bounds sweeps.
    pub const DEFAULT_SWEEP_INTERVAL: u32 = 20;

    /// Configuration with enforcement against `bounds` and sweeping off.
    #[must_use]
    pub fn with_bounds(bounds: BoundsMode) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            bounds: BoundsMode::None,
            sweep_bounds: false,
            sweep_interval: Self::DEFAULT_SWEEP_INTERVAL,
        }
    }
}
