// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;

/// Setup problems that leave drag coordination inert.
///
/// These are reported once, when the host wires things up; they never surface
/// from individual drag operations.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// No drag surface was provided, so pointer positions cannot be converted.
    MissingSurface,
    /// The region used for bounds enforcement has no area.
    DegenerateRegion {
        /// The offending region, in surface-local coordinates.
        region: Rect,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSurface => write!(f, "no drag surface configured"),
            Self::DegenerateRegion { region } => {
                write!(f, "bounds region {region:?} has no area")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
