// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity-based width modulation.
//!
//! Faster pointer motion produces thinner ink, which reads like a pen lifting
//! off the page. The mapping is monotonic non-increasing in speed and never
//! drops below the configured minimum width.
//!
//! ```
//! use kurbo::Vec2;
//! use understory_ink::modulate::{WidthModulation, modulated_width};
//!
//! let modulation = WidthModulation::default();
//! let slow = modulated_width(10.0, Some(Vec2::new(50.0, 0.0)), modulation, 0.5);
//! let fast = modulated_width(10.0, Some(Vec2::new(2000.0, 0.0)), modulation, 0.5);
//! assert!(slow >= fast);
//! assert!(fast >= 0.5);
//! ```

use kurbo::Vec2;

/// Default speed, in surface units per second, at which velocity modulation
/// halves the nominal width.
pub const DEFAULT_REFERENCE_SPEED: f64 = 600.0;

/// Default lower bound for velocity modulation, as a fraction of the nominal width.
pub const DEFAULT_FLOOR_RATIO: f64 = 0.2;

/// How pointer velocity affects the width of a stroke segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidthModulation {
    /// Always use the nominal width.
    Constant,
    /// Thin the line as the pointer speeds up.
    ///
    /// The effective width is `base / (1 + speed / reference_speed)`, bounded
    /// below by `base * floor_ratio`.
    Velocity {
        /// Speed at which the width is halved. Must be positive.
        reference_speed: f64,
        /// Smallest fraction of the nominal width a fast stroke can reach.
        floor_ratio: f64,
    },
}

impl Default for WidthModulation {
    fn default() -> Self {
        Self::Velocity {
            reference_speed: DEFAULT_REFERENCE_SPEED,
            floor_ratio: DEFAULT_FLOOR_RATIO,
        }
    }
}

/// Clamp a requested width so it is finite and at least `min_width`.
#[inline]
pub fn clamp_width(width: f64, min_width: f64) -> f64 {
    if width.is_finite() {
        width.max(min_width)
    } else {
        min_width
    }
}

/// Compute the effective width of a segment drawn at `velocity`.
///
/// A missing or non-finite velocity counts as standing still. The result is
/// always at least `min_width`, and for two velocities with speeds `v1 < v2`
/// the result for `v1` is never smaller than the result for `v2`.
pub fn modulated_width(
    base: f64,
    velocity: Option<Vec2>,
    modulation: WidthModulation,
    min_width: f64,
) -> f64 {
    let base = clamp_width(base, min_width);
    match modulation {
        WidthModulation::Constant => base,
        WidthModulation::Velocity {
            reference_speed,
            floor_ratio,
        } => {
            let speed = velocity.map_or(0.0, |v| v.hypot());
            let speed = if speed.is_nan() { 0.0 } else { speed };
            if reference_speed <= 0.0 || !reference_speed.is_finite() {
                return base;
            }
            let thinned = base / (1.0 + speed / reference_speed);
            let floor = base * floor_ratio.clamp(0.0, 1.0);
            thinned.max(floor).max(min_width)
        }
    }
}
