// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Animation**: node count, connection distance and motion of the home
//!   page network animation
//! - **Window**: initial and minimum window sizes

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default number of nodes in the home page network animation.
pub const DEFAULT_NODE_COUNT: usize = 12;

/// Minimum node count accepted from `settings.toml`.
pub const MIN_NODE_COUNT: usize = 2;

/// Maximum node count accepted from `settings.toml`.
pub const MAX_NODE_COUNT: usize = 64;

/// Default distance under which two nodes are connected (logical units).
pub const DEFAULT_CONNECTION_DISTANCE: f32 = 150.0;

/// Minimum connection distance.
pub const MIN_CONNECTION_DISTANCE: f32 = 10.0;

/// Maximum connection distance.
pub const MAX_CONNECTION_DISTANCE: f32 = 500.0;

/// Interval between animation ticks (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Span of node velocity per axis; velocities fall in `[-SPEED/2, SPEED/2)`.
pub const NODE_SPEED: f32 = 0.3;

/// Smallest node radius.
pub const MIN_NODE_RADIUS: f32 = 4.0;

/// Largest node radius (exclusive).
pub const MAX_NODE_RADIUS: f32 = 10.0;

/// Peak opacity of a connection between two touching nodes.
pub const MAX_CONNECTION_OPACITY: f32 = 0.4;

/// Width of the logical animation field.
pub const FIELD_WIDTH: f32 = 480.0;

/// Height of the logical animation field.
pub const FIELD_HEIGHT: f32 = 220.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 760.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Animation validation
    assert!(MIN_NODE_COUNT > 1);
    assert!(MAX_NODE_COUNT >= MIN_NODE_COUNT);
    assert!(DEFAULT_NODE_COUNT >= MIN_NODE_COUNT);
    assert!(DEFAULT_NODE_COUNT <= MAX_NODE_COUNT);
    assert!(MIN_CONNECTION_DISTANCE > 0.0);
    assert!(MAX_CONNECTION_DISTANCE > MIN_CONNECTION_DISTANCE);
    assert!(DEFAULT_CONNECTION_DISTANCE >= MIN_CONNECTION_DISTANCE);
    assert!(DEFAULT_CONNECTION_DISTANCE <= MAX_CONNECTION_DISTANCE);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(MIN_NODE_RADIUS > 0.0);
    assert!(MAX_NODE_RADIUS > MIN_NODE_RADIUS);
    assert!(MAX_CONNECTION_OPACITY > 0.0 && MAX_CONNECTION_OPACITY <= 1.0);

    // Nodes must fit inside the field
    assert!(FIELD_WIDTH > 2.0 * MAX_NODE_RADIUS);
    assert!(FIELD_HEIGHT > 2.0 * MAX_NODE_RADIUS);

    // Window validation
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
